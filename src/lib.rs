mod vector;

pub use vector::Vector2D;

pub mod library {
    use crate::Vector2D;
    use sdl2::rect::FPoint;

    /// Returns `point` moved by `v`.
    pub fn translate(point: FPoint, v: Vector2D) -> FPoint {
        FPoint::new(point.x() + v.x as f32, point.y() + v.y as f32)
    }

    /// A closed four-corner polygon, stored in drawing order. The closing
    /// edge back to the first point is implied.
    #[derive(Clone, Debug, PartialEq)]
    pub struct Outline {
        points: Vec<FPoint>,
    }

    impl Outline {
        pub fn new() -> Outline {
            Outline { points: Vec::new() }
        }

        /// Box of `width` laid along the line from `start` to `end`, with
        /// half the width on either side. A zero-length line has no box.
        pub fn box_from_points(start: FPoint, end: FPoint, width: f32) -> Outline {
            if start == end {
                log::trace!("no box for zero-length line at {:?}", start);
                return Outline::new();
            }
            let w = f64::from(width / 2.0);
            let v = Vector2D::between(start, end)
                .normalize()
                .rotate_degrees(90.0)
                .scale(w);
            let v2 = v.rotate_degrees(180.0);

            let p1 = translate(start, v);
            let p2 = translate(start, v2);
            let p3 = translate(end, v);
            let p4 = translate(end, v2);
            Outline { points: vec![p1, p3, p4, p2] }
        }

        /// Box of `size` (`[width, height]`) centered on `center` and turned
        /// by `angle` degrees. The angle runs along the width.
        pub fn box_with_center(center: FPoint, angle: f64, size: [f32; 2]) -> Outline {
            let dx = f64::from(size[0] / 2.0);
            let dy = f64::from(size[1] / 2.0);

            let corner = |x: f64, y: f64| translate(center, Vector2D::new(x, y).rotate_degrees(angle));
            let p1 = corner(dx, dy);
            let p2 = corner(dx, -dy);
            let p3 = corner(-dx, dy);
            let p4 = corner(-dx, -dy);
            Outline { points: vec![p1, p3, p4, p2] }
        }

        pub fn points(&self) -> &[FPoint] {
            &self.points
        }

        pub fn len(&self) -> usize {
            self.points.len()
        }

        pub fn is_empty(&self) -> bool {
            self.points.is_empty()
        }

        /// Drawing order with the first point repeated at the end.
        pub fn closed_points(&self) -> impl Iterator<Item = FPoint> + '_ {
            self.points.iter().chain(self.points.first()).copied()
        }

        /// Vertex arrays in the shape SDL2_gfx polygon calls expect.
        ///
        /// Coordinates are rounded, and anything outside the `i16` range
        /// saturates to `i16::MIN` or `i16::MAX`.
        pub fn vertices(&self) -> (Vec<i16>, Vec<i16>) {
            self.points
                .iter()
                .map(|p| (p.x().round() as i16, p.y().round() as i16))
                .unzip()
        }
    }

    impl Default for Outline {
        fn default() -> Outline {
            Outline::new()
        }
    }

}
