use sdl2::rect::{FPoint, Point};
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Immutable 2D vector. Every operation hands back a new value.
///
/// Equality is exact component-wise float equality. Compare components
/// with your own tolerance when rounding matters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    /// Magnitudes below this are treated as zero when normalizing.
    pub const EPSILON: f64 = 1.0e-14;

    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Vector2D {
        Vector2D { x, y }
    }

    /// Position vector of `p` measured from the origin.
    pub fn from_point(p: FPoint) -> Vector2D {
        Vector2D::new(f64::from(p.x()), f64::from(p.y()))
    }

    /// Displacement from `from` to `to`. Its length is the distance between
    /// the points.
    pub fn between(from: FPoint, to: FPoint) -> Vector2D {
        Vector2D::new(f64::from(to.x() - from.x()), f64::from(to.y() - from.y()))
    }

    pub fn from_vector(v: [f32; 2]) -> Vector2D {
        Vector2D::new(f64::from(v[0]), f64::from(v[1]))
    }

    /// Narrows back to the `[f32; 2]` form the renderer works with.
    pub fn to_array(&self) -> [f32; 2] {
        [self.x as f32, self.y as f32]
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Direction in radians, in [-pi, pi]. A negative-zero `y` with
    /// negative `x` gives -pi.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle() * 180.0 / PI
    }

    /// Rotates counter-clockwise (y-up) by `radians`.
    pub fn rotate(&self, radians: f64) -> Vector2D {
        let (sin, cos) = radians.sin_cos();
        Vector2D::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn rotate_degrees(&self, degrees: f64) -> Vector2D {
        self.rotate(degrees * PI / 180.0)
    }

    pub fn scale(&self, factor: f64) -> Vector2D {
        Vector2D::new(self.x * factor, self.y * factor)
    }

    /// Unit vector in the same direction. Anything shorter than
    /// [`Vector2D::EPSILON`] collapses to exactly zero.
    pub fn normalize(&self) -> Vector2D {
        let m = self.length();
        if m < Self::EPSILON {
            return Vector2D::ZERO;
        }
        self.scale(1.0 / m)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<FPoint> for Vector2D {
    fn from(p: FPoint) -> Vector2D {
        Vector2D::from_point(p)
    }
}

impl From<Point> for Vector2D {
    fn from(p: Point) -> Vector2D {
        Vector2D::new(f64::from(p.x()), f64::from(p.y()))
    }
}

impl From<[f32; 2]> for Vector2D {
    fn from(v: [f32; 2]) -> Vector2D {
        Vector2D::from_vector(v)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Vector2D {
        Vector2D::new(x, y)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, factor: f64) -> Vector2D {
        self.scale(factor)
    }
}
