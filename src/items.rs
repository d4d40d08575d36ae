use rvec::Vector2D;
use rvec::library::Outline;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::FPoint;
use sdl2::render::{Canvas, RenderTarget};

fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

fn fill_outline<T: RenderTarget>(canvas: &mut Canvas<T>, outline: &Outline, color: Color) {
    if outline.is_empty() {
        return;
    }
    let (vx, vy) = outline.vertices();
    let _ = canvas.filled_polygon(&vx, &vy, to_abgr(color));
}

/// A thick line between two points.
pub struct Beam {
    pub a: FPoint,
    pub b: FPoint,
    pub width: f32,
    pub color: Color,
}

impl Beam {
    pub fn new(a: FPoint, b: FPoint, width: Option<f32>, color: Option<Color>) -> Beam {
        Beam {
            a,
            b,
            width: width.unwrap_or(10.0),
            color: color.unwrap_or(Color::GREEN),
        }
    }

    pub fn vector(&self) -> Vector2D {
        Vector2D::between(self.a, self.b)
    }

    pub fn outline(&self) -> Outline {
        Outline::box_from_points(self.a, self.b, self.width)
    }

    pub fn draw<T: RenderTarget>(&self, canvas: &mut Canvas<T>) {
        fill_outline(canvas, &self.outline(), self.color);
    }
}

/// A box turning about its center at a fixed rate.
pub struct Spinner {
    pub center: FPoint,
    pub size: [f32; 2],
    /// Degrees.
    pub angle: f64,
    /// Degrees per second.
    pub speed: f64,
    pub color: Color,
}

impl Spinner {
    pub fn new(center: FPoint, size: [f32; 2], speed: Option<f64>, color: Option<Color>) -> Spinner {
        Spinner {
            center,
            size,
            angle: 0.0,
            speed: speed.unwrap_or(90.0),
            color: color.unwrap_or(Color::BLUE),
        }
    }

    pub fn spin(&mut self, delta: Option<f32>) {
        let dt = f64::from(delta.unwrap_or(1.0));
        self.angle = (self.angle + self.speed * dt).rem_euclid(360.0);
    }

    pub fn outline(&self) -> Outline {
        Outline::box_with_center(self.center, self.angle, self.size)
    }

    pub fn draw<T: RenderTarget>(&self, canvas: &mut Canvas<T>) {
        fill_outline(canvas, &self.outline(), self.color);
    }
}
