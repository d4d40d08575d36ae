use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rvec::Vector2D;
use rvec::library::{Outline, translate};
use sdl2::rect::FPoint;
use std::f64::consts::{PI, TAU};

const TOLERANCE: f64 = 1e-9;
const SAMPLES: usize = 500;

fn assert_close(a: f64, b: f64, what: &str) {
    assert!((a - b).abs() < TOLERANCE, "{}: {} != {}", what, a, b);
}

fn wrap(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}

fn random_vector(rng: &mut StdRng) -> Vector2D {
    loop {
        let v = Vector2D::new(rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0));
        if v.length() > 1.0 {
            return v;
        }
    }
}

#[test]
fn length_is_euclidean() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        assert_close(v.length(), (v.x * v.x + v.y * v.y).sqrt(), "length");
    }
}

#[test]
fn two_point_constructor_is_displacement() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..SAMPLES {
        let p1 = FPoint::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0));
        let p2 = FPoint::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0));
        let expected = Vector2D::new(f64::from(p2.x() - p1.x()), f64::from(p2.y() - p1.y()));
        assert_eq!(Vector2D::between(p1, p2), expected);
    }
}

#[test]
fn rotation_adds_to_angle() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        let r = rng.random_range(-10.0..10.0);
        let diff = wrap(v.rotate(r).angle() - v.angle() - r);
        assert_close(diff, 0.0, "angle");
    }
}

#[test]
fn full_turns_return_home() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        let full = v.rotate_degrees(360.0);
        let quarters = (0..4).fold(v, |acc, _| acc.rotate_degrees(90.0));
        let quarter = v.rotate_degrees(90.0);
        // components reach a few hundred, so scale the tolerance
        let tol = 1e-12 * v.length();
        assert!((full.x - v.x).abs() < tol && (full.y - v.y).abs() < tol, "360: {} vs {}", full, v);
        assert!((quarters.x - v.x).abs() < tol && (quarters.y - v.y).abs() < tol, "4x90: {} vs {}", quarters, v);
        assert!((quarter.x + v.y).abs() < tol && (quarter.y - v.x).abs() < tol, "90: {} vs {}", quarter, v);
    }
}

#[test]
fn scale_is_length_linear() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        let k: f64 = rng.random_range(-5.0..5.0);
        let rel = (v.scale(k).length() - k.abs() * v.length()).abs() / v.length();
        assert!(rel < TOLERANCE, "scale by {}: {}", k, rel);
    }
}

#[test]
fn normalize_gives_unit_length_same_direction() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        let n = v.normalize();
        assert_close(n.length(), 1.0, "unit length");
        assert_close(wrap(n.angle() - v.angle()), 0.0, "direction");
    }
}

#[test]
fn normalize_below_epsilon_is_zero() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let v = Vector2D::new(rng.random_range(-7e-15..7e-15), rng.random_range(-7e-15..7e-15));
        assert!(v.length() < Vector2D::EPSILON);
        assert_eq!(v.normalize(), Vector2D::ZERO);
    }
}

#[test]
fn segment_box_is_centered_on_segment() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..SAMPLES {
        let start = FPoint::new(rng.random_range(0.0..500.0), rng.random_range(0.0..500.0));
        let end = FPoint::new(rng.random_range(0.0..500.0), rng.random_range(0.0..500.0));
        if start == end {
            continue;
        }
        let width: f32 = rng.random_range(1.0..40.0);
        let outline = Outline::box_from_points(start, end, width);
        assert_eq!(outline.len(), 4);
        let pts = outline.points();
        let mid_start = translate(pts[0], Vector2D::between(pts[0], pts[3]).scale(0.5));
        assert!((mid_start.x() - start.x()).abs() < 1e-3);
        assert!((mid_start.y() - start.y()).abs() < 1e-3);
        let across = Vector2D::between(pts[1], pts[2]).length();
        assert!((across - f64::from(width)).abs() < 1e-3);
    }
}

#[test]
fn centered_box_keeps_its_center() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..SAMPLES {
        let center = FPoint::new(rng.random_range(0.0..500.0), rng.random_range(0.0..500.0));
        let angle = rng.random_range(-360.0..360.0);
        let size = [rng.random_range(1.0..80.0), rng.random_range(1.0..80.0)];
        let outline = Outline::box_with_center(center, angle, size);
        let sum = outline
            .points()
            .iter()
            .fold(Vector2D::ZERO, |acc, p| acc + Vector2D::from(*p));
        let mean = sum.scale(0.25);
        assert!((mean.x - f64::from(center.x())).abs() < 1e-3);
        assert!((mean.y - f64::from(center.y())).abs() < 1e-3);
        let diagonal = Vector2D::between(outline.points()[0], outline.points()[2]).length();
        let expected = f64::from(size[0]).hypot(f64::from(size[1]));
        assert!((diagonal - expected).abs() < 1e-3);
    }
}
