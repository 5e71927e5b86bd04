// Angle normalization, half-plane tests and small vector helpers shared by the geometry modules

use nalgebra::Vector2;
use std::f64::consts::{PI, TAU};

use super::geometry2d::{Line, Point};
use crate::config::GEOMETRY_TOLERANCE;

/// Map any angle to `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can return TAU itself for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Map any inclination to `[0, π)`: a direction and its opposite describe the same segment.
pub fn standardized_inclination(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(PI);
    if wrapped >= PI {
        0.0
    } else {
        wrapped
    }
}

/// Map an angle difference to `(-π, π]`.
pub fn wrap_to_pi(angle: f64) -> f64 {
    let wrapped = normalize_angle(angle);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// True iff `a` and `b` lie in strictly different half-planes of `line`.
///
/// A point on the line (within tolerance) is on neither side, so the answer is then `false`
/// regardless of argument order.
pub fn opposite_sides(line: &Line, a: &Point, b: &Point) -> bool {
    let side_a = line.signed_distance(a);
    let side_b = line.signed_distance(b);

    if side_a.abs() <= GEOMETRY_TOLERANCE || side_b.abs() <= GEOMETRY_TOLERANCE {
        return false;
    }
    (side_a > 0.0) != (side_b > 0.0)
}

/// z-component of the 2D cross product
#[inline]
pub(crate) fn cross(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Left-hand perpendicular
#[inline]
pub(crate) fn perpendicular(v: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// Unit vector at `angle`
#[inline]
pub(crate) fn unit(angle: f64) -> Vector2<f64> {
    Vector2::new(angle.cos(), angle.sin())
}
