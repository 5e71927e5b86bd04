// Containment predicates
// `is_inside` is the strict relation (no shared boundary point); `contains_closed` accepts
// shapes touching the boundary from inside.

use super::geometry2d::Shape;
use super::geometry2d_curves::boundary_curves;
use super::geometry2d_intersection::boundaries_meet;
use crate::config::{ARC_SAMPLES, CONTAINMENT_SAMPLE_STEP};

/// True iff every point of `a` lies strictly inside the area shape `b`.
///
/// `b` must be a circle, rectangle or polygon; a line is never inside anything and a shape is
/// never inside itself.
pub fn is_inside(a: &Shape, b: &Shape) -> bool {
    if !b.is_area() || matches!(a, Shape::Line(_)) || a == b {
        return false;
    }
    b.contains_point_strict(&a.boundary_point()) && !boundaries_meet(a, b)
}

/// True iff every point of `a` lies in the closed area of `b` (boundary contact allowed).
///
/// Curves are checked on sample points, so a boundary grazing `b` between two samples is missed.
pub fn contains_closed(a: &Shape, b: &Shape) -> bool {
    if !b.is_area() || matches!(a, Shape::Line(_)) {
        return false;
    }
    boundary_curves(a).iter().all(|curve| {
        curve
            .samples(CONTAINMENT_SAMPLE_STEP, ARC_SAMPLES)
            .iter()
            .all(|p| b.contains_point(p))
    })
}
