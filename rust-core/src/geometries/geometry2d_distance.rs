// Signed distance between shapes
//
// Positive: Euclidean gap between separated shapes.
// Zero: the shapes touch.
// Negative: one shape is contained in the other (magnitude = gap between the boundaries) or the
// interiors overlap (magnitude = penetration depth along the best separating axis).

use nalgebra::Vector2;

use super::geometry2d::{Arc, Circle, Line, Shape};
use super::geometry2d_containment::{contains_closed, is_inside};
use super::geometry2d_curves::{boundary_curves, Curve};
use super::geometry2d_intersection::intersect_curves;
use super::geometry2d_utils::perpendicular;
use crate::config::{ARC_SAMPLES, GEOMETRY_TOLERANCE};

/// Signed distance between two shapes
///
/// `distance(a, b) <= 0` iff the shapes are in contact. Touching or crossing boundaries give 0,
/// and so does any contact between two curves (points, lines, segments, arcs).
///
/// # Arguments
/// * `a`, `b` - Shapes to compare; the result is symmetric in them
///
/// # Returns
/// * the gap between the shapes when they are apart
/// * minus the gap between the boundaries when one shape lies strictly inside the other
/// * minus the penetration depth when the interiors of area shapes overlap
pub fn distance(a: &Shape, b: &Shape) -> f64 {
    if a == b {
        return 0.0;
    }
    if let (Shape::Circle(c1), Shape::Circle(c2)) = (a, b) {
        return circle_circle_distance(c1, c2);
    }

    let gap = boundary_gap(a, b);
    if is_inside(a, b) || is_inside(b, a) {
        return -gap;
    }
    if gap > GEOMETRY_TOLERANCE {
        return gap;
    }
    if contains_closed(a, b) || contains_closed(b, a) {
        return 0.0;
    }
    // Curves without interior can cross but never penetrate
    if !a.is_area() && !b.is_area() {
        return 0.0;
    }

    let depth = penetration_depth(a, b);
    if depth <= GEOMETRY_TOLERANCE {
        0.0
    } else {
        -depth
    }
}

fn circle_circle_distance(a: &Circle, b: &Circle) -> f64 {
    let d = a.center.distance_to(&b.center);
    let nested_gap = (a.radius - b.radius).abs() - d;
    let signed = if nested_gap >= -GEOMETRY_TOLERANCE {
        -nested_gap
    } else {
        d - a.radius - b.radius
    };
    if signed.abs() <= GEOMETRY_TOLERANCE {
        0.0
    } else {
        signed
    }
}

/// Smallest Euclidean distance between the boundaries of `a` and `b`
pub fn boundary_gap(a: &Shape, b: &Shape) -> f64 {
    let curves_b = boundary_curves(b);
    boundary_curves(a)
        .iter()
        .flat_map(|curve_a| curves_b.iter().map(move |curve_b| curve_gap(curve_a, curve_b)))
        .fold(f64::INFINITY, f64::min)
}

fn curve_gap(a: &Curve, b: &Curve) -> f64 {
    if !intersect_curves(a, b).is_empty() {
        return 0.0;
    }

    let mut gap = f64::INFINITY;
    for p in a.endpoints() {
        gap = gap.min(b.distance_to_point(&p));
    }
    for p in b.endpoints() {
        gap = gap.min(a.distance_to_point(&p));
    }

    // Two parallel lines; a line and a segment are covered by the segment endpoints
    if let (Curve::Line(line), Curve::Line(other)) = (a, b) {
        return gap.min(line.signed_distance(&other.anchor()).abs());
    }

    match (a.as_linear(), b.as_linear(), a.as_round(), b.as_round()) {
        (Some(linear), None, _, Some(arc)) | (None, Some(linear), Some(arc), _) => {
            let foot = linear.closest_point(&arc.circle.center.coords());
            gap = gap.min(Curve::Arc(arc).distance_to_point(&foot.into()));
        }
        (None, None, Some(arc_a), Some(arc_b)) => {
            gap = gap.min(round_gap(&arc_a, &arc_b));
        }
        _ => {}
    }
    gap
}

fn round_gap(a: &Arc, b: &Arc) -> f64 {
    let c1 = a.circle.center.coords();
    let c2 = b.circle.center.coords();
    let d = (c2 - c1).norm();

    if a.is_full() && b.is_full() {
        let (r1, r2) = (a.circle.radius, b.circle.radius);
        return if d >= r1 + r2 {
            d - r1 - r2
        } else {
            ((r1 - r2).abs() - d).max(0.0)
        };
    }
    if d <= GEOMETRY_TOLERANCE {
        return f64::INFINITY;
    }

    // Critical points lie on the line through both centers
    let u = (c2 - c1) / d;
    let mut gap = f64::INFINITY;
    for (arc, other) in [(a, b), (b, a)] {
        let center = arc.circle.center.coords();
        for sign in [1.0, -1.0] {
            let candidate = center + u * (sign * arc.circle.radius);
            if arc.contains_angle(arc.circle.angle_of(&candidate.into())) {
                gap = gap.min(Curve::Arc(*other).distance_to_point(&candidate.into()));
            }
        }
    }
    gap
}

// ======================== PENETRATION DEPTH ========================

/// Convex support of a shape, as a vertex set or a disc
enum Support {
    Points(Vec<Vector2<f64>>),
    Disc { center: Vector2<f64>, radius: f64 },
}

impl Support {
    fn of(shape: &Shape) -> Option<Support> {
        match shape {
            Shape::Line(_) => None,
            Shape::Circle(circle) => Some(Support::Disc {
                center: circle.center.coords(),
                radius: circle.radius,
            }),
            Shape::Point(p) => Some(Support::Points(vec![p.coords()])),
            Shape::Segment(segment) => Some(Support::Points(vec![segment.start.coords(), segment.end.coords()])),
            Shape::Arc(arc) => Some(Support::Points(arc.sample(ARC_SAMPLES).iter().map(|p| p.coords()).collect())),
            // Non-convex polygons are approximated by their vertex hull
            Shape::Rectangle(_) | Shape::Polygon(_) => shape
                .polygon_vertices()
                .map(|vertices| Support::Points(vertices.iter().map(|v| v.coords()).collect())),
        }
    }

    fn interval(&self, axis: &Vector2<f64>) -> (f64, f64) {
        match self {
            Support::Points(points) => points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                let value = p.dot(axis);
                (lo.min(value), hi.max(value))
            }),
            Support::Disc { center, radius } => {
                let value = center.dot(axis);
                (value - radius, value + radius)
            }
        }
    }

    fn edge_normals(&self) -> Vec<Vector2<f64>> {
        let Support::Points(points) = self else {
            return Vec::new();
        };
        if points.len() < 2 {
            return Vec::new();
        }
        (0..points.len())
            .filter_map(|i| {
                let edge = points[(i + 1) % points.len()] - points[i];
                let length = edge.norm();
                (length > GEOMETRY_TOLERANCE).then(|| perpendicular(&edge) / length)
            })
            .collect()
    }

    /// Axis from a disc center towards the closest point of `other`
    fn center_axis(&self, other: &Support) -> Option<Vector2<f64>> {
        let Support::Disc { center, .. } = self else {
            return None;
        };
        let closest = match other {
            Support::Disc { center: other_center, .. } => *other_center,
            Support::Points(points) => closest_hull_point(points, center),
        };
        let offset = closest - center;
        let length = offset.norm();
        (length > GEOMETRY_TOLERANCE).then(|| offset / length)
    }
}

fn closest_hull_point(points: &[Vector2<f64>], target: &Vector2<f64>) -> Vector2<f64> {
    let mut best = points[0];
    let mut best_distance = (best - target).norm();
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        let edge = b - a;
        let squared = edge.norm_squared();
        let t = if squared == 0.0 {
            0.0
        } else {
            ((target - a).dot(&edge) / squared).clamp(0.0, 1.0)
        };
        let candidate = a + edge * t;
        let candidate_distance = (candidate - target).norm();
        if candidate_distance < best_distance {
            best = candidate;
            best_distance = candidate_distance;
        }
    }
    best
}

/// Overlap of two shapes along the separating axis of least overlap (0 when disjoint)
pub fn penetration_depth(a: &Shape, b: &Shape) -> f64 {
    match (a, b) {
        (Shape::Line(_), Shape::Line(_)) => return 0.0,
        (Shape::Line(line), other) | (other, Shape::Line(line)) => return line_depth(line, other),
        _ => {}
    }
    let (Some(support_a), Some(support_b)) = (Support::of(a), Support::of(b)) else {
        return 0.0;
    };

    let mut axes = support_a.edge_normals();
    axes.extend(support_b.edge_normals());
    axes.extend(support_a.center_axis(&support_b));
    axes.extend(support_b.center_axis(&support_a));

    let depth = axes
        .iter()
        .map(|axis| {
            let (lo_a, hi_a) = support_a.interval(axis);
            let (lo_b, hi_b) = support_b.interval(axis);
            (hi_a - lo_b).min(hi_b - lo_a)
        })
        .fold(f64::INFINITY, f64::min);

    if depth.is_finite() {
        depth.max(0.0)
    } else {
        0.0
    }
}

/// Smaller of the two distances needed to push `other` entirely to one side of `line`
fn line_depth(line: &Line, other: &Shape) -> f64 {
    let Some(support) = Support::of(other) else {
        return 0.0;
    };
    let normal = line.normal();
    let offset = line.anchor().coords().dot(&normal);
    let (lo, hi) = support.interval(&normal);
    let (below, above) = (offset - lo, hi - offset);
    if below > 0.0 && above > 0.0 {
        below.min(above)
    } else {
        0.0
    }
}
