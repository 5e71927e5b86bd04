// Orthogonal / radial projection of a shape onto another shape's support

use nalgebra::Vector2;
use std::f64::consts::{PI, TAU};

use super::geometry2d::{Arc, Circle, Point, Shape};
use super::geometry2d_containment::is_inside;
use super::geometry2d_curves::Linear;
use super::geometry2d_intersection::{arc_overlap, normalize_pieces, Piece};
use super::geometry2d_utils::{cross, normalize_angle, wrap_to_pi};
use crate::config::{ANGLE_TOLERANCE, ARC_SAMPLES, GEOMETRY_TOLERANCE};

/// Projection of `a` onto `b`, clipped to the extent of `b`.
///
/// * `b` point: `b` itself
/// * `b` line or segment: the interval covered by `a`'s orthogonal projection
/// * `b` rectangle or polygon: the projections onto every edge facing `a`
/// * `b` circle or arc: the radial projection (the whole circle when `a` surrounds the center)
///
/// # Arguments
/// * `a` - Shape being projected
/// * `b` - Shape projected onto
///
/// # Returns
/// * `Some(pieces)` with the parts of `b` covered by the projection
/// * `None` when nothing of `b` lies in front of `a`, or when `a` is strictly inside `b`
pub fn projection(a: &Shape, b: &Shape) -> Option<Vec<Piece>> {
    if is_inside(a, b) {
        return None;
    }

    let pieces: Vec<Piece> = match b {
        Shape::Point(p) => vec![Piece::Point(*p)],
        Shape::Line(line) => project_on_linear(a, &Linear::from_line(line)).into_iter().collect(),
        Shape::Segment(segment) => match Linear::from_segment(segment) {
            Some(linear) => project_on_linear(a, &linear).into_iter().collect(),
            None => vec![Piece::Point(segment.start)],
        },
        Shape::Rectangle(_) | Shape::Polygon(_) => {
            project_on_edges(a, &b.polygon_vertices().unwrap_or_default())
        }
        Shape::Circle(circle) => radial_projection(a, circle),
        Shape::Arc(arc) => radial_projection(a, &arc.circle)
            .into_iter()
            .flat_map(|piece| match piece {
                Piece::Circle(_) => vec![Piece::Arc(*arc)],
                Piece::Arc(span) => arc_overlap(&span, arc),
                Piece::Point(p) if arc.contains_point(&p) => vec![Piece::Point(p)],
                _ => Vec::new(),
            })
            .collect(),
    };

    let pieces = normalize_pieces(pieces);
    (!pieces.is_empty()).then_some(pieces)
}

/// Interval of parameters of `direction` (from `origin`) covered by `shape`.
///
/// A line is unbounded unless it is perpendicular to `direction`.
pub(crate) fn extent_along(shape: &Shape, origin: &Vector2<f64>, direction: &Vector2<f64>) -> (f64, f64) {
    let along = |p: &Vector2<f64>| (p - origin).dot(direction);
    let span = |points: Vec<Vector2<f64>>| {
        points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(along(p)), hi.max(along(p))))
    };

    match shape {
        Shape::Line(line) => {
            if line.direction().dot(direction).abs() <= ANGLE_TOLERANCE {
                let t = along(&line.anchor().coords());
                (t, t)
            } else {
                (f64::NEG_INFINITY, f64::INFINITY)
            }
        }
        Shape::Circle(circle) => {
            let t = along(&circle.center.coords());
            (t - circle.radius, t + circle.radius)
        }
        Shape::Arc(arc) => {
            let mut points = vec![arc.start_point().coords(), arc.end_point().coords()];
            for sign in [1.0, -1.0] {
                let extreme = arc.circle.center.coords() + direction * (sign * arc.circle.radius);
                if arc.contains_angle(arc.circle.angle_of(&extreme.into())) {
                    points.push(extreme);
                }
            }
            span(points)
        }
        Shape::Point(p) => span(vec![p.coords()]),
        Shape::Segment(segment) => span(vec![segment.start.coords(), segment.end.coords()]),
        Shape::Rectangle(_) | Shape::Polygon(_) => span(
            shape
                .polygon_vertices()
                .unwrap_or_default()
                .iter()
                .map(|v| v.coords())
                .collect(),
        ),
    }
}

fn project_on_linear(a: &Shape, linear: &Linear) -> Option<Piece> {
    let (lo, hi) = extent_along(a, &linear.origin, &linear.direction);
    let lo = lo.max(linear.t_min);
    let hi = hi.min(linear.t_max);
    if lo > hi + GEOMETRY_TOLERANCE {
        return None;
    }
    Some(linear.piece(lo, hi.max(lo)))
}

/// Projections onto the polygon edges whose outer half-plane `a` reaches
fn project_on_edges(a: &Shape, vertices: &[Point]) -> Vec<Piece> {
    let mut ring: Vec<Vector2<f64>> = vertices.iter().map(|v| v.coords()).collect();
    let n = ring.len();
    let twice_area: f64 = (0..n).map(|i| cross(&ring[i], &ring[(i + 1) % n])).sum();
    if twice_area < 0.0 {
        ring.reverse();
    }

    let mut pieces = Vec::new();
    for i in 0..n {
        let start = ring[i];
        let end = ring[(i + 1) % n];
        let edge = end - start;
        let length = edge.norm();
        if length <= GEOMETRY_TOLERANCE {
            continue;
        }
        let outward = Vector2::new(edge.y, -edge.x) / length;
        let (_, reach) = extent_along(a, &start, &outward);
        if reach <= GEOMETRY_TOLERANCE {
            continue;
        }
        let linear = Linear {
            origin: start,
            direction: edge / length,
            t_min: 0.0,
            t_max: length,
        };
        pieces.extend(project_on_linear(a, &linear));
    }
    pieces
}

// ======================== RADIAL PROJECTION ========================

/// Directions covered by `a` seen from `center`
enum AngularSpan {
    Full,
    Interval { start: f64, sweep: f64 },
    Directions(Vec<f64>),
}

fn radial_projection(a: &Shape, circle: &Circle) -> Vec<Piece> {
    match angular_span(a, &circle.center) {
        AngularSpan::Full => vec![Piece::Circle(*circle)],
        AngularSpan::Interval { start, sweep } => {
            let piece = if sweep >= TAU - ANGLE_TOLERANCE {
                Piece::Circle(*circle)
            } else if sweep <= ANGLE_TOLERANCE {
                Piece::Point(circle.point_at_angle(start))
            } else {
                Piece::Arc(Arc::new(*circle, start, sweep))
            };
            vec![piece]
        }
        // Straight shape through the center: one point per direction it leaves in
        AngularSpan::Directions(angles) => angles
            .into_iter()
            .map(|angle| Piece::Point(circle.point_at_angle(angle)))
            .collect(),
    }
}

fn angular_span(a: &Shape, center: &Point) -> AngularSpan {
    let c = center.coords();
    let angle_of = |p: &Vector2<f64>| (p.y - c.y).atan2(p.x - c.x);

    if a.is_area() && a.contains_point(center) {
        return AngularSpan::Full;
    }

    match a {
        Shape::Point(p) => AngularSpan::Interval {
            start: angle_of(&p.coords()),
            sweep: 0.0,
        },
        Shape::Circle(other) => {
            let offset = other.center.coords() - c;
            let d = offset.norm();
            let half = (other.radius / d).clamp(-1.0, 1.0).asin();
            AngularSpan::Interval {
                start: offset.y.atan2(offset.x) - half,
                sweep: 2.0 * half,
            }
        }
        Shape::Line(line) => {
            if line.contains_point(center) {
                let direction = line.direction();
                let angle = direction.y.atan2(direction.x);
                return AngularSpan::Directions(vec![angle, angle + PI]);
            }
            let foot = line.project(center).coords() - c;
            AngularSpan::Interval {
                start: foot.y.atan2(foot.x) - PI / 2.0,
                sweep: PI,
            }
        }
        Shape::Segment(segment) if segment.contains_point(center) => AngularSpan::Directions(
            [segment.start, segment.end]
                .iter()
                .filter(|p| !p.approx_eq(center, GEOMETRY_TOLERANCE))
                .map(|p| angle_of(&p.coords()))
                .collect(),
        ),
        Shape::Segment(segment) => interval_of(&[segment.start.coords(), segment.end.coords()], c),
        Shape::Rectangle(_) | Shape::Polygon(_) => interval_of(
            &a.polygon_vertices()
                .unwrap_or_default()
                .iter()
                .map(|v| v.coords())
                .collect::<Vec<_>>(),
            c,
        ),
        Shape::Arc(arc) => {
            let points: Vec<Vector2<f64>> = arc_profile(arc, center)
                .into_iter()
                .filter(|p| (p - c).norm() > GEOMETRY_TOLERANCE)
                .collect();
            interval_of(&points, c)
        }
    }
}

/// Points along `arc` in arc order, including the tangency points seen from `viewer`
fn arc_profile(arc: &Arc, viewer: &Point) -> Vec<Vector2<f64>> {
    let mut offsets: Vec<f64> = (0..=ARC_SAMPLES)
        .map(|i| arc.sweep() * i as f64 / ARC_SAMPLES as f64)
        .collect();

    let to_viewer = viewer.coords() - arc.circle.center.coords();
    let d = to_viewer.norm();
    if d > arc.circle.radius {
        let base = to_viewer.y.atan2(to_viewer.x);
        let opening = (arc.circle.radius / d).acos();
        for angle in [base + opening, base - opening] {
            let offset = normalize_angle(angle - arc.start_angle());
            if offset <= arc.sweep() {
                offsets.push(offset);
            }
        }
    }
    offsets.sort_by(|x, y| x.total_cmp(y));

    offsets
        .into_iter()
        .map(|offset| arc.circle.point_at_angle(arc.start_angle() + offset).coords())
        .collect()
}

fn interval_of(points: &[Vector2<f64>], center: Vector2<f64>) -> AngularSpan {
    let angles: Vec<f64> = points
        .iter()
        .map(|p| (p.y - center.y).atan2(p.x - center.x))
        .collect();
    if angles.is_empty() {
        return AngularSpan::Full;
    }
    let (lo, hi) = unwrapped_bounds(&angles);
    AngularSpan::Interval {
        start: lo,
        sweep: hi - lo,
    }
}

/// Extreme values of a sequence of directions unwrapped step by step
fn unwrapped_bounds(angles: &[f64]) -> (f64, f64) {
    let mut current = angles[0];
    let mut lo = current;
    let mut hi = current;
    for pair in angles.windows(2) {
        current += wrap_to_pi(pair[1] - pair[0]);
        lo = lo.min(current);
        hi = hi.max(current);
    }
    (lo, hi)
}
