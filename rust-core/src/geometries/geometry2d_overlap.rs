// Overlap measures: length shared by clay-like shapes and area shared by two regions

use nalgebra::Vector2;
use std::f64::consts::PI;

use super::geometry2d::{Circle, Line, LineSegment, Point, Shape};
use super::geometry2d_curves::{boundary_curves, Curve, Linear};
use super::geometry2d_intersection::{intersect_curves, Piece};
use super::geometry2d_utils::cross;
use crate::config::{ANGLE_TOLERANCE, GEOMETRY_TOLERANCE};

fn linear_of(shape: &Shape) -> Option<Linear> {
    match shape {
        Shape::Line(line) => Some(Linear::from_line(line)),
        Shape::Segment(segment) => Linear::from_segment(segment),
        _ => None,
    }
}

/// Length of the overlap between `a` and `b`.
///
/// * two straight shapes: length of their collinear overlap (infinite for identical lines)
/// * straight shape and area shape: length of the straight shape lying in the closed area
/// * two polygonal shapes: extent of the overlap region along the direction of `a`'s longest side
/// * anything else: 0
pub fn intersection_length(a: &Shape, b: &Shape) -> f64 {
    match (linear_of(a), linear_of(b)) {
        (Some(la), Some(lb)) => collinear_overlap(&la, &lb),
        (Some(linear), None) if b.is_area() => length_inside(&linear, b),
        (None, Some(linear)) if a.is_area() => length_inside(&linear, a),
        (None, None) => match (a.polygon_vertices(), b.polygon_vertices()) {
            (Some(subject), Some(clipper)) => overlap_extent(&subject, &clipper),
            _ => 0.0,
        },
        _ => 0.0,
    }
}

fn collinear_overlap(a: &Linear, b: &Linear) -> f64 {
    if cross(&a.direction, &b.direction).abs() > ANGLE_TOLERANCE
        || a.offset(&b.origin).abs() > GEOMETRY_TOLERANCE
    {
        return 0.0;
    }
    let base = a.parameter(&b.origin);
    let sense = a.direction.dot(&b.direction);
    let ends = [base + sense * b.t_min, base + sense * b.t_max];
    let lo = ends[0].min(ends[1]).max(a.t_min);
    let hi = ends[0].max(ends[1]).min(a.t_max);
    if hi <= lo {
        0.0
    } else {
        hi - lo
    }
}

/// Length of `linear` inside the closed area shape `area`
fn length_inside(linear: &Linear, area: &Shape) -> f64 {
    let curve = if linear.is_infinite() {
        match Line::from_anchor_direction(linear.origin, linear.direction) {
            Some(line) => Curve::Line(line),
            None => return 0.0,
        }
    } else {
        Curve::Segment(LineSegment::new(
            linear.at(linear.t_min).into(),
            linear.at(linear.t_max).into(),
        ))
    };

    let mut parameters: Vec<f64> = Vec::new();
    if !linear.is_infinite() {
        parameters.extend([linear.t_min, linear.t_max]);
    }
    for boundary in boundary_curves(area) {
        for piece in intersect_curves(&curve, &boundary) {
            match piece {
                Piece::Point(p) => parameters.push(linear.parameter(&p.coords())),
                Piece::Segment(segment) => {
                    parameters.push(linear.parameter(&segment.start.coords()));
                    parameters.push(linear.parameter(&segment.end.coords()));
                }
                _ => {}
            }
        }
    }
    parameters.sort_by(|x, y| x.total_cmp(y));

    parameters
        .windows(2)
        .filter(|pair| pair[1] - pair[0] > GEOMETRY_TOLERANCE)
        .filter(|pair| area.contains_point(&linear.at((pair[0] + pair[1]) / 2.0).into()))
        .map(|pair| pair[1] - pair[0])
        .sum()
}

/// Extent of `subject ∩ clipper` along the direction of the longest side of `subject`
fn overlap_extent(subject: &[Point], clipper: &[Point]) -> f64 {
    let overlap = clip_polygon(subject, clipper);
    if overlap.len() < 2 {
        return 0.0;
    }

    let n = subject.len();
    let Some(direction) = (0..n)
        .map(|i| subject[(i + 1) % n].coords() - subject[i].coords())
        .max_by(|x, y| x.norm().total_cmp(&y.norm()))
        .and_then(|longest| longest.try_normalize(GEOMETRY_TOLERANCE))
    else {
        return 0.0;
    };

    let (lo, hi) = overlap.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        let value = p.dot(&direction);
        (lo.min(value), hi.max(value))
    });
    hi - lo
}

/// Area common to `a` and `b`: lens formula for two circles, clipping for two convex polygons
/// (the clipping polygon `b` is assumed convex), 0 otherwise.
pub fn intersection_area(a: &Shape, b: &Shape) -> f64 {
    match (a, b) {
        (Shape::Circle(c1), Shape::Circle(c2)) => circle_lens_area(c1, c2),
        _ => match (a.polygon_vertices(), b.polygon_vertices()) {
            (Some(subject), Some(clipper)) => polygon_area(&clip_polygon(&subject, &clipper)),
            _ => 0.0,
        },
    }
}

/// Area of the lens shared by two discs
pub fn circle_lens_area(a: &Circle, b: &Circle) -> f64 {
    let d = a.center.distance_to(&b.center);
    let (r1, r2) = (a.radius, b.radius);

    if d >= r1 + r2 {
        return 0.0;
    }
    if d <= (r1 - r2).abs() {
        let smaller = r1.min(r2);
        return PI * smaller * smaller;
    }

    let alpha = ((d * d + r1 * r1 - r2 * r2) / (2.0 * d * r1)).clamp(-1.0, 1.0).acos();
    let beta = ((d * d + r2 * r2 - r1 * r1) / (2.0 * d * r2)).clamp(-1.0, 1.0).acos();
    let kite = ((-d + r1 + r2) * (d + r1 - r2) * (d - r1 + r2) * (d + r1 + r2)).max(0.0).sqrt();

    r1 * r1 * alpha + r2 * r2 * beta - 0.5 * kite
}

// ======================== POLYGON CLIPPING ========================

/// Sutherland-Hodgman clipping of `subject` by the convex polygon `clipper`
pub(crate) fn clip_polygon(subject: &[Point], clipper: &[Point]) -> Vec<Vector2<f64>> {
    let mut output: Vec<Vector2<f64>> = subject.iter().map(|p| p.coords()).collect();
    let mut clip: Vec<Vector2<f64>> = clipper.iter().map(|p| p.coords()).collect();
    if signed_area(&clip) < 0.0 {
        clip.reverse();
    }

    let n = clip.len();
    for i in 0..n {
        if output.is_empty() {
            break;
        }
        let edge_start = clip[i];
        let edge_end = clip[(i + 1) % n];
        let edge = edge_end - edge_start;
        let inside = |p: &Vector2<f64>| cross(&edge, &(p - edge_start)) >= -GEOMETRY_TOLERANCE;

        let input = std::mem::take(&mut output);
        for j in 0..input.len() {
            let current = input[j];
            let previous = input[(j + input.len() - 1) % input.len()];
            match (inside(&previous), inside(&current)) {
                (true, true) => output.push(current),
                (true, false) => output.extend(segment_line_crossing(previous, current, edge_start, edge)),
                (false, true) => {
                    output.extend(segment_line_crossing(previous, current, edge_start, edge));
                    output.push(current);
                }
                (false, false) => {}
            }
        }
    }
    output
}

fn segment_line_crossing(
    from: Vector2<f64>,
    to: Vector2<f64>,
    line_origin: Vector2<f64>,
    line_direction: Vector2<f64>,
) -> Option<Vector2<f64>> {
    let delta = to - from;
    let denominator = cross(&line_direction, &delta);
    if denominator.abs() <= f64::EPSILON {
        return None;
    }
    let t = cross(&line_direction, &(line_origin - from)) / denominator;
    Some(from + delta * t.clamp(0.0, 1.0))
}

fn signed_area(points: &[Vector2<f64>]) -> f64 {
    let n = points.len();
    (0..n).map(|i| cross(&points[i], &points[(i + 1) % n])).sum::<f64>() / 2.0
}

fn polygon_area(points: &[Vector2<f64>]) -> f64 {
    if points.len() < 3 {
        0.0
    } else {
        signed_area(points).abs()
    }
}
