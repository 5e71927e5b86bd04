// Intersection of two shapes
// Area shapes take part through their boundary; a point strictly inside an area shape is
// reported as `Interior`. Every pair of shapes is reduced to pairs of boundary curves.

use std::f64::consts::TAU;

use super::geometry2d::{Arc, Circle, Line, LineSegment, Point, Shape};
use super::geometry2d_curves::{boundary_curves, Curve, Linear};
use super::geometry2d_utils::{cross, normalize_angle, perpendicular};
use crate::config::{ANGLE_TOLERANCE, GEOMETRY_TOLERANCE};

/// One connected part of an intersection
#[derive(Debug, Clone, PartialEq)]
pub enum Piece {
    Point(Point),
    Segment(LineSegment),
    Line(Line),
    Circle(Circle),
    Arc(Arc),
}

impl Piece {
    pub fn contains_point(&self, point: &Point) -> bool {
        match self {
            Piece::Point(p) => p == point,
            Piece::Segment(segment) => segment.contains_point(point),
            Piece::Line(line) => line.contains_point(point),
            Piece::Circle(circle) => circle.on_boundary(point),
            Piece::Arc(arc) => arc.contains_point(point),
        }
    }

    pub fn is_point(&self) -> bool {
        matches!(self, Piece::Point(_))
    }
}

impl From<Piece> for Shape {
    fn from(piece: Piece) -> Self {
        match piece {
            Piece::Point(p) => Shape::Point(p),
            Piece::Segment(segment) => Shape::Segment(segment),
            Piece::Line(line) => Shape::Line(line),
            Piece::Circle(circle) => Shape::Circle(circle),
            Piece::Arc(arc) => Shape::Arc(arc),
        }
    }
}

/// Result of [`intersection`]
///
/// `Found` holds one piece for a single result and several for a tuple result. Two `Found`
/// values compare equal when they hold the same pieces in any order.
#[derive(Debug, Clone)]
pub enum Intersection {
    Empty,
    /// A point lying strictly inside an area shape
    Interior,
    Found(Vec<Piece>),
}

impl Intersection {
    pub fn is_empty(&self) -> bool {
        matches!(self, Intersection::Empty)
    }

    pub fn pieces(&self) -> &[Piece] {
        match self {
            Intersection::Found(pieces) => pieces,
            _ => &[],
        }
    }

    /// The only piece of a single result
    pub fn single(&self) -> Option<&Piece> {
        match self.pieces() {
            [piece] => Some(piece),
            _ => None,
        }
    }

    pub fn points(&self) -> Vec<Point> {
        self.pieces()
            .iter()
            .filter_map(|piece| match piece {
                Piece::Point(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl PartialEq for Intersection {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Intersection::Empty, Intersection::Empty) => true,
            (Intersection::Interior, Intersection::Interior) => true,
            (Intersection::Found(a), Intersection::Found(b)) => same_pieces(a, b),
            _ => false,
        }
    }
}

/// Set equality of two piece lists
pub fn same_pieces(a: &[Piece], b: &[Piece]) -> bool {
    a.iter().all(|piece| b.contains(piece)) && b.iter().all(|piece| a.contains(piece))
}

/// Intersection of two shapes, symmetric in its arguments
///
/// # Arguments
/// * `a`, `b` - Shapes to intersect
///
/// # Returns
/// * `Intersection::Empty` if the shapes share no point
/// * `Intersection::Interior` if a point lies strictly inside an area shape
/// * `Intersection::Found(pieces)` with the shared points, segments, lines, circles or arcs
///   of the boundaries, merged and without duplicates
pub fn intersection(a: &Shape, b: &Shape) -> Intersection {
    match (a, b) {
        (Shape::Point(p), area) | (area, Shape::Point(p)) if area.is_area() => point_against_area(p, area),
        _ => {
            let pieces = boundary_intersection(a, b);
            if pieces.is_empty() {
                Intersection::Empty
            } else {
                Intersection::Found(pieces)
            }
        }
    }
}

fn point_against_area(point: &Point, area: &Shape) -> Intersection {
    if boundary_curves(area).iter().any(|curve| curve.contains_point(point)) {
        Intersection::Found(vec![Piece::Point(*point)])
    } else if area.contains_point_strict(point) {
        Intersection::Interior
    } else {
        Intersection::Empty
    }
}

/// Normalized pieces shared by the boundaries of `a` and `b`
pub(crate) fn boundary_intersection(a: &Shape, b: &Shape) -> Vec<Piece> {
    let curves_a = boundary_curves(a);
    let curves_b = boundary_curves(b);

    let mut pieces = Vec::new();
    for curve_a in &curves_a {
        for curve_b in &curves_b {
            pieces.extend(intersect_curves(curve_a, curve_b));
        }
    }
    normalize_pieces(pieces)
}

/// True as soon as one pair of boundary curves meets
pub(crate) fn boundaries_meet(a: &Shape, b: &Shape) -> bool {
    let curves_b = boundary_curves(b);
    boundary_curves(a).iter().any(|curve_a| {
        curves_b
            .iter()
            .any(|curve_b| !intersect_curves(curve_a, curve_b).is_empty())
    })
}

// ======================== CURVE PAIRS ========================

pub(crate) fn intersect_curves(a: &Curve, b: &Curve) -> Vec<Piece> {
    match (a, b) {
        (Curve::Point(p), other) | (other, Curve::Point(p)) => {
            if other.contains_point(p) {
                vec![Piece::Point(*p)]
            } else {
                Vec::new()
            }
        }
        _ => match (a.as_linear(), b.as_linear(), a.as_round(), b.as_round()) {
            (Some(la), Some(lb), _, _) => linear_linear(&la, &lb),
            (Some(linear), None, _, Some(arc)) | (None, Some(linear), Some(arc), _) => {
                linear_round(&linear, &arc)
            }
            (None, None, Some(arc_a), Some(arc_b)) => round_round(&arc_a, &arc_b),
            _ => Vec::new(),
        },
    }
}

fn linear_linear(a: &Linear, b: &Linear) -> Vec<Piece> {
    let denominator = cross(&a.direction, &b.direction);

    if denominator.abs() <= ANGLE_TOLERANCE {
        if a.offset(&b.origin).abs() > GEOMETRY_TOLERANCE {
            return Vec::new();
        }
        // Collinear: express b's range in a's parameter
        let base = a.parameter(&b.origin);
        let sense = a.direction.dot(&b.direction);
        let ends = [base + sense * b.t_min, base + sense * b.t_max];
        let lo = ends[0].min(ends[1]).max(a.t_min);
        let hi = ends[0].max(ends[1]).min(a.t_max);
        if lo > hi + GEOMETRY_TOLERANCE {
            return Vec::new();
        }
        return vec![a.piece(lo, hi.max(lo))];
    }

    let offset = b.origin - a.origin;
    let t = cross(&offset, &b.direction) / denominator;
    let s = cross(&offset, &a.direction) / denominator;
    if a.accepts(t) && b.accepts(s) {
        vec![Piece::Point(a.at(t.clamp(a.t_min, a.t_max)).into())]
    } else {
        Vec::new()
    }
}

fn linear_round(linear: &Linear, arc: &Arc) -> Vec<Piece> {
    let center = arc.circle.center.coords();
    let radius = arc.circle.radius;
    let foot_t = linear.parameter(&center);
    let height = linear.offset(&center).abs();

    if height > radius + GEOMETRY_TOLERANCE {
        return Vec::new();
    }

    let parameters = if (height - radius).abs() <= GEOMETRY_TOLERANCE {
        vec![foot_t]
    } else {
        let half_chord = (radius * radius - height * height).sqrt();
        vec![foot_t - half_chord, foot_t + half_chord]
    };

    parameters
        .into_iter()
        .filter(|&t| linear.accepts(t))
        .map(|t| Point::from(linear.at(t)))
        .filter(|p| arc.contains_angle(arc.circle.angle_of(p)))
        .map(Piece::Point)
        .collect()
}

fn round_round(a: &Arc, b: &Arc) -> Vec<Piece> {
    if a.circle == b.circle {
        return arc_overlap(a, b);
    }
    circle_circle_points(&a.circle, &b.circle)
        .into_iter()
        .filter(|p| a.contains_angle(a.circle.angle_of(p)) && b.contains_angle(b.circle.angle_of(p)))
        .map(Piece::Point)
        .collect()
}

/// Crossing or tangency points of two distinct circles
pub(crate) fn circle_circle_points(a: &Circle, b: &Circle) -> Vec<Point> {
    let c1 = a.center.coords();
    let c2 = b.center.coords();
    let d = (c2 - c1).norm();
    let (r1, r2) = (a.radius, b.radius);

    if d <= GEOMETRY_TOLERANCE {
        return Vec::new();
    }
    if d > r1 + r2 + GEOMETRY_TOLERANCE || d < (r1 - r2).abs() - GEOMETRY_TOLERANCE {
        return Vec::new();
    }

    let u = (c2 - c1) / d;
    if (d - (r1 + r2)).abs() <= GEOMETRY_TOLERANCE {
        return vec![(c1 + u * r1).into()];
    }
    if (d - (r1 - r2).abs()).abs() <= GEOMETRY_TOLERANCE {
        let sign = if r1 >= r2 { 1.0 } else { -1.0 };
        return vec![(c1 + u * r1 * sign).into()];
    }

    let along = (d * d + r1 * r1 - r2 * r2) / (2.0 * d);
    let across = (r1 * r1 - along * along).max(0.0).sqrt();
    let base = c1 + u * along;
    let normal = perpendicular(&u);
    vec![(base + normal * across).into(), (base - normal * across).into()]
}

/// Common part of two arcs of the same circle
pub(crate) fn arc_overlap(a: &Arc, b: &Arc) -> Vec<Piece> {
    match (a.is_full(), b.is_full()) {
        (true, true) => return vec![Piece::Circle(a.circle)],
        (true, false) => return vec![Piece::Arc(*b)],
        (false, true) => return vec![Piece::Arc(*a)],
        (false, false) => {}
    }

    let slack = ANGLE_TOLERANCE + GEOMETRY_TOLERANCE / a.circle.radius;
    let relative = normalize_angle(b.start_angle() - a.start_angle());

    let mut pieces = Vec::new();
    for shift in [relative, relative - TAU] {
        let lo = shift.max(0.0);
        let hi = (shift + b.sweep()).min(a.sweep());
        if hi < lo - slack {
            continue;
        }
        if hi - lo <= slack {
            let angle = a.start_angle() + ((lo + hi) / 2.0).clamp(0.0, a.sweep());
            pieces.push(Piece::Point(a.circle.point_at_angle(angle)));
        } else {
            pieces.push(Piece::Arc(Arc::new(a.circle, a.start_angle() + lo, hi - lo)));
        }
    }
    pieces
}

// ======================== NORMALIZATION ========================

/// Merge collinear touching segments, drop points covered by other pieces and duplicates
pub(crate) fn normalize_pieces(pieces: Vec<Piece>) -> Vec<Piece> {
    let mut curves: Vec<Piece> = Vec::new();
    let mut points: Vec<Point> = Vec::new();

    for piece in pieces {
        match piece {
            Piece::Point(p) => points.push(p),
            Piece::Segment(segment) => merge_segment(&mut curves, segment),
            other => {
                if !curves.contains(&other) {
                    curves.push(other);
                }
            }
        }
    }

    // Segments lying on a line piece add nothing
    let lines: Vec<Line> = curves
        .iter()
        .filter_map(|piece| match piece {
            Piece::Line(line) => Some(*line),
            _ => None,
        })
        .collect();
    curves.retain(|piece| match piece {
        Piece::Segment(segment) => !lines
            .iter()
            .any(|line| line.contains_point(&segment.start) && line.contains_point(&segment.end)),
        _ => true,
    });

    let mut result = curves;
    let mut kept_points: Vec<Point> = Vec::new();
    for p in points {
        if result.iter().any(|piece| piece.contains_point(&p)) || kept_points.contains(&p) {
            continue;
        }
        kept_points.push(p);
    }
    result.extend(kept_points.into_iter().map(Piece::Point));
    result
}

fn merge_segment(curves: &mut Vec<Piece>, segment: LineSegment) {
    let mut merged = segment;
    loop {
        let position = curves.iter().position(|piece| match piece {
            Piece::Segment(other) => collinear_touching(&merged, other),
            _ => false,
        });
        match position {
            Some(index) => {
                if let Piece::Segment(other) = curves.swap_remove(index) {
                    merged = span(&merged, &other);
                }
            }
            None => break,
        }
    }
    curves.push(Piece::Segment(merged));
}

fn collinear_touching(a: &LineSegment, b: &LineSegment) -> bool {
    let Some(linear) = Linear::from_segment(a) else {
        return false;
    };
    if linear.offset(&b.start.coords()).abs() > GEOMETRY_TOLERANCE
        || linear.offset(&b.end.coords()).abs() > GEOMETRY_TOLERANCE
    {
        return false;
    }
    let s = linear.parameter(&b.start.coords());
    let e = linear.parameter(&b.end.coords());
    s.min(e) <= linear.t_max + GEOMETRY_TOLERANCE && s.max(e) >= linear.t_min - GEOMETRY_TOLERANCE
}

/// Smallest segment covering two collinear segments
fn span(a: &LineSegment, b: &LineSegment) -> LineSegment {
    let Some(linear) = Linear::from_segment(a) else {
        return *b;
    };
    let candidates = [a.start, a.end, b.start, b.end];
    let mut lo = (f64::INFINITY, a.start);
    let mut hi = (f64::NEG_INFINITY, a.end);
    for p in candidates {
        let t = linear.parameter(&p.coords());
        if t < lo.0 {
            lo = (t, p);
        }
        if t > hi.0 {
            hi = (t, p);
        }
    }
    LineSegment::new(lo.1, hi.1)
}
