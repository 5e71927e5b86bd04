// Boundary curves: every shape is handled through the elementary curves making up its boundary
// (a point, a line, a segment or a round piece). Pairwise operations only have to be written
// for these few kinds.

use nalgebra::Vector2;
use std::f64::consts::TAU;

use super::geometry2d::{Arc, Circle, Line, LineSegment, Point, Shape};
use super::geometry2d_intersection::Piece;
use super::geometry2d_utils::cross;
use crate::config::GEOMETRY_TOLERANCE;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Curve {
    Point(Point),
    Line(Line),
    Segment(LineSegment),
    Circle(Circle),
    Arc(Arc),
}

/// Curves bounding an area shape, or the shape itself for curves.
///
/// Zero-length segments and edges collapse to points.
pub(crate) fn boundary_curves(shape: &Shape) -> Vec<Curve> {
    match shape {
        Shape::Point(p) => vec![Curve::Point(*p)],
        Shape::Line(line) => vec![Curve::Line(*line)],
        Shape::Segment(segment) => vec![segment_curve(segment)],
        Shape::Circle(circle) => vec![Curve::Circle(*circle)],
        Shape::Arc(arc) => vec![Curve::Arc(*arc)],
        Shape::Rectangle(rectangle) => edge_curves(rectangle.edges(), rectangle.vertices()[0]),
        Shape::Polygon(polygon) => edge_curves(polygon.edges(), polygon.vertices[0]),
    }
}

fn segment_curve(segment: &LineSegment) -> Curve {
    if segment.is_degenerate() {
        Curve::Point(segment.start)
    } else {
        Curve::Segment(*segment)
    }
}

fn edge_curves(edges: impl Iterator<Item = LineSegment>, first_vertex: Point) -> Vec<Curve> {
    let curves: Vec<Curve> = edges
        .filter(|edge| !edge.is_degenerate())
        .map(Curve::Segment)
        .collect();
    if curves.is_empty() {
        vec![Curve::Point(first_vertex)]
    } else {
        curves
    }
}

impl Curve {
    pub(crate) fn as_linear(&self) -> Option<Linear> {
        match self {
            Curve::Line(line) => Some(Linear::from_line(line)),
            Curve::Segment(segment) => Linear::from_segment(segment),
            _ => None,
        }
    }

    /// Round curves as arcs; a full circle is the arc sweeping 2π
    pub(crate) fn as_round(&self) -> Option<Arc> {
        match self {
            Curve::Circle(circle) => Some(Arc::new(*circle, 0.0, TAU)),
            Curve::Arc(arc) => Some(*arc),
            _ => None,
        }
    }

    pub(crate) fn contains_point(&self, point: &Point) -> bool {
        match self {
            Curve::Point(p) => p == point,
            Curve::Line(line) => line.contains_point(point),
            Curve::Segment(segment) => segment.contains_point(point),
            Curve::Circle(circle) => circle.on_boundary(point),
            Curve::Arc(arc) => arc.contains_point(point),
        }
    }

    pub(crate) fn distance_to_point(&self, point: &Point) -> f64 {
        match self {
            Curve::Point(p) => p.distance_to(point),
            Curve::Line(line) => line.signed_distance(point).abs(),
            Curve::Segment(segment) => segment.distance_to_point(point),
            Curve::Circle(circle) => round_distance_to_point(&Arc::new(*circle, 0.0, TAU), point),
            Curve::Arc(arc) => round_distance_to_point(arc, point),
        }
    }

    /// Finite endpoints (none for lines and full circles)
    pub(crate) fn endpoints(&self) -> Vec<Point> {
        match self {
            Curve::Point(p) => vec![*p],
            Curve::Line(_) | Curve::Circle(_) => Vec::new(),
            Curve::Segment(segment) => vec![segment.start, segment.end],
            Curve::Arc(arc) if arc.is_full() => Vec::new(),
            Curve::Arc(arc) => vec![arc.start_point(), arc.end_point()],
        }
    }

    /// Points worth testing when sampling the curve
    pub(crate) fn samples(&self, segment_step: f64, arc_segments: usize) -> Vec<Point> {
        match self {
            Curve::Point(p) => vec![*p],
            Curve::Line(line) => vec![line.anchor()],
            Curve::Segment(segment) => segment.navigator(segment_step).collect(),
            Curve::Circle(circle) => Arc::new(*circle, 0.0, TAU).sample(arc_segments),
            Curve::Arc(arc) => arc.sample(arc_segments),
        }
    }
}

pub(crate) fn round_distance_to_point(arc: &Arc, point: &Point) -> f64 {
    let radial = (arc.circle.center.distance_to(point) - arc.circle.radius).abs();
    if arc.contains_angle(arc.circle.angle_of(point)) {
        return radial;
    }
    arc.start_point()
        .distance_to(point)
        .min(arc.end_point().distance_to(point))
}

// ======================== LINEAR CURVES ========================

/// Parameterized straight curve `origin + t * direction`, `t ∈ [t_min, t_max]`.
///
/// Lines have infinite bounds, segments run over `[0, length]` with a unit direction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Linear {
    pub origin: Vector2<f64>,
    pub direction: Vector2<f64>,
    pub t_min: f64,
    pub t_max: f64,
}

impl Linear {
    pub(crate) fn from_line(line: &Line) -> Self {
        Self {
            origin: line.anchor().coords(),
            direction: line.direction(),
            t_min: f64::NEG_INFINITY,
            t_max: f64::INFINITY,
        }
    }

    pub(crate) fn from_segment(segment: &LineSegment) -> Option<Self> {
        let direction = segment.direction()?;
        Some(Self {
            origin: segment.start.coords(),
            direction,
            t_min: 0.0,
            t_max: segment.length(),
        })
    }

    pub(crate) fn at(&self, t: f64) -> Vector2<f64> {
        self.origin + self.direction * t
    }

    pub(crate) fn parameter(&self, point: &Vector2<f64>) -> f64 {
        (point - self.origin).dot(&self.direction)
    }

    pub(crate) fn accepts(&self, t: f64) -> bool {
        t >= self.t_min - GEOMETRY_TOLERANCE && t <= self.t_max + GEOMETRY_TOLERANCE
    }

    pub(crate) fn is_infinite(&self) -> bool {
        self.t_min.is_infinite() || self.t_max.is_infinite()
    }

    pub(crate) fn closest_point(&self, point: &Vector2<f64>) -> Vector2<f64> {
        self.at(self.parameter(point).clamp(self.t_min, self.t_max))
    }

    /// Perpendicular offset of `point` from the supporting line, positive on the left
    pub(crate) fn offset(&self, point: &Vector2<f64>) -> f64 {
        cross(&self.direction, &(point - self.origin))
    }

    /// The piece covering parameters `[lo, hi]`
    pub(crate) fn piece(&self, lo: f64, hi: f64) -> Piece {
        if lo.is_infinite() || hi.is_infinite() {
            return match Line::from_anchor_direction(self.origin, self.direction) {
                Some(line) => Piece::Line(line),
                None => Piece::Point(self.origin.into()),
            };
        }
        if hi - lo <= GEOMETRY_TOLERANCE {
            Piece::Point(self.at((lo + hi) / 2.0).into())
        } else {
            Piece::Segment(LineSegment::new(self.at(lo).into(), self.at(hi).into()))
        }
    }
}
