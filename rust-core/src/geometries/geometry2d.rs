use nalgebra::{Rotation2, Vector2};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::config::{ANGLE_TOLERANCE, GEOMETRY_TOLERANCE};
use crate::geometries::geometry2d_bounding_box::BoundingBox2D;
use crate::geometries::geometry2d_transform::Transform2D;
use crate::geometries::geometry2d_utils::{cross, normalize_angle, perpendicular, standardized_inclination, unit};

/// Base trait for all 2D geometric primitives
pub trait Geometry2D: std::fmt::Debug {
    /// Get the axis-aligned bounding box of the geometry
    fn bounding_box(&self) -> BoundingBox2D;

    /// Point the primitive rotates about when moved
    fn reference_point(&self) -> Point;

    /// Apply a rigid motion to the geometry
    fn apply_transform(&mut self, transform: &Transform2D);

    /// Translate by `(dx, dy)` and rotate by `dtheta` about the reference point
    fn move_by(&mut self, dx: f64, dy: f64, dtheta: f64) {
        let pivot = self.reference_point().coords();
        self.apply_transform(&Transform2D::motion(dx, dy, dtheta, pivot));
    }
}

// ======================== POINT ========================

/// A point in the plane. Equality is coordinate equality within [`GEOMETRY_TOLERANCE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn coords(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.coords() - other.coords()).norm()
    }

    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        self.distance_to(other) <= tolerance
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, GEOMETRY_TOLERANCE)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Geometry2D for Point {
    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::new(self.coords(), self.coords())
    }

    fn reference_point(&self) -> Point {
        *self
    }

    fn apply_transform(&mut self, transform: &Transform2D) {
        *self = transform.apply_to_point(self.coords()).into();
    }
}

// ======================== LINE ========================

/// Infinite line in slope-intercept form; vertical lines are kept as `x = c`.
#[derive(Debug, Clone, Copy)]
pub enum Line {
    Sloped { slope: f64, intercept: f64 },
    Vertical { x: f64 },
}

impl Line {
    /// `y = slope * x + intercept`
    pub fn new(slope: f64, intercept: f64) -> Self {
        Line::Sloped { slope, intercept }
    }

    /// `x = x`
    pub fn vertical(x: f64) -> Self {
        Line::Vertical { x }
    }

    /// Line through two distinct points; `None` when they coincide.
    pub fn through(a: &Point, b: &Point) -> Option<Self> {
        let delta = b.coords() - a.coords();
        let length = delta.norm();
        if length <= GEOMETRY_TOLERANCE {
            return None;
        }
        if delta.x.abs() <= ANGLE_TOLERANCE * length {
            return Some(Line::vertical((a.x + b.x) / 2.0));
        }
        let slope = delta.y / delta.x;
        Some(Line::new(slope, a.y - slope * a.x))
    }

    pub(crate) fn from_anchor_direction(anchor: Vector2<f64>, direction: Vector2<f64>) -> Option<Self> {
        Line::through(&anchor.into(), &(anchor + direction).into())
    }

    pub fn slope(&self) -> Option<f64> {
        match self {
            Line::Sloped { slope, .. } => Some(*slope),
            Line::Vertical { .. } => None,
        }
    }

    pub fn y_at(&self, x: f64) -> Option<f64> {
        match self {
            Line::Sloped { slope, intercept } => Some(slope * x + intercept),
            Line::Vertical { .. } => None,
        }
    }

    /// Point of the line used as origin of its parameterization
    pub fn anchor(&self) -> Point {
        match self {
            Line::Sloped { intercept, .. } => Point::new(0.0, *intercept),
            Line::Vertical { x } => Point::new(*x, 0.0),
        }
    }

    /// Unit direction, pointing towards increasing x (or increasing y when vertical)
    pub fn direction(&self) -> Vector2<f64> {
        match self {
            Line::Sloped { slope, .. } => Vector2::new(1.0, *slope).normalize(),
            Line::Vertical { .. } => Vector2::new(0.0, 1.0),
        }
    }

    /// Unit normal; `signed_distance` is positive on its side
    pub fn normal(&self) -> Vector2<f64> {
        perpendicular(&self.direction())
    }

    /// Signed distance of `point` to the line (implicit equation, normalized)
    pub fn signed_distance(&self, point: &Point) -> f64 {
        (point.coords() - self.anchor().coords()).dot(&self.normal())
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        self.signed_distance(point).abs() <= GEOMETRY_TOLERANCE
    }

    pub fn is_parallel(&self, other: &Line) -> bool {
        cross(&self.direction(), &other.direction()).abs() <= ANGLE_TOLERANCE
    }

    /// Orthogonal projection of `point` onto the line
    pub fn project(&self, point: &Point) -> Point {
        let anchor = self.anchor().coords();
        let direction = self.direction();
        (anchor + direction * (point.coords() - anchor).dot(&direction)).into()
    }

    pub fn inclination(&self) -> f64 {
        let direction = self.direction();
        standardized_inclination(direction.y.atan2(direction.x))
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.is_parallel(other) && other.contains_point(&self.anchor())
    }
}

impl Geometry2D for Line {
    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::everywhere()
    }

    fn reference_point(&self) -> Point {
        self.anchor()
    }

    fn apply_transform(&mut self, transform: &Transform2D) {
        let anchor = transform.apply_to_point(self.anchor().coords());
        let direction = Rotation2::new(transform.rotation) * self.direction();
        if let Some(line) = Line::from_anchor_direction(anchor, direction) {
            *self = line;
        }
    }
}

// ======================== LINE SEGMENT ========================

/// Segment between two endpoints. A segment equals its reverse.
#[derive(Debug, Clone, Copy)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Segment of `length` centered on `center`
    ///
    /// # Arguments
    /// * `center` - Midpoint of the segment
    /// * `length` - Distance between the endpoints
    /// * `inclination` - Direction from `start` to `end` in radians
    pub fn from_center(center: Point, length: f64, inclination: f64) -> Self {
        let half = unit(inclination) * (length / 2.0);
        Self::new(
            (center.coords() - half).into(),
            (center.coords() + half).into(),
        )
    }

    /// `end - start`
    pub fn vector(&self) -> Vector2<f64> {
        self.end.coords() - self.start.coords()
    }

    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    pub fn midpoint(&self) -> Point {
        ((self.start.coords() + self.end.coords()) / 2.0).into()
    }

    pub fn is_degenerate(&self) -> bool {
        self.length() <= GEOMETRY_TOLERANCE
    }

    /// Unit direction, `None` for a zero-length segment
    pub fn direction(&self) -> Option<Vector2<f64>> {
        let vector = self.vector();
        let length = vector.norm();
        (length > GEOMETRY_TOLERANCE).then(|| vector / length)
    }

    /// Supporting infinite line, `None` for a zero-length segment
    pub fn line(&self) -> Option<Line> {
        Line::through(&self.start, &self.end)
    }

    /// Inclination of the segment in `[0, π)`
    pub fn inclination(&self) -> f64 {
        let vector = self.vector();
        standardized_inclination(vector.y.atan2(vector.x))
    }

    /// Point at parameter `t` (0 = start, 1 = end)
    pub fn point_at(&self, t: f64) -> Point {
        (self.start.coords() + self.vector() * t).into()
    }

    /// Parameter of the point of the segment closest to `point`
    pub fn closest_parameter(&self, point: &Point) -> f64 {
        let vector = self.vector();
        let squared = vector.norm_squared();
        if squared == 0.0 {
            return 0.0;
        }
        ((point.coords() - self.start.coords()).dot(&vector) / squared).clamp(0.0, 1.0)
    }

    pub fn closest_point(&self, point: &Point) -> Point {
        self.point_at(self.closest_parameter(point))
    }

    pub fn distance_to_point(&self, point: &Point) -> f64 {
        self.closest_point(point).distance_to(point)
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        self.distance_to_point(point) <= GEOMETRY_TOLERANCE
    }

    pub fn reversed(&self) -> LineSegment {
        LineSegment::new(self.end, self.start)
    }

    /// Equally spaced points from `start` to `end`
    ///
    /// # Arguments
    /// * `step` - Fraction of the length between two consecutive points; the last point is
    ///   always `end`
    pub fn navigator(&self, step: f64) -> Navigator {
        Navigator::new(self, step)
    }
}

impl PartialEq for LineSegment {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

impl Geometry2D for LineSegment {
    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from_points([self.start.coords(), self.end.coords()]).unwrap_or_default()
    }

    fn reference_point(&self) -> Point {
        self.midpoint()
    }

    fn apply_transform(&mut self, transform: &Transform2D) {
        self.start.apply_transform(transform);
        self.end.apply_transform(transform);
    }
}

/// Lazy walk along a segment.
///
/// Yields `start + k * step * (end - start)` for every `k` with `k * step < 1`, and always
/// finishes exactly on `end`. A step outside `(0, 1]` yields nothing. The walk can be
/// restarted from the beginning with [`Navigator::restart`].
#[derive(Debug, Clone)]
pub struct Navigator {
    start: Vector2<f64>,
    delta: Vector2<f64>,
    step: f64,
    index: usize,
    count: usize,
}

impl Navigator {
    fn new(segment: &LineSegment, step: f64) -> Self {
        let count = if step.is_finite() && step > 0.0 {
            let step = step.min(1.0);
            let whole_steps = (1.0 / step + ANGLE_TOLERANCE).floor() as usize;
            if (whole_steps as f64) * step < 1.0 - ANGLE_TOLERANCE {
                whole_steps + 2
            } else {
                whole_steps + 1
            }
        } else {
            0
        };

        Self {
            start: segment.start.coords(),
            delta: segment.vector(),
            step: step.min(1.0),
            index: 0,
            count,
        }
    }

    pub fn restart(&mut self) {
        self.index = 0;
    }
}

impl Iterator for Navigator {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.index >= self.count {
            return None;
        }
        let t = if self.index + 1 == self.count {
            1.0
        } else {
            (self.index as f64 * self.step).min(1.0)
        };
        self.index += 1;
        Some((self.start + self.delta * t).into())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Navigator {}

// ======================== CIRCLE ========================

/// Circle with a strictly positive radius
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    /// # Panics
    /// In debug builds when `radius` is not positive.
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "Circle radius must be positive");
        Self { center, radius }
    }

    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn circumference(&self) -> f64 {
        TAU * self.radius
    }

    pub fn point_at_angle(&self, angle: f64) -> Point {
        (self.center.coords() + unit(angle) * self.radius).into()
    }

    /// Polar angle of `point` around the center, in `[0, 2π)`
    pub fn angle_of(&self, point: &Point) -> f64 {
        let offset = point.coords() - self.center.coords();
        normalize_angle(offset.y.atan2(offset.x))
    }

    /// Closed disc membership
    pub fn contains_point(&self, point: &Point) -> bool {
        self.center.distance_to(point) <= self.radius + GEOMETRY_TOLERANCE
    }

    /// Open disc membership (boundary excluded)
    pub fn contains_point_strict(&self, point: &Point) -> bool {
        self.center.distance_to(point) < self.radius - GEOMETRY_TOLERANCE
    }

    pub fn on_boundary(&self, point: &Point) -> bool {
        (self.center.distance_to(point) - self.radius).abs() <= GEOMETRY_TOLERANCE
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && (self.radius - other.radius).abs() <= GEOMETRY_TOLERANCE
    }
}

impl Geometry2D for Circle {
    fn bounding_box(&self) -> BoundingBox2D {
        let half = Vector2::new(self.radius, self.radius);
        BoundingBox2D::new(self.center.coords() - half, self.center.coords() + half)
    }

    fn reference_point(&self) -> Point {
        self.center
    }

    fn apply_transform(&mut self, transform: &Transform2D) {
        self.center.apply_transform(transform);
    }
}

// ======================== ARC ========================

/// Counterclockwise portion of a circle, from `start_angle` over `sweep` radians
#[derive(Debug, Clone, Copy)]
pub struct Arc {
    pub circle: Circle,
    start_angle: f64,
    sweep: f64,
}

impl Arc {
    /// Create a counterclockwise arc of `circle`
    ///
    /// # Arguments
    /// * `circle` - Supporting circle
    /// * `start_angle` - Direction of the first endpoint in radians, normalized to `[0, 2π)`
    /// * `sweep` - Angular extent in radians, clamped to `[0, 2π]`
    pub fn new(circle: Circle, start_angle: f64, sweep: f64) -> Self {
        Self {
            circle,
            start_angle: normalize_angle(start_angle),
            sweep: sweep.clamp(0.0, TAU),
        }
    }

    /// Counterclockwise arc from the direction of `from` to the direction of `to`
    pub fn between(circle: Circle, from: &Point, to: &Point) -> Self {
        let start = circle.angle_of(from);
        let sweep = normalize_angle(circle.angle_of(to) - start);
        Self::new(circle, start, sweep)
    }

    /// The shorter of the two arcs joining the directions of `a` and `b`
    pub fn shorter(circle: Circle, a: &Point, b: &Point) -> Self {
        let forward = Self::between(circle, a, b);
        if forward.sweep <= PI {
            forward
        } else {
            Self::between(circle, b, a)
        }
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    pub fn end_angle(&self) -> f64 {
        normalize_angle(self.start_angle + self.sweep)
    }

    pub fn start_point(&self) -> Point {
        self.circle.point_at_angle(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.circle.point_at_angle(self.start_angle + self.sweep)
    }

    pub fn midpoint(&self) -> Point {
        self.circle.point_at_angle(self.start_angle + self.sweep / 2.0)
    }

    pub fn length(&self) -> f64 {
        self.circle.radius * self.sweep
    }

    pub fn is_full(&self) -> bool {
        self.sweep >= TAU - ANGLE_TOLERANCE
    }

    fn angle_slack(&self) -> f64 {
        ANGLE_TOLERANCE + GEOMETRY_TOLERANCE / self.circle.radius
    }

    /// True if the direction `angle` lies within the span (tolerant at both ends)
    pub fn contains_angle(&self, angle: f64) -> bool {
        if self.is_full() {
            return true;
        }
        let slack = self.angle_slack();
        let relative = normalize_angle(angle - self.start_angle);
        relative <= self.sweep + slack || relative >= TAU - slack
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        self.circle.on_boundary(point) && self.contains_angle(self.circle.angle_of(point))
    }

    /// Evenly spaced points from start to end (inclusive)
    pub fn sample(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| {
                self.circle
                    .point_at_angle(self.start_angle + self.sweep * i as f64 / segments as f64)
            })
            .collect()
    }
}

impl PartialEq for Arc {
    fn eq(&self, other: &Self) -> bool {
        if self.circle != other.circle || (self.sweep - other.sweep).abs() > self.angle_slack() {
            return false;
        }
        if self.is_full() {
            return true;
        }
        let offset = normalize_angle(self.start_angle - other.start_angle);
        offset <= self.angle_slack() || offset >= TAU - self.angle_slack()
    }
}

impl Geometry2D for Arc {
    fn bounding_box(&self) -> BoundingBox2D {
        let mut points = vec![self.start_point().coords(), self.end_point().coords()];
        for quadrant in 0..4 {
            let angle = quadrant as f64 * FRAC_PI_2;
            if self.contains_angle(angle) {
                points.push(self.circle.point_at_angle(angle).coords());
            }
        }
        BoundingBox2D::from_points(points).unwrap_or_default()
    }

    fn reference_point(&self) -> Point {
        self.circle.center
    }

    fn apply_transform(&mut self, transform: &Transform2D) {
        self.circle.apply_transform(transform);
        self.start_angle = normalize_angle(transform.apply_to_angle(self.start_angle));
    }
}

// ======================== POLYGON ========================

/// Polygon given by its ordered vertices; edges join consecutive vertices and close last→first
#[derive(Debug, Clone)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from its vertices in boundary order
    ///
    /// # Panics
    /// In debug builds when fewer than three vertices are given.
    pub fn new(vertices: Vec<Point>) -> Self {
        debug_assert!(vertices.len() >= 3, "A polygon needs at least three vertices");
        Self { vertices }
    }

    pub fn edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| LineSegment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace formula; positive for counterclockwise vertex order
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let twice: f64 = (0..n)
            .map(|i| cross(&self.vertices[i].coords(), &self.vertices[(i + 1) % n].coords()))
            .sum();
        twice / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn perimeter(&self) -> f64 {
        self.edges().map(|edge| edge.length()).sum()
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Area centroid; falls back to the vertex mean for degenerate polygons
    pub fn centroid(&self) -> Point {
        let n = self.vertices.len();
        let signed_area = self.signed_area();
        if signed_area.abs() <= GEOMETRY_TOLERANCE * GEOMETRY_TOLERANCE {
            let sum: Vector2<f64> = self.vertices.iter().map(|v| v.coords()).sum();
            return (sum / n as f64).into();
        }

        let mut accumulated = Vector2::zeros();
        for i in 0..n {
            let a = self.vertices[i].coords();
            let b = self.vertices[(i + 1) % n].coords();
            accumulated += (a + b) * cross(&a, &b);
        }
        (accumulated / (6.0 * signed_area)).into()
    }

    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        let mut sign = 0.0;
        for i in 0..n {
            let a = self.vertices[i].coords();
            let b = self.vertices[(i + 1) % n].coords();
            let c = self.vertices[(i + 2) % n].coords();
            let turn = cross(&(b - a), &(c - b));
            if turn.abs() <= GEOMETRY_TOLERANCE * GEOMETRY_TOLERANCE {
                continue;
            }
            if sign == 0.0 {
                sign = turn.signum();
            } else if turn.signum() != sign {
                return false;
            }
        }
        true
    }

    /// Distance from `point` to the closest edge
    pub fn boundary_distance(&self, point: &Point) -> f64 {
        self.edges()
            .map(|edge| edge.distance_to_point(point))
            .fold(f64::INFINITY, f64::min)
    }

    fn ray_cast(&self, point: &Point) -> bool {
        let mut inside = false;
        let n = self.vertices.len();

        for i in 0..n {
            let v1 = self.vertices[i];
            let v2 = self.vertices[(i + 1) % n];

            if ((v1.y > point.y) != (v2.y > point.y))
                && (point.x < (v2.x - v1.x) * (point.y - v1.y) / (v2.y - v1.y) + v1.x)
            {
                inside = !inside;
            }
        }

        inside
    }

    /// Closed membership: interior or boundary
    pub fn contains_point(&self, point: &Point) -> bool {
        self.boundary_distance(point) <= GEOMETRY_TOLERANCE || self.ray_cast(point)
    }

    /// Open membership: interior only
    pub fn contains_point_strict(&self, point: &Point) -> bool {
        self.boundary_distance(point) > GEOMETRY_TOLERANCE && self.ray_cast(point)
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        let n = self.vertices.len();
        if n != other.vertices.len() {
            return false;
        }
        (0..n).any(|offset| {
            let forward = (0..n).all(|i| self.vertices[i] == other.vertices[(i + offset) % n]);
            let backward = (0..n).all(|i| self.vertices[i] == other.vertices[(offset + n - i) % n]);
            forward || backward
        })
    }
}

impl Geometry2D for Polygon {
    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from_points(self.vertices.iter().map(|v| v.coords())).unwrap_or_default()
    }

    fn reference_point(&self) -> Point {
        self.centroid()
    }

    fn apply_transform(&mut self, transform: &Transform2D) {
        for vertex in &mut self.vertices {
            vertex.apply_transform(transform);
        }
    }
}

// ======================== RECTANGLE ========================

/// Rectangle as a four-vertex polygon (possibly rotated)
///
/// The first edge (`v0 → v1`) runs along the length, the second (`v1 → v2`) along the width.
/// Right angles are assumed by the constructors, not re-validated.
#[derive(Debug, Clone)]
pub struct Rectangle {
    vertices: [Point; 4],
}

impl Rectangle {
    pub fn from_vertices(vertices: [Point; 4]) -> Self {
        Self { vertices }
    }

    /// Create a rectangle from its center and side lengths
    ///
    /// # Arguments
    /// * `center` - Centroid of the rectangle
    /// * `length` - Side along the length axis (the long side of a clay plate)
    /// * `width` - Side across the length axis
    /// * `inclination` - Angle of the length axis in radians (counterclockwise from +x)
    pub fn from_center(center: Point, length: f64, width: f64, inclination: f64) -> Self {
        let along = unit(inclination) * (length / 2.0);
        let across = perpendicular(&unit(inclination)) * (width / 2.0);
        let c = center.coords();
        Self {
            vertices: [
                (c - along - across).into(),
                (c + along - across).into(),
                (c + along + across).into(),
                (c - along + across).into(),
            ],
        }
    }

    pub fn axis_aligned(min: Point, max: Point) -> Self {
        Self {
            vertices: [
                min,
                Point::new(max.x, min.y),
                max,
                Point::new(min.x, max.y),
            ],
        }
    }

    pub fn vertices(&self) -> &[Point; 4] {
        &self.vertices
    }

    pub fn length(&self) -> f64 {
        self.vertices[0].distance_to(&self.vertices[1])
    }

    pub fn width(&self) -> f64 {
        self.vertices[1].distance_to(&self.vertices[2])
    }

    pub fn center(&self) -> Point {
        ((self.vertices[0].coords() + self.vertices[2].coords()) / 2.0).into()
    }

    pub fn inclination(&self) -> f64 {
        LineSegment::new(self.vertices[0], self.vertices[1]).inclination()
    }

    pub fn area(&self) -> f64 {
        self.length() * self.width()
    }

    pub fn edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
        (0..4).map(move |i| LineSegment::new(self.vertices[i], self.vertices[(i + 1) % 4]))
    }

    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.vertices.to_vec())
    }

    /// Coordinates of `point` along the length and width axes, measured from `v0`
    fn local_coordinates(&self, point: &Point) -> Option<(f64, f64)> {
        let origin = self.vertices[0].coords();
        let length = self.length();
        let width = self.width();
        if length <= GEOMETRY_TOLERANCE || width <= GEOMETRY_TOLERANCE {
            return None;
        }
        let along = (self.vertices[1].coords() - origin) / length;
        let across = (self.vertices[3].coords() - origin) / width;
        let offset = point.coords() - origin;
        Some((offset.dot(&along), offset.dot(&across)))
    }

    /// Closed membership
    pub fn contains_point(&self, point: &Point) -> bool {
        match self.local_coordinates(point) {
            Some((u, v)) => {
                u >= -GEOMETRY_TOLERANCE
                    && u <= self.length() + GEOMETRY_TOLERANCE
                    && v >= -GEOMETRY_TOLERANCE
                    && v <= self.width() + GEOMETRY_TOLERANCE
            }
            None => self.to_polygon().contains_point(point),
        }
    }

    /// Open membership
    pub fn contains_point_strict(&self, point: &Point) -> bool {
        match self.local_coordinates(point) {
            Some((u, v)) => {
                u > GEOMETRY_TOLERANCE
                    && u < self.length() - GEOMETRY_TOLERANCE
                    && v > GEOMETRY_TOLERANCE
                    && v < self.width() - GEOMETRY_TOLERANCE
            }
            None => false,
        }
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.to_polygon() == other.to_polygon()
    }
}

impl Geometry2D for Rectangle {
    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from_points(self.vertices.iter().map(|v| v.coords())).unwrap_or_default()
    }

    fn reference_point(&self) -> Point {
        self.center()
    }

    fn apply_transform(&mut self, transform: &Transform2D) {
        for vertex in &mut self.vertices {
            vertex.apply_transform(transform);
        }
    }
}

// ======================== SHAPE ========================

/// Closed union of every primitive the operation library dispatches on
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Line(Line),
    Segment(LineSegment),
    Circle(Circle),
    Rectangle(Rectangle),
    Polygon(Polygon),
    Arc(Arc),
}

/// Tag of a [`Shape`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Line,
    Segment,
    Circle,
    Rectangle,
    Polygon,
    Arc,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Arc(_) => ShapeKind::Arc,
        }
    }

    /// Shapes enclosing a region: circle, rectangle and polygon
    pub fn is_area(&self) -> bool {
        matches!(self, Shape::Circle(_) | Shape::Rectangle(_) | Shape::Polygon(_))
    }

    /// Closed membership: region plus boundary for area shapes, the curve itself otherwise
    pub fn contains_point(&self, point: &Point) -> bool {
        match self {
            Shape::Point(p) => p == point,
            Shape::Line(line) => line.contains_point(point),
            Shape::Segment(segment) => segment.contains_point(point),
            Shape::Circle(circle) => circle.contains_point(point),
            Shape::Rectangle(rectangle) => rectangle.contains_point(point),
            Shape::Polygon(polygon) => polygon.contains_point(point),
            Shape::Arc(arc) => arc.contains_point(point),
        }
    }

    /// Open membership; always false for shapes without interior
    pub fn contains_point_strict(&self, point: &Point) -> bool {
        match self {
            Shape::Circle(circle) => circle.contains_point_strict(point),
            Shape::Rectangle(rectangle) => rectangle.contains_point_strict(point),
            Shape::Polygon(polygon) => polygon.contains_point_strict(point),
            _ => false,
        }
    }

    /// A point guaranteed to lie on the shape's boundary (or on the shape, for curves)
    pub fn boundary_point(&self) -> Point {
        match self {
            Shape::Point(p) => *p,
            Shape::Line(line) => line.anchor(),
            Shape::Segment(segment) => segment.start,
            Shape::Circle(circle) => circle.point_at_angle(0.0),
            Shape::Rectangle(rectangle) => rectangle.vertices()[0],
            Shape::Polygon(polygon) => polygon.vertices[0],
            Shape::Arc(arc) => arc.start_point(),
        }
    }

    /// Vertices of polygonal shapes, `None` otherwise
    pub fn polygon_vertices(&self) -> Option<Vec<Point>> {
        match self {
            Shape::Rectangle(rectangle) => Some(rectangle.vertices().to_vec()),
            Shape::Polygon(polygon) => Some(polygon.vertices.clone()),
            _ => None,
        }
    }

    pub fn is_convex(&self) -> bool {
        match self {
            Shape::Polygon(polygon) => polygon.is_convex(),
            Shape::Line(_) | Shape::Arc(_) => false,
            _ => true,
        }
    }
}

impl Geometry2D for Shape {
    fn bounding_box(&self) -> BoundingBox2D {
        match self {
            Shape::Point(p) => p.bounding_box(),
            Shape::Line(line) => line.bounding_box(),
            Shape::Segment(segment) => segment.bounding_box(),
            Shape::Circle(circle) => circle.bounding_box(),
            Shape::Rectangle(rectangle) => rectangle.bounding_box(),
            Shape::Polygon(polygon) => polygon.bounding_box(),
            Shape::Arc(arc) => arc.bounding_box(),
        }
    }

    fn reference_point(&self) -> Point {
        match self {
            Shape::Point(p) => p.reference_point(),
            Shape::Line(line) => line.reference_point(),
            Shape::Segment(segment) => segment.reference_point(),
            Shape::Circle(circle) => circle.reference_point(),
            Shape::Rectangle(rectangle) => rectangle.reference_point(),
            Shape::Polygon(polygon) => polygon.reference_point(),
            Shape::Arc(arc) => arc.reference_point(),
        }
    }

    fn apply_transform(&mut self, transform: &Transform2D) {
        match self {
            Shape::Point(p) => p.apply_transform(transform),
            Shape::Line(line) => line.apply_transform(transform),
            Shape::Segment(segment) => segment.apply_transform(transform),
            Shape::Circle(circle) => circle.apply_transform(transform),
            Shape::Rectangle(rectangle) => rectangle.apply_transform(transform),
            Shape::Polygon(polygon) => polygon.apply_transform(transform),
            Shape::Arc(arc) => arc.apply_transform(transform),
        }
    }
}

impl From<Point> for Shape {
    fn from(value: Point) -> Self {
        Shape::Point(value)
    }
}

impl From<Line> for Shape {
    fn from(value: Line) -> Self {
        Shape::Line(value)
    }
}

impl From<LineSegment> for Shape {
    fn from(value: LineSegment) -> Self {
        Shape::Segment(value)
    }
}

impl From<Circle> for Shape {
    fn from(value: Circle) -> Self {
        Shape::Circle(value)
    }
}

impl From<Rectangle> for Shape {
    fn from(value: Rectangle) -> Self {
        Shape::Rectangle(value)
    }
}

impl From<Polygon> for Shape {
    fn from(value: Polygon) -> Self {
        Shape::Polygon(value)
    }
}

impl From<Arc> for Shape {
    fn from(value: Arc) -> Self {
        Shape::Arc(value)
    }
}
