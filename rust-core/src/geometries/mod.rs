// Geometries module: 2D computational-geometry kernel for the particle model
// This module provides the primitives and the pairwise operations the contact detection relies on

// ======================== MODULE DECLARATIONS ========================
pub mod geometry2d;
pub mod geometry2d_bounding_box;
pub mod geometry2d_containment;
mod geometry2d_curves;
pub mod geometry2d_distance;
pub mod geometry2d_intersection;
pub mod geometry2d_overlap;
pub mod geometry2d_projection;
pub mod geometry2d_transform;
pub mod geometry2d_utils;

mod _tests_geometry2d_bounding_box;
mod _tests_geometry2d_containment;
mod _tests_geometry2d_distance;
mod _tests_geometry2d_intersection;
mod _tests_geometry2d_projection;
mod _tests_geometry2d_transform;

// ======================== CORE GEOMETRY TRAIT ========================
pub use geometry2d::Geometry2D; // trait - base trait for all 2D primitives
// Geometry2D trait methods:
//   bounding_box(&self) -> BoundingBox2D                     - returns axis-aligned bounding box
//   reference_point(&self) -> Point                          - point the primitive rotates about
//   apply_transform(&mut self, transform: &Transform2D)      - applies a rigid motion
//   move_by(&mut self, dx: f64, dy: f64, dtheta: f64)        - translates and rotates about the reference point

// ======================== PRIMITIVE GEOMETRY TYPES ========================
pub use geometry2d::{
    Arc,         // struct - counterclockwise part of a circle
    Circle,      // struct - circle with positive radius
    Line,        // enum   - infinite line (sloped or vertical)
    LineSegment, // struct - segment between two endpoints (order-independent equality)
    Navigator,   // struct - lazy equally spaced walk along a segment
    Point,       // struct - point with tolerant equality
    Polygon,     // struct - ordered vertex list, closed last→first
    Rectangle,   // struct - four-vertex polygon, possibly rotated
    Shape,       // enum   - closed union of all primitives
    ShapeKind,   // enum   - tag of a Shape variant
};

// Point impl methods:
//   new(x: f64, y: f64) -> Self                              - creates a point
//   coords(&self) -> Vector2<f64>                            - position vector
//   distance_to(&self, other: &Point) -> f64                 - Euclidean distance

// Line impl methods:
//   new(slope: f64, intercept: f64) -> Self                  - y = slope * x + intercept
//   vertical(x: f64) -> Self                                 - x = c
//   through(a: &Point, b: &Point) -> Option<Self>            - line through two distinct points
//   direction / normal / anchor / signed_distance / project / is_parallel / contains_point

// LineSegment impl methods:
//   new(start: Point, end: Point) -> Self                    - creates a segment
//   from_center(center: Point, length: f64, inclination: f64) -> Self
//   length / midpoint / vector / direction / line / inclination
//   point_at(t) / closest_point(p) / distance_to_point(p) / contains_point(p)
//   navigator(step: f64) -> Navigator                        - equally spaced points, ends on `end`

// Circle impl methods:
//   new(center: Point, radius: f64) -> Self
//   area / circumference / angle_of / point_at_angle / contains_point / contains_point_strict

// Arc impl methods:
//   new(circle: Circle, start_angle: f64, sweep: f64) -> Self
//   between(circle, from, to) -> Self                        - counterclockwise from → to
//   shorter(circle, a, b) -> Self                            - shorter of the two arcs
//   contains_angle / contains_point / start_point / end_point / length / sample

// Polygon impl methods:
//   new(vertices: Vec<Point>) -> Self
//   edges / signed_area / area / centroid / is_convex / contains_point / contains_point_strict

// Rectangle impl methods:
//   from_center(center: Point, length: f64, width: f64, inclination: f64) -> Self
//   axis_aligned(min: Point, max: Point) -> Self
//   length / width / center / inclination / to_polygon / contains_point / contains_point_strict

// ======================== PAIRWISE OPERATIONS ========================
pub use geometry2d_containment::{contains_closed, is_inside};
//   is_inside(a: &Shape, b: &Shape) -> bool                  - every point of a strictly inside area shape b
//   contains_closed(a: &Shape, b: &Shape) -> bool            - every point of a in the closed area b

pub use geometry2d_distance::{boundary_gap, distance, penetration_depth};
//   distance(a: &Shape, b: &Shape) -> f64                    - signed distance, <= 0 means contact
//   boundary_gap(a: &Shape, b: &Shape) -> f64                - Euclidean gap between the boundaries
//   penetration_depth(a: &Shape, b: &Shape) -> f64           - overlap along the best separating axis

pub use geometry2d_intersection::{intersection, same_pieces, Intersection, Piece};
//   intersection(a: &Shape, b: &Shape) -> Intersection       - Empty, Interior or Found(pieces)

pub use geometry2d_overlap::{circle_lens_area, intersection_area, intersection_length};
//   intersection_length(a: &Shape, b: &Shape) -> f64         - overlap length of clay-like shapes
//   intersection_area(a: &Shape, b: &Shape) -> f64           - common area (circles, convex polygons)
//   circle_lens_area(a: &Circle, b: &Circle) -> f64          - lens area of two discs

pub use geometry2d_projection::projection;
//   projection(a: &Shape, b: &Shape) -> Option<Vec<Piece>>   - part of b in front of a

// ======================== GEOMETRIC UTILITIES ========================
pub use geometry2d_bounding_box::BoundingBox2D; // struct - 2D axis-aligned bounding box
// BoundingBox2D impl methods:
//   new(min: Vector2<f64>, max: Vector2<f64>) -> Self        - extent from its corners
//   everywhere() -> Self                                     - extent of an infinite line
//   from_points(points) -> Option<Self>                      - smallest extent holding all points
//   expand(&self, margin: f64) -> Self                       - grown on every side
//   overlaps(&self, other: &BoundingBox2D) -> bool           - closed overlap test
//   is_finite(&self) -> bool

pub use geometry2d_transform::Transform2D; // struct - rigid motion (rotation about a pivot, then translation)
// Transform2D impl methods:
//   motion(dx, dy, dtheta, pivot) -> Self                    - move request of a primitive
//   apply_to_point / apply_to_angle                          - rotate about the pivot, then shift

pub use geometry2d_utils::{normalize_angle, opposite_sides, standardized_inclination, wrap_to_pi};
//   opposite_sides(line: &Line, a: &Point, b: &Point) -> bool - strictly different half-planes
//   standardized_inclination(angle: f64) -> f64              - inclination in [0, π)
