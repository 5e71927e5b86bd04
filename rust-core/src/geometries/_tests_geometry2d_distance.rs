#[cfg(test)]
mod _tests_geometry2d_distance {
    use super::super::geometry2d::*;
    use super::super::geometry2d_containment::is_inside;
    use super::super::geometry2d_distance::*;
    use super::super::geometry2d_intersection::intersection;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn square(min: (f64, f64), max: (f64, f64)) -> Shape {
        Rectangle::axis_aligned(p(min.0, min.1), p(max.0, max.1)).into()
    }

    #[test]
    fn test_separated_circles() {
        let a: Shape = Circle::new(p(0.0, 0.0), 2.0).into();
        let b: Shape = Circle::new(p(10.0, 0.0), 3.0).into();
        assert_relative_eq!(distance(&a, &b), 5.0);
        assert_relative_eq!(distance(&b, &a), 5.0);
    }

    #[test]
    fn test_touching_circles() {
        let a: Shape = Circle::new(p(0.0, 0.0), 2.0).into();
        let b: Shape = Circle::new(p(5.0, 0.0), 3.0).into();
        assert_eq!(distance(&a, &b), 0.0);
    }

    #[test]
    fn test_overlapping_circles() {
        let a: Shape = Circle::new(p(0.0, 0.0), 2.0).into();
        let b: Shape = Circle::new(p(4.0, 0.0), 3.0).into();
        assert_relative_eq!(distance(&a, &b), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nested_circles() {
        let outer: Shape = Circle::new(p(0.0, 0.0), 10.0).into();
        let inner: Shape = Circle::new(p(3.0, 0.0), 2.0).into();
        assert_relative_eq!(distance(&inner, &outer), -5.0, epsilon = 1e-12);
        assert_relative_eq!(distance(&outer, &inner), -5.0, epsilon = 1e-12);

        let tangent_inside: Shape = Circle::new(p(8.0, 0.0), 2.0).into();
        assert_eq!(distance(&tangent_inside, &outer), 0.0);
    }

    #[test]
    fn test_identical_shapes_touch() {
        let shapes: Vec<Shape> = vec![
            Circle::new(p(1.0, 1.0), 3.0).into(),
            square((0.0, 0.0), (2.0, 3.0)),
            LineSegment::new(p(0.0, 0.0), p(4.0, 1.0)).into(),
            p(2.0, 2.0).into(),
        ];
        for shape in &shapes {
            assert_eq!(distance(shape, shape), 0.0);
        }
    }

    #[test]
    fn test_point_distances() {
        let point: Shape = p(3.0, 4.0).into();
        assert_relative_eq!(distance(&point, &p(0.0, 0.0).into()), 5.0);
        assert_relative_eq!(distance(&point, &Line::new(0.0, 0.0).into()), 4.0);
        assert_relative_eq!(
            distance(&point, &LineSegment::new(p(-10.0, 0.0), p(0.0, 0.0)).into()),
            5.0
        );
        assert_relative_eq!(distance(&point, &Circle::new(p(0.0, 0.0), 2.0).into()), 3.0);
        assert_relative_eq!(distance(&point, &Circle::new(p(0.0, 0.0), 10.0).into()), -5.0);
        assert_eq!(distance(&point, &Circle::new(p(0.0, 0.0), 5.0).into()), 0.0);
    }

    #[test]
    fn test_segment_distances() {
        let segment: Shape = LineSegment::new(p(0.0, 0.0), p(10.0, 0.0)).into();
        let parallel: Shape = LineSegment::new(p(2.0, 3.0), p(5.0, 3.0)).into();
        let beyond: Shape = LineSegment::new(p(13.0, 4.0), p(20.0, 4.0)).into();

        assert_relative_eq!(distance(&segment, &parallel), 3.0);
        assert_relative_eq!(distance(&segment, &beyond), 5.0);
        assert_relative_eq!(distance(&Line::new(0.0, 3.0).into(), &Line::new(0.0, -1.0).into()), 4.0);
    }

    #[test]
    fn test_crossing_curves_touch() {
        let horizontal: Shape = LineSegment::new(p(0.0, 0.0), p(10.0, 0.0)).into();
        let vertical: Shape = LineSegment::new(p(5.0, -5.0), p(5.0, 5.0)).into();
        assert_eq!(distance(&horizontal, &vertical), 0.0);
        assert_eq!(distance(&vertical, &horizontal), 0.0);

        let arc: Shape = Arc::new(Circle::new(p(0.0, 0.0), 1.0), 0.0, PI).into();
        let through_top: Shape = LineSegment::new(p(0.0, 0.0), p(0.0, 3.0)).into();
        assert_eq!(distance(&arc, &through_top), 0.0);
        assert_eq!(distance(&Line::new(0.0, 0.5).into(), &arc), 0.0);
    }

    #[test]
    fn test_circle_and_segment() {
        let circle: Shape = Circle::new(p(0.0, 0.0), 2.0).into();
        let above: Shape = LineSegment::new(p(-5.0, 6.0), p(5.0, 6.0)).into();
        let aside: Shape = LineSegment::new(p(5.0, 0.0), p(9.0, 0.0)).into();
        let chord: Shape = LineSegment::new(p(-5.0, 1.0), p(5.0, 1.0)).into();
        let inner: Shape = LineSegment::new(p(-1.0, 0.0), p(1.0, 0.0)).into();

        assert_relative_eq!(distance(&circle, &above), 4.0, epsilon = 1e-12);
        assert_relative_eq!(distance(&aside, &circle), 3.0, epsilon = 1e-12);
        assert!(distance(&circle, &chord) < 0.0);
        assert_relative_eq!(distance(&inner, &circle), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rectangles() {
        let a = square((0.0, 0.0), (2.0, 2.0));
        let b = square((5.0, 0.0), (7.0, 2.0));
        let corner = square((5.0, 6.0), (7.0, 8.0));
        let shared_edge = square((2.0, 0.0), (4.0, 2.0));
        let overlapping = square((1.5, 0.0), (3.5, 2.0));

        assert_relative_eq!(distance(&a, &b), 3.0);
        assert_relative_eq!(distance(&a, &corner), 5.0);
        assert_eq!(distance(&a, &shared_edge), 0.0);
        assert_relative_eq!(distance(&a, &overlapping), -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_rotated_rectangle_against_circle() {
        let plate: Shape = Rectangle::from_center(p(0.0, 0.0), 10.0, 1.0, PI / 4.0).into();
        let far: Shape = Circle::new(p(10.0, -10.0), 1.0).into();
        let expected = (200.0_f64).sqrt() - 0.5 - 1.0;
        assert_relative_eq!(distance(&plate, &far), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_arc_distances() {
        let arc: Shape = Arc::new(Circle::new(p(0.0, 0.0), 1.0), 0.0, PI).into();
        assert_relative_eq!(distance(&arc, &p(0.0, 3.0).into()), 2.0, epsilon = 1e-12);
        // Below the arc the closest points are the endpoints
        assert_relative_eq!(distance(&arc, &p(1.0, -2.0).into()), 2.0, epsilon = 1e-12);
        assert_relative_eq!(distance(&arc, &Line::new(0.0, 2.0).into()), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let shapes = sample_shapes();
        for a in &shapes {
            for b in &shapes {
                assert_abs_diff_eq!(distance(a, b), distance(b, a), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_contact_round_trip() {
        let shapes = sample_shapes();
        for a in &shapes {
            for b in &shapes {
                if a == b {
                    continue;
                }
                let in_contact = !intersection(a, b).is_empty() || is_inside(a, b) || is_inside(b, a);
                assert_eq!(
                    distance(a, b) <= 0.0,
                    in_contact,
                    "contact mismatch for {:?} and {:?}",
                    a.kind(),
                    b.kind()
                );
            }
        }
    }

    fn sample_shapes() -> Vec<Shape> {
        vec![
            p(1.0, 0.5).into(),
            p(30.0, 30.0).into(),
            Line::new(0.5, -1.0).into(),
            LineSegment::new(p(-2.0, -2.0), p(2.0, 2.0)).into(),
            LineSegment::new(p(10.0, 10.0), p(12.0, 10.0)).into(),
            Circle::new(p(0.0, 0.0), 1.0).into(),
            Circle::new(p(0.0, 0.0), 20.0).into(),
            Circle::new(p(11.0, 11.5), 1.0).into(),
            square((-0.5, -0.5), (1.5, 0.5)),
            Rectangle::from_center(p(5.0, 5.0), 4.0, 1.0, PI / 3.0).into(),
            Polygon::new(vec![p(0.0, -2.0), p(2.0, 1.0), p(-2.0, 1.0)]).into(),
            Arc::new(Circle::new(p(0.5, 0.0), 1.0), 0.0, PI).into(),
        ]
    }
}
