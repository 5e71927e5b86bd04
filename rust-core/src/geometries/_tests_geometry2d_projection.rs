#[cfg(test)]
mod _tests_geometry2d_projection {
    use super::super::geometry2d::*;
    use super::super::geometry2d_intersection::{same_pieces, Piece};
    use super::super::geometry2d_projection::projection;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn segment(a: (f64, f64), b: (f64, f64)) -> Piece {
        Piece::Segment(LineSegment::new(p(a.0, a.1), p(b.0, b.1)))
    }

    #[test]
    fn test_projection_onto_point() {
        let target: Shape = p(3.0, 3.0).into();
        let circle: Shape = Circle::new(p(0.0, 0.0), 1.0).into();
        assert_eq!(projection(&circle, &target), Some(vec![Piece::Point(p(3.0, 3.0))]));
    }

    #[test]
    fn test_projection_onto_segment_is_clipped() {
        let target: Shape = LineSegment::new(p(0.0, 0.0), p(10.0, 0.0)).into();
        let circle: Shape = Circle::new(p(9.0, 5.0), 2.0).into();
        assert_eq!(projection(&circle, &target), Some(vec![segment((7.0, 0.0), (10.0, 0.0))]));

        let plate: Shape = LineSegment::new(p(2.0, 3.0), p(4.0, 7.0)).into();
        assert_eq!(projection(&plate, &target), Some(vec![segment((2.0, 0.0), (4.0, 0.0))]));

        let missing: Shape = Circle::new(p(20.0, 5.0), 2.0).into();
        assert_eq!(projection(&missing, &target), None);
    }

    #[test]
    fn test_projection_onto_line_is_unclipped() {
        let target: Shape = Line::new(0.0, 0.0).into();
        let rectangle: Shape = Rectangle::axis_aligned(p(-3.0, 2.0), p(5.0, 4.0)).into();
        assert_eq!(projection(&rectangle, &target), Some(vec![segment((-3.0, 0.0), (5.0, 0.0))]));

        let point: Shape = p(7.0, 1.0).into();
        assert_eq!(projection(&point, &target), Some(vec![Piece::Point(p(7.0, 0.0))]));

        let crossing: Shape = Line::new(1.0, 0.0).into();
        assert_eq!(projection(&crossing, &target), Some(vec![Piece::Line(Line::new(0.0, 0.0))]));

        let perpendicular: Shape = Line::vertical(2.0).into();
        assert_eq!(projection(&perpendicular, &target), Some(vec![Piece::Point(p(2.0, 0.0))]));
    }

    #[test]
    fn test_projection_onto_facing_edges() {
        let square: Shape = Rectangle::axis_aligned(p(0.0, 0.0), p(4.0, 4.0)).into();

        let beside: Shape = Circle::new(p(8.0, 2.0), 1.0).into();
        assert_eq!(projection(&beside, &square), Some(vec![segment((4.0, 1.0), (4.0, 3.0))]));

        // Past the corner both the right and the top edges face the circle
        let diagonal: Shape = Circle::new(p(5.5, 5.5), 2.0).into();
        let pieces = projection(&diagonal, &square).unwrap();
        assert!(same_pieces(
            &pieces,
            &[segment((4.0, 3.5), (4.0, 4.0)), segment((3.5, 4.0), (4.0, 4.0))]
        ));

        // Beyond the corner reach of both edges nothing is in front of the square
        let far_corner: Shape = Circle::new(p(6.0, 6.0), 1.0).into();
        assert_eq!(projection(&far_corner, &square), None);
    }

    #[test]
    fn test_projection_of_inner_shape_is_none() {
        let square: Shape = Rectangle::axis_aligned(p(0.0, 0.0), p(4.0, 4.0)).into();
        let inner: Shape = Circle::new(p(2.0, 2.0), 1.0).into();
        assert_eq!(projection(&inner, &square), None);

        let disc: Shape = Circle::new(p(0.0, 0.0), 10.0).into();
        assert_eq!(projection(&p(1.0, 1.0).into(), &disc), None);
    }

    #[test]
    fn test_radial_projection_of_circle() {
        let target = Circle::new(p(0.0, 0.0), 1.0);
        let other: Shape = Circle::new(p(10.0, 0.0), 5.0).into();

        let pieces = projection(&other, &Shape::Circle(target)).unwrap();
        let half = (0.5_f64).asin();
        assert_eq!(pieces, vec![Piece::Arc(Arc::new(target, -half, 2.0 * half))]);
    }

    #[test]
    fn test_radial_projection_of_segment() {
        let target = Circle::new(p(0.0, 0.0), 2.0);
        let wall: Shape = LineSegment::new(p(5.0, -5.0), p(5.0, 5.0)).into();

        let pieces = projection(&wall, &Shape::Circle(target)).unwrap();
        match pieces.as_slice() {
            [Piece::Arc(arc)] => {
                assert_relative_eq!(arc.sweep(), PI / 2.0, epsilon = 1e-12);
                assert_eq!(arc.start_point(), target.point_at_angle(-PI / 4.0));
            }
            other => panic!("expected one arc, got {:?}", other),
        }
    }

    #[test]
    fn test_radial_projection_of_surrounding_shape() {
        let target = Circle::new(p(0.0, 0.0), 1.0);
        let surrounding: Shape = Rectangle::axis_aligned(p(-0.5, -0.5), p(3.0, 3.0)).into();
        assert_eq!(projection(&surrounding, &Shape::Circle(target)), Some(vec![Piece::Circle(target)]));
    }

    #[test]
    fn test_radial_projection_onto_arc_is_clipped() {
        let circle = Circle::new(p(0.0, 0.0), 1.0);
        let upper: Shape = Arc::new(circle, 0.0, PI).into();

        let right: Shape = LineSegment::new(p(5.0, -5.0), p(5.0, 5.0)).into();
        let pieces = projection(&right, &upper).unwrap();
        assert_eq!(pieces, vec![Piece::Arc(Arc::new(circle, 0.0, PI / 4.0))]);

        let below: Shape = p(0.0, -3.0).into();
        assert_eq!(projection(&below, &upper), None);

        let surrounding: Shape = Circle::new(p(0.0, 0.0), 4.0).into();
        assert_eq!(projection(&surrounding, &upper), Some(vec![Piece::Arc(Arc::new(circle, 0.0, PI))]));
    }

    #[test]
    fn test_radial_projection_of_point() {
        let target = Circle::new(p(1.0, 1.0), 2.0);
        let pieces = projection(&p(1.0, 10.0).into(), &Shape::Circle(target)).unwrap();
        assert_eq!(pieces, vec![Piece::Point(p(1.0, 3.0))]);
    }
}
