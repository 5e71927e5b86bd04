#[cfg(test)]
mod tests {
    use super::super::geometry2d::*;
    use super::super::geometry2d_bounding_box::BoundingBox2D;
    use nalgebra::Vector2;
    use std::f64::consts::PI;

    fn assert_vector_approx_eq(v1: Vector2<f64>, v2: Vector2<f64>, epsilon: f64) {
        if (v1.x - v2.x).abs() > epsilon || (v1.y - v2.y).abs() > epsilon {
            panic!("Vectors not approximately equal: {:?} != {:?}", v1, v2);
        }
    }

    #[test]
    fn test_new_with_valid_bounds() {
        let bbox = BoundingBox2D::new(Vector2::new(-5.0, -10.0), Vector2::new(5.0, 10.0));

        assert_vector_approx_eq(bbox.min, Vector2::new(-5.0, -10.0), 1e-10);
        assert_vector_approx_eq(bbox.max, Vector2::new(5.0, 10.0), 1e-10);
    }

    #[test]
    #[should_panic(expected = "Minimum coordinates must be less than or equal to maximum coordinates")]
    #[cfg(debug_assertions)]
    fn test_new_with_invalid_bounds_panics() {
        BoundingBox2D::new(Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn test_from_points() {
        let points = vec![
            Vector2::new(1.0, 2.0),
            Vector2::new(-1.0, 3.0),
            Vector2::new(2.0, -1.0),
        ];

        let bbox = BoundingBox2D::from_points(points).unwrap();
        assert_eq!(bbox.min, Vector2::new(-1.0, -1.0));
        assert_eq!(bbox.max, Vector2::new(2.0, 3.0));

        let empty_bbox = BoundingBox2D::from_points(std::iter::empty::<Vector2<f64>>());
        assert!(empty_bbox.is_none());
    }

    #[test]
    fn test_overlaps_is_closed() {
        let unit = BoundingBox2D::new(Vector2::new(0.0, 0.0), Vector2::new(2.0, 2.0));
        let touching = BoundingBox2D::new(Vector2::new(2.0, 1.0), Vector2::new(3.0, 3.0));
        let apart = BoundingBox2D::new(Vector2::new(3.5, 3.5), Vector2::new(4.0, 4.0));

        assert!(unit.overlaps(&touching));
        assert!(touching.overlaps(&unit));
        assert!(!unit.overlaps(&apart));
        assert!(unit.expand(1.5).overlaps(&apart));
    }

    #[test]
    fn test_expand() {
        let expanded = BoundingBox2D::new(Vector2::new(1.0, 1.0), Vector2::new(3.0, 5.0)).expand(1.0);
        assert_eq!(expanded.min, Vector2::new(0.0, 0.0));
        assert_eq!(expanded.max, Vector2::new(4.0, 6.0));
    }

    #[test]
    fn test_line_bounding_box_is_unbounded() {
        assert!(!Line::new(2.0, 1.0).bounding_box().is_finite());
        assert!(BoundingBox2D::default().is_finite());
    }

    #[test]
    fn test_circle_bounding_box() {
        let circle = Circle::new(Point::new(2.0, 3.0), 4.0);
        let bbox = circle.bounding_box();

        assert_vector_approx_eq(bbox.min, Vector2::new(-2.0, -1.0), 1e-10);
        assert_vector_approx_eq(bbox.max, Vector2::new(6.0, 7.0), 1e-10);
    }

    #[test]
    fn test_rotated_rectangle_bounding_box() {
        let rectangle = Rectangle::from_center(Point::new(0.0, 0.0), 2.0, 2.0, PI / 4.0);
        let bbox = rectangle.bounding_box();
        let half_diagonal = 2.0_f64.sqrt();

        assert_vector_approx_eq(bbox.min, Vector2::new(-half_diagonal, -half_diagonal), 1e-10);
        assert_vector_approx_eq(bbox.max, Vector2::new(half_diagonal, half_diagonal), 1e-10);
    }

    #[test]
    fn test_arc_bounding_box_includes_crossed_axes() {
        // Quarter arc from 45° to 135° crosses the +y axis
        let arc = Arc::new(Circle::new(Point::new(0.0, 0.0), 1.0), PI / 4.0, PI / 2.0);
        let bbox = arc.bounding_box();
        let s = (PI / 4.0).sin();

        assert_vector_approx_eq(bbox.min, Vector2::new(-s, s), 1e-10);
        assert_vector_approx_eq(bbox.max, Vector2::new(s, 1.0), 1e-10);
    }

    #[test]
    fn test_segment_bounding_box() {
        let segment = LineSegment::new(Point::new(5.0, -1.0), Point::new(2.0, 4.0));
        let bbox = segment.bounding_box();

        assert_vector_approx_eq(bbox.min, Vector2::new(2.0, -1.0), 1e-10);
        assert_vector_approx_eq(bbox.max, Vector2::new(5.0, 4.0), 1e-10);
    }
}
