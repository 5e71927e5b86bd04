#[cfg(test)]
mod tests {
    use super::super::geometry2d::*;
    use super::super::geometry2d_transform::Transform2D;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::Vector2;
    use std::f64::consts::PI;

    #[test]
    fn test_pure_shift() {
        let transform = Transform2D::motion(2.0, 3.0, 0.0, Vector2::new(9.0, 9.0));
        assert_eq!(transform.apply_to_point(Vector2::new(1.0, 1.0)), Vector2::new(3.0, 4.0));
        assert_eq!(transform.apply_to_angle(0.25), 0.25);
    }

    #[test]
    fn test_rotation_about_pivot() {
        let transform = Transform2D::motion(0.0, 0.0, PI / 2.0, Vector2::new(1.0, 1.0));
        let rotated = transform.apply_to_point(Vector2::new(2.0, 1.0));

        assert_abs_diff_eq!(rotated.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rotated.y, 2.0, epsilon = 1e-12);
        // The pivot stays in place
        assert_eq!(transform.apply_to_point(Vector2::new(1.0, 1.0)), Vector2::new(1.0, 1.0));
    }

    #[test]
    fn test_motion_rotates_then_translates() {
        let transform = Transform2D::motion(10.0, 0.0, PI, Vector2::new(0.0, 0.0));
        let moved = transform.apply_to_point(Vector2::new(1.0, 0.0));

        assert_abs_diff_eq!(moved.x, 9.0, epsilon = 1e-12);
        assert_abs_diff_eq!(moved.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(transform.apply_to_angle(0.5), 0.5 + PI);
    }

    #[test]
    fn test_point_and_circle_ignore_rotation() {
        let mut point = Point::new(1.0, 2.0);
        point.move_by(1.0, 1.0, PI / 3.0);
        assert_eq!(point, Point::new(2.0, 3.0));

        let mut circle = Circle::new(Point::new(0.0, 0.0), 5.0);
        circle.move_by(-1.0, 4.0, 1.0);
        assert_eq!(circle, Circle::new(Point::new(-1.0, 4.0), 5.0));
    }

    #[test]
    fn test_segment_rotates_about_midpoint() {
        let mut segment = LineSegment::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0));
        segment.move_by(0.0, 0.0, PI / 2.0);

        assert_eq!(segment, LineSegment::new(Point::new(1.0, -1.0), Point::new(1.0, 1.0)));
        assert_eq!(segment.midpoint(), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_rectangle_rotates_about_centroid() {
        let mut rectangle = Rectangle::from_center(Point::new(5.0, 5.0), 4.0, 2.0, 0.0);
        rectangle.move_by(1.0, 0.0, PI / 2.0);

        assert_eq!(rectangle.center(), Point::new(6.0, 5.0));
        assert_relative_eq!(rectangle.inclination(), PI / 2.0, epsilon = 1e-9);
        assert_relative_eq!(rectangle.length(), 4.0, epsilon = 1e-9);
        assert_relative_eq!(rectangle.width(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_polygon_rotates_about_centroid() {
        let mut triangle = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 3.0),
        ]);
        let centroid = triangle.centroid();
        triangle.move_by(0.0, 0.0, 2.0 * PI / 3.0);

        assert_eq!(triangle.centroid(), centroid);
        assert_relative_eq!(triangle.area(), 4.5, epsilon = 1e-9);
    }

    #[test]
    fn test_arc_rotates_about_its_center() {
        let mut arc = Arc::new(Circle::new(Point::new(0.0, 0.0), 1.0), 0.0, PI / 2.0);
        arc.move_by(2.0, 0.0, PI / 2.0);

        assert_eq!(arc.circle.center, Point::new(2.0, 0.0));
        assert_relative_eq!(arc.start_angle(), PI / 2.0, epsilon = 1e-12);
        assert_eq!(arc.end_point(), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_line_moves_with_its_anchor() {
        let mut line = Line::new(0.0, 1.0);
        line.move_by(0.0, 2.0, 0.0);
        assert_eq!(line, Line::new(0.0, 3.0));

        let mut line = Line::new(0.0, 0.0);
        line.move_by(0.0, 0.0, PI / 2.0);
        assert_eq!(line, Line::vertical(0.0));
    }
}
