#[cfg(test)]
mod _tests_geometry2d_containment {
    use super::super::geometry2d::*;
    use super::super::geometry2d_containment::*;
    use std::f64::consts::PI;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn square(min: (f64, f64), max: (f64, f64)) -> Shape {
        Rectangle::axis_aligned(p(min.0, min.1), p(max.0, max.1)).into()
    }

    #[test]
    fn test_circle_inside_rectangle() {
        let container = square((0.0, 0.0), (10.0, 10.0));
        let inner: Shape = Circle::new(p(5.0, 5.0), 2.0).into();
        let touching: Shape = Circle::new(p(2.0, 5.0), 2.0).into();
        let crossing: Shape = Circle::new(p(1.0, 5.0), 2.0).into();

        assert!(is_inside(&inner, &container));
        assert!(!is_inside(&container, &inner));
        assert!(!is_inside(&touching, &container));
        assert!(!is_inside(&crossing, &container));
    }

    #[test]
    fn test_rectangle_inside_circle() {
        let circle: Shape = Circle::new(p(0.0, 0.0), 5.0).into();
        let small = Rectangle::from_center(p(0.0, 0.0), 4.0, 2.0, PI / 5.0).into();
        let large = Rectangle::from_center(p(0.0, 0.0), 12.0, 2.0, 0.0).into();

        assert!(is_inside(&small, &circle));
        assert!(!is_inside(&large, &circle));
    }

    #[test]
    fn test_curves_inside_areas() {
        let container = square((0.0, 0.0), (10.0, 10.0));
        let segment: Shape = LineSegment::new(p(1.0, 1.0), p(9.0, 8.0)).into();
        let arc: Shape = Arc::new(Circle::new(p(5.0, 5.0), 3.0), 0.0, PI).into();
        let point: Shape = p(3.0, 3.0).into();

        assert!(is_inside(&segment, &container));
        assert!(is_inside(&arc, &container));
        assert!(is_inside(&point, &container));
        assert!(!is_inside(&p(0.0, 3.0).into(), &container));
    }

    #[test]
    fn test_line_is_never_inside() {
        let circle: Shape = Circle::new(p(0.0, 0.0), 5.0).into();
        assert!(!is_inside(&Line::new(0.0, 0.0).into(), &circle));
        assert!(!contains_closed(&Line::new(0.0, 0.0).into(), &circle));
    }

    #[test]
    fn test_only_area_shapes_contain() {
        let segment: Shape = LineSegment::new(p(0.0, 0.0), p(10.0, 0.0)).into();
        let arc: Shape = Arc::new(Circle::new(p(0.0, 0.0), 3.0), 0.0, PI).into();
        assert!(!is_inside(&p(5.0, 0.0).into(), &segment));
        assert!(!is_inside(&p(0.0, 3.0).into(), &arc));
    }

    #[test]
    fn test_equal_shapes_are_not_inside_each_other() {
        let shapes: Vec<Shape> = vec![
            Circle::new(p(1.0, 1.0), 3.0).into(),
            square((0.0, 0.0), (2.0, 3.0)),
            Polygon::new(vec![p(0.0, 0.0), p(4.0, 0.0), p(1.0, 3.0)]).into(),
        ];
        for shape in &shapes {
            assert!(!is_inside(shape, shape));
        }
    }

    #[test]
    fn test_containment_is_antisymmetric() {
        let shapes: Vec<Shape> = vec![
            Circle::new(p(0.0, 0.0), 10.0).into(),
            Circle::new(p(1.0, 1.0), 2.0).into(),
            square((-3.0, -3.0), (3.0, 3.0)),
            square((-1.0, -1.0), (1.0, 1.0)),
            Polygon::new(vec![p(-20.0, -20.0), p(20.0, -20.0), p(0.0, 30.0)]).into(),
            p(0.5, 0.5).into(),
            LineSegment::new(p(-0.5, 0.0), p(0.5, 0.0)).into(),
        ];

        for a in &shapes {
            for b in &shapes {
                assert!(
                    !(is_inside(a, b) && is_inside(b, a)),
                    "{:?} and {:?} inside each other",
                    a.kind(),
                    b.kind()
                );
            }
        }
    }

    #[test]
    fn test_nested_chain() {
        let outer = Polygon::new(vec![p(-20.0, -20.0), p(20.0, -20.0), p(0.0, 30.0)]).into();
        let middle: Shape = Circle::new(p(0.0, 0.0), 10.0).into();
        let inner = square((-1.0, -1.0), (1.0, 1.0));

        assert!(is_inside(&middle, &outer));
        assert!(is_inside(&inner, &middle));
        assert!(is_inside(&inner, &outer));
    }

    #[test]
    fn test_contains_closed_accepts_boundary_contact() {
        let container = square((0.0, 0.0), (10.0, 10.0));
        let touching: Shape = Circle::new(p(2.0, 5.0), 2.0).into();
        let crossing: Shape = Circle::new(p(1.0, 5.0), 2.0).into();

        assert!(contains_closed(&touching, &container));
        assert!(!contains_closed(&crossing, &container));
        assert!(contains_closed(&container, &container));
        assert!(contains_closed(&LineSegment::new(p(0.0, 0.0), p(10.0, 0.0)).into(), &container));
    }
}
