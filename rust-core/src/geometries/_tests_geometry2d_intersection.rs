#[cfg(test)]
mod _tests_geometry2d_intersection {
    use super::super::geometry2d::*;
    use super::super::geometry2d_intersection::*;
    use std::f64::consts::PI;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn points(list: &[(f64, f64)]) -> Intersection {
        Intersection::Found(list.iter().map(|&(x, y)| Piece::Point(p(x, y))).collect())
    }

    fn square(min: (f64, f64), max: (f64, f64)) -> Shape {
        Rectangle::axis_aligned(p(min.0, min.1), p(max.0, max.1)).into()
    }

    #[test]
    fn test_point_point() {
        let a: Shape = p(1.0, 2.0).into();
        assert_eq!(intersection(&a, &p(1.0, 2.0).into()), points(&[(1.0, 2.0)]));
        assert!(intersection(&a, &p(1.0, 2.5).into()).is_empty());
    }

    #[test]
    fn test_point_against_area() {
        let area = square((0.0, 0.0), (4.0, 4.0));

        assert_eq!(intersection(&p(4.0, 1.0).into(), &area), points(&[(4.0, 1.0)]));
        assert_eq!(intersection(&area, &p(4.0, 1.0).into()), points(&[(4.0, 1.0)]));
        assert_eq!(intersection(&p(1.0, 1.0).into(), &area), Intersection::Interior);
        assert_eq!(intersection(&area, &p(1.0, 1.0).into()), Intersection::Interior);
        assert_eq!(intersection(&p(5.0, 1.0).into(), &area), Intersection::Empty);

        let disc: Shape = Circle::new(p(0.0, 0.0), 5.0).into();
        assert_eq!(intersection(&p(3.0, 4.0).into(), &disc), points(&[(3.0, 4.0)]));
        assert_eq!(intersection(&p(0.0, 0.0).into(), &disc), Intersection::Interior);
    }

    #[test]
    fn test_line_line() {
        let a: Shape = Line::new(1.0, 0.0).into();
        let b: Shape = Line::new(-1.0, 2.0).into();
        assert_eq!(intersection(&a, &b), points(&[(1.0, 1.0)]));

        let parallel: Shape = Line::new(1.0, 5.0).into();
        assert!(intersection(&a, &parallel).is_empty());

        let same: Shape = Line::through(&p(-3.0, -3.0), &p(10.0, 10.0)).unwrap().into();
        assert_eq!(intersection(&a, &same), Intersection::Found(vec![Piece::Line(Line::new(1.0, 0.0))]));
    }

    #[test]
    fn test_vertical_line() {
        let vertical: Shape = Line::vertical(3.0).into();
        let sloped: Shape = Line::new(2.0, 0.0).into();
        assert_eq!(intersection(&vertical, &sloped), points(&[(3.0, 6.0)]));
        assert!(intersection(&vertical, &Line::vertical(4.0).into()).is_empty());
    }

    #[test]
    fn test_segment_segment() {
        let a: Shape = LineSegment::new(p(0.0, 0.0), p(4.0, 4.0)).into();
        let b: Shape = LineSegment::new(p(0.0, 4.0), p(4.0, 0.0)).into();
        assert_eq!(intersection(&a, &b), points(&[(2.0, 2.0)]));

        let short: Shape = LineSegment::new(p(0.0, 4.0), p(1.0, 3.0)).into();
        assert!(intersection(&a, &short).is_empty());
    }

    #[test]
    fn test_collinear_segments() {
        let a: Shape = LineSegment::new(p(0.0, 0.0), p(4.0, 0.0)).into();
        let b: Shape = LineSegment::new(p(6.0, 0.0), p(2.0, 0.0)).into();
        assert_eq!(
            intersection(&a, &b),
            Intersection::Found(vec![Piece::Segment(LineSegment::new(p(2.0, 0.0), p(4.0, 0.0)))])
        );

        let touching: Shape = LineSegment::new(p(4.0, 0.0), p(9.0, 0.0)).into();
        assert_eq!(intersection(&a, &touching), points(&[(4.0, 0.0)]));

        let apart: Shape = LineSegment::new(p(5.0, 0.0), p(9.0, 0.0)).into();
        assert!(intersection(&a, &apart).is_empty());
    }

    #[test]
    fn test_circle_circle() {
        let a: Shape = Circle::new(p(0.0, 0.0), 5.0).into();
        let crossing: Shape = Circle::new(p(8.0, 0.0), 5.0).into();
        assert_eq!(intersection(&a, &crossing), points(&[(4.0, 3.0), (4.0, -3.0)]));

        let small: Shape = Circle::new(p(0.0, 0.0), 2.0).into();
        let tangent: Shape = Circle::new(p(5.0, 0.0), 3.0).into();
        assert_eq!(intersection(&small, &tangent), points(&[(2.0, 0.0)]));

        let inner_tangent: Shape = Circle::new(p(2.0, 0.0), 3.0).into();
        assert_eq!(intersection(&a, &inner_tangent), points(&[(5.0, 0.0)]));
        assert_eq!(intersection(&inner_tangent, &a), points(&[(5.0, 0.0)]));

        let nested: Shape = Circle::new(p(1.0, 0.0), 1.0).into();
        assert!(intersection(&a, &nested).is_empty());
        let far: Shape = Circle::new(p(20.0, 0.0), 1.0).into();
        assert!(intersection(&a, &far).is_empty());

        assert_eq!(
            intersection(&a, &Circle::new(p(0.0, 0.0), 5.0).into()),
            Intersection::Found(vec![Piece::Circle(Circle::new(p(0.0, 0.0), 5.0))])
        );
    }

    #[test]
    fn test_line_and_segment_against_circle() {
        let circle: Shape = Circle::new(p(0.0, 0.0), 5.0).into();

        assert_eq!(intersection(&Line::new(0.0, 0.0).into(), &circle), points(&[(-5.0, 0.0), (5.0, 0.0)]));
        assert_eq!(intersection(&Line::new(0.0, 5.0).into(), &circle), points(&[(0.0, 5.0)]));
        assert!(intersection(&Line::new(0.0, 6.0).into(), &circle).is_empty());

        let segment: Shape = LineSegment::new(p(0.0, 0.0), p(10.0, 0.0)).into();
        assert_eq!(intersection(&segment, &circle), points(&[(5.0, 0.0)]));

        let inside: Shape = LineSegment::new(p(-1.0, 0.0), p(1.0, 0.0)).into();
        assert!(intersection(&circle, &inside).is_empty());
    }

    #[test]
    fn test_rectangles_sharing_an_edge() {
        let a = square((0.0, 0.0), (2.0, 2.0));
        let b = square((2.0, 0.0), (4.0, 2.0));
        let expected = Intersection::Found(vec![Piece::Segment(LineSegment::new(p(2.0, 0.0), p(2.0, 2.0)))]);

        assert_eq!(intersection(&a, &b), expected);
        assert_eq!(intersection(&b, &a), expected);
    }

    #[test]
    fn test_overlapping_rectangles() {
        let a = square((0.0, 0.0), (2.0, 2.0));
        let b = square((1.0, 1.0), (3.0, 3.0));
        assert_eq!(intersection(&a, &b), points(&[(2.0, 1.0), (1.0, 2.0)]));

        let polygon: Shape = Polygon::new(vec![p(1.0, -1.0), p(3.0, 1.0), p(1.0, 3.0)]).into();
        let found = intersection(&a, &polygon);
        assert_eq!(found.pieces().len(), 4);
        assert!(found.pieces().iter().all(Piece::is_point));
    }

    #[test]
    fn test_square_with_inscribed_circle() {
        let a = square((-1.0, -1.0), (1.0, 1.0));
        let circle: Shape = Circle::new(p(0.0, 0.0), 1.0).into();
        assert_eq!(
            intersection(&a, &circle),
            points(&[(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)])
        );
    }

    #[test]
    fn test_arcs_on_the_same_circle() {
        let circle = Circle::new(p(0.0, 0.0), 1.0);
        let upper: Shape = Arc::new(circle, 0.0, PI).into();
        let left: Shape = Arc::new(circle, PI / 2.0, PI).into();
        assert_eq!(
            intersection(&upper, &left),
            Intersection::Found(vec![Piece::Arc(Arc::new(circle, PI / 2.0, PI / 2.0))])
        );

        let first_quarter: Shape = Arc::new(circle, 0.0, PI / 2.0).into();
        let second_quarter: Shape = Arc::new(circle, PI / 2.0, PI / 2.0).into();
        assert_eq!(intersection(&first_quarter, &second_quarter), points(&[(0.0, 1.0)]));

        assert_eq!(
            intersection(&upper, &Shape::Circle(circle)),
            Intersection::Found(vec![Piece::Arc(Arc::new(circle, 0.0, PI))])
        );
    }

    #[test]
    fn test_arc_against_lines() {
        let upper: Shape = Arc::new(Circle::new(p(0.0, 0.0), 1.0), 0.0, PI).into();
        assert_eq!(intersection(&upper, &Line::new(0.0, 0.0).into()), points(&[(1.0, 0.0), (-1.0, 0.0)]));
        assert!(intersection(&upper, &Line::new(0.0, -0.5).into()).is_empty());
        assert_eq!(intersection(&upper, &Line::vertical(0.0).into()), points(&[(0.0, 1.0)]));
    }

    #[test]
    fn test_intersection_is_symmetric() {
        let shapes: Vec<Shape> = vec![
            p(1.0, 0.0).into(),
            Line::new(0.0, 0.0).into(),
            LineSegment::new(p(-2.0, -2.0), p(2.0, 2.0)).into(),
            Circle::new(p(0.0, 0.0), 1.0).into(),
            square((-0.5, -0.5), (1.5, 0.5)),
            Polygon::new(vec![p(0.0, -2.0), p(2.0, 1.0), p(-2.0, 1.0)]).into(),
            Arc::new(Circle::new(p(0.5, 0.0), 1.0), 0.0, PI).into(),
            Line::vertical(0.25).into(),
        ];

        for a in &shapes {
            for b in &shapes {
                assert_eq!(
                    intersection(a, b),
                    intersection(b, a),
                    "intersection not symmetric for {:?} and {:?}",
                    a.kind(),
                    b.kind()
                );
            }
        }
    }

    #[test]
    fn test_result_accessors() {
        let found = points(&[(1.0, 1.0)]);
        assert_eq!(found.single(), Some(&Piece::Point(p(1.0, 1.0))));
        assert_eq!(found.points(), vec![p(1.0, 1.0)]);
        assert!(Intersection::Interior.pieces().is_empty());
        assert!(same_pieces(
            &[Piece::Point(p(0.0, 0.0)), Piece::Point(p(1.0, 0.0))],
            &[Piece::Point(p(1.0, 0.0)), Piece::Point(p(0.0, 0.0))]
        ));
    }
}
