use convex2d::math::{Point, Real};
use convex2d::shape::{
    ConvexPolygonShape, PolygonShapeError, PolygonShapeErrorKind, MAX_POLYGON_VERTICES,
};

fn random_points(rng: &mut oorandom::Rand32, n: usize) -> Vec<Point<Real>> {
    (0..n)
        .map(|_| {
            Point::new(
                rng.rand_float() as Real * 20.0 - 10.0,
                rng.rand_float() as Real * 20.0 - 10.0,
            )
        })
        .collect()
}

#[test]
fn set_vertices_roundtrip() {
    let mut rng = oorandom::Rand32::new(42);
    let mut poly = ConvexPolygonShape::new();

    for _ in 0..100 {
        let n = rng.rand_range(0..MAX_POLYGON_VERTICES as u32 + 1) as usize;
        let pts = random_points(&mut rng, n);

        poly.set_vertices(&pts).unwrap();
        assert_eq!(poly.vertex_count(), n);

        for (i, pt) in pts.iter().enumerate() {
            assert_eq!(poly.vertex(i), Ok(*pt));
        }
        assert_eq!(
            poly.vertex(n).map_err(|e| e.kind()),
            Err(PolygonShapeErrorKind::IndexOutOfRange)
        );
    }
}

#[test]
fn rejected_vertices_leave_polygon_untouched() {
    let mut rng = oorandom::Rand32::new(7);
    let initial = random_points(&mut rng, 5);
    let mut poly = ConvexPolygonShape::from_vertices(&initial).unwrap();

    for extra in 1..4 {
        let pts = random_points(&mut rng, MAX_POLYGON_VERTICES + extra);
        let err = poly.set_vertices(&pts).unwrap_err();

        assert_eq!(err.kind(), PolygonShapeErrorKind::InvalidArgument);
        assert!(matches!(err, PolygonShapeError::TooManyVertices { count, .. } if count == pts.len()));
        assert_eq!(poly.vertices(), &initial[..]);
    }

    assert!(ConvexPolygonShape::from_vertices(&random_points(&mut rng, 9)).is_err());
}

#[test]
fn box_then_triangle() {
    let mut poly = ConvexPolygonShape::new();
    poly.set_as_box(1.0, 1.0).unwrap();
    assert_eq!(poly.vertex_count(), 4);

    let triangle = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
    ];
    poly.set_vertices(&triangle).unwrap();

    assert_eq!(poly.vertex_count(), 3);
    assert_eq!(poly.vertices(), &triangle[..]);
    assert!(poly.is_convex());
}

#[test]
fn unchecked_winding_is_accepted() {
    let clockwise = [
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 0.0),
    ];
    let poly = ConvexPolygonShape::from_vertices(&clockwise).unwrap();

    assert_eq!(poly.vertex_count(), 3);
    assert!(!poly.is_convex());
}

#[test]
fn error_messages() {
    let err = PolygonShapeError::IndexOutOfRange { index: 3, count: 2 };
    assert_eq!(
        err.to_string(),
        "vertex index 3 is out of range for a polygon with 2 vertices"
    );

    let err = ConvexPolygonShape::cuboid(0.0, 1.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "box half-extents must be strictly positive, got (0, 1)"
    );
}

#[test]
fn set_vertices_from_coords_roundtrip() {
    let mut rng = oorandom::Rand32::new(99);
    let mut poly = ConvexPolygonShape::new();

    for n in 0..=MAX_POLYGON_VERTICES {
        let pts = random_points(&mut rng, n);
        let coords: Vec<Real> = pts.iter().flat_map(|pt| [pt.x, pt.y]).collect();

        poly.set_vertices_from_coords(&coords).unwrap();
        assert_eq!(poly.vertices(), &pts[..]);
        assert_eq!(ConvexPolygonShape::from_coords(&coords).unwrap(), poly);
    }
}

#[test]
fn odd_coordinate_count_is_rejected() {
    let triangle = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0];
    let mut poly = ConvexPolygonShape::from_coords(&triangle).unwrap();
    let before = poly.clone();

    let err = poly
        .set_vertices_from_coords(&[0.0, 0.0, 2.0, 0.0, 2.0])
        .unwrap_err();
    assert_eq!(err, PolygonShapeError::OddCoordinateCount(5));
    assert_eq!(err.kind(), PolygonShapeErrorKind::InvalidArgument);
    assert_eq!(poly, before);

    assert!(ConvexPolygonShape::from_coords(&[1.0]).is_err());
}

#[test]
fn too_many_coordinates_are_rejected() {
    let mut rng = oorandom::Rand32::new(3);
    let initial = random_points(&mut rng, 4);
    let mut poly = ConvexPolygonShape::from_vertices(&initial).unwrap();
    let coords = vec![0.5; 2 * (MAX_POLYGON_VERTICES + 1)];

    let err = poly.set_vertices_from_coords(&coords).unwrap_err();
    assert_eq!(
        err,
        PolygonShapeError::TooManyVertices {
            count: MAX_POLYGON_VERTICES + 1,
            max: MAX_POLYGON_VERTICES,
        }
    );
    assert_eq!(err.kind(), PolygonShapeErrorKind::InvalidArgument);
    assert_eq!(poly.vertices(), &initial[..]);
}
