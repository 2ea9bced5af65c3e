use approx::assert_relative_eq;
use convex2d::math::{Point, Real};
use convex2d::shape::{ConvexPolygonShape, PolygonShapeErrorKind};
use core::f64::consts::{FRAC_PI_2, PI};

#[test]
fn box_corners_for_random_half_extents() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..100 {
        let hw = rng.rand_float() as Real * 10.0 + 0.01;
        let hh = rng.rand_float() as Real * 10.0 + 0.01;
        let poly = ConvexPolygonShape::cuboid(hw, hh).unwrap();

        assert_eq!(
            poly.vertices(),
            &[
                Point::new(-hw, -hh),
                Point::new(hw, -hh),
                Point::new(hw, hh),
                Point::new(-hw, hh),
            ]
        );
        assert_relative_eq!(poly.area(), 4.0 * hw * hh, max_relative = 1.0e-4);
        assert!(poly.is_convex());
    }
}

#[test]
fn oriented_box_at_identity_matches_box() {
    let mut poly = ConvexPolygonShape::new();
    poly.set_as_oriented_box(0.5, 3.0, &Point::origin(), 0.0).unwrap();

    assert_eq!(poly, ConvexPolygonShape::cuboid(0.5, 3.0).unwrap());
}

#[test]
fn oriented_box_quarter_turn() {
    let mut rng = oorandom::Rand32::new(5);

    for _ in 0..50 {
        let hw = rng.rand_float() as Real * 4.0 + 0.1;
        let hh = rng.rand_float() as Real * 4.0 + 0.1;
        let center = Point::new(
            rng.rand_float() as Real * 10.0 - 5.0,
            rng.rand_float() as Real * 10.0 - 5.0,
        );
        let poly = ConvexPolygonShape::oriented_box(hw, hh, &center, FRAC_PI_2 as Real).unwrap();

        assert_relative_eq!(
            poly.vertex(2).unwrap(),
            Point::new(center.x - hh, center.y + hw),
            epsilon = 1.0e-4
        );
        assert_relative_eq!(poly.centroid(), center, epsilon = 1.0e-4);
    }
}

#[test]
fn oriented_box_angle_wraps() {
    let center = Point::new(1.0, -2.0);
    let a = ConvexPolygonShape::oriented_box(1.0, 2.0, &center, 0.3).unwrap();
    let b = ConvexPolygonShape::oriented_box(1.0, 2.0, &center, 0.3 + 2.0 * PI as Real).unwrap();

    for (pa, pb) in a.vertices().iter().zip(b.vertices()) {
        assert_relative_eq!(*pa, *pb, epsilon = 1.0e-4);
    }
}

#[test]
fn failed_box_keeps_previous_vertices() {
    let mut poly = ConvexPolygonShape::cuboid(1.0, 2.0).unwrap();
    let before = poly.clone();

    let err = poly
        .set_as_oriented_box(-1.0, 2.0, &Point::new(3.0, 3.0), 1.0)
        .unwrap_err();
    assert_eq!(err.kind(), PolygonShapeErrorKind::InvalidArgument);
    assert_eq!(poly, before);
}
