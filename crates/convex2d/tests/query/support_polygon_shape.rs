use approx::assert_relative_eq;
use convex2d::math::{Isometry, Point, Real, Vector};
use convex2d::shape::{ConvexPolygonShape, SupportMap};
use core::f64::consts::FRAC_PI_2;

#[test]
fn support_point_of_transformed_triangle() {
    let poly = ConvexPolygonShape::from_vertices(&[
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(0.0, 1.0),
    ])
    .unwrap();
    let pos = Isometry::new(Vector::new(1.0, 1.0), FRAC_PI_2 as Real);

    assert_eq!(
        poly.local_support_point(&Vector::new(1.0, 0.1)),
        Point::new(2.0, 0.0)
    );
    // (2, 0) is rotated to (0, 2), then translated.
    assert_relative_eq!(
        poly.support_point(&pos, &Vector::new(0.1, 1.0)),
        Point::new(1.0, 3.0),
        epsilon = 1.0e-5
    );
}

#[test]
fn transform_by_matches_oriented_box() {
    let center = Point::new(-2.0, 4.0);
    let angle = 0.7;
    let mut poly = ConvexPolygonShape::cuboid(1.0, 0.5).unwrap();
    poly.transform_by(&Isometry::new(center.coords, angle));

    let expected = ConvexPolygonShape::oriented_box(1.0, 0.5, &center, angle).unwrap();
    for (a, b) in poly.vertices().iter().zip(expected.vertices()) {
        assert_relative_eq!(*a, *b, epsilon = 1.0e-5);
    }

    let aabb = poly.local_aabb().unwrap();
    assert!(aabb.contains_local_point(&center));
    assert!(aabb.loosened(poly.radius()).contains_local_point(&aabb.maxs));
}
