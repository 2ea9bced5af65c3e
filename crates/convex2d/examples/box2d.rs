use convex2d::math::{Point, Real};
use convex2d::shape::ConvexPolygonShape;
use core::f64::consts::FRAC_PI_2;

fn main() {
    let aligned = ConvexPolygonShape::cuboid(2.0, 1.0).expect("Invalid half-extents.");
    assert!(aligned.vertex(2) == Ok(Point::new(2.0, 1.0)));

    let center = Point::new(5.0, 0.0);
    let oriented = ConvexPolygonShape::oriented_box(2.0, 1.0, &center, FRAC_PI_2 as Real)
        .expect("Invalid half-extents.");
    let mprops = oriented.mass_properties(1.0);

    assert!((mprops.mass() - 8.0).abs() < 1.0e-5);
    assert!((mprops.local_com - center).norm() < 1.0e-5);
}
