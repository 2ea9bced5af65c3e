use convex2d::math::Point;
use convex2d::shape::ConvexPolygonShape;

fn main() {
    let points = [
        Point::new(-1.0, -0.5),
        Point::new(0.5, -1.0),
        Point::new(1.0, 0.5),
        Point::new(-0.5, 1.0),
    ];

    let poly = ConvexPolygonShape::from_vertices(&points).expect("Too many vertices.");
    assert!(poly.vertex_count() == 4);
    assert!(poly.is_convex());
    assert!(poly.contains_local_point(&Point::origin()));
}
