use crate::math::{Point, Real};
use num::Zero;

/// Tests if the given point is inside a convex polygon with arbitrary orientation.
///
/// The polygon is assumed to be closed, i.e., first and last point of the polygon are implicitly
/// assumed to be connected by an edge. Points lying exactly on the boundary are considered inside.
pub fn point_in_convex_poly2d(pt: &Point<Real>, poly: &[Point<Real>]) -> bool {
    if poly.is_empty() {
        return false;
    }

    let mut sign: Real = 0.0;

    for i1 in 0..poly.len() {
        let i2 = (i1 + 1) % poly.len();
        let seg_dir = poly[i2] - poly[i1];
        let dpt = pt - poly[i1];
        let perp = dpt.perp(&seg_dir);

        if sign.is_zero() {
            sign = perp;
        } else if sign * perp < 0.0 {
            return false;
        }
    }

    sign != 0.0 || on_degenerate_poly(pt, poly)
}

// All the cross products vanished: the polygon is flat and `pt` is on its supporting line.
fn on_degenerate_poly(pt: &Point<Real>, poly: &[Point<Real>]) -> bool {
    let (mins, maxs) = poly
        .iter()
        .fold((poly[0], poly[0]), |(mins, maxs), p| (mins.inf(p), maxs.sup(p)));
    pt.x >= mins.x && pt.x <= maxs.x && pt.y >= mins.y && pt.y <= maxs.y
}
