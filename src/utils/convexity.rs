use crate::math::{Point, Real};
use core::f64::consts::TAU;

/// Checks that `poly` describes a strictly convex polygon wound counter-clockwise.
///
/// The polygon is implicitly closed. Returns `false` for less than three vertices, for
/// clockwise or self-intersecting inputs, and if two consecutive edges are collinear or
/// degenerate (with a relative tolerance on the edge lengths).
pub fn is_convex_ccw_polygon(poly: &[Point<Real>]) -> bool {
    let n = poly.len();

    if n < 3 {
        return false;
    }

    let mut total_turn = 0.0;

    for i1 in 0..n {
        let i2 = (i1 + 1) % n;
        let i3 = (i2 + 1) % n;
        let e1 = poly[i2] - poly[i1];
        let e2 = poly[i3] - poly[i2];
        let tol = crate::math::DEFAULT_EPSILON * e1.norm() * e2.norm();

        if e1.perp(&e2) <= tol {
            return false;
        }

        total_turn += e1.angle(&e2);
    }

    // Every turn is a left turn; a star-shaped or looping polygon turns more than once.
    total_turn <= na::convert::<f64, Real>(TAU) + 1.0e-3
}
