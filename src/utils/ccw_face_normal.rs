use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// Computes the direction pointing toward the right-hand-side of an oriented segment.
///
/// For an edge of a counter-clockwise polygon, this is the outward normal of that edge.
///
/// Returns `None` if the segment is degenerate.
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 2]) -> Option<UnitVector<Real>> {
    let ab = *pts[1] - *pts[0];
    let res = Vector::new(ab[1], -ab[0]);

    UnitVector::try_new(res, DEFAULT_EPSILON)
}
