//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, UnitVector, Vector};

/// Traits of convex shapes representable by a support mapping function.
///
/// A support function associates a direction to the point of the shape which maximizes
/// its dot product with that direction. This is the only view of a convex shape GJK-like
/// narrow-phase algorithms need.
pub trait SupportMap {
    /// Evaluates the support function of this shape in its local-space.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &UnitVector<Real>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }

    /// Evaluates the support function of this shape transformed by `transform`.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }
}
