use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};
use crate::shape::ConvexPolygonShape;

impl ConvexPolygonShape {
    /// Computes the world-space [`Aabb`] of this polygon, transformed by `pos`.
    ///
    /// The skin radius is not included, see [`Aabb::loosened`]. Returns `None` if this
    /// polygon has no vertex.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Option<Aabb> {
        super::details::point_cloud_aabb(pos, self.vertices())
    }

    /// Computes the local-space [`Aabb`] of this polygon.
    ///
    /// Returns `None` if this polygon has no vertex.
    #[inline]
    pub fn local_aabb(&self) -> Option<Aabb> {
        super::details::local_point_cloud_aabb(self.vertices().iter().copied())
    }
}
