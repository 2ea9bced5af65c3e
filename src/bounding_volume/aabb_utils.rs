use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real};

/// Computes the AABB of a set of points transformed by `m`.
///
/// Returns `None` if `pts` yields no point.
pub fn point_cloud_aabb<'a, I>(m: &Isometry<Real>, pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    local_point_cloud_aabb(pts.into_iter().map(|pt| m * pt))
}

/// Computes the AABB of a set of points.
///
/// Returns `None` if `pts` yields no point.
pub fn local_point_cloud_aabb<I>(pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = Point<Real>>,
{
    let mut it = pts.into_iter();

    let p0 = it.next()?;
    let mut min = p0;
    let mut max = p0;

    for pt in it {
        min = min.inf(&pt);
        max = max.sup(&pt);
    }

    Some(Aabb::new(min, max))
}
