use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally. Returns the origin if `pts` is empty.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use convex2d::utils::center;
/// use convex2d::math::Point;
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(2.0, 2.0),
///     Point::new(0.0, 2.0),
/// ];
///
/// let c = center(&points);
/// assert!((c.x - 1.0).abs() < 1e-6);
/// assert!((c.y - 1.0).abs() < 1e-6);
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    if pts.is_empty() {
        return Point::origin();
    }

    let denom: Real = na::convert::<f64, Real>(1.0 / (pts.len() as f64));

    pts.iter()
        .fold(Point::origin(), |acc, pt| acc + pt.coords * denom)
}
