use crate::math::{Isometry, Point, Real, UnitVector, Vector};
use crate::shape::{PolygonShapeError, SupportMap};
use crate::utils;
use arrayvec::ArrayVec;

/// The maximum number of vertices of a [`ConvexPolygonShape`].
pub const MAX_POLYGON_VERTICES: usize = 8;

/// The default skin radius of a [`ConvexPolygonShape`].
///
/// This is twice the usual linear slop (`0.005`) of a physics solver.
pub const POLYGON_RADIUS: Real = 0.01;

/// A 2D convex polygon collision shape with at most [`MAX_POLYGON_VERTICES`] vertices.
///
/// The vertices are stored inline, in the order they were given. They are expected to
/// describe a convex polygon wound counter-clockwise, i.e., the outward normal of the edge
/// `a → b` is `(b - a).y, -(b - a).x`. This is **not** checked when the polygon is built:
/// collision queries against a non-convex or badly wound polygon may silently return wrong
/// results. Use [`ConvexPolygonShape::is_convex`] to validate untrusted input.
///
/// Every construction method replaces the whole vertex list. A construction that fails
/// leaves the polygon unchanged.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use convex2d::math::Point;
/// use convex2d::shape::ConvexPolygonShape;
///
/// let mut poly = ConvexPolygonShape::new();
/// assert_eq!(poly.vertex_count(), 0);
///
/// poly.set_as_box(2.0, 1.0).unwrap();
/// assert_eq!(poly.vertex_count(), 4);
/// assert_eq!(poly.vertex(2), Ok(Point::new(2.0, 1.0)));
///
/// poly.set_vertices(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)])
///     .unwrap();
/// assert_eq!(poly.vertex_count(), 3);
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygonShape {
    points: ArrayVec<Point<Real>, MAX_POLYGON_VERTICES>,
    #[cfg_attr(
        feature = "serde-serialize",
        serde(deserialize_with = "deserialize_radius")
    )]
    radius: Real,
}

impl Default for ConvexPolygonShape {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvexPolygonShape {
    /// Creates an empty polygon, with no vertices and the default skin radius.
    pub fn new() -> Self {
        Self {
            points: ArrayVec::new(),
            radius: POLYGON_RADIUS,
        }
    }

    /// Creates a polygon from the given vertices.
    ///
    /// See [`ConvexPolygonShape::set_vertices`].
    pub fn from_vertices(vertices: &[Point<Real>]) -> Result<Self, PolygonShapeError> {
        let mut res = Self::new();
        res.set_vertices(vertices)?;
        Ok(res)
    }

    /// Creates a polygon from interleaved vertex coordinates `[x0, y0, x1, y1, ...]`.
    ///
    /// See [`ConvexPolygonShape::set_vertices_from_coords`].
    pub fn from_coords(coords: &[Real]) -> Result<Self, PolygonShapeError> {
        let mut res = Self::new();
        res.set_vertices_from_coords(coords)?;
        Ok(res)
    }

    /// Creates an axis-aligned box centered at the origin.
    ///
    /// See [`ConvexPolygonShape::set_as_box`].
    pub fn cuboid(half_width: Real, half_height: Real) -> Result<Self, PolygonShapeError> {
        let mut res = Self::new();
        res.set_as_box(half_width, half_height)?;
        Ok(res)
    }

    /// Creates a box rotated by `angle` and centered at `center`.
    ///
    /// See [`ConvexPolygonShape::set_as_oriented_box`].
    pub fn oriented_box(
        half_width: Real,
        half_height: Real,
        center: &Point<Real>,
        angle: Real,
    ) -> Result<Self, PolygonShapeError> {
        let mut res = Self::new();
        res.set_as_oriented_box(half_width, half_height, center, angle)?;
        Ok(res)
    }

    /// Replaces the vertices of this polygon by a copy of `vertices`, in the same order.
    ///
    /// The vertices are assumed to describe a counter-clockwise convex polygon. Any number
    /// of vertices up to [`MAX_POLYGON_VERTICES`] is accepted, including zero.
    ///
    /// Returns [`PolygonShapeError::TooManyVertices`] if more vertices are given, in which
    /// case the previous vertices are kept.
    pub fn set_vertices(&mut self, vertices: &[Point<Real>]) -> Result<(), PolygonShapeError> {
        let points: ArrayVec<_, MAX_POLYGON_VERTICES> =
            ArrayVec::try_from(vertices).map_err(|_| too_many_vertices(vertices.len()))?;
        self.replace_points(points);
        Ok(())
    }

    /// Replaces the vertices of this polygon by the points read from interleaved coordinates
    /// `[x0, y0, x1, y1, ...]`.
    ///
    /// This is [`ConvexPolygonShape::set_vertices`] for callers holding flat coordinate
    /// buffers. Returns [`PolygonShapeError::OddCoordinateCount`] if `coords` has an odd
    /// length, and [`PolygonShapeError::TooManyVertices`] if it describes more than
    /// [`MAX_POLYGON_VERTICES`] points. In both cases the previous vertices are kept.
    pub fn set_vertices_from_coords(&mut self, coords: &[Real]) -> Result<(), PolygonShapeError> {
        if coords.len() % 2 != 0 {
            log::debug!("Rejected an odd number ({}) of vertex coordinates.", coords.len());
            return Err(PolygonShapeError::OddCoordinateCount(coords.len()));
        }

        if coords.len() > 2 * MAX_POLYGON_VERTICES {
            return Err(too_many_vertices(coords.len() / 2));
        }

        let points = coords
            .chunks_exact(2)
            .map(|xy| Point::new(xy[0], xy[1]))
            .collect();
        self.replace_points(points);
        Ok(())
    }

    fn replace_points(&mut self, points: ArrayVec<Point<Real>, MAX_POLYGON_VERTICES>) {
        #[cfg(debug_assertions)]
        if points.len() >= 3 && !utils::is_convex_ccw_polygon(&points) {
            log::warn!(
                "The {} polygon vertices do not describe a counter-clockwise convex polygon.",
                points.len()
            );
        }

        self.points = points;
    }

    /// Replaces the vertices of this polygon by the corners of an axis-aligned box
    /// centered at the origin.
    ///
    /// The corners are, in order: `(-hw, -hh)`, `(hw, -hh)`, `(hw, hh)`, `(-hw, hh)`.
    ///
    /// Returns [`PolygonShapeError::NonPositiveHalfExtents`] unless both half-extents are
    /// strictly positive, in which case the previous vertices are kept.
    pub fn set_as_box(
        &mut self,
        half_width: Real,
        half_height: Real,
    ) -> Result<(), PolygonShapeError> {
        check_half_extents(half_width, half_height)?;
        self.points = box_corners(half_width, half_height).collect();
        Ok(())
    }

    /// Replaces the vertices of this polygon by the corners of an oriented box.
    ///
    /// The corners of the axis-aligned box built by [`ConvexPolygonShape::set_as_box`] are
    /// first rotated by `angle` (in radians) around the origin, then translated by `center`.
    ///
    /// Returns [`PolygonShapeError::NonPositiveHalfExtents`] unless both half-extents are
    /// strictly positive, in which case the previous vertices are kept.
    pub fn set_as_oriented_box(
        &mut self,
        half_width: Real,
        half_height: Real,
        center: &Point<Real>,
        angle: Real,
    ) -> Result<(), PolygonShapeError> {
        check_half_extents(half_width, half_height)?;
        let pos = Isometry::new(center.coords, angle);
        self.points = box_corners(half_width, half_height)
            .map(|pt| pos * pt)
            .collect();
        Ok(())
    }

    /// The number of vertices of this polygon.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Does this polygon have no vertex at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The `index`-th vertex of this polygon.
    ///
    /// Returns [`PolygonShapeError::IndexOutOfRange`] if `index >= self.vertex_count()`.
    #[inline]
    pub fn vertex(&self, index: usize) -> Result<Point<Real>, PolygonShapeError> {
        self.points
            .get(index)
            .copied()
            .ok_or(PolygonShapeError::IndexOutOfRange {
                index,
                count: self.points.len(),
            })
    }

    /// The skin radius of this polygon.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Sets the skin radius of this polygon.
    ///
    /// Returns [`PolygonShapeError::InvalidRadius`] if `radius` is negative or not finite.
    pub fn set_radius(&mut self, radius: Real) -> Result<(), PolygonShapeError> {
        self.radius = check_radius(radius)?;
        Ok(())
    }

    /// The outward normal of the edge joining the vertex `i` to the vertex `i + 1`.
    ///
    /// The last edge joins the last vertex to the first one. Returns `None` if `i` is out of
    /// range or if the edge is degenerate.
    pub fn edge_normal(&self, i: usize) -> Option<UnitVector<Real>> {
        let a = self.points.get(i)?;
        let b = &self.points[(i + 1) % self.points.len()];
        utils::ccw_face_normal([a, b])
    }

    /// Checks that the vertices describe a strictly convex, counter-clockwise polygon.
    ///
    /// Polygons with less than three vertices are not convex.
    pub fn is_convex(&self) -> bool {
        utils::is_convex_ccw_polygon(&self.points)
    }

    /// Applies the rigid transformation `pos` to every vertex of this polygon.
    pub fn transform_by(&mut self, pos: &Isometry<Real>) {
        self.points.iter_mut().for_each(|pt| *pt = pos * *pt);
    }

    /// Does this polygon contain `pt`, expressed in the local-space of the polygon?
    ///
    /// Points on the boundary are contained. The skin radius is ignored.
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        utils::point_in_convex_poly2d(pt, &self.points)
    }

    /// Does this polygon, transformed by `pos`, contain `pt`?
    pub fn contains_point(&self, pos: &Isometry<Real>, pt: &Point<Real>) -> bool {
        self.contains_local_point(&pos.inverse_transform_point(pt))
    }
}

impl SupportMap for ConvexPolygonShape {
    /// The vertex furthest along `dir`, or the origin if this polygon is empty.
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.points).unwrap_or_else(Point::origin)
    }
}

fn too_many_vertices(count: usize) -> PolygonShapeError {
    log::debug!(
        "Rejected {} polygon vertices (max: {}).",
        count,
        MAX_POLYGON_VERTICES
    );
    PolygonShapeError::TooManyVertices {
        count,
        max: MAX_POLYGON_VERTICES,
    }
}

fn check_radius(radius: Real) -> Result<Real, PolygonShapeError> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(radius)
    } else {
        log::debug!("Rejected polygon radius {radius}.");
        Err(PolygonShapeError::InvalidRadius(radius))
    }
}

#[cfg(feature = "serde-serialize")]
fn deserialize_radius<'de, D>(deserializer: D) -> Result<Real, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let radius = <Real as serde::Deserialize>::deserialize(deserializer)?;
    check_radius(radius).map_err(serde::de::Error::custom)
}

fn check_half_extents(half_width: Real, half_height: Real) -> Result<(), PolygonShapeError> {
    if half_width > 0.0 && half_height > 0.0 {
        Ok(())
    } else {
        log::debug!("Rejected box half-extents ({half_width}, {half_height}).");
        Err(PolygonShapeError::NonPositiveHalfExtents {
            half_width,
            half_height,
        })
    }
}

fn box_corners(half_width: Real, half_height: Real) -> impl Iterator<Item = Point<Real>> {
    [
        Point::new(-half_width, -half_height),
        Point::new(half_width, -half_height),
        Point::new(half_width, half_height),
        Point::new(-half_width, half_height),
    ]
    .into_iter()
}
