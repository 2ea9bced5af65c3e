//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Its edges are always
/// parallel to the coordinate axes, which makes overlap tests a handful of
/// comparisons. This is what a broad-phase consumes from a polygon shape.
///
/// - **mins**: the point with the smallest coordinates on each axis.
/// - **maxs**: the point with the largest coordinates on each axis.
/// - **Invariant**: `mins.x ≤ maxs.x` and `mins.y ≤ maxs.y`.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use convex2d::bounding_volume::Aabb;
/// use convex2d::math::{Point, Vector};
///
/// let aabb = Aabb::from_half_extents(Point::new(1.0, 2.0), Vector::new(0.5, 1.0));
///
/// assert!(aabb.contains_local_point(&Point::new(1.0, 2.5)));
/// assert_eq!(aabb.mins, Point::new(0.5, 1.0));
/// assert_eq!(aabb.extents(), Vector::new(1.0, 2.0));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    ///
    /// Each component of `mins` should be smaller than the matching component of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        let half: Real = na::convert::<f64, Real>(0.5);
        (self.maxs - self.mins) * half
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The area of this AABB.
    #[inline]
    pub fn area(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y
    }

    /// Enlarges this AABB on every side by `amount`.
    ///
    /// This is how a polygon's skin radius is accounted for.
    ///
    /// # Panics
    ///
    /// Panics if `amount` is negative or NaN.
    #[inline]
    #[must_use]
    pub fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be non-negative.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }

    /// The smallest AABB containing both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// Does this AABB intersect `other`?
    ///
    /// AABBs touching along an edge are considered intersecting.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// Does this AABB contain `point`? Points on the boundary are contained.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }
}
