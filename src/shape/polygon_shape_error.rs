use crate::math::Real;

/// The broad category of a [`PolygonShapeError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PolygonShapeErrorKind {
    /// A construction parameter violated its precondition.
    InvalidArgument,
    /// A vertex was read with an index outside of `[0, vertex_count)`.
    IndexOutOfRange,
}

/// Errors returned by the operations of a [`ConvexPolygonShape`](super::ConvexPolygonShape).
///
/// Every failing operation leaves the polygon untouched.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum PolygonShapeError {
    /// More vertices were given than a polygon can hold.
    #[error("a polygon holds at most {max} vertices, {count} were given")]
    TooManyVertices {
        /// The number of vertices given.
        count: usize,
        /// The maximum number of vertices of a polygon.
        max: usize,
    },
    /// Interleaved vertex coordinates were given with an odd length.
    #[error("vertex coordinates come in (x, y) pairs, got an odd count of {0}")]
    OddCoordinateCount(usize),
    /// A box half-extent is zero, negative, or NaN.
    #[error("box half-extents must be strictly positive, got ({half_width}, {half_height})")]
    NonPositiveHalfExtents {
        /// The half-width given.
        half_width: Real,
        /// The half-height given.
        half_height: Real,
    },
    /// The skin radius is negative or not finite.
    #[error("the polygon radius must be finite and non-negative, got {0}")]
    InvalidRadius(Real),
    /// A vertex index is not smaller than the vertex count.
    #[error("vertex index {index} is out of range for a polygon with {count} vertices")]
    IndexOutOfRange {
        /// The index requested.
        index: usize,
        /// The number of vertices of the polygon.
        count: usize,
    },
}

impl PolygonShapeError {
    /// The category of this error.
    pub fn kind(&self) -> PolygonShapeErrorKind {
        match self {
            Self::TooManyVertices { .. }
            | Self::OddCoordinateCount(_)
            | Self::NonPositiveHalfExtents { .. }
            | Self::InvalidRadius(_) => PolygonShapeErrorKind::InvalidArgument,
            Self::IndexOutOfRange { .. } => PolygonShapeErrorKind::IndexOutOfRange,
        }
    }
}
