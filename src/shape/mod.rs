//! Shapes supported by convex2d.

pub use self::polygon_shape::{ConvexPolygonShape, MAX_POLYGON_VERTICES, POLYGON_RADIUS};
pub use self::polygon_shape_error::{PolygonShapeError, PolygonShapeErrorKind};
#[doc(inline)]
pub use self::support_map::SupportMap;

mod polygon_shape;
mod polygon_shape_error;
#[doc(hidden)]
pub mod support_map;
