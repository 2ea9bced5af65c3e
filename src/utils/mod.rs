//! Various unsorted geometrical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::center::center;
pub use self::convexity::is_convex_ccw_polygon;
pub(crate) use self::inv::inv;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::point_in_poly2d::point_in_convex_poly2d;

mod ccw_face_normal;
mod center;
mod convexity;
mod inv;
mod point_cloud_support_point;
mod point_in_poly2d;
