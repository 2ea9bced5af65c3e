//! Mass properties (mass, inertia, center-of-mass) of shapes.

pub use self::mass_properties::MassProperties;

mod mass_properties;
mod mass_properties_polygon_shape;

/// Free functions for some special-cases of mass-properties computation.
pub mod details {
    pub use super::mass_properties_polygon_shape::convex_polygon_area_and_center_of_mass;
}
