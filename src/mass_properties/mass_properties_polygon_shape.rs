use crate::mass_properties::MassProperties;
use crate::math::{Point, Real};
use crate::shape::ConvexPolygonShape;
use crate::utils;
use na::ComplexField;

impl MassProperties {
    /// Computes the mass properties of a convex polygon.
    ///
    /// The angular inertia is expressed about the center of mass. A polygon with less than
    /// three vertices has a zero area, hence zero mass and inertia.
    pub fn from_convex_polygon(density: Real, vertices: &[Point<Real>]) -> MassProperties {
        let (area, com) = convex_polygon_area_and_center_of_mass(vertices);

        if area == 0.0 {
            return MassProperties::new(com, 0.0, 0.0);
        }

        let itot: Real = polygon_edges(vertices)
            .map(|(a, b)| triangle_area(&com, a, b) * triangle_unit_angular_inertia(&com, a, b))
            .sum();

        Self::new(com, area * density, itot * density)
    }
}

impl ConvexPolygonShape {
    /// Computes the mass properties of this polygon, given its density.
    pub fn mass_properties(&self, density: Real) -> MassProperties {
        MassProperties::from_convex_polygon(density, self.vertices())
    }

    /// The area of this polygon.
    pub fn area(&self) -> Real {
        convex_polygon_area_and_center_of_mass(self.vertices()).0
    }

    /// The centroid of this polygon.
    ///
    /// For a polygon with a zero area, this is the average of its vertices (or the origin
    /// if it has none).
    pub fn centroid(&self) -> Point<Real> {
        convex_polygon_area_and_center_of_mass(self.vertices()).1
    }
}

/// Computes the area and center-of-mass of a convex polygon.
///
/// The polygon is split into a fan of triangles around its geometric center, so the
/// result does not depend on its winding.
pub fn convex_polygon_area_and_center_of_mass(
    convex_polygon: &[Point<Real>],
) -> (Real, Point<Real>) {
    let geometric_center = utils::center(convex_polygon);
    let mut res = Point::origin();
    let mut areasum = 0.0;

    for (a, b) in polygon_edges(convex_polygon) {
        let area = triangle_area(a, b, &geometric_center);
        let center = (a.coords + b.coords + geometric_center.coords) / 3.0;

        res += center * area;
        areasum += area;
    }

    if areasum == 0.0 {
        (areasum, geometric_center)
    } else {
        (areasum, res / areasum)
    }
}

// Iterates on `(v[i], v[i + 1])`, wrapping around at the end.
fn polygon_edges(
    vertices: &[Point<Real>],
) -> impl Iterator<Item = (&Point<Real>, &Point<Real>)> {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
}

fn triangle_area(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Real {
    ComplexField::abs((b - a).perp(&(c - a))) * 0.5
}

// Angular inertia of a unit-density triangle about its first vertex, divided by its area.
fn triangle_unit_angular_inertia(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Real {
    let factor = 1.0 / 6.0;
    let e1 = b - a;
    let e2 = c - a;

    let intx2 = e1.x * e1.x + e2.x * e1.x + e2.x * e2.x;
    let inty2 = e1.y * e1.y + e2.y * e1.y + e2.y * e2.y;
    factor * (intx2 + inty2)
}
