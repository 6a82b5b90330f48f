//! Mapping from geographic coordinates to points on the globe.
//!
//! Longitude is offset by 180° so that markers line up with the globe's
//! texture seam: `(0°, 0°)` lands on the positive x axis, the antimeridian on
//! negative x and the north pole on positive y.

use crate::constants::EPSILON;
use nalgebra::Vector3;

/// Convert latitude/longitude in degrees to a point on a sphere of `radius`.
///
/// Coordinates outside the nominal ranges still produce a point on the sphere
/// through trigonometric wrap-around.
#[must_use]
pub fn lat_lon_to_vector(lat: f64, lon: f64, radius: f64) -> Vector3<f64> {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();

    Vector3::new(
        -(radius * phi.sin() * theta.cos()),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Project `position` radially outwards onto a ring of `ring_radius`.
///
/// A position at the origin has no direction and maps to the origin.
#[must_use]
pub fn ring_anchor(position: &Vector3<f64>, ring_radius: f64) -> Vector3<f64> {
    let length = position.norm();
    if length < EPSILON {
        return Vector3::zeros();
    }
    position * (ring_radius / length)
}
