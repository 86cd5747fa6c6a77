//! Oblate-spheroid tangent-plane projection.
//!
//! Both directions are first-order approximations that treat a small
//! patch of the spheroid as flat. Accuracy degrades with distance from
//! the plane center; the inverse reports an error once a point falls
//! outside the invertible range.

use crate::{GeoError, GeoPoint, PlanePoint, Result};

/// Earth flattening of the oblate-spheroid model.
pub const EARTH_FLATTENING: f64 = 1.0 / 298.257;

/// Equatorial radius of the spheroid in kilometers.
pub const EQUATORIAL_RADIUS_KM: f64 = 6378.1363;

/// Local radius of curvature at a latitude (radians), in kilometers.
pub fn local_radius_km(lat: f64) -> f64 {
    (1.0 - EARTH_FLATTENING * lat.sin().powi(2)) * EQUATORIAL_RADIUS_KM
}

/// Project a geographic coordinate onto the tangent plane at `center`.
///
/// Uses the curvature radius at `point`'s own latitude. The result is
/// exact only at `center` itself; error grows with distance.
pub fn earth_to_plane(center: GeoPoint, point: GeoPoint) -> PlanePoint {
    let radius = local_radius_km(point.lat);

    let d_lat = point.lat - center.lat;
    let d_lon = point.lon - center.lon;

    let lat_radius = radius * point.lat.cos();
    let a = radius * d_lat.sin();
    let b = lat_radius * (1.0 - d_lon.cos()) * center.lat.sin();
    let c = lat_radius * d_lon.sin();

    PlanePoint::new(c, a + b)
}

/// Map a tangent-plane position back to a geographic coordinate.
///
/// Uses the curvature radius at the plane `center`, unlike
/// [`earth_to_plane`] which uses the sample point's own latitude. The
/// two are only approximate inverses near the center; the asymmetry is
/// deliberate and must not be "fixed" without a correctness analysis.
///
/// Returns [`GeoError::OutsideTangentPlane`] when `point` lies beyond
/// the range where the inversion is defined.
pub fn plane_to_earth(center: GeoPoint, point: PlanePoint) -> Result<GeoPoint> {
    let radius = local_radius_km(center.lat);
    let lat_radius = radius * center.lat.cos();

    let sin_d_lon = point.x / lat_radius;
    if !(-1.0..=1.0).contains(&sin_d_lon) {
        return Err(GeoError::OutsideTangentPlane { x: point.x, y: point.y });
    }
    let d_lon = sin_d_lon.asin();

    let sin_d_lat = (point.y - (1.0 - d_lon.cos()) * center.lat.sin() * lat_radius) / radius;
    if !(-1.0..=1.0).contains(&sin_d_lat) {
        return Err(GeoError::OutsideTangentPlane { x: point.x, y: point.y });
    }
    let d_lat = sin_d_lat.asin();

    Ok(GeoPoint::new(center.lat + d_lat, center.lon + d_lon))
}
