//! Coordinate pair types.

/// A geographic coordinate in radians.
///
/// Latitude is expected in [-π/2, π/2] and longitude in [-π, π]; the
/// ranges are not enforced here, callers normalize their inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in radians (positive = north).
    pub lat: f64,
    /// Longitude in radians (positive = east).
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point from radians.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Create a point from decimal degrees.
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self {
            lat: lat.to_radians(),
            lon: lon.to_radians(),
        }
    }

    /// Latitude in decimal degrees.
    pub fn lat_degrees(&self) -> f64 {
        self.lat.to_degrees()
    }

    /// Longitude in decimal degrees.
    pub fn lon_degrees(&self) -> f64 {
        self.lon.to_degrees()
    }

    /// Midpoint of two coordinates, componentwise.
    pub fn midpoint(a: GeoPoint, b: GeoPoint) -> GeoPoint {
        GeoPoint::new((a.lat + b.lat) / 2.0, (a.lon + b.lon) / 2.0)
    }

    /// Componentwise minimum of two coordinates.
    pub fn component_min(a: GeoPoint, b: GeoPoint) -> GeoPoint {
        GeoPoint::new(a.lat.min(b.lat), a.lon.min(b.lon))
    }

    /// Componentwise maximum of two coordinates.
    pub fn component_max(a: GeoPoint, b: GeoPoint) -> GeoPoint {
        GeoPoint::new(a.lat.max(b.lat), a.lon.max(b.lon))
    }
}

/// A position on the local tangent plane, in kilometers from the plane
/// origin (the projection center).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanePoint {
    /// East-west offset in kilometers (positive = east).
    pub x: f64,
    /// North-south offset in kilometers (positive = north).
    pub y: f64,
}

impl PlanePoint {
    /// Create a plane point from kilometer offsets.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
