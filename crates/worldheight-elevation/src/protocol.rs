//! Open-Elevation wire protocol.
//!
//! Request: `POST {endpoint}` with body
//! `{"locations": [{"latitude": .., "longitude": ..}, ..]}`, at most
//! 1000 entries. Response: `{"results": [{"elevation": ..}, ..]}`,
//! one entry per location, in submission order. Coordinates travel in
//! decimal degrees.

use serde::{Deserialize, Serialize};

/// Body of a bulk lookup request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRequest {
    /// Coordinates to resolve, at most [`MAX_BATCH_SIZE`](crate::MAX_BATCH_SIZE).
    pub locations: Vec<Location>,
}

/// One coordinate of a lookup request, in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Body of a lookup response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    /// One entry per submitted location, in submission order.
    pub results: Vec<LocationResult>,
}

/// One entry of a lookup response.
///
/// The service echoes the coordinates too; only the elevation is
/// consumed, unknown fields are ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocationResult {
    /// Elevation in meters above sea level.
    pub elevation: f64,
}
