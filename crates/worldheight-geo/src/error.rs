//! Error types for projection and grid construction.

use thiserror::Error;

/// Errors that can occur in tangent-plane math.
#[derive(Debug, Error)]
pub enum GeoError {
    /// A plane point lies outside the range where the local tangent-plane
    /// approximation can be inverted (an asin argument left [-1, 1]).
    #[error("plane point ({x}, {y}) km is outside the tangent plane's valid range")]
    OutsideTangentPlane {
        /// Plane x coordinate in kilometers.
        x: f64,
        /// Plane y coordinate in kilometers.
        y: f64,
    },
}
