//! Error types for elevation lookups.

use thiserror::Error;

/// Errors that can occur while resolving elevations.
#[derive(Debug, Error)]
pub enum ElevationError {
    /// HTTP transport error.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("elevation service returned HTTP {0}")]
    ServiceStatus(reqwest::StatusCode),

    /// The response body was not the expected JSON shape (including a
    /// result entry without an `elevation` field).
    #[error("malformed elevation response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A batch answered with a different number of results than it was
    /// asked for.
    #[error("elevation service returned {got} results for a batch of {expected}")]
    BatchSizeMismatch {
        /// Locations submitted in the batch.
        expected: usize,
        /// Results the service answered with.
        got: usize,
    },

    /// A sample vector does not fill the grid shape it claims.
    #[error("{count} samples do not fill a {width}x{height} grid")]
    GridShapeMismatch {
        /// Samples provided.
        count: usize,
        /// Grid width in cells.
        width: u32,
        /// Grid height in cells.
        height: u32,
    },
}
