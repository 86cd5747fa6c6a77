//! Top-level error type for a heightmap run.

use thiserror::Error;
use worldheight_elevation::ElevationError;
use worldheight_geo::GeoError;
use worldheight_render::RenderError;

/// Errors that abort a heightmap run.
#[derive(Debug, Error)]
pub enum RunError {
    /// A coordinate argument was not a `"latitude, longitude"` pair.
    #[error("invalid coordinate pair {input:?}: expected \"latitude, longitude\" in degrees")]
    InvalidCoordinate {
        /// The offending argument.
        input: String,
    },

    /// The pixel width argument was not a non-negative integer.
    #[error("invalid pixel width {input:?}")]
    InvalidWidth {
        /// The offending argument.
        input: String,
    },

    /// The bounding box produced a grid with no cells.
    #[error("bounding box produced no samples")]
    EmptyRegion,

    /// Projection or grid construction failure.
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// Elevation service failure.
    #[error(transparent)]
    Elevation(#[from] ElevationError),

    /// Rasterization or file output failure.
    #[error(transparent)]
    Render(#[from] RenderError),
}
