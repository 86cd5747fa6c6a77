//! Error types for rendering.

use thiserror::Error;

/// Errors that can occur while rendering a heightmap.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The elevation grid's shape does not match the sampling grid spec.
    #[error("elevation grid is {got_width}x{got_height} but the sample grid is {want_width}x{want_height}")]
    ShapeMismatch {
        /// Elevation grid width.
        got_width: u32,
        /// Elevation grid height.
        got_height: u32,
        /// Expected width from the grid spec.
        want_width: u32,
        /// Expected height from the grid spec.
        want_height: u32,
    },

    /// The elevation grid has no cells.
    #[error("cannot render an empty elevation grid")]
    EmptyGrid,

    /// Image encode or write error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
