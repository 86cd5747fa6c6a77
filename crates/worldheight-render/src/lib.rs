//! # worldheight-render
//!
//! Turns a resolved [`ElevationGrid`](worldheight_elevation::ElevationGrid)
//! into an 8-bit grayscale heightmap image.
//!
//! Elevations are linearly normalized to [0, 1] over the grid's own
//! min/max, quantized to 8 bits, oriented north-up, and resampled back
//! to the requested width (Lanczos3) when the sampling grid was
//! clamped to the elevation source's resolution floor.
//!
//! A grid where every cell holds the same elevation has no range to
//! stretch; it renders as uniform mid-gray instead of dividing by zero.

mod error;
mod heightmap;
mod normalize;

pub use error::RenderError;
pub use heightmap::{render, Heightmap};
pub use normalize::{normalize, ElevationRange};

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
