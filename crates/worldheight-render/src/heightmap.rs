//! Heightmap rasterization.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use tracing::debug;
use worldheight_elevation::ElevationGrid;
use worldheight_geo::GridSpec;

use crate::normalize::normalize;
use crate::{ElevationRange, RenderError, Result};

/// A finished heightmap raster and the elevation range it covers.
#[derive(Debug)]
pub struct Heightmap {
    image: GrayImage,
    range: ElevationRange,
}

impl Heightmap {
    /// The 8-bit grayscale raster, north-up.
    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    /// Pre-normalization elevation extremes in meters.
    pub fn range(&self) -> ElevationRange {
        self.range
    }

    /// Write the raster to a file; the format follows the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }
}

/// Rasterize an elevation grid into a grayscale heightmap.
///
/// The grid must match `spec`'s sampled dimensions. The raster is
/// rotated so that plane +y (north) points up, and resampled with a
/// Lanczos3 filter back to the requested width when the sampling
/// resolution was clamped.
pub fn render(elevations: &ElevationGrid, spec: &GridSpec) -> Result<Heightmap> {
    if elevations.width() != spec.width || elevations.height() != spec.height {
        return Err(RenderError::ShapeMismatch {
            got_width: elevations.width(),
            got_height: elevations.height(),
            want_width: spec.width,
            want_height: spec.height,
        });
    }

    let (normalized, range) = match normalize(elevations.values()) {
        Some(result) => result,
        None => return Err(RenderError::EmptyGrid),
    };

    // Raster in grid axis order: pixel x walks rows (j), pixel y walks
    // columns (i). The rotation below brings it to image orientation.
    let mut raw = GrayImage::new(spec.height, spec.width);
    for i in 0..spec.width {
        for j in 0..spec.height {
            let value = normalized[(i * spec.height + j) as usize];
            let level = (value * 255.0).round().clamp(0.0, 255.0) as u8;
            raw.put_pixel(j, i, Luma([level]));
        }
    }
    let mut image = imageops::rotate270(&raw);

    if spec.needs_resample() {
        let target_height = spec.resampled_height();
        debug!(
            from_width = spec.width,
            to_width = spec.requested_width,
            to_height = target_height,
            "resampling corrected raster to requested width"
        );
        image = imageops::resize(&image, spec.requested_width, target_height, FilterType::Lanczos3);
    }

    Ok(Heightmap { image, range })
}
