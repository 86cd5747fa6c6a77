//! Elevation values aligned with a sample grid.

use crate::{ElevationError, Result};

/// A grid of elevations in meters, index-aligned with the
/// [`SampleGrid`](worldheight_geo::SampleGrid) it was resolved from:
/// cell `(i, j)` sits at index `i * height + j`.
#[derive(Debug, Clone)]
pub struct ElevationGrid {
    values: Vec<f64>,
    width: u32,
    height: u32,
}

impl ElevationGrid {
    /// Wrap a sample vector, checking that it fills the grid shape.
    pub fn from_samples(values: Vec<f64>, width: u32, height: u32) -> Result<Self> {
        if values.len() != width as usize * height as usize {
            return Err(ElevationError::GridShapeMismatch {
                count: values.len(),
                width,
                height,
            });
        }
        Ok(Self {
            values,
            width,
            height,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Elevation of cell `(i, j)` in meters.
    ///
    /// # Panics
    /// Panics if the cell is out of range.
    pub fn get(&self, i: u32, j: u32) -> f64 {
        assert!(i < self.width && j < self.height);
        self.values[(i * self.height + j) as usize]
    }

    /// All values in index order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Minimum and maximum elevation, or `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut iter = self.values.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), v| {
            (min.min(v), max.max(v))
        }))
    }
}
