//! Pixel sampling grid over a projected bounding box.

use tracing::debug;

use crate::{earth_to_plane, plane_to_earth, GeoPoint, PlanePoint, Result};

/// Native resolution of the elevation data source, in meters per pixel.
///
/// Requests finer than this are clamped: sampling below the source
/// resolution would only interpolate, so the grid is built at the floor
/// and the final image resampled back up to the requested width.
pub const SOURCE_RESOLUTION_M: f64 = 250.0;

/// Pixel geometry of one sampling run.
///
/// Records both the nominal (requested) step and the corrected step
/// actually used for sampling, so the renderer knows whether to
/// resample the finished raster back to the requested width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Nominal step in kilometers, `plane width / requested width`.
    pub step_km: f64,
    /// Step actually used for sampling, clamped to [`SOURCE_RESOLUTION_M`].
    pub corrected_step_km: f64,
    /// Pixel width the caller asked for.
    pub requested_width: u32,
    /// Pixel width of the sampled grid (differs from `requested_width`
    /// only when the resolution was corrected).
    pub width: u32,
    /// Pixel height of the sampled grid.
    pub height: u32,
}

impl GridSpec {
    /// Derive the grid geometry for a plane-space extent.
    ///
    /// `width_km` and `height_km` are the plane-space dimensions of the
    /// bounding box; `requested_width` is the target image width in
    /// pixels. The height is rounded to a whole multiple of the step.
    pub fn from_plane_extent(width_km: f64, height_km: f64, requested_width: u32) -> Self {
        let step_km = width_km / requested_width as f64;

        let mut corrected_step_km = step_km;
        let mut width = requested_width;
        if step_km * 1000.0 < SOURCE_RESOLUTION_M {
            corrected_step_km = SOURCE_RESOLUTION_M / 1000.0;
            width = (width_km / corrected_step_km).round() as u32;
            debug!(
                requested_width,
                corrected_width = width,
                "requested resolution finer than source data, clamping to {} m/pixel",
                SOURCE_RESOLUTION_M
            );
        }

        let rounded_height_km = (height_km / corrected_step_km).round() * corrected_step_km;
        let height = (rounded_height_km / corrected_step_km).round() as u32;

        Self {
            step_km,
            corrected_step_km,
            requested_width,
            width,
            height,
        }
    }

    /// Ground distance of one pixel of the *requested* raster, in meters.
    pub fn meters_per_pixel(&self) -> f64 {
        self.step_km * 1000.0
    }

    /// Whether the sampled grid is coarser than the requested width and
    /// the final image needs resampling.
    pub fn needs_resample(&self) -> bool {
        self.width != self.requested_width
    }

    /// Image height after resampling back to the requested width.
    pub fn resampled_height(&self) -> u32 {
        (self.height as f64 * self.requested_width as f64 / self.width as f64).round() as u32
    }
}

/// A grid of geographic coordinates, one per output pixel.
///
/// Cell `(i, j)` covers plane position
/// `(bottom_left.x + i * step, bottom_left.y + j * step)`; storage is
/// column-outer, so cell `(i, j)` sits at index `i * height + j`. The
/// elevation resolver relies on this ordering.
#[derive(Debug)]
pub struct SampleGrid {
    points: Vec<GeoPoint>,
    spec: GridSpec,
    center: GeoPoint,
}

impl SampleGrid {
    /// Build the sampling grid for a geographic bounding box.
    ///
    /// `point_min` and `point_max` must already be normalized so that
    /// min ≤ max componentwise. Fails when a grid cell falls outside
    /// the tangent plane's invertible range.
    pub fn build(point_min: GeoPoint, point_max: GeoPoint, requested_width: u32) -> Result<Self> {
        let center = GeoPoint::midpoint(point_min, point_max);

        let bottom_left = earth_to_plane(center, point_min);
        let top_right = earth_to_plane(center, point_max);

        let spec = GridSpec::from_plane_extent(
            top_right.x - bottom_left.x,
            top_right.y - bottom_left.y,
            requested_width,
        );
        debug!(
            width = spec.width,
            height = spec.height,
            step_km = spec.corrected_step_km,
            "building sample grid"
        );

        let mut points = Vec::with_capacity(spec.width as usize * spec.height as usize);
        for i in 0..spec.width {
            for j in 0..spec.height {
                let plane = PlanePoint::new(
                    bottom_left.x + i as f64 * spec.corrected_step_km,
                    bottom_left.y + j as f64 * spec.corrected_step_km,
                );
                points.push(plane_to_earth(center, plane)?);
            }
        }

        Ok(Self {
            points,
            spec,
            center,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.spec.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.spec.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The coordinate of cell `(i, j)`.
    ///
    /// # Panics
    /// Panics if the cell is out of range.
    pub fn get(&self, i: u32, j: u32) -> GeoPoint {
        assert!(i < self.spec.width && j < self.spec.height);
        self.points[(i * self.spec.height + j) as usize]
    }

    /// All coordinates in index order (cell `(i, j)` at `i * height + j`).
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// The grid geometry.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// The projection center used for this grid.
    pub fn center(&self) -> GeoPoint {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resolution_clamped_to_source_floor() {
        // 1 km wide at 1000 pixels would be 1 m/pixel, far below the
        // 250 m source floor.
        let spec = GridSpec::from_plane_extent(1.0, 1.0, 1000);
        assert_relative_eq!(spec.corrected_step_km, 0.25, epsilon = 1e-12);
        assert_eq!(spec.width, 4);
        assert_eq!(spec.requested_width, 1000);
        assert!(spec.needs_resample());
        // The reported resolution is still the nominal request.
        assert_relative_eq!(spec.meters_per_pixel(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_coarse_request_is_untouched() {
        // 100 km wide at 100 pixels is 1000 m/pixel, above the floor.
        let spec = GridSpec::from_plane_extent(100.0, 50.0, 100);
        assert_relative_eq!(spec.corrected_step_km, 1.0, epsilon = 1e-12);
        assert_eq!(spec.width, 100);
        assert_eq!(spec.height, 50);
        assert!(!spec.needs_resample());
        assert_relative_eq!(spec.meters_per_pixel(), 1000.0, epsilon = 1e-12);
    }

    #[test]
    fn test_height_rounds_to_step_multiple() {
        // 10.6 km tall at a 1 km step rounds to 11 pixels.
        let spec = GridSpec::from_plane_extent(100.0, 10.6, 100);
        assert_eq!(spec.height, 11);
    }

    #[test]
    fn test_resampled_height_is_proportional() {
        let spec = GridSpec::from_plane_extent(1.0, 2.0, 1000);
        // width 4, height 8 after correction; resampling back to 1000
        // wide scales the height by the same factor.
        assert_eq!(spec.height, 8);
        assert_eq!(spec.resampled_height(), 2000);
    }

    #[test]
    fn test_build_small_grid() {
        let a = GeoPoint::from_degrees(48.9843, 37.4867);
        let b = GeoPoint::from_degrees(49.0885, 37.6024);
        let grid = SampleGrid::build(a, b, 8).expect("grid builds");

        assert_eq!(grid.len(), (grid.width() * grid.height()) as usize);
        assert!(!grid.is_empty());

        // Cell (0, 0) is the bottom-left corner of the box. The corner
        // sits a few kilometers from the plane center, so only the
        // looser first-order tolerance applies.
        let origin = grid.get(0, 0);
        assert_relative_eq!(origin.lat, a.lat, epsilon = 1e-5);
        assert_relative_eq!(origin.lon, a.lon, epsilon = 1e-5);

        // Columns advance east, rows advance north.
        assert!(grid.get(1, 0).lon > origin.lon);
        assert!(grid.get(0, 1).lat > origin.lat);
    }

    #[test]
    fn test_build_preserves_index_order() {
        let a = GeoPoint::from_degrees(48.9843, 37.4867);
        let b = GeoPoint::from_degrees(49.0885, 37.6024);
        let grid = SampleGrid::build(a, b, 8).expect("grid builds");

        let height = grid.height();
        for i in 0..grid.width() {
            for j in 0..height {
                let by_index = grid.points()[(i * height + j) as usize];
                assert_eq!(grid.get(i, j), by_index);
            }
        }
    }
}
