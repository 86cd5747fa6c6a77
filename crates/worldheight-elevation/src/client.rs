//! Blocking batched lookup client.

use reqwest::header::ACCEPT;
use tracing::debug;
use worldheight_geo::{GeoPoint, SampleGrid};

use crate::{ElevationError, ElevationGrid, Location, LookupRequest, LookupResponse, Result};

/// Public Open-Elevation bulk lookup endpoint.
pub const OPEN_ELEVATION_URL: &str = "https://api.open-elevation.com/api/v1/lookup";

/// Maximum number of coordinates the service accepts per request.
pub const MAX_BATCH_SIZE: usize = 1000;

/// Blocking client for an Open-Elevation compatible service.
///
/// Batches are issued strictly in order; batch `k + 1` is not sent
/// until batch `k`'s response has been consumed.
#[derive(Debug)]
pub struct ElevationClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl ElevationClient {
    /// Create a client for the public Open-Elevation endpoint.
    pub fn new() -> Result<Self> {
        Self::with_endpoint(OPEN_ELEVATION_URL)
    }

    /// Create a client for a specific endpoint URL.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Resolve elevations for a list of coordinates, in order.
    ///
    /// Issues one POST per [`MAX_BATCH_SIZE`] chunk and concatenates
    /// the answers, so the output index matches the input index.
    pub fn lookup(&self, points: &[GeoPoint]) -> Result<Vec<f64>> {
        let mut elevations = Vec::with_capacity(points.len());

        for chunk in points.chunks(MAX_BATCH_SIZE) {
            let request = LookupRequest {
                locations: chunk
                    .iter()
                    .map(|p| Location {
                        latitude: p.lat_degrees(),
                        longitude: p.lon_degrees(),
                    })
                    .collect(),
            };

            debug!(batch = chunk.len(), resolved = elevations.len(), "requesting elevations");
            let response = self
                .client
                .post(&self.endpoint)
                .header(ACCEPT, "application/json")
                .json(&request)
                .send()?;

            let status = response.status();
            if !status.is_success() {
                return Err(ElevationError::ServiceStatus(status));
            }

            let body = response.text()?;
            let parsed: LookupResponse = serde_json::from_str(&body)?;
            if parsed.results.len() != chunk.len() {
                return Err(ElevationError::BatchSizeMismatch {
                    expected: chunk.len(),
                    got: parsed.results.len(),
                });
            }

            elevations.extend(parsed.results.iter().map(|r| r.elevation));
        }

        Ok(elevations)
    }

    /// Resolve the elevation of every cell of a sample grid.
    ///
    /// Returns `None` when the grid has no cells; otherwise an
    /// [`ElevationGrid`] of the same shape and index order.
    pub fn resolve(&self, grid: &SampleGrid) -> Result<Option<ElevationGrid>> {
        if grid.is_empty() {
            return Ok(None);
        }

        let elevations = self.lookup(grid.points())?;
        ElevationGrid::from_samples(elevations, grid.width(), grid.height()).map(Some)
    }
}
