//! # worldheight-elevation
//!
//! Batched elevation lookup against an Open-Elevation compatible
//! service.
//!
//! The service accepts up to 1000 coordinates per POST; this crate
//! splits a [`SampleGrid`](worldheight_geo::SampleGrid) into sequential
//! batches, checks that every batch answers with one result per
//! location, and reassembles the answers into an [`ElevationGrid`]
//! index-aligned with the input grid.
//!
//! Any transport failure, non-success status, undecodable body, or
//! count mismatch aborts the whole lookup. There is no retry and no
//! partial result.
//!
//! ## Example
//!
//! ```no_run
//! use worldheight_geo::{GeoPoint, SampleGrid};
//! use worldheight_elevation::ElevationClient;
//!
//! let grid = SampleGrid::build(
//!     GeoPoint::from_degrees(48.9843, 37.4867),
//!     GeoPoint::from_degrees(49.0885, 37.6024),
//!     64,
//! )?;
//! let client = ElevationClient::new()?;
//! if let Some(elevations) = client.resolve(&grid)? {
//!     println!("sampled {} elevations", elevations.len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod client;
mod error;
mod grid;
mod protocol;

pub use client::{ElevationClient, MAX_BATCH_SIZE, OPEN_ELEVATION_URL};
pub use error::ElevationError;
pub use grid::ElevationGrid;
pub use protocol::{Location, LocationResult, LookupRequest, LookupResponse};

/// Result type for elevation lookups.
pub type Result<T> = std::result::Result<T, ElevationError>;
