//! # worldheight-geo
//!
//! Tangent-plane projection and sampling-grid math for worldheight.
//!
//! This crate provides the purely numerical half of the pipeline:
//! - Projecting geographic coordinates onto a local tangent plane
//!   (and back) using an oblate-spheroid Earth model
//! - Building the pixel sampling grid for a requested bounding box,
//!   including correction for the elevation source's native resolution
//!
//! ## Coordinate systems
//!
//! [`GeoPoint`] is a latitude/longitude pair in radians. [`PlanePoint`]
//! is a position in kilometers on a flat plane tangent to the Earth at
//! a chosen center point. The projection is a first-order local
//! approximation: it is only meaningful for regions small enough that
//! the plane hugs the spheroid, and [`plane_to_earth`] reports an error
//! for plane points outside that range.
//!
//! Projection reference: <https://www.mers.byu.edu/docs/reports/MERS9904.pdf>
//!
//! ## Example
//!
//! ```
//! use worldheight_geo::{GeoPoint, SampleGrid};
//!
//! let a = GeoPoint::from_degrees(48.9843, 37.4867);
//! let b = GeoPoint::from_degrees(49.0885, 37.6024);
//! let grid = SampleGrid::build(a, b, 16)?;
//! assert_eq!(grid.len(), (grid.width() * grid.height()) as usize);
//! # Ok::<(), worldheight_geo::GeoError>(())
//! ```

mod error;
mod grid;
mod point;
mod projection;

pub use error::GeoError;
pub use grid::{GridSpec, SampleGrid, SOURCE_RESOLUTION_M};
pub use point::{GeoPoint, PlanePoint};
pub use projection::{earth_to_plane, local_radius_km, plane_to_earth, EARTH_FLATTENING, EQUATORIAL_RADIUS_KM};

/// Result type for projection and grid operations.
pub type Result<T> = std::result::Result<T, GeoError>;
