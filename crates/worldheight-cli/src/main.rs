//! Command-line heightmap generator.
//!
//! Usage: `worldheight "<lat>, <lon>" "<lat>, <lon>" <width_pixels> <save_path>`
//!
//! The two coordinates are opposite corners of the bounding box in
//! decimal degrees, in either order. The output format follows the
//! save path's extension. Set `WORLDHEIGHT_ELEVATION_URL` to point the
//! lookup at a different Open-Elevation compatible service.

mod error;

use std::env;
use std::path::Path;
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;
use worldheight_elevation::{ElevationClient, OPEN_ELEVATION_URL};
use worldheight_geo::{GeoPoint, SampleGrid};
use worldheight_render::render;

use crate::error::RunError;

/// Environment variable overriding the elevation service endpoint.
const ENDPOINT_ENV: &str = "WORLDHEIGHT_ELEVATION_URL";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 5 {
        // Wrong argument count is a usage request, not a failure.
        println!(
            "Usage: {} \"start_latitude, start_longitude\" \"end_latitude, end_longitude\" width_pixels save_path.png",
            args[0]
        );
        println!(
            "Example: {} \"49.0885, 37.4867\" \"48.9843, 37.6024\" 4096 test.png",
            args[0]
        );
        return;
    }

    if let Err(e) = run(&args[1], &args[2], &args[3], Path::new(&args[4])) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Parse a `"latitude, longitude"` argument into decimal degrees.
fn parse_point(input: &str) -> Result<(f64, f64), RunError> {
    let invalid = || RunError::InvalidCoordinate {
        input: input.to_string(),
    };

    let (lat, lon) = input.split_once(", ").ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;
    Ok((lat, lon))
}

fn run(start: &str, end: &str, width: &str, save_path: &Path) -> Result<(), RunError> {
    let (start_lat, start_lon) = parse_point(start)?;
    let (end_lat, end_lon) = parse_point(end)?;
    let width: u32 = width.parse().map_err(|_| RunError::InvalidWidth {
        input: width.to_string(),
    })?;

    // Corner order does not matter; normalize componentwise.
    let a = GeoPoint::from_degrees(start_lat, start_lon);
    let b = GeoPoint::from_degrees(end_lat, end_lon);
    let point_min = GeoPoint::component_min(a, b);
    let point_max = GeoPoint::component_max(a, b);

    let grid = SampleGrid::build(point_min, point_max, width)?;
    info!(
        width = grid.width(),
        height = grid.height(),
        cells = grid.len(),
        "sample grid ready"
    );

    let endpoint = env::var(ENDPOINT_ENV).unwrap_or_else(|_| OPEN_ELEVATION_URL.to_string());
    let client = ElevationClient::with_endpoint(endpoint)?;
    let elevations = client.resolve(&grid)?.ok_or(RunError::EmptyRegion)?;

    let heightmap = render(&elevations, grid.spec())?;
    heightmap.save(save_path)?;
    info!(path = %save_path.display(), "heightmap written");

    println!("Meters per pixel: {}", grid.spec().meters_per_pixel());
    println!("Min meters above sea level: {}", heightmap.range().min);
    println!("Max meters above sea level: {}", heightmap.range().max);

    Ok(())
}
