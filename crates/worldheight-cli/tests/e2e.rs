//! End-to-end tests driving the compiled binary against a stub
//! elevation service.

use std::path::PathBuf;
use std::process::Command;
use std::thread::{self, JoinHandle};

use tiny_http::{Header, Response, Server};
use worldheight_elevation::LookupRequest;

fn json_header() -> Header {
    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap()
}

/// Serve lookup requests, answering each location with `elevation(k)`
/// of its running submission index. Returns the endpoint URL and a
/// handle yielding the observed batch sizes.
fn spawn_stub<F>(expected_requests: usize, elevation: F) -> (String, JoinHandle<Vec<usize>>)
where
    F: Fn(usize) -> f64 + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").unwrap();
    let url = format!("http://{}", server.server_addr().to_ip().unwrap());

    let handle = thread::spawn(move || {
        let mut sizes = Vec::new();
        let mut index = 0usize;
        for _ in 0..expected_requests {
            let mut request = server.recv().unwrap();
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body).unwrap();
            let parsed: LookupRequest = serde_json::from_str(&body).unwrap();
            sizes.push(parsed.locations.len());

            let results: Vec<String> = parsed
                .locations
                .iter()
                .map(|_| {
                    let entry = format!("{{\"elevation\": {}}}", elevation(index));
                    index += 1;
                    entry
                })
                .collect();
            let reply = format!("{{\"results\": [{}]}}", results.join(", "));
            request
                .respond(Response::from_string(reply).with_header(json_header()))
                .unwrap();
        }
        sizes
    });

    (url, handle)
}

fn output_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("worldheight-{}-{}.png", name, std::process::id()))
}

fn worldheight() -> Command {
    Command::new(env!("CARGO_BIN_EXE_worldheight"))
}

#[test]
fn test_tiny_box_renders_expected_pixels() {
    // An equatorial ~0.01 degree box at width 4 samples at ~278 m/pixel,
    // above the 250 m source floor, so no correction applies and the
    // grid is exactly 4x4.
    let (url, handle) = spawn_stub(1, |k| k as f64);
    let out = output_path("smoke");

    let output = worldheight()
        .args(["0.0, 37.0", "0.01, 37.01", "4"])
        .arg(&out)
        .env("WORLDHEIGHT_ELEVATION_URL", &url)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(handle.join().unwrap(), vec![16]);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "stdout was: {stdout}");
    let mpp: f64 = lines[0]
        .strip_prefix("Meters per pixel: ")
        .expect("report line")
        .parse()
        .unwrap();
    assert!((mpp - 278.3).abs() < 1.0, "meters per pixel was {mpp}");
    assert_eq!(lines[1], "Min meters above sea level: 0");
    assert_eq!(lines[2], "Max meters above sea level: 15");

    // Elevation k normalizes to k/15, quantizing to exactly 17k. Cell
    // (i, j) carries submission index i*4 + j and lands north-up at
    // pixel (i, 3 - j).
    let image = image::open(&out).unwrap().into_luma8();
    assert_eq!(image.dimensions(), (4, 4));
    for i in 0..4u32 {
        for j in 0..4u32 {
            let expected = ((i * 4 + j) * 17) as u8;
            assert_eq!(image.get_pixel(i, 3 - j).0[0], expected, "cell ({i}, {j})");
        }
    }

    std::fs::remove_file(&out).ok();
}

#[test]
fn test_corrected_run_resamples_to_requested_width() {
    // Width 16 over the same box would be ~70 m/pixel, below the source
    // floor; sampling happens at 250 m (4x4) and the image is resampled
    // back to the requested 16.
    let (url, handle) = spawn_stub(1, |k| k as f64);
    let out = output_path("corrected");

    let output = worldheight()
        .args(["0.0, 37.0", "0.01, 37.01", "16"])
        .arg(&out)
        .env("WORLDHEIGHT_ELEVATION_URL", &url)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(handle.join().unwrap(), vec![16]);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mpp: f64 = stdout
        .lines()
        .next()
        .and_then(|l| l.strip_prefix("Meters per pixel: "))
        .expect("report line")
        .parse()
        .unwrap();
    // The report shows the nominal (uncorrected) resolution.
    assert!((mpp - 69.6).abs() < 0.5, "meters per pixel was {mpp}");

    let image = image::open(&out).unwrap().into_luma8();
    assert_eq!(image.dimensions(), (16, 16));

    std::fs::remove_file(&out).ok();
}

#[test]
fn test_uniform_elevation_field_is_mid_gray() {
    let (url, handle) = spawn_stub(1, |_| 100.0);
    let out = output_path("uniform");

    let output = worldheight()
        .args(["0.0, 37.0", "0.01, 37.01", "4"])
        .arg(&out)
        .env("WORLDHEIGHT_ELEVATION_URL", &url)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    handle.join().unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Min meters above sea level: 100"));
    assert!(stdout.contains("Max meters above sea level: 100"));

    let image = image::open(&out).unwrap().into_luma8();
    assert!(image.pixels().all(|p| p.0[0] == 128));

    std::fs::remove_file(&out).ok();
}

#[test]
fn test_corner_order_does_not_matter() {
    let (url, handle) = spawn_stub(1, |k| k as f64);
    let out = output_path("swapped");

    // Corners given max-first; the tool normalizes componentwise.
    let output = worldheight()
        .args(["0.01, 37.01", "0.0, 37.0", "4"])
        .arg(&out)
        .env("WORLDHEIGHT_ELEVATION_URL", &url)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(handle.join().unwrap(), vec![16]);

    let image = image::open(&out).unwrap().into_luma8();
    assert_eq!(image.dimensions(), (4, 4));

    std::fs::remove_file(&out).ok();
}

#[test]
fn test_wrong_argument_count_prints_usage_and_exits_zero() {
    let output = worldheight().output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("Example:"));
}

#[test]
fn test_malformed_coordinate_is_a_failure() {
    let output = worldheight()
        .args(["banana", "0.01, 37.01", "4", "out.png"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid coordinate pair"));
}

#[test]
fn test_non_integer_width_is_a_failure() {
    let output = worldheight()
        .args(["0.0, 37.0", "0.01, 37.01", "wide", "out.png"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid pixel width"));
}

#[test]
fn test_unreachable_service_is_a_failure() {
    let out = output_path("unreachable");
    let output = worldheight()
        .args(["0.0, 37.0", "0.01, 37.01", "4"])
        .arg(&out)
        .env("WORLDHEIGHT_ELEVATION_URL", "http://127.0.0.1:9")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!out.exists());
}
