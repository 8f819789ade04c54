// Integration tests for the kmeans binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const FEED: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "id": "a1", "properties": { "mag": 1.2, "place": "Geysers, CA" }, "geometry": { "coordinates": [-122.80, 38.82, 2.1] } },
    { "id": "a2", "properties": { "mag": 0.9, "place": "Geysers, CA" }, "geometry": { "coordinates": [-122.81, 38.83, 1.9] } },
    { "id": "b1", "properties": { "mag": 3.1, "place": "Ridgecrest, CA" }, "geometry": { "coordinates": [-117.60, 35.70, 8.0] } },
    { "id": "b2", "properties": { "mag": 2.7, "place": "Ridgecrest, CA" }, "geometry": { "coordinates": [-117.58, 35.71, 7.5] } },
    { "id": "c1", "properties": { "mag": 4.9, "place": "Honshu, Japan" }, "geometry": { "coordinates": [142.10, 38.30, 35.0] } },
    { "id": "c2", "properties": { "mag": 5.2, "place": "Honshu, Japan" }, "geometry": { "coordinates": [142.30, 38.10, 30.0] } }
  ]
}"#;

fn kmeans_bin(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_kmeans"))
		.args(args)
		.env_remove("KMEANS_SEED")
		.output()
		.expect("Failed to run kmeans")
}

fn write_feed(dir: &TempDir) -> String {
	let path = dir.path().join("feed.geojson");
	fs::write(&path, FEED).expect("Failed to write feed");
	path.to_string_lossy().to_string()
}

#[test]
fn test_version_display() {
	let output = kmeans_bin(&["--version"]);
	assert!(output.status.success(), "Version command failed");

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("kmeans"), "Expected 'kmeans' in version output");
}

#[test]
fn test_help_display() {
	let output = kmeans_bin(&["--help"]);
	assert!(output.status.success(), "Help command failed");

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(
		stdout.contains("quakes") && stdout.contains("distance"),
		"Expected quakes and distance in help output"
	);
}

#[test]
fn test_distance_command() {
	let output = kmeans_bin(&["distance", "10.2,15.6,25", "23.7,-8.9,99.4"]);
	assert!(output.status.success(), "Distance command failed");

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("79.485"), "Unexpected output: {}", stdout);
}

#[test]
fn test_distance_dimension_mismatch() {
	let output = kmeans_bin(&["distance", "1,2", "1,2,3"]);
	assert!(!output.status.success(), "Mismatched coordinates should fail");
}

#[test]
fn test_quakes_rendering() {
	let dir = TempDir::new().unwrap();
	let feed = write_feed(&dir);

	let output = kmeans_bin(&["quakes", "--src", &feed, "-k", "3", "--seed", "10"]);
	assert!(output.status.success(), "Quakes command failed");

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("─── kmeans v"), "Expected header in output: {}", stdout);
	assert!(stdout.contains("3 clusters, 6 earthquakes"), "Unexpected output: {}", stdout);
	assert!(stdout.contains("Seed 10"));
}

#[test]
fn test_quakes_export_is_deterministic() {
	let dir = TempDir::new().unwrap();
	let feed = write_feed(&dir);

	let first = kmeans_bin(&["quakes", "--src", &feed, "-k", "2", "--seed", "10", "--export", "-"]);
	let second = kmeans_bin(&["quakes", "--src", &feed, "-k", "2", "--seed", "10", "--export", "-"]);
	assert!(first.status.success() && second.status.success(), "Export failed");
	assert_eq!(first.stdout, second.stdout);
	assert!(!String::from_utf8_lossy(&first.stdout).contains("───"), "Export to stdout must stay plain JSON");

	let parsed: serde_json::Value =
		serde_json::from_slice(&first.stdout).expect("Export should be plain JSON");
	let object = parsed.as_object().expect("Export should be a JSON object");
	assert_eq!(object.len(), 2);

	let members: usize = object.values().map(|v| v.as_array().unwrap().len()).sum();
	assert_eq!(members, 4);

	for key in object.keys() {
		let centroid: serde_json::Value = serde_json::from_str(key).expect("Keys are JSON centroids");
		assert!(centroid.get("latitude").is_some());
	}
}

#[test]
fn test_quakes_export_to_file() {
	let dir = TempDir::new().unwrap();
	let feed = write_feed(&dir);
	let out = dir.path().join("clusters.json");
	let out_str = out.to_string_lossy().to_string();

	let output = kmeans_bin(&["quakes", "--src", &feed, "-k", "3", "--seed", "4", "--export", &out_str]);
	assert!(output.status.success(), "Export command failed");
	assert!(Path::new(&out).exists(), "Expected export file to be created");

	let text = fs::read_to_string(&out).unwrap();
	assert!(text.starts_with('{') && text.ends_with('}'));
}

#[test]
fn test_quakes_invalid_k() {
	let dir = TempDir::new().unwrap();
	let feed = write_feed(&dir);

	for k in ["1", "6", "10"] {
		let output = kmeans_bin(&["quakes", "--src", &feed, "-k", k, "--seed", "1"]);
		assert!(!output.status.success(), "k={} should be rejected", k);

		let stderr = String::from_utf8_lossy(&output.stderr);
		assert!(stderr.contains("invalid k"), "Unexpected stderr: {}", stderr);
	}
}

#[test]
fn test_quakes_missing_source() {
	let output = kmeans_bin(&["quakes", "--src", "/nonexistent/feed.geojson"]);
	assert!(!output.status.success(), "Missing feed should fail");
}
