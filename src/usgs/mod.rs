//! # USGS Earthquake Feeds
//!
//! Loads GeoJSON feeds and exposes each feature as a clusterable [`Quake`].

pub mod feature;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub use feature::{Feature, Feed, Quake};

/// Parse a feed from its JSON text
pub fn parse_features(json: &str) -> Result<Vec<Quake>> {
	let feed: Feed = serde_json::from_str(json).context("Failed to parse USGS feed")?;
	Ok(feed.features.into_iter().map(Quake::new).collect())
}

/// Read and parse a feed from disk
pub fn load_features(path: &Path) -> Result<Vec<Quake>> {
	let json = fs::read_to_string(path)
		.with_context(|| format!("Failed to read source path {}", path.display()))?;
	let quakes = parse_features(&json)?;
	crate::ui::debug(&format!("Parsed {} features from {}", quakes.len(), path.display()));
	Ok(quakes)
}
