//! Distance command - Euclidean distance between two coordinates

use anyhow::{Context, Result};
use colored::*;

use crate::config::DISTANCE_PRECISION;
use crate::core::{Coordinate, Vector};
use crate::processing::euclidean_distance;
use crate::ui;

pub fn run(a: &Coordinate, b: &Coordinate) -> Result<()> {
	ui::debug(&format!("Comparing {} with {}", a.signature(), b.signature()));

	let dist = euclidean_distance(a, b).context("Cannot compare coordinates")?;
	println!(
		"{} {}",
		"Euclidean distance:".bright_blue(),
		format_distance(dist).bright_white()
	);

	Ok(())
}

fn format_distance(dist: f64) -> String {
	format!("{:.*}", DISTANCE_PRECISION, dist)
}
