//! Quakes command - group earthquakes around seeded centroids

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::*;

use crate::config;
use crate::core::{Cluster, Vector};
use crate::processing::KMeanRequest;
use crate::ui;
use crate::usgs::{self, Quake};

pub fn run(src: &Path, k: usize, limit: usize, export: Option<&Path>) -> Result<()> {
	let start = Instant::now();
	let to_stdout = export.is_some_and(is_stdout);

	ui::debug(&format!("Starting clustering: src={}, k={}", src.display(), k));

	if !to_stdout {
		ui::info(&format!("Loading earthquakes from {}", ui::path_link(src, 40)));
	}

	let quakes = usgs::load_features(src)?;
	if quakes.is_empty() {
		ui::warn("No earthquakes found in feed");
		return Ok(());
	}

	if !to_stdout {
		ui::success(&format!("Loaded {} earthquakes", quakes.len()));
	}

	let seed = config::default_seed();
	let outcome = KMeanRequest::new(k, quakes)
		.with_seed(seed)
		.run()
		.context("Clustering failed")?;

	ui::debug(&format!(
		"Seed {} picked centroids {:?}, converged in {} passes",
		outcome.seed, outcome.centroid_indices, outcome.passes
	));

	if let Some(export_path) = export {
		return export_cluster(&outcome.cluster, export_path);
	}

	print_cluster(&outcome.cluster, limit);
	println!(
		"\n{}",
		format!("Seed {} · completed in {:.2}s", outcome.seed, start.elapsed().as_secs_f32()).dimmed()
	);

	Ok(())
}

fn is_stdout(path: &Path) -> bool {
	path.to_str() == Some("-") || path.as_os_str().is_empty()
}

/// Clusters largest first, each centroid followed by a preview of its members
fn print_cluster(cluster: &Cluster<Quake>, limit: usize) {
	let mut groups: Vec<(&Quake, &[Quake])> = cluster.iter().collect();
	groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

	ui::success(&format!(
		"{} clusters, {} earthquakes",
		cluster.len(),
		cluster.point_count()
	));

	for (i, (centroid, members)) in groups.iter().enumerate() {
		println!(
			"\n{} {} ({} members) {}",
			"Cluster".bright_white(),
			(i + 1).to_string().bright_cyan(),
			members.len(),
			centroid.signature().short().dimmed()
		);
		println!("  {}: {}", "Centroid".dimmed(), describe(centroid).bright_white());

		for (j, member) in members.iter().take(limit).enumerate() {
			println!("  {} {}", format!("[{}]", j + 1).dimmed(), describe(member));
		}

		if members.len() > limit {
			println!("  {}", format!("... and {} more", members.len() - limit).dimmed());
		}
	}
}

fn describe(quake: &Quake) -> String {
	let mut line = format!(
		"{:>9.4}, {:>10.4}, {:>6.2} km",
		quake.latitude(),
		quake.longitude(),
		quake.depth()
	);

	if let Some(mag) = quake.magnitude() {
		line.push_str(&format!("  M{:.1}", mag));
	}
	if let Some(place) = quake.place() {
		line.push_str(&format!("  {}", place));
	}
	if let Some(time) = quake.time() {
		line.push_str(&format!("  {}", time.format("%Y-%m-%d %H:%M UTC")));
	}

	line
}

fn export_cluster(cluster: &Cluster<Quake>, export_path: &Path) -> Result<()> {
	let json = cluster.to_json().context("Failed to serialize clusters")?;

	if is_stdout(export_path) {
		println!("{}", json);
	} else {
		fs::write(export_path, json).context("Failed to write export file")?;
		ui::success(&format!("Exported to {}", export_path.display()));
	}

	Ok(())
}
