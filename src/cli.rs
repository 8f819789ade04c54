use clap::{builder::Styles, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{DEFAULT_K, DEFAULT_PREVIEW};
use crate::core::Coordinate;

fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
	Coordinate::parse(s)
}

fn styles() -> Styles {
	Styles::styled()
		.header(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.usage(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))))
		.valid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.invalid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "kmeans",
	author,
	version,
	about = "Seedable k-means clustering for earthquake feeds",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {quakes}    {quakes_args}   {quakes_desc}
  {bin} {quakes}    {export_args}   {export_desc}
  {bin} {distance}  {distance_args}        {distance_desc}
  {bin} {help}      {help_args}                             {help_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "kmeans".bright_blue(),
		quakes = "quakes".yellow(),
		quakes_args = "--src all_week.geojson -k 8 --seed 10",
		quakes_desc = "Group quakes by location".dimmed(),
		export_args = "--src all_week.geojson --export -  ",
		export_desc = "Print clusters as JSON".dimmed(),
		distance = "distance".yellow(),
		distance_args = "10.2,15.6,25 23.7,-8.9,99.4",
		distance_desc = "Euclidean distance".dimmed(),
		help = "help".yellow(),
		help_args = "quakes",
		help_desc = "Show help for quakes".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Cluster earthquakes from a USGS GeoJSON feed
	Quakes {
		/// Path to the GeoJSON feed
		#[arg(short = 's', long = "src", value_name = "PATH")]
		src: PathBuf,

		/// Number of centroids (at least 2, fewer than the number of quakes)
		#[arg(short = 'k', long = "k", default_value_t = DEFAULT_K)]
		k: usize,

		/// Seed for centroid selection (0 or negative = time-based, falls back to KMEANS_SEED)
		#[arg(long = "seed", allow_negative_numbers = true)]
		seed: Option<i64>,

		/// Members shown per cluster
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_PREVIEW)]
		limit: usize,

		/// Write clusters as JSON to a file, or "-" for stdout
		#[arg(short = 'e', long = "export", value_name = "PATH")]
		export: Option<PathBuf>,
	},

	/// Euclidean distance between two comma-separated coordinates
	Distance {
		/// First coordinate, e.g. 10.2,15.6,25
		#[arg(value_name = "A", value_parser = parse_coordinate, allow_hyphen_values = true)]
		a: Coordinate,

		/// Second coordinate
		#[arg(value_name = "B", value_parser = parse_coordinate, allow_hyphen_values = true)]
		b: Coordinate,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::Vector;

	#[test]
	fn cli_definition_is_valid() {
		use clap::CommandFactory;
		Cli::command().debug_assert();
	}

	#[test]
	fn quakes_defaults() {
		let cli = Cli::try_parse_from(["kmeans", "quakes", "--src", "feed.json"]).unwrap();
		match cli.command {
			Command::Quakes { k, seed, limit, export, .. } => {
				assert_eq!(k, DEFAULT_K);
				assert_eq!(seed, None);
				assert_eq!(limit, DEFAULT_PREVIEW);
				assert!(export.is_none());
			}
			other => panic!("unexpected command {:?}", other),
		}
	}

	#[test]
	fn distance_accepts_negative_components() {
		let cli = Cli::try_parse_from(["kmeans", "distance", "10.2,15.6,25", "-23.7,-8.9,99.4"]).unwrap();
		match cli.command {
			Command::Distance { a, b } => {
				assert_eq!(a.len(), 3);
				assert_eq!(b.len(), 3);
			}
			other => panic!("unexpected command {:?}", other),
		}
	}
}
