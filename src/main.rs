//! kmeans - cluster earthquake feeds around seeded centroids

use anyhow::Result;
use clap::{CommandFactory, Parser};

use kmeans::cli::{Cli, Command};
use kmeans::commands;
use kmeans::config;
use kmeans::ui::{self, Log};

fn main() {
	let cli = Cli::parse();
	Log::set_verbose(cli.verbose);

	if let Err(e) = run(cli.command) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run(command: Command) -> Result<()> {
	match command {
		Command::Quakes { src, k, seed, limit, export } => {
			if let Some(seed) = seed {
				config::set_seed(seed);
			}
			if export.is_none() {
				ui::header(&format!("kmeans v{}", env!("CARGO_PKG_VERSION")));
			}
			commands::quakes::run(&src, k, limit, export.as_deref())
		}
		Command::Distance { a, b } => commands::distance::run(&a, &b),
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			match subcommand {
				Some(sub) => match cmd.find_subcommand_mut(&sub) {
					Some(sub_cmd) => sub_cmd.print_help()?,
					None => {
						ui::warn(&format!("Unknown subcommand: {}", sub));
						cmd.print_help()?;
					}
				},
				None => cmd.print_help()?,
			}
			Ok(())
		}
	}
}
