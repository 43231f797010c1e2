// classveil/src/main.rs
//! Classveil entry point.
//!
//! Parses the CLI, bootstraps logging, and dispatches to the subcommand
//! implementations.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use classveil::cli::{Cli, Commands};
use classveil::{commands, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    let exit_code = match cli.command {
        Commands::Obfuscate(cmd) => commands::obfuscate::run(cmd, cli.quiet)?,
        Commands::Scan(cmd) => commands::scan::run(cmd, cli.quiet)?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
