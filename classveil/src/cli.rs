// classveil/src/cli.rs
//! This file defines the command-line interface (CLI) for the classveil
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use classveil_core::ObfuscationMethod;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "classveil",
    version = env!("CARGO_PKG_VERSION"),
    about = "Obfuscate CSS class names across a static web project",
    long_about = "Classveil is a command-line utility that renames the CSS class identifiers of a static web project to obfuscated names, rewriting all references consistently: stylesheet selectors, HTML class attributes, inline <style> blocks, and <link> hrefs pointing at renamed stylesheets. Originals are never modified; rewritten siblings are written next to them.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for this run)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `classveil` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Obfuscates class names across a project, writing rewritten sibling files.
    #[command(about = "Obfuscates class names across a project, writing rewritten sibling files.")]
    Obfuscate(ObfuscateCommand),

    /// Scans a project and reports classes and mappings without writing any file.
    #[command(about = "Scans a project and reports classes and mappings without writing any file.")]
    Scan(ScanCommand),
}

/// Arguments for the `obfuscate` command.
#[derive(Parser, Debug)]
pub struct ObfuscateCommand {
    /// Root directory of the project to process.
    #[arg(long, short = 'p', value_name = "DIR", help = "Root directory of the project to process.")]
    pub path: PathBuf,

    /// Suffix inserted before the extension of each output file.
    #[arg(long, short = 's', value_name = "SUFFIX", help = "Suffix inserted before the extension of each output file (default '_obfuscated').")]
    pub suffix: Option<String>,

    /// Select the obfuscation method.
    #[arg(long, value_name = "METHOD", value_enum, help = "Select the obfuscation method (shift, hash, or hex).")]
    pub method: Option<MethodChoice>,

    /// Class names to leave untouched (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', value_name = "CLASS", help = "Class names to leave untouched (comma-separated).")]
    pub exclude: Vec<String>,

    /// File extensions to include in the scan (comma-separated).
    #[arg(long, value_delimiter = ',', value_name = "EXT", help = "File extensions to include in the scan (comma-separated, default '.html,.css').")]
    pub extensions: Vec<String>,

    /// Write a .backup copy of each file before rewriting.
    #[arg(long, short = 'b', help = "Write a byte-identical .backup copy of each file before rewriting.")]
    pub backup: bool,

    /// Load options from a YAML file; command-line flags override it.
    #[arg(long = "options-file", value_name = "FILE", help = "Load options from a YAML file; command-line flags override it.")]
    pub options_file: Option<PathBuf>,

    /// Export the run summary to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the run summary to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print the run summary as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Print the run summary as JSON to stdout.")]
    pub json_stdout: bool,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Root directory of the project to scan.
    #[arg(long, short = 'p', value_name = "DIR", help = "Root directory of the project to scan.")]
    pub path: PathBuf,

    /// Select the obfuscation method used to preview mappings.
    #[arg(long, value_name = "METHOD", value_enum, help = "Select the obfuscation method used to preview mappings.")]
    pub method: Option<MethodChoice>,

    /// Class names to leave untouched (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', value_name = "CLASS", help = "Class names to leave untouched (comma-separated).")]
    pub exclude: Vec<String>,

    /// File extensions to include in the scan (comma-separated).
    #[arg(long, value_delimiter = ',', value_name = "EXT", help = "File extensions to include in the scan (comma-separated, default '.html,.css').")]
    pub extensions: Vec<String>,

    /// Load options from a YAML file; command-line flags override it.
    #[arg(long = "options-file", value_name = "FILE", help = "Load options from a YAML file; command-line flags override it.")]
    pub options_file: Option<PathBuf>,

    /// Limit the number of mappings displayed in the console table.
    #[arg(long = "sample-mappings", value_name = "N", help = "Display at most N mappings in the console table.")]
    pub sample_mappings: Option<usize>,

    /// Export the scan summary to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the scan summary to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print the scan summary as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Print the scan summary as JSON to stdout.")]
    pub json_stdout: bool,
}

/// Enum for selecting the obfuscation method on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum MethodChoice {
    /// Length-keyed character rotation (default; length-preserving).
    Shift,
    /// Fixed-length digest-derived names.
    Hash,
    /// Hex-encoded names (reversible; mainly for testing).
    Hex,
}

impl From<MethodChoice> for ObfuscationMethod {
    fn from(choice: MethodChoice) -> Self {
        match choice {
            MethodChoice::Shift => ObfuscationMethod::Shift,
            MethodChoice::Hash => ObfuscationMethod::Hash,
            MethodChoice::Hex => ObfuscationMethod::Hex,
        }
    }
}
