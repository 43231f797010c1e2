// classveil/src/commands/scan.rs
//! The `scan` command: dry run that reports classes and mappings without
//! writing any file.

use anyhow::{Context, Result};
use log::debug;

use classveil_core::scan_project;

use crate::cli::ScanCommand;
use crate::commands::{export_summary, resolve_options};
use crate::reporter::ConsoleReporter;
use crate::ui;

pub fn run(cmd: ScanCommand, quiet: bool) -> Result<i32> {
    let options = resolve_options(
        cmd.options_file.as_deref(),
        &cmd.path,
        None,
        cmd.method,
        cmd.exclude,
        cmd.extensions,
        false,
    )?;
    debug!("Effective options: {options:?}");

    let summary = scan_project(&options, &ConsoleReporter).context("Scan failed")?;

    if !cmd.json_stdout && !quiet {
        if summary.class_mappings.is_empty() {
            eprintln!("No class names found.");
        } else {
            ui::print_mapping_table(&summary.class_mappings, cmd.sample_mappings);
        }
        if summary.has_errors() {
            for error in &summary.errors {
                eprintln!("   - {error}");
            }
        }
    }
    export_summary(&summary, cmd.json_file.as_deref(), cmd.json_stdout)?;

    Ok(0)
}
