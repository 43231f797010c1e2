// classveil/src/commands/obfuscate.rs
//! The `obfuscate` command: a full rewrite run over a project.

use anyhow::{Context, Result};
use log::debug;

use classveil_core::obfuscate_project;

use crate::cli::ObfuscateCommand;
use crate::commands::{export_summary, resolve_options};
use crate::reporter::ConsoleReporter;
use crate::ui;

/// Runs the command and returns the process exit code: non-zero when the
/// run recorded per-file errors, so CI pipelines notice partial failures.
pub fn run(cmd: ObfuscateCommand, quiet: bool) -> Result<i32> {
    let options = resolve_options(
        cmd.options_file.as_deref(),
        &cmd.path,
        cmd.suffix,
        cmd.method,
        cmd.exclude,
        cmd.extensions,
        cmd.backup,
    )?;
    debug!("Effective options: {options:?}");

    let summary =
        obfuscate_project(&options, &ConsoleReporter).context("Obfuscation failed")?;

    ui::print_run_summary(&summary, quiet);
    export_summary(&summary, cmd.json_file.as_deref(), cmd.json_stdout)?;

    Ok(if summary.has_errors() { 1 } else { 0 })
}
