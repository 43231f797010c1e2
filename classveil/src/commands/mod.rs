// classveil/src/commands/mod.rs
//! Subcommand implementations and the option plumbing they share.

pub mod obfuscate;
pub mod scan;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use classveil_core::{ObfuscationOptions, RunSummary};

use crate::cli::MethodChoice;

/// Builds the effective options: the options file (when given) seeds the
/// struct, then explicit command-line flags override it.
#[allow(clippy::too_many_arguments)]
pub(crate) fn resolve_options(
    options_file: Option<&Path>,
    path: &Path,
    suffix: Option<String>,
    method: Option<MethodChoice>,
    exclude: Vec<String>,
    extensions: Vec<String>,
    backup: bool,
) -> Result<ObfuscationOptions> {
    let mut options = match options_file {
        Some(file) => ObfuscationOptions::load_from_file(file)?,
        None => ObfuscationOptions::default(),
    };

    options.folder_path = path.to_path_buf();
    if let Some(suffix) = suffix {
        options.output_suffix = suffix;
    }
    if let Some(method) = method {
        options.method = method.into();
    }
    if !exclude.is_empty() {
        options.exclude_classes = exclude;
    }
    if !extensions.is_empty() {
        options.extensions = extensions;
    }
    if backup {
        options.create_backup = true;
    }

    Ok(options)
}

/// Writes the summary as JSON to a file and/or stdout.
pub(crate) fn export_summary(
    summary: &RunSummary,
    json_file: Option<&Path>,
    json_stdout: bool,
) -> Result<()> {
    if let Some(path) = json_file {
        let json = serde_json::to_string_pretty(summary)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
    }
    if json_stdout {
        println!("{}", serde_json::to_string_pretty(summary)?);
    }
    Ok(())
}
