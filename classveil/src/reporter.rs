// classveil/src/reporter.rs
//! Console progress reporting.
//!
//! Translates the engine's structured progress events into log lines, so
//! the usual quiet/debug switches govern everything the run prints while
//! it is in flight.

use log::{info, warn};

use classveil_core::{ProgressEvent, ProgressReporter};

/// Reporter that forwards engine events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn on_event(&self, event: &ProgressEvent<'_>) {
        match event {
            ProgressEvent::ScanStarted { root } => {
                info!("Scanning: {}", root.display());
            }
            ProgressEvent::FilesDiscovered { css_files, html_files } => {
                info!("Found {css_files} CSS and {html_files} HTML files");
            }
            ProgressEvent::ClassesExtracted { total } => {
                info!("Total unique classes: {total}");
            }
            ProgressEvent::MappingsBuilt { total } => {
                info!("Built {total} class mappings");
            }
            ProgressEvent::NoClassesFound => {
                warn!("No classes found to obfuscate");
            }
            ProgressEvent::BackupCreated { path } => {
                info!("Backup created: {}", path.display());
            }
            ProgressEvent::FileRewritten { source, output } => {
                info!("{} -> {}", source.display(), output.display());
            }
            ProgressEvent::FileFailed { path, stage, message } => {
                warn!("{} error: {} - {}", stage, path.display(), message);
            }
            ProgressEvent::RunCompleted { css_files, html_files, classes, errors } => {
                info!(
                    "Run complete: {css_files} CSS, {html_files} HTML, {classes} classes, {errors} errors"
                );
            }
        }
    }
}
