//! Progress reporting seam between the engine and its front ends.
//!
//! The orchestrator emits structured events through an injected
//! `ProgressReporter` instead of writing to a console or owning a progress
//! bar, so the core stays embeddable and testable without terminal side
//! effects. Front ends decide what, if anything, each event looks like.

use std::path::Path;

use crate::summary::ErrorStage;

/// A structured event emitted while a run progresses.
#[derive(Debug, Clone, Copy)]
pub enum ProgressEvent<'a> {
    ScanStarted { root: &'a Path },
    FilesDiscovered { css_files: usize, html_files: usize },
    ClassesExtracted { total: usize },
    MappingsBuilt { total: usize },
    /// No class was found anywhere in the project; the run ends with an
    /// empty summary. A warning, not an error.
    NoClassesFound,
    BackupCreated { path: &'a Path },
    FileRewritten { source: &'a Path, output: &'a Path },
    FileFailed { path: &'a Path, stage: ErrorStage, message: &'a str },
    RunCompleted { css_files: usize, html_files: usize, classes: usize, errors: usize },
}

/// Receives progress events from the orchestrator.
pub trait ProgressReporter: Send + Sync {
    fn on_event(&self, event: &ProgressEvent<'_>);
}

/// Reporter that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn on_event(&self, _event: &ProgressEvent<'_>) {}
}
