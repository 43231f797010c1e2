//! Run summary data structures.
//!
//! `RunSummary` is the stable record a run hands back to front ends: which
//! files were produced, the mapping set, and every per-file failure. It is
//! output-only; nothing in the engine reads it back.
//!
//! License: MIT OR Apache-2.0

use std::fmt;
use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::mapping::ClassMapping;

/// One input file and the sibling output written for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedFile {
    pub original: PathBuf,
    pub obfuscated: PathBuf,
}

/// Which phase of the run a per-file failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStage {
    ScanCss,
    ScanHtml,
    RewriteCss,
    RewriteHtml,
}

impl fmt::Display for ErrorStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorStage::ScanCss => "CSS scan",
            ErrorStage::ScanHtml => "HTML scan",
            ErrorStage::RewriteCss => "CSS rewrite",
            ErrorStage::RewriteHtml => "HTML rewrite",
        };
        f.write_str(label)
    }
}

/// A recorded per-file failure. These never abort the run; they accumulate
/// so a single unreadable file cannot stop the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunError {
    pub path: PathBuf,
    pub stage: ErrorStage,
    pub message: String,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {} - {}", self.stage, self.path.display(), self.message)
    }
}

/// Aggregate record of one obfuscation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Unique identifier of this run.
    pub run_id: String,
    /// RFC 3339 timestamp taken when the summary was finalized.
    pub completed_at: String,
    pub processed_css_files: Vec<ProcessedFile>,
    pub processed_html_files: Vec<ProcessedFile>,
    /// Number of classes that received a mapping.
    pub total_classes: usize,
    pub class_mappings: Vec<ClassMapping>,
    pub errors: Vec<RunError>,
    pub backups_created: Vec<PathBuf>,
}

impl RunSummary {
    pub(crate) fn new() -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            completed_at: String::new(),
            processed_css_files: Vec::new(),
            processed_html_files: Vec::new(),
            total_classes: 0,
            class_mappings: Vec::new(),
            errors: Vec::new(),
            backups_created: Vec::new(),
        }
    }

    /// Stamps the completion time. Called once, when the run finishes.
    pub(crate) fn finalize(mut self) -> Self {
        self.completed_at = Utc::now().to_rfc3339();
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
