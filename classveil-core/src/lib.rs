// classveil-core/src/lib.rs
//! # Classveil Core Library
//!
//! `classveil-core` provides the platform-independent logic for renaming
//! CSS class identifiers across a static web project. It extracts every
//! class name referenced anywhere in a project (CSS selectors, HTML
//! `class` attributes, inline `<style>` blocks), builds a deterministic,
//! collision-free renaming, and rewrites all occurrences consistently
//! while preserving document structure and cross-file stylesheet links.
//!
//! The library is pure batch logic: no terminal, no progress bars, no
//! process-wide state. Front ends observe a run through an injected
//! [`ProgressReporter`] and read the final [`RunSummary`].
//!
//! ## Modules
//!
//! * `config`: [`ObfuscationOptions`] consumed by the orchestrator.
//! * `transform`: the [`ObfuscationMethod`] enum and the pure identifier
//!   transform behind it.
//! * `extract`: class-name extraction from CSS and HTML text.
//! * `mapping`: [`ClassMapping`] and the collision-free mapping builder.
//! * `rewrite`: compiled mappings and the CSS/HTML rewriters.
//! * `orchestrator`: directory walking and the phase-ordered batch run.
//! * `reporter`: the structured progress-event seam.
//! * `summary`: the [`RunSummary`] record a run hands back.
//! * `errors`: the [`ClassveilError`] type for configuration failures.
//!
//! ## Usage Example
//!
//! ```no_run
//! use classveil_core::{obfuscate_project, NullReporter, ObfuscationMethod, ObfuscationOptions};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let options = ObfuscationOptions::new("./site")
//!         .with_method(ObfuscationMethod::Hash)
//!         .with_exclude_classes(["no-js"]);
//!
//!     let summary = obfuscate_project(&options, &NullReporter)?;
//!     println!(
//!         "{} CSS and {} HTML files rewritten, {} classes renamed",
//!         summary.processed_css_files.len(),
//!         summary.processed_html_files.len(),
//!         summary.total_classes,
//!     );
//!     for error in &summary.errors {
//!         eprintln!("{error}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Configuration errors ([`ClassveilError::InvalidDirectory`], an unknown
//! method name at a string boundary) abort before any work. Per-file
//! failures never abort a run; they accumulate as [`RunError`] entries in
//! the summary so one malformed file cannot stop the batch.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod errors;
pub mod extract;
pub mod mapping;
pub mod orchestrator;
pub mod reporter;
pub mod rewrite;
pub mod summary;
pub mod transform;

/// Re-exports the options struct and its defaults.
pub use config::{ObfuscationOptions, DEFAULT_OUTPUT_SUFFIX};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ClassveilError;

/// Re-exports the identifier transform and the method enum.
pub use transform::{obfuscate_identifier, ObfuscationMethod};

/// Re-exports class-name extraction from both supported formats.
pub use extract::{extract_classes_from_css, extract_classes_from_html};

/// Re-exports the mapping pair and the deterministic mapping builder.
pub use mapping::{build_class_mappings, ClassMapping};

/// Re-exports the compiled mapping set and the content rewriters.
pub use rewrite::{
    obfuscated_file_name,
    rewrite_class_attr,
    rewrite_css,
    rewrite_html,
    CompiledMappings,
};

/// Re-exports the batch entry points.
pub use orchestrator::{obfuscate_project, scan_project};

/// Re-exports the progress-event seam.
pub use reporter::{NullReporter, ProgressEvent, ProgressReporter};

/// Re-exports the run summary record and its parts.
pub use summary::{ErrorStage, ProcessedFile, RunError, RunSummary};
