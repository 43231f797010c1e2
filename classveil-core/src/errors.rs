//! errors.rs - Custom error types for the classveil-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! Only configuration-level failures surface through this enum; per-file
//! failures during a run are collected into the run summary instead.
//!
//! License: MIT OR Apache-2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `classveil-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClassveilError {
    #[error("'{}' is not a valid project directory", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("Unknown obfuscation method: '{0}'")]
    InvalidMethod(String),

    #[error("Failed to compile replacement for class '{0}': {1}")]
    MappingCompilation(String, regex::Error),

    #[error("Failed to rewrite HTML document: {0}")]
    HtmlRewrite(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
