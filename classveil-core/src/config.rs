//! Configuration for a classveil run.
//!
//! `ObfuscationOptions` is the single options struct the orchestrator
//! consumes. It serializes to/from YAML so front ends can persist a project
//! configuration, and every field has a sensible default so callers can
//! construct it with just a folder path.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::transform::ObfuscationMethod;

/// Suffix inserted before the extension of every rewritten file.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_obfuscated";

fn default_output_suffix() -> String {
    DEFAULT_OUTPUT_SUFFIX.to_string()
}

fn default_extensions() -> Vec<String> {
    vec![".html".to_string(), ".css".to_string()]
}

/// Options consumed by the project orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObfuscationOptions {
    /// Root directory of the project to process.
    pub folder_path: PathBuf,
    /// Suffix inserted before the extension of each output file.
    pub output_suffix: String,
    /// File extensions included in the scan (leading dot optional).
    pub extensions: Vec<String>,
    /// How original names are turned into obfuscated ones.
    pub method: ObfuscationMethod,
    /// Class names left untouched everywhere.
    pub exclude_classes: Vec<String>,
    /// If true, write a byte-identical `<name>.<ext>.backup` copy of each
    /// file before rewriting.
    pub create_backup: bool,
}

impl Default for ObfuscationOptions {
    fn default() -> Self {
        Self {
            folder_path: PathBuf::new(),
            output_suffix: default_output_suffix(),
            extensions: default_extensions(),
            method: ObfuscationMethod::default(),
            exclude_classes: Vec::new(),
            create_backup: false,
        }
    }
}

impl ObfuscationOptions {
    /// Options for `folder_path` with every other field defaulted.
    pub fn new(folder_path: impl Into<PathBuf>) -> Self {
        Self {
            folder_path: folder_path.into(),
            ..Self::default()
        }
    }

    /// Loads options from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading options from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file {}", path.display()))?;
        let options: ObfuscationOptions = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse options file {}", path.display()))?;
        Ok(options)
    }

    pub fn with_method(mut self, method: ObfuscationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = suffix.into();
        self
    }

    pub fn with_exclude_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_backup(mut self, create_backup: bool) -> Self {
        self.create_backup = create_backup;
        self
    }

    /// The excluded class names as a set for membership checks.
    pub fn excluded_set(&self) -> HashSet<String> {
        self.exclude_classes.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_behavior() {
        let options = ObfuscationOptions::default();
        assert_eq!(options.output_suffix, "_obfuscated");
        assert_eq!(options.extensions, vec![".html", ".css"]);
        assert_eq!(options.method, ObfuscationMethod::Shift);
        assert!(!options.create_backup);
    }

    #[test]
    fn loads_partial_yaml_over_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("options.yaml");
        std::fs::write(
            &path,
            "folder_path: /srv/www\nmethod: hash\nexclude_classes:\n  - active\n",
        )?;

        let options = ObfuscationOptions::load_from_file(&path)?;
        assert_eq!(options.folder_path, PathBuf::from("/srv/www"));
        assert_eq!(options.method, ObfuscationMethod::Hash);
        assert_eq!(options.exclude_classes, vec!["active"]);
        // Untouched fields keep their defaults.
        assert_eq!(options.output_suffix, "_obfuscated");
        Ok(())
    }
}
