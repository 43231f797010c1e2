//! Project orchestration: walk, scan, map, rewrite.
//!
//! The phases run strictly in order - scan CSS, scan HTML, build the
//! mapping set, rewrite CSS, rewrite HTML - because the global mapping
//! must be complete before any rewrite starts. Per-file failures are
//! recorded in the summary and the batch continues; only configuration
//! errors (bad root directory) abort up front.
//!
//! License: MIT OR Apache-2.0

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::config::ObfuscationOptions;
use crate::errors::ClassveilError;
use crate::extract::{extract_classes_from_css, extract_classes_from_html};
use crate::mapping::build_class_mappings;
use crate::reporter::{ProgressEvent, ProgressReporter};
use crate::rewrite::{obfuscated_file_name, rewrite_css, rewrite_html, CompiledMappings};
use crate::summary::{ErrorStage, ProcessedFile, RunError, RunSummary};

/// Recursively collects the project files matching `extensions`, sorted
/// for deterministic processing order.
fn collect_project_files(
    root: &Path,
    extensions: &[String],
) -> Result<Vec<PathBuf>, ClassveilError> {
    if !root.is_dir() {
        return Err(ClassveilError::InvalidDirectory(root.to_path_buf()));
    }

    let wanted: Vec<&str> = extensions
        .iter()
        .map(|ext| ext.trim_start_matches('.'))
        .collect();

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable directory entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| wanted.contains(&ext))
        })
        .collect();

    files.sort();
    Ok(files)
}

fn is_css(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("css")
}

/// Everything the scan phases learned about a project.
struct ProjectScan {
    css_files: Vec<PathBuf>,
    html_files: Vec<PathBuf>,
    classes: BTreeSet<String>,
    errors: Vec<RunError>,
}

/// Runs discovery and both scan phases. Fatal errors only; per-file
/// failures land in `errors`.
fn scan_phases(
    options: &ObfuscationOptions,
    reporter: &dyn ProgressReporter,
) -> Result<ProjectScan, ClassveilError> {
    reporter.on_event(&ProgressEvent::ScanStarted {
        root: &options.folder_path,
    });

    let all_files = collect_project_files(&options.folder_path, &options.extensions)?;
    let (css_files, html_files): (Vec<PathBuf>, Vec<PathBuf>) =
        all_files.into_iter().partition(|p| is_css(p));

    reporter.on_event(&ProgressEvent::FilesDiscovered {
        css_files: css_files.len(),
        html_files: html_files.len(),
    });

    let mut classes = BTreeSet::new();
    let mut errors = Vec::new();

    for path in &css_files {
        match fs::read_to_string(path) {
            Ok(content) => classes.extend(extract_classes_from_css(&content)),
            Err(e) => record_failure(&mut errors, reporter, path, ErrorStage::ScanCss, &e.to_string()),
        }
    }

    for path in &html_files {
        let outcome = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| extract_classes_from_html(&content).map_err(|e| e.to_string()));
        match outcome {
            Ok(found) => classes.extend(found),
            Err(message) => {
                record_failure(&mut errors, reporter, path, ErrorStage::ScanHtml, &message)
            }
        }
    }

    reporter.on_event(&ProgressEvent::ClassesExtracted { total: classes.len() });
    debug!("Total unique classes: {}", classes.len());

    Ok(ProjectScan {
        css_files,
        html_files,
        classes,
        errors,
    })
}

fn record_failure(
    errors: &mut Vec<RunError>,
    reporter: &dyn ProgressReporter,
    path: &Path,
    stage: ErrorStage,
    message: &str,
) {
    reporter.on_event(&ProgressEvent::FileFailed {
        path,
        stage,
        message,
    });
    errors.push(RunError {
        path: path.to_path_buf(),
        stage,
        message: message.to_string(),
    });
}

/// Writes `<path>.backup` as a byte-identical copy of the original.
fn create_backup(path: &Path) -> io::Result<PathBuf> {
    let mut name = path.as_os_str().to_owned();
    name.push(".backup");
    let backup_path = PathBuf::from(name);
    fs::copy(path, &backup_path)?;
    Ok(backup_path)
}

/// Dry run: discovery, extraction, and mapping construction, without
/// touching any file. The summary's processed and backup lists stay empty.
pub fn scan_project(
    options: &ObfuscationOptions,
    reporter: &dyn ProgressReporter,
) -> Result<RunSummary, ClassveilError> {
    let scan = scan_phases(options, reporter)?;
    let mut summary = RunSummary::new();
    summary.errors = scan.errors;

    if scan.classes.is_empty() {
        reporter.on_event(&ProgressEvent::NoClassesFound);
        debug!("No classes found to obfuscate");
        return Ok(summary.finalize());
    }

    let mappings = build_class_mappings(&scan.classes, options.method, &options.excluded_set());
    reporter.on_event(&ProgressEvent::MappingsBuilt { total: mappings.len() });
    summary.total_classes = mappings.len();
    summary.class_mappings = mappings;
    reporter.on_event(&ProgressEvent::RunCompleted {
        css_files: scan.css_files.len(),
        html_files: scan.html_files.len(),
        classes: summary.total_classes,
        errors: summary.errors.len(),
    });
    Ok(summary.finalize())
}

/// Full run: everything `scan_project` does, then the two rewrite phases
/// writing `<stem><suffix><ext>` siblings. Originals are never modified.
pub fn obfuscate_project(
    options: &ObfuscationOptions,
    reporter: &dyn ProgressReporter,
) -> Result<RunSummary, ClassveilError> {
    let scan = scan_phases(options, reporter)?;
    let mut summary = RunSummary::new();
    summary.errors = scan.errors;

    if scan.classes.is_empty() {
        reporter.on_event(&ProgressEvent::NoClassesFound);
        debug!("No classes found to obfuscate");
        return Ok(summary.finalize());
    }

    let mappings = build_class_mappings(&scan.classes, options.method, &options.excluded_set());
    reporter.on_event(&ProgressEvent::MappingsBuilt { total: mappings.len() });
    summary.total_classes = mappings.len();

    let compiled = CompiledMappings::compile(&mappings)?;
    summary.class_mappings = mappings;

    debug!("Processing CSS files...");
    for path in &scan.css_files {
        if options.create_backup {
            back_up_file(path, &mut summary, reporter);
        }
        let outcome = fs::read_to_string(path)
            .map(|content| rewrite_css(&content, &compiled))
            .and_then(|rewritten| {
                let output = obfuscated_file_name(path, &options.output_suffix);
                fs::write(&output, rewritten).map(|()| output)
            });
        match outcome {
            Ok(output) => {
                reporter.on_event(&ProgressEvent::FileRewritten {
                    source: path,
                    output: &output,
                });
                summary.processed_css_files.push(ProcessedFile {
                    original: path.clone(),
                    obfuscated: output,
                });
            }
            Err(e) => record_failure(
                &mut summary.errors,
                reporter,
                path,
                ErrorStage::RewriteCss,
                &e.to_string(),
            ),
        }
    }

    debug!("Processing HTML files...");
    for path in &scan.html_files {
        if options.create_backup {
            back_up_file(path, &mut summary, reporter);
        }
        let outcome = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                rewrite_html(&content, &compiled, &scan.css_files, &options.output_suffix)
                    .map_err(|e| e.to_string())
            })
            .and_then(|rewritten| {
                let output = obfuscated_file_name(path, &options.output_suffix);
                fs::write(&output, rewritten)
                    .map(|()| output)
                    .map_err(|e| e.to_string())
            });
        match outcome {
            Ok(output) => {
                reporter.on_event(&ProgressEvent::FileRewritten {
                    source: path,
                    output: &output,
                });
                summary.processed_html_files.push(ProcessedFile {
                    original: path.clone(),
                    obfuscated: output,
                });
            }
            Err(message) => record_failure(
                &mut summary.errors,
                reporter,
                path,
                ErrorStage::RewriteHtml,
                &message,
            ),
        }
    }

    reporter.on_event(&ProgressEvent::RunCompleted {
        css_files: summary.processed_css_files.len(),
        html_files: summary.processed_html_files.len(),
        classes: summary.total_classes,
        errors: summary.errors.len(),
    });
    debug!(
        "Run complete: {} CSS, {} HTML, {} classes, {} errors",
        summary.processed_css_files.len(),
        summary.processed_html_files.len(),
        summary.total_classes,
        summary.errors.len()
    );

    Ok(summary.finalize())
}

fn back_up_file(path: &Path, summary: &mut RunSummary, reporter: &dyn ProgressReporter) {
    match create_backup(path) {
        Ok(backup) => {
            reporter.on_event(&ProgressEvent::BackupCreated { path: &backup });
            summary.backups_created.push(backup);
        }
        Err(e) => warn!("Failed to back up {}: {}", path.display(), e),
    }
}
