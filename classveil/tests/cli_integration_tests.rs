// classveil/tests/cli_integration_tests.rs
//! Command-line integration tests for the `classveil` executable.
//!
//! These tests invoke the real binary against temporary project
//! directories, covering the obfuscate happy path, the scan dry run, JSON
//! export, quiet mode, and fatal configuration errors. `tempfile` keeps
//! every test isolated and artifact-free.

use std::fs;
use std::path::Path;

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Builds a `classveil` command with a stable logging environment.
fn classveil_cmd() -> Command {
    let mut cmd = Command::cargo_bin("classveil").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("write fixture");
}

/// One stylesheet, one page that links it.
fn simple_project() -> Result<TempDir> {
    let dir = tempfile::tempdir()?;
    write_file(dir.path(), "style.css", ".box{color:red}");
    write_file(
        dir.path(),
        "index.html",
        "<link rel=\"stylesheet\" href=\"style.css\"><div class=\"box\"></div>",
    );
    Ok(dir)
}

#[test]
fn obfuscate_writes_sibling_files_and_reports_success() -> Result<()> {
    let project = simple_project()?;

    classveil_cmd()
        .arg("obfuscate")
        .arg("-p")
        .arg(project.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Processing complete"))
        .stderr(predicate::str::contains("Classes obfuscated:   1"));

    let css_out = fs::read_to_string(project.path().join("style_obfuscated.css"))?;
    assert_eq!(css_out, ".era{color:red}");

    let html_out = fs::read_to_string(project.path().join("index_obfuscated.html"))?;
    assert!(html_out.contains("href=\"style_obfuscated.css\""));
    assert!(html_out.contains("class=\"era\""));

    // Originals untouched.
    assert_eq!(
        fs::read_to_string(project.path().join("style.css"))?,
        ".box{color:red}"
    );
    Ok(())
}

#[test]
fn excluded_classes_pass_through_unchanged() -> Result<()> {
    let project = simple_project()?;

    classveil_cmd()
        .arg("obfuscate")
        .arg("-p")
        .arg(project.path())
        .arg("-x")
        .arg("box")
        .assert()
        .success();

    let css_out = fs::read_to_string(project.path().join("style_obfuscated.css"))?;
    assert_eq!(css_out, ".box{color:red}");
    Ok(())
}

#[test]
fn backup_flag_copies_originals() -> Result<()> {
    let project = simple_project()?;

    classveil_cmd()
        .arg("obfuscate")
        .arg("-p")
        .arg(project.path())
        .arg("--backup")
        .assert()
        .success()
        .stderr(predicate::str::contains("Backups created:      2"));

    assert_eq!(
        fs::read_to_string(project.path().join("style.css.backup"))?,
        ".box{color:red}"
    );
    Ok(())
}

#[test]
fn invalid_directory_is_a_fatal_error() {
    classveil_cmd()
        .arg("obfuscate")
        .arg("-p")
        .arg("/definitely/not/a/real/path")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid project directory"));
}

#[test]
fn scan_is_a_dry_run_with_a_mapping_table() -> Result<()> {
    let project = simple_project()?;

    classveil_cmd()
        .arg("scan")
        .arg("-p")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Original"))
        .stdout(predicate::str::contains("box"))
        .stdout(predicate::str::contains("era"));

    assert!(!project.path().join("style_obfuscated.css").exists());
    assert!(!project.path().join("index_obfuscated.html").exists());
    Ok(())
}

#[test]
fn scan_json_stdout_emits_valid_json() -> Result<()> {
    let project = simple_project()?;

    let output = classveil_cmd()
        .arg("scan")
        .arg("-p")
        .arg(project.path())
        .arg("--json-stdout")
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let summary: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(summary["total_classes"], 1);
    assert_eq!(summary["class_mappings"][0]["original"], "box");
    Ok(())
}

#[test]
fn obfuscate_json_file_exports_the_summary() -> Result<()> {
    let project = simple_project()?;
    let json_path = project.path().join("summary.json");

    classveil_cmd()
        .arg("obfuscate")
        .arg("-p")
        .arg(project.path())
        .arg("--json-file")
        .arg(&json_path)
        .assert()
        .success();

    let summary: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path)?)?;
    assert_eq!(summary["errors"].as_array().map(Vec::len), Some(0));
    assert_eq!(summary["processed_css_files"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[test]
fn quiet_mode_suppresses_console_output() -> Result<()> {
    let project = simple_project()?;

    classveil_cmd()
        .arg("-q")
        .arg("obfuscate")
        .arg("-p")
        .arg(project.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn options_file_seeds_the_run_and_flags_override_it() -> Result<()> {
    let project = simple_project()?;
    let options_path = project.path().join("classveil.yaml");
    fs::write(&options_path, "method: hex\noutput_suffix: _veiled\n")?;

    classveil_cmd()
        .arg("obfuscate")
        .arg("-p")
        .arg(project.path())
        .arg("--options-file")
        .arg(&options_path)
        .assert()
        .success();

    // hex("box") = "c" + hex bytes of "box".
    let css_out = fs::read_to_string(project.path().join("style_veiled.css"))?;
    assert_eq!(css_out, ".c626f78{color:red}");
    Ok(())
}

#[test]
fn unknown_method_value_is_rejected_by_the_parser() {
    classveil_cmd()
        .arg("obfuscate")
        .arg("-p")
        .arg(".")
        .arg("--method")
        .arg("rot13")
        .assert()
        .failure()
        .stderr(predicate::str::contains("rot13"));
}
