// classveil/src/ui.rs
//! Console presentation of run results.
//!
//! Human-readable output goes to stderr so stdout stays clean for JSON
//! export; the mapping table is the one stdout artifact of `scan`.

use std::io;

use is_terminal::IsTerminal;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use owo_colors::{OwoColorize, Style};

use classveil_core::{ClassMapping, RunSummary};

fn style_if(enabled: bool, style: Style) -> Style {
    if enabled {
        style
    } else {
        Style::new()
    }
}

/// Prints the end-of-run summary to stderr.
pub fn print_run_summary(summary: &RunSummary, quiet: bool) {
    if quiet {
        return;
    }
    let colored = io::stderr().is_terminal();
    let ok = style_if(colored, Style::new().green().bold());
    let bad = style_if(colored, Style::new().red().bold());

    eprintln!("{}", "Processing complete".style(ok));
    eprintln!("  CSS files processed:  {}", summary.processed_css_files.len());
    eprintln!("  HTML files processed: {}", summary.processed_html_files.len());
    eprintln!("  Classes obfuscated:   {}", summary.total_classes);
    if !summary.backups_created.is_empty() {
        eprintln!("  Backups created:      {}", summary.backups_created.len());
    }

    if summary.has_errors() {
        eprintln!(
            "{}",
            format!("Errors encountered: {}", summary.errors.len()).style(bad)
        );
        for error in &summary.errors {
            eprintln!("   - {error}");
        }
    }
}

/// Prints the mapping table to stdout, truncated to `limit` rows when set.
pub fn print_mapping_table(mappings: &[ClassMapping], limit: Option<usize>) {
    let shown = limit.unwrap_or(mappings.len()).min(mappings.len());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Original", "Obfuscated"]);
    for mapping in &mappings[..shown] {
        table.add_row(vec![mapping.original.as_str(), mapping.obfuscated.as_str()]);
    }

    println!("{table}");
    if shown < mappings.len() {
        println!("... and {} more", mappings.len() - shown);
    }
}
