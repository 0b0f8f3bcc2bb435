//! Output formatting and printing.
//!
//! Extracted strings go to stdout (or the `--output` file); everything
//! meant for a human goes to stderr so that stdout stays pipeable.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::core::{context::OutputFormat, pipeline::ExtractionStats};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

#[derive(Serialize)]
struct JsonOutput<'a> {
    strings: &'a [String],
}

/// Render `strings` in `format`, newline-terminated.
pub fn render(strings: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(strings
            .iter()
            .map(|s| format!("{}\n", s))
            .collect::<String>()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonOutput { strings })
                .context("Failed to serialize extracted strings")?;
            Ok(json + "\n")
        }
    }
}

/// Write `strings` to `output`, or stdout when it is `None`.
pub fn write_strings(strings: &[String], format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let rendered = render(strings, format)?;
    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")
        }
    }
}

/// Print the verbose run summary to stderr.
pub fn print_summary(stats: &ExtractionStats, unique_strings: usize) {
    print_summary_to(stats, unique_strings, &mut io::stderr().lock());
}

/// Print the run summary to a custom writer.
pub fn print_summary_to<W: Write>(stats: &ExtractionStats, unique_strings: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Processed {} {}: {} matching {}, {} unique {}",
            stats.files_processed,
            plural(stats.files_processed, "file", "files"),
            stats.calls_matched,
            plural(stats.calls_matched, "call", "calls"),
            unique_strings,
            plural(unique_strings, "string", "strings"),
        )
        .green()
    );
    if stats.calls_skipped > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} skipped",
            "warning:".bold().yellow(),
            stats.calls_skipped,
            plural(stats.calls_skipped, "call", "calls"),
        );
    }
}

pub fn print_created(file_name: &str) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", file_name).green()
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
