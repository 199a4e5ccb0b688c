//! Report formatting and printing utilities.
//!
//! Separate from the library logic so translayer can be used as a library
//! without printing side effects. Every printer has a `_to` variant taking
//! a writer, which is what the tests exercise.

use std::io::{self, Write};

use colored::Colorize;
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

use crate::group::Group;
use crate::manager::{PromoteReport, SaveReport};
use crate::tree::FlatTranslations;
use crate::tree::codec::StructureWarning;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Confirm a created configuration file.
pub fn print_created(file_name: &str) {
    print_created_to(file_name, &mut io::stdout().lock());
}

pub fn print_created_to<W: Write>(file_name: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", file_name).green()
    );
}

/// Print the discovered groups, one per line.
pub fn print_groups(groups: &[Group]) {
    print_groups_to(groups, &mut io::stdout().lock());
}

pub fn print_groups_to<W: Write>(groups: &[Group], writer: &mut W) {
    if groups.is_empty() {
        let _ = writeln!(writer, "{}", "No translation groups found".dimmed());
        return;
    }
    for group in groups {
        let _ = writeln!(writer, "{}", group);
    }
}

/// Print flat translations with the key column aligned by display width,
/// so CJK and emoji keys line up too.
pub fn print_translations(flat: &FlatTranslations) {
    print_translations_to(flat, &mut io::stdout().lock());
}

pub fn print_translations_to<W: Write>(flat: &FlatTranslations, writer: &mut W) {
    if flat.is_empty() {
        let _ = writeln!(writer, "{}", "No translations found".dimmed());
        return;
    }

    let key_width = flat
        .keys()
        .map(|key| UnicodeWidthStr::width(key.as_str()))
        .max()
        .unwrap_or(0);

    for (key, value) in flat {
        let rendered = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        let padding = key_width - UnicodeWidthStr::width(key.as_str());
        let _ = writeln!(
            writer,
            "{}{:pad$}  {}",
            key.cyan(),
            "",
            rendered,
            pad = padding
        );
    }
}

/// Print structural warnings from rebuilding an edited tree.
pub fn print_warnings(warnings: &[StructureWarning]) {
    print_warnings_to(warnings, &mut io::stderr().lock());
}

pub fn print_warnings_to<W: Write>(warnings: &[StructureWarning], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(
            writer,
            "{} {} ({})",
            "warning:".bold().yellow(),
            warning.message,
            warning.key.cyan()
        );
    }
}

/// Confirm a saved override.
pub fn print_saved(report: &SaveReport) {
    print_saved_to(report, &mut io::stdout().lock());
}

pub fn print_saved_to<W: Write>(report: &SaveReport, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Saved {}", report.path.display()).green()
    );
}

/// Summarize a promotion run. Per-group destinations are listed only in
/// verbose mode.
pub fn print_promoted(locale: &str, report: &PromoteReport, verbose: bool) {
    print_promoted_to(locale, report, verbose, &mut io::stdout().lock());
}

pub fn print_promoted_to<W: Write>(
    locale: &str,
    report: &PromoteReport,
    verbose: bool,
    writer: &mut W,
) {
    if report.promoted.is_empty() {
        let _ = writeln!(
            writer,
            "{}",
            format!("No overrides to promote for '{}'", locale).dimmed()
        );
        return;
    }

    if verbose {
        for (group, path) in &report.promoted {
            let _ = writeln!(writer, "  {} {} {}", group, "->".blue(), path.display());
        }
    }
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Promoted {} group(s) for '{}' into the base translations",
            report.promoted.len(),
            locale
        )
        .green()
    );
}
