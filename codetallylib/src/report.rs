//! Plain-text report rendering.
//!
//! The reporter is a pure formatter: it consumes an already-computed
//! [`SurveyResult`] and produces the full report as a `String`. No files
//! are read or written here, and identical input yields byte-identical
//! output.

use crate::options::ReportOptions;
use crate::stats::{relative_label, FileRecord, SurveyResult};

/// Width of the line-count column in ranked lists.
const LINES_WIDTH: usize = 8;
/// Width of the ranked-list separator rule.
const LIST_RULE_WIDTH: usize = 60;

/// Column widths for the per-package table.
const PKG_NAME_WIDTH: usize = 15;
const PKG_FILES_WIDTH: usize = 8;
const PKG_LINES_WIDTH: usize = 10;
const PKG_AVG_WIDTH: usize = 8;

fn file_name(record: &FileRecord) -> &str {
    record
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
}

/// Files sorted by descending line count (path order breaks ties).
fn ranked_longest(result: &SurveyResult, n: usize) -> Vec<&FileRecord> {
    let mut files: Vec<&FileRecord> = result.files.iter().collect();
    files.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.path.cmp(&b.path)));
    files.truncate(n);
    files
}

/// Files sorted by ascending line count (path order breaks ties).
fn ranked_shortest(result: &SurveyResult, n: usize) -> Vec<&FileRecord> {
    let mut files: Vec<&FileRecord> = result.files.iter().collect();
    files.sort_by(|a, b| a.lines.cmp(&b.lines).then_with(|| a.path.cmp(&b.path)));
    files.truncate(n);
    files
}

fn render_ranked_list(
    out: &mut String,
    files: &[&FileRecord],
    result: &SurveyResult,
    flagged: impl Fn(&FileRecord) -> bool,
) {
    out.push_str(&format!("{:>width$}  File\n", "Lines", width = LINES_WIDTH));
    out.push_str(&"-".repeat(LIST_RULE_WIDTH));
    out.push('\n');

    for record in files.iter().copied() {
        let marker = if flagged(record) { "  *" } else { "" };
        out.push_str(&format!(
            "{:>width$}  {}{}\n",
            record.lines,
            relative_label(&record.path, &result.root),
            marker,
            width = LINES_WIDTH
        ));
    }
}

fn render_package_table(out: &mut String, result: &SurveyResult) {
    out.push_str(&format!(
        "{:<name$}  {:>files$}  {:>lines$}  {:>avg$}\n",
        "Package",
        "Files",
        "Lines",
        "Avg",
        name = PKG_NAME_WIDTH,
        files = PKG_FILES_WIDTH,
        lines = PKG_LINES_WIDTH,
        avg = PKG_AVG_WIDTH
    ));
    out.push_str(&"-".repeat(
        PKG_NAME_WIDTH + PKG_FILES_WIDTH + PKG_LINES_WIDTH + PKG_AVG_WIDTH + 6,
    ));
    out.push('\n');

    for package in &result.packages {
        out.push_str(&format!(
            "{:<name$}  {:>files$}  {:>lines$}  {:>avg$}\n",
            package.name,
            package.file_count,
            package.total_lines,
            package.average_lines(),
            name = PKG_NAME_WIDTH,
            files = PKG_FILES_WIDTH,
            lines = PKG_LINES_WIDTH,
            avg = PKG_AVG_WIDTH
        ));
    }
}

/// Render the full survey report.
///
/// Sections, in order: scanned root, top-N longest files, bottom-N shortest
/// files, summary totals, per-package breakdown, and warning sections for
/// long files, short files, and duplicate function names. Every warning
/// section renders an explicit line when its collection is empty, so the
/// output distinguishes "checked, none found" from "not checked".
pub fn render_report(result: &SurveyResult, options: &ReportOptions) -> String {
    let mut out = String::new();

    out.push_str(&format!("Scanning: {}\n", result.root.display()));

    let longest = ranked_longest(result, options.top);
    let shortest = ranked_shortest(result, options.bottom);

    let long_flagged: Vec<&FileRecord> = longest
        .iter()
        .copied()
        .filter(|f| f.lines >= options.long_threshold)
        .collect();
    let short_flagged: Vec<&FileRecord> = shortest
        .iter()
        .copied()
        .filter(|f| f.lines <= options.short_threshold && !options.is_expected_short(file_name(f)))
        .collect();

    out.push_str(&format!("\nTop {} longest code files:\n\n", longest.len()));
    render_ranked_list(&mut out, &longest, result, |f| {
        f.lines >= options.long_threshold
    });

    out.push_str(&format!(
        "\nBottom {} shortest code files:\n\n",
        shortest.len()
    ));
    render_ranked_list(&mut out, &shortest, result, |f| {
        f.lines <= options.short_threshold && !options.is_expected_short(file_name(f))
    });

    out.push_str("\nSummary:\n");
    out.push_str(&format!("  Code files: {}\n", result.file_count()));
    out.push_str(&format!("  Total lines: {}\n", result.total_lines()));
    out.push_str(&format!(
        "  Average lines/file: {}\n",
        result.average_lines()
    ));

    out.push_str("\nPer-package breakdown:\n\n");
    render_package_table(&mut out, result);

    if long_flagged.is_empty() {
        out.push_str(&format!(
            "\nNo files have {} lines or more\n",
            options.long_threshold
        ));
    } else {
        out.push_str(&format!(
            "\nWarning: {} file(s) have {} lines or more (consider refactoring):\n",
            long_flagged.len(),
            options.long_threshold
        ));
        for record in &long_flagged {
            out.push_str(&format!(
                "  - {} ({} lines)\n",
                relative_label(&record.path, &result.root),
                record.lines
            ));
        }
    }

    if short_flagged.is_empty() {
        out.push_str(&format!(
            "\nNo files are {} lines or less\n",
            options.short_threshold
        ));
    } else {
        out.push_str(&format!(
            "\nWarning: {} file(s) are {} lines or less (check if needed):\n",
            short_flagged.len(),
            options.short_threshold
        ));
        for record in &short_flagged {
            out.push_str(&format!(
                "  - {} ({} lines)\n",
                relative_label(&record.path, &result.root),
                record.lines
            ));
        }
    }

    if result.duplicates.is_empty() {
        out.push_str("\nNo duplicate function names\n");
    } else {
        out.push_str(&format!(
            "\nWarning: {} function name(s) appear in multiple files (consider renaming):\n",
            result.duplicates.len()
        ));
        for entry in &result.duplicates {
            out.push_str(&format!("  - {}:\n", entry.name));
            for path in &entry.files {
                out.push_str(&format!("      {}\n", relative_label(path, &result.root)));
            }
        }
    }

    out
}
