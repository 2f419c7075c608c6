//! # codetally
//!
//! A CLI tool for surveying source trees: longest/shortest files, per-package
//! line rollups, and duplicate function-name detection.
//!
//! ## Overview
//!
//! codetally is built on top of codetallylib and provides a command-line
//! interface for the survey pipeline. It scans a directory tree, counts
//! lines in every recognized code file, rolls the counts up by top-level
//! package, and flags files that cross the configured length thresholds as
//! well as function names declared in more than one file.
//!
//! ## Usage
//!
//! ```bash
//! # Survey the current directory
//! codetally
//!
//! # Survey a monorepo checkout, showing the 30 longest files
//! codetally ~/work/monorepo --top 30
//!
//! # Tighter length thresholds
//! codetally . -t 500 --min-threshold 3
//!
//! # Filter files with glob patterns
//! codetally . --include "**/src/**" --exclude "**/generated/**"
//!
//! # Machine-readable output
//! codetally . --output json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use codetallylib::{
    render_report, survey_directory, ReportOptions, ScanConfig, SurveyConfig, SurveyResult,
};
use console::Style;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("codetally")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Source-tree survey: longest/shortest files, package rollups, duplicate function names")
        .arg(
            Arg::new("path")
                .help("Directory to scan (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("top")
                .short('n')
                .long("top")
                .value_parser(clap::value_parser!(usize))
                .default_value("20")
                .help("Show top N longest files"),
        )
        .arg(
            Arg::new("bottom")
                .short('b')
                .long("bottom")
                .value_parser(clap::value_parser!(usize))
                .default_value("10")
                .help("Show bottom N shortest files"),
        )
        .arg(
            Arg::new("threshold")
                .short('t')
                .long("threshold")
                .value_parser(clap::value_parser!(u64))
                .default_value("1000")
                .help("Warn about files with at least this many lines"),
        )
        .arg(
            Arg::new("min-threshold")
                .long("min-threshold")
                .value_parser(clap::value_parser!(u64))
                .default_value("10")
                .help("Warn about files with at most this many lines"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Include files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
}

/// Build scan config from matches
fn build_scan_config(matches: &ArgMatches) -> Result<ScanConfig, anyhow::Error> {
    let mut scan = ScanConfig::new();

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            scan = scan.include(pattern)?;
        }
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            scan = scan.exclude(pattern)?;
        }
    }

    Ok(scan)
}

/// Build report options from matches
fn build_report_options(matches: &ArgMatches) -> ReportOptions {
    ReportOptions::new()
        .top(matches.get_one::<usize>("top").copied().unwrap_or(20))
        .bottom(matches.get_one::<usize>("bottom").copied().unwrap_or(10))
        .long_threshold(
            matches
                .get_one::<u64>("threshold")
                .copied()
                .unwrap_or(1000),
        )
        .short_threshold(
            matches
                .get_one::<u64>("min-threshold")
                .copied()
                .unwrap_or(10),
        )
}

/// Run the survey and format the requested output
fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let root = std::fs::canonicalize(path).unwrap_or_else(|_| PathBuf::from(path));

    let scan = build_scan_config(matches)?;
    let config = SurveyConfig::new().scan(scan);

    let result: SurveyResult = survey_directory(&root, &config)
        .with_context(|| format!("failed to survey '{}'", root.display()))?;

    if matches.get_one::<String>("output").map(|s| s.as_str()) == Some("json") {
        return Ok(serde_json::to_string_pretty(&result)?);
    }

    let options = build_report_options(matches);
    Ok(render_report(&result, &options))
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let error_style = Style::new().red().bold();
            eprintln!("{} {:#}", error_style.apply_to("Error:"), e);
            ExitCode::FAILURE
        }
    }
}
