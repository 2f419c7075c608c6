//! # codetallylib
//!
//! A source-tree survey library: per-file line counts, per-package rollups,
//! and duplicate function-name detection for TypeScript-heavy monorepos.
//!
//! ## Overview
//!
//! One survey run is a single sequential pass over a directory tree:
//!
//! 1. **Scan** — walk the tree, prune skipped directories (`node_modules`,
//!    build output, VCS metadata), and count lines in every recognized code
//!    file ([`scanner`])
//! 2. **Extract** — pull top-level declaration names out of TypeScript
//!    sources with lightweight pattern matching ([`extract`])
//! 3. **Aggregate** — roll files up into package buckets and collect names
//!    declared in more than one file ([`rollup`])
//! 4. **Report** — format ranked lists, totals, and warning sections into a
//!    plain-text report ([`report`])
//!
//! Everything is best-effort per file: an unreadable file counts as 0 lines
//! and contributes no names. Only a missing or unreadable scan root is an
//! error.
//!
//! ## Example
//!
//! ```rust
//! use codetallylib::{render_report, survey_directory, ReportOptions, SurveyConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Set up a small project
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("src")).unwrap();
//! fs::write(
//!     dir.path().join("src/app.ts"),
//!     "export function launch() {}\n",
//! )
//! .unwrap();
//!
//! // Survey it
//! let result = survey_directory(dir.path(), &SurveyConfig::new()).unwrap();
//! assert_eq!(result.file_count(), 1);
//! assert_eq!(result.packages[0].name, "src");
//!
//! // Render the report
//! let report = render_report(&result, &ReportOptions::new());
//! assert!(report.contains("Total lines: 1"));
//! ```

pub mod error;
pub mod extract;
pub mod options;
pub mod report;
pub mod rollup;
pub mod scanner;
pub mod stats;
pub mod survey;

pub use error::TallyError;
pub use extract::{extract_declared_names, extract_from_file, is_analyzable};
pub use options::{AnalysisOptions, ReportOptions};
pub use report::render_report;
pub use rollup::{find_duplicates, package_for, package_rollup, ROOT_BUCKET};
pub use scanner::{count_lines, discover_files, ScanConfig};
pub use stats::{relative_label, DuplicateEntry, FileRecord, PackageStats, SurveyResult};
pub use survey::{survey_directory, SurveyConfig};

/// Result type for codetallylib operations
pub type Result<T> = std::result::Result<T, TallyError>;
