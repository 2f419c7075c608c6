//! Core data structures for survey results

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single discovered code file and its line count.
///
/// Records are created once by the scanner and never mutated. A file that
/// could not be read has a line count of 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path to the file
    pub path: PathBuf,
    /// Number of lines in the file
    pub lines: u64,
}

impl FileRecord {
    /// Create a new file record.
    pub fn new(path: impl Into<PathBuf>, lines: u64) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }
}

/// Aggregated statistics for one package bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageStats {
    /// Bucket name (a known top-level directory, or the catch-all "root")
    pub name: String,
    /// Number of files classified into this bucket
    pub file_count: u64,
    /// Sum of line counts of exactly those files
    pub total_lines: u64,
}

impl PackageStats {
    /// Create an empty bucket.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_count: 0,
            total_lines: 0,
        }
    }

    /// Accumulate one file into this bucket.
    pub fn add_file(&mut self, record: &FileRecord) {
        self.file_count += 1;
        self.total_lines += record.lines;
    }

    /// Average lines per file (integer division; 0 for an empty bucket).
    pub fn average_lines(&self) -> u64 {
        if self.file_count == 0 {
            0
        } else {
            self.total_lines / self.file_count
        }
    }
}

/// A function name declared in more than one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateEntry {
    /// The declared name
    pub name: String,
    /// Defining files, in first-seen order
    pub files: Vec<PathBuf>,
}

/// Everything computed by one survey run.
///
/// Built fresh per run and held in memory only; there is no persisted state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyResult {
    /// The scanned root directory
    pub root: PathBuf,
    /// All discovered files with their line counts
    pub files: Vec<FileRecord>,
    /// Per-package rollup, ordered by descending total lines
    pub packages: Vec<PackageStats>,
    /// Duplicate declaration names, ordered alphabetically
    pub duplicates: Vec<DuplicateEntry>,
}

impl SurveyResult {
    /// Number of files discovered.
    pub fn file_count(&self) -> u64 {
        self.files.len() as u64
    }

    /// Sum of line counts across all files.
    pub fn total_lines(&self) -> u64 {
        self.files.iter().map(|f| f.lines).sum()
    }

    /// Average lines per file (integer division; 0 when no files were found).
    pub fn average_lines(&self) -> u64 {
        if self.files.is_empty() {
            0
        } else {
            self.total_lines() / self.files.len() as u64
        }
    }
}

/// Compute a path label relative to the scan root, falling back to the full
/// path when the file lives outside it.
pub fn relative_label(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| path.to_string_lossy().to_string())
}
