//! File discovery and line counting.
//!
//! The scanner walks a directory tree, prunes skipped directories, and
//! produces a [`FileRecord`] for every file whose extension is recognized
//! as code. Per-file read failures degrade to a line count of 0; only a
//! missing or unreadable root is an error.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::TallyError;
use crate::stats::FileRecord;
use crate::Result;

/// File extensions recognized as code by default.
const DEFAULT_EXTENSIONS: &[&str] = &[
    "ts", "tsx", "js", "jsx", "mjs", "cjs", // TypeScript/JavaScript
    "swift", // macOS/iOS
    "kt", "java", // Android
    "py", "sh", // scripts
];

/// Directory names never descended into.
const DEFAULT_SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "coverage",
    "__pycache__",
    ".turbo",
    "out",
    ".worktrees",
    "vendor",
    "Pods",
    "DerivedData",
    ".gradle",
    ".idea",
];

/// Configuration for file discovery.
///
/// Built once at startup and passed by reference into the scan; the skip
/// and extension sets are never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory names skipped during traversal (applies at any depth;
    /// nothing beneath a skipped directory is visited)
    pub skip_dirs: BTreeSet<String>,
    /// File extensions recognized as code (lowercase, without the dot)
    pub extensions: BTreeSet<String>,
    /// Glob patterns to include (if empty, include all recognized files)
    pub include: Vec<Pattern>,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Create a config with the default skip and extension sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| TallyError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.include.push(pat);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| TallyError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.exclude.push(pat);
        Ok(self)
    }

    /// Check if a file path matches the filter criteria.
    ///
    /// A path matches if:
    /// 1. Its extension is in the recognized set (case-insensitive)
    /// 2. It doesn't match any exclude pattern
    /// 3. It matches at least one include pattern (or include is empty)
    pub fn matches(&self, path: &Path) -> bool {
        let recognized = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.contains(&ext.to_lowercase()));
        if !recognized {
            return false;
        }

        let path_str = path.to_string_lossy();

        for pattern in &self.exclude {
            if pattern.matches(&path_str) {
                return false;
            }
        }

        if self.include.is_empty() {
            return true;
        }

        self.include.iter().any(|p| p.matches(&path_str))
    }

    /// Check if a directory name is in the skip set.
    pub fn skips_dir(&self, name: &str) -> bool {
        self.skip_dirs.contains(name)
    }
}

/// Count the lines in a file.
///
/// Bytes that do not decode as UTF-8 are replaced before counting. A file
/// that cannot be read at all counts as 0 lines rather than failing.
pub fn count_lines(path: &Path) -> u64 {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).lines().count() as u64,
        Err(_) => 0,
    }
}

/// Discover code files under a root directory.
///
/// Walks the tree, prunes skipped directories, and returns a record for
/// every matching file. Results are sorted by path so repeated runs over an
/// unchanged tree produce identical output.
pub fn discover_files(root: impl AsRef<Path>, config: &ScanConfig) -> Result<Vec<FileRecord>> {
    let root = root.as_ref();

    if !root.is_dir() {
        return Err(TallyError::RootNotFound(root.to_path_buf()));
    }
    // Surface an unreadable root before any scanning starts.
    fs::read_dir(root).map_err(|e| TallyError::RootUnreadable {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();

    let walker = WalkDir::new(root).follow_links(true).into_iter();

    for entry in walker.filter_entry(|e| {
        // Always include the root directory
        if e.depth() == 0 {
            return true;
        }
        // Prune skipped directories so nothing beneath them is visited
        if e.file_type().is_dir() {
            let name = e.file_name().to_str().unwrap_or("");
            return !config.skips_dir(name);
        }
        // Include files
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let path = entry.path();

        if path.is_file() && config.matches(path) {
            files.push(FileRecord::new(path, count_lines(path)));
        }
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(files)
}
