//! Typed configuration for aggregation and reporting.
//!
//! All exclusion lists live here as immutable values, constructed once at
//! startup and passed by reference into the pipeline.

use std::collections::BTreeSet;

/// Function names too generic to be meaningful duplicates.
const COMMON_NAMES: &[&str] = &[
    "main", "init", "setup", "teardown", "cleanup", "dispose", "destroy", "open", "close",
    "connect", "disconnect", "execute", "run", "start", "stop", "render", "update", "refresh",
    "reset", "clear", "flush",
];

/// Name prefixes too generic to be meaningful duplicates.
///
/// The breadth of this list is part of the tool's contract: narrowing it
/// changes which duplicates surface.
const COMMON_PREFIXES: &[&str] = &[
    // transformers
    "normalize",
    "parse",
    "validate",
    "serialize",
    "deserialize",
    "convert",
    "transform",
    "extract",
    "encode",
    "decode",
    // predicates
    "is",
    "has",
    "can",
    "should",
    "will",
    // constructors/factories
    "create",
    "make",
    "build",
    "generate",
    "new",
    // accessors
    "get",
    "set",
    "read",
    "write",
    "load",
    "save",
    "fetch",
    // handlers
    "handle",
    "on",
    "emit",
    // modifiers
    "add",
    "remove",
    "delete",
    "update",
    "insert",
    "append",
    // other common
    "to",
    "from",
    "with",
    "apply",
    "process",
    "resolve",
    "ensure",
    "check",
    "filter",
    "map",
    "reduce",
    "merge",
    "split",
    "join",
    "find",
    "search",
    "register",
    "unregister",
    "subscribe",
    "unsubscribe",
];

/// Filename suffixes identifying test files.
const TEST_FILE_SUFFIXES: &[&str] = &[".test.ts", ".test.tsx", ".spec.ts"];

/// Top-level directories recognized as packages.
const KNOWN_PACKAGES: &[&str] = &[
    "src",
    "apps",
    "extensions",
    "packages",
    "scripts",
    "ui",
    "test",
    "docs",
];

/// Filenames expected to be very short (barrel exports, stubs).
const EXPECTED_SHORT_NAMES: &[&str] = &["index.js", "index.ts", "postinstall.js"];

/// Filename suffixes expected to be very short.
const EXPECTED_SHORT_SUFFIXES: &[&str] = &["-cli.ts"];

/// Configuration for the aggregation passes.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Top-level directory names recognized as package buckets
    pub packages: BTreeSet<String>,
    /// Exact names excluded from duplicate detection
    pub skip_names: BTreeSet<String>,
    /// Name prefixes excluded from duplicate detection
    pub skip_prefixes: Vec<String>,
    /// Filename suffixes marking files skipped by duplicate detection
    pub test_suffixes: Vec<String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            packages: KNOWN_PACKAGES.iter().map(|s| s.to_string()).collect(),
            skip_names: COMMON_NAMES.iter().map(|s| s.to_string()).collect(),
            skip_prefixes: COMMON_PREFIXES.iter().map(|s| s.to_string()).collect(),
            test_suffixes: TEST_FILE_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AnalysisOptions {
    /// Create options with the default exclusion lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a declared name is excluded from duplicate detection.
    pub fn is_excluded_name(&self, name: &str) -> bool {
        self.skip_names.contains(name)
            || self.skip_prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }

    /// Check if a filename marks a test file.
    pub fn is_test_file(&self, file_name: &str) -> bool {
        self.test_suffixes.iter().any(|s| file_name.ends_with(s.as_str()))
    }
}

/// Thresholds and list sizes for report rendering.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// How many of the longest files to list
    pub top: usize,
    /// How many of the shortest files to list
    pub bottom: usize,
    /// Files with at least this many lines are flagged
    pub long_threshold: u64,
    /// Files with at most this many lines are flagged
    pub short_threshold: u64,
    /// Exact filenames exempt from short-file warnings
    pub expected_short_names: BTreeSet<String>,
    /// Filename suffixes exempt from short-file warnings
    pub expected_short_suffixes: Vec<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top: 20,
            bottom: 10,
            long_threshold: 1000,
            short_threshold: 10,
            expected_short_names: EXPECTED_SHORT_NAMES.iter().map(|s| s.to_string()).collect(),
            expected_short_suffixes: EXPECTED_SHORT_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ReportOptions {
    /// Create options with the default thresholds and list sizes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many of the longest files to list.
    pub fn top(mut self, n: usize) -> Self {
        self.top = n;
        self
    }

    /// Set how many of the shortest files to list.
    pub fn bottom(mut self, n: usize) -> Self {
        self.bottom = n;
        self
    }

    /// Set the long-file threshold (inclusive).
    pub fn long_threshold(mut self, lines: u64) -> Self {
        self.long_threshold = lines;
        self
    }

    /// Set the short-file threshold (inclusive).
    pub fn short_threshold(mut self, lines: u64) -> Self {
        self.short_threshold = lines;
        self
    }

    /// Check if a filename is expected to be short.
    pub fn is_expected_short(&self, file_name: &str) -> bool {
        self.expected_short_names.contains(file_name)
            || self
                .expected_short_suffixes
                .iter()
                .any(|s| file_name.ends_with(s.as_str()))
    }
}
