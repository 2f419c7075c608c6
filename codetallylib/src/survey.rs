//! High-level survey API.
//!
//! This module ties the pipeline together: discover files, roll them up by
//! package, and collect duplicate declaration names. One call, one pass,
//! everything in memory.

use std::path::Path;

use crate::options::AnalysisOptions;
use crate::rollup::{find_duplicates, package_rollup};
use crate::scanner::{discover_files, ScanConfig};
use crate::stats::SurveyResult;
use crate::Result;

/// Options for surveying a source tree.
#[derive(Debug, Clone, Default)]
pub struct SurveyConfig {
    /// File discovery configuration
    pub scan: ScanConfig,
    /// Aggregation configuration
    pub analysis: AnalysisOptions,
}

impl SurveyConfig {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scan configuration.
    pub fn scan(mut self, scan: ScanConfig) -> Self {
        self.scan = scan;
        self
    }

    /// Set the analysis configuration.
    pub fn analysis(mut self, analysis: AnalysisOptions) -> Self {
        self.analysis = analysis;
        self
    }
}

/// Survey a source tree.
///
/// This is the main entry point. It:
/// 1. Discovers code files under the root (fatal if the root is missing)
/// 2. Rolls files up into package buckets
/// 3. Collects duplicate declaration names
///
/// # Example
///
/// ```rust,ignore
/// use codetallylib::{survey_directory, SurveyConfig};
///
/// let result = survey_directory(".", &SurveyConfig::new())?;
/// println!("{} files, {} lines", result.file_count(), result.total_lines());
/// ```
pub fn survey_directory(root: impl AsRef<Path>, config: &SurveyConfig) -> Result<SurveyResult> {
    let root = root.as_ref();

    let files = discover_files(root, &config.scan)?;
    let packages = package_rollup(&files, root, &config.analysis);
    let duplicates = find_duplicates(&files, &config.analysis);

    Ok(SurveyResult {
        root: root.to_path_buf(),
        files,
        packages,
        duplicates,
    })
}
