//! Aggregation over scanned files: package rollups and duplicate names.
//!
//! Both passes are total — every scanned file is classified into exactly
//! one package bucket, and every non-test file contributes its extracted
//! names to duplicate detection.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::extract::extract_from_file;
use crate::options::AnalysisOptions;
use crate::stats::{DuplicateEntry, FileRecord, PackageStats};

/// Bucket name for files outside any known package.
pub const ROOT_BUCKET: &str = "root";

/// Classify a file into its package bucket.
///
/// The bucket is the first path segment relative to the scan root when that
/// segment is a known package name; everything else, including files sitting
/// directly at the root, lands in the catch-all bucket.
pub fn package_for(path: &Path, root: &Path, options: &AnalysisOptions) -> String {
    let Ok(relative) = path.strip_prefix(root) else {
        return ROOT_BUCKET.to_string();
    };

    match relative.components().next() {
        Some(first) => {
            let name = first.as_os_str().to_string_lossy();
            if options.packages.contains(name.as_ref()) {
                name.into_owned()
            } else {
                ROOT_BUCKET.to_string()
            }
        }
        None => ROOT_BUCKET.to_string(),
    }
}

/// Roll up per-package file counts and line totals.
///
/// Buckets come back in descending line-count order, with name order as the
/// tie-break so output is stable.
pub fn package_rollup(
    files: &[FileRecord],
    root: &Path,
    options: &AnalysisOptions,
) -> Vec<PackageStats> {
    let mut buckets: BTreeMap<String, PackageStats> = BTreeMap::new();

    for record in files {
        let bucket = package_for(&record.path, root, options);
        buckets
            .entry(bucket.clone())
            .or_insert_with(|| PackageStats::new(bucket))
            .add_file(record);
    }

    let mut stats: Vec<PackageStats> = buckets.into_values().collect();
    stats.sort_by(|a, b| {
        b.total_lines
            .cmp(&a.total_lines)
            .then_with(|| a.name.cmp(&b.name))
    });

    stats
}

/// Find function names declared in more than one file.
///
/// Test files are skipped entirely; names in the exclusion sets never count.
/// Entries come back in name order, each file list in first-seen order.
pub fn find_duplicates(files: &[FileRecord], options: &AnalysisOptions) -> Vec<DuplicateEntry> {
    let mut sightings: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();

    for record in files {
        let file_name = record
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if options.is_test_file(file_name) {
            continue;
        }

        for name in extract_from_file(&record.path) {
            if options.is_excluded_name(&name) {
                continue;
            }
            sightings.entry(name).or_default().push(record.path.clone());
        }
    }

    sightings
        .into_iter()
        .filter(|(_, paths)| paths.len() > 1)
        .map(|(name, paths)| DuplicateEntry { name, files: paths })
        .collect()
}
