//! Declaration-name extraction for TypeScript sources.
//!
//! Extraction is regex-based and deliberately syntax-unaware: two patterns
//! over line starts, not a parser. Malformed or partial source never fails;
//! a pattern that doesn't match simply contributes nothing. The matching
//! strategy is isolated behind [`extract_declared_names`] so it can be
//! swapped for real parsing without touching the aggregation layer.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

/// Extensions eligible for name extraction (lowercase).
const ANALYZABLE_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// `function name(...)`, optionally exported and/or async.
static FUNCTION_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?:export\s+)?(?:async\s+)?function\s+(\w+)").expect("function pattern")
});

/// `const name = (...) =>` or `const name = arg =>`, optionally exported.
static ARROW_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?:export\s+)?const\s+(\w+)\s*=\s*(?:\([^)]*\)|\w+)\s*=>")
        .expect("arrow pattern")
});

/// Check whether an extension is eligible for name extraction.
pub fn is_analyzable(extension: &str) -> bool {
    ANALYZABLE_EXTENSIONS.contains(&extension.to_lowercase().as_str())
}

/// Extract top-level declaration names from source text.
///
/// Returns the unique names matched by either pattern. Files of
/// non-analyzable extensions yield the empty set.
pub fn extract_declared_names(contents: &str, extension: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();

    if !is_analyzable(extension) {
        return names;
    }

    for pattern in [&*FUNCTION_DECL, &*ARROW_DECL] {
        for captures in pattern.captures_iter(contents) {
            if let Some(name) = captures.get(1) {
                names.insert(name.as_str().to_string());
            }
        }
    }

    names
}

/// Extract declaration names from a file on disk.
///
/// Undecodable bytes are replaced before matching; a file that cannot be
/// read yields the empty set rather than an error.
pub fn extract_from_file(path: &Path) -> BTreeSet<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    if !is_analyzable(extension) {
        return BTreeSet::new();
    }

    match fs::read(path) {
        Ok(bytes) => extract_declared_names(&String::from_utf8_lossy(&bytes), extension),
        Err(_) => BTreeSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(contents: &str) -> Vec<String> {
        extract_declared_names(contents, "ts").into_iter().collect()
    }

    #[test]
    fn test_function_declarations() {
        let src = "function plainOne() {}\n\
                   export function exportedOne(a: number) {}\n\
                   async function asyncOne() {}\n\
                   export async function exportedAsyncOne() {}\n";

        assert_eq!(
            names(src),
            vec!["asyncOne", "exportedAsyncOne", "exportedOne", "plainOne"]
        );
    }

    #[test]
    fn test_arrow_declarations() {
        let src = "const bare = () => 1;\n\
                   export const exported = (a, b) => a + b;\n\
                   const singleArg = x => x * 2;\n";

        assert_eq!(names(src), vec!["bare", "exported", "singleArg"]);
    }

    #[test]
    fn test_indented_declarations_are_not_top_level() {
        let src = "class Widget {\n  function looksNested() {}\n}\n\
                   if (x) {\n    const inner = () => 1;\n}\n";

        assert!(names(src).is_empty());
    }

    #[test]
    fn test_const_without_arrow_is_not_a_function() {
        let src = "const LIMIT = 10;\nexport const NAME = 'tool';\n";

        assert!(names(src).is_empty());
    }

    #[test]
    fn test_duplicate_names_within_file_are_unique() {
        let src = "function twice() {}\nconst twice = () => 1;\n";

        assert_eq!(names(src), vec!["twice"]);
    }

    #[test]
    fn test_non_analyzable_extension_yields_empty() {
        let src = "export function looksLikeTs() {}\n";

        assert!(extract_declared_names(src, "py").is_empty());
        assert!(extract_declared_names(src, "js").is_empty());
        assert!(extract_declared_names(src, "").is_empty());
    }

    #[test]
    fn test_tsx_is_analyzable() {
        let src = "export function Component() {}\n";

        assert_eq!(
            extract_declared_names(src, "tsx").into_iter().collect::<Vec<_>>(),
            vec!["Component"]
        );
    }

    #[test]
    fn test_malformed_source_never_fails() {
        let src = "export function (((\nconst = =>\n\u{fffd}function \n";

        assert!(names(src).is_empty());
    }

    #[test]
    fn test_extract_from_missing_file() {
        assert!(extract_from_file(Path::new("/nonexistent/app.ts")).is_empty());
    }

    #[test]
    fn test_extract_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("widget.ts");
        std::fs::write(&path, "export function draw() {}\nconst hide = () => {};\n").unwrap();

        let found = extract_from_file(&path);

        assert!(found.contains("draw"));
        assert!(found.contains("hide"));
        assert_eq!(found.len(), 2);
    }
}
