//! Integration tests for codetally CLI

use std::fs;
use std::path::Path;
use std::process::Command;

fn run_codetally(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "codetally", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn create_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// A tree with a duplicate declaration split across two 5-line files.
fn create_sample_tree(root: &Path) {
    create_file(
        root,
        "src/a.ts",
        "export function foo() {}\n// one\n// two\n// three\n// four\n",
    );
    create_file(
        root,
        "src/b.ts",
        "const foo = () => 1;\n// one\n// two\n// three\n// four\n",
    );
    create_file(root, "scripts/run.sh", "#!/bin/sh\necho ok\n");
    create_file(root, "node_modules/dep/index.ts", "ignored\n");
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_codetally(&["--help"]);

    assert!(success);
    assert!(stdout.contains("codetally"));
    assert!(stdout.contains("--top"));
    assert!(stdout.contains("--bottom"));
    assert!(stdout.contains("--threshold"));
    assert!(stdout.contains("--min-threshold"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_codetally(&["--version"]);

    assert!(success);
    assert!(stdout.contains("codetally"));
}

#[test]
fn test_report_sections() {
    let temp = tempfile::tempdir().unwrap();
    create_sample_tree(temp.path());
    let root = temp.path().to_string_lossy().to_string();

    let (stdout, _, success) = run_codetally(&[root.as_str()]);

    assert!(success);
    assert!(stdout.contains("Scanning:"));
    assert!(stdout.contains("longest code files"));
    assert!(stdout.contains("shortest code files"));
    assert!(stdout.contains("Summary:"));
    assert!(stdout.contains("Per-package breakdown:"));
    assert!(stdout.contains("No files have 1000 lines or more"));
}

#[test]
fn test_duplicate_scenario() {
    let temp = tempfile::tempdir().unwrap();
    create_sample_tree(temp.path());
    let root = temp.path().to_string_lossy().to_string();

    let (stdout, _, success) = run_codetally(&[root.as_str()]);

    assert!(success);
    // skipped directories never show up
    assert!(!stdout.contains("node_modules"));
    // src bucket: 2 files, 10 lines, avg 5
    let row = stdout
        .lines()
        .find(|l| l.starts_with("src"))
        .expect("src package row");
    assert!(row.contains("2"));
    assert!(row.contains("10"));
    assert!(row.trim_end().ends_with('5'));
    // foo declared in both files
    assert!(stdout.contains("1 function name(s) appear in multiple files"));
    assert!(stdout.contains("- foo:"));
    assert!(stdout.contains("src/a.ts"));
    assert!(stdout.contains("src/b.ts"));
}

#[test]
fn test_long_threshold_boundary() {
    let temp = tempfile::tempdir().unwrap();
    create_file(temp.path(), "src/exact.ts", &"x\n".repeat(12));
    let root = temp.path().to_string_lossy().to_string();

    let (stdout, _, success) = run_codetally(&[root.as_str(), "--threshold", "12"]);

    assert!(success);
    assert!(stdout.contains("Warning: 1 file(s) have 12 lines or more"));
    assert!(stdout.contains("- src/exact.ts (12 lines)"));
}

#[test]
fn test_json_output() {
    let temp = tempfile::tempdir().unwrap();
    create_sample_tree(temp.path());
    let root = temp.path().to_string_lossy().to_string();

    let (stdout, _, success) = run_codetally(&[root.as_str(), "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["files"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["duplicates"][0]["name"], "foo");
    assert!(parsed["packages"]
        .as_array()
        .unwrap()
        .iter()
        .any(|p| p["name"] == "src"));
}

#[test]
fn test_exclude_pattern() {
    let temp = tempfile::tempdir().unwrap();
    create_sample_tree(temp.path());
    let root = temp.path().to_string_lossy().to_string();

    let (stdout, _, success) = run_codetally(&[root.as_str(), "--exclude", "**/scripts/**"]);

    assert!(success);
    assert!(!stdout.contains("run.sh"));
    assert!(stdout.contains("Code files: 2"));
}

#[test]
fn test_idempotent_output() {
    let temp = tempfile::tempdir().unwrap();
    create_sample_tree(temp.path());
    let root = temp.path().to_string_lossy().to_string();

    let (first, _, success_first) = run_codetally(&[root.as_str()]);
    let (second, _, success_second) = run_codetally(&[root.as_str()]);

    assert!(success_first);
    assert!(success_second);
    assert_eq!(first, second);
}

#[test]
fn test_invalid_path() {
    let (_, stderr, success) = run_codetally(&["/nonexistent/path"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("scan root does not exist"));
}
