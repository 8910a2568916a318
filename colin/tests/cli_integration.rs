//! Integration tests for colin CLI

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::{tempdir, TempDir};

fn run_colin(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_colin"))
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// `src/main.rs` (3 counted lines) and `src/util/mod.rs` (2 counted lines),
/// plus `README` (1 counted line) at the top.
fn create_project() -> TempDir {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("src/main.rs"),
        r#"/*
 * The entry point.
 */
fn main() {
    // say hi
    let greeting = "hi";

    println!("{}", greeting); /* trailing */
}
"#,
    );
    write_file(
        &temp.path().join("src/util/mod.rs"),
        "pub fn one() -> u32 {\n    /* the answer */ 42\n}\n",
    );
    write_file(&temp.path().join("README"), "# Title\n\nSome text.\n");
    temp
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_colin(&["--help"]);

    assert!(success);
    assert!(stdout.contains("colin"));
    assert!(stdout.contains("--mode"));
    assert!(stdout.contains("--filters"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_colin(&["--version"]);

    assert!(success);
    assert!(stdout.contains("colin"));
}

#[test]
fn test_total_json_output() {
    let project = create_project();

    let (stdout, _, success) = run_colin(&[path_str(project.path()), "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["lines"], 6);
}

#[test]
fn test_count_subcommand_single_file() {
    let project = create_project();
    let file = project.path().join("src/main.rs");

    let (stdout, _, success) = run_colin(&["count", path_str(&file), "-o", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["lines"], 3);
}

#[test]
fn test_aggregate_mode() {
    let project = create_project();

    let (stdout, _, success) = run_colin(&[
        path_str(project.path()),
        "--mode",
        "aggregate",
        "--output",
        "json",
    ]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = parsed["entries"].as_array().unwrap();
    // README, src
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["lines"], 1);
    assert_eq!(entries[1]["lines"], 5);
    assert_eq!(parsed["total"], 6);
}

#[test]
fn test_flat_mode() {
    let project = create_project();

    let (stdout, _, success) = run_colin(&[
        path_str(project.path()),
        "--mode",
        "flat",
        "--output",
        "json",
    ]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let lines: Vec<u64> = parsed["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["lines"].as_u64().unwrap())
        .collect();
    assert_eq!(lines, vec![1, 3, 2]);
}

#[test]
fn test_table_output() {
    let project = create_project();

    let (stdout, _, success) = run_colin(&[path_str(project.path()), "-m", "flat"]);

    assert!(success);
    assert!(stdout.contains("Entry"));
    assert!(stdout.contains("Lines"));
    assert!(stdout.contains("main.rs"));
    assert!(stdout.contains("Total (3 entries)"));
}

#[test]
fn test_no_filters_counts_every_line() {
    let project = create_project();
    let file = project.path().join("src/util/mod.rs");

    let (stdout, _, success) = run_colin(&[path_str(&file), "--filters", "none", "-o", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["lines"], 3);
}

#[test]
fn test_exclude_pattern() {
    let project = create_project();

    let (stdout, _, success) = run_colin(&[
        path_str(project.path()),
        "--exclude",
        "util",
        "-o",
        "json",
    ]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["lines"], 4);
}

#[test]
fn test_analyze_shows_rejected_lines() {
    let project = create_project();
    let file = project.path().join("src/main.rs");

    let (stdout, _, success) = run_colin(&["analyze", path_str(&file)]);

    assert!(success);
    assert!(stdout.contains("3 of 9 lines counted"));
    assert!(stdout.contains("- // say hi"));
    assert!(!stdout.contains("let greeting"));
}

#[test]
fn test_analyze_show_all_marks_each_line() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("a.rs");
    write_file(&file, "code\n// note\n");

    let (stdout, _, success) = run_colin(&["analyze", path_str(&file), "--show", "all"]);

    assert!(success);
    assert!(stdout.contains("a.rs (1 of 2 lines counted)"));
    assert!(stdout.contains("+ code"));
    assert!(stdout.contains("- // note"));
}

#[test]
fn test_unknown_mode_is_rejected() {
    let (_, stderr, success) = run_colin(&[".", "--mode", "nested"]);

    assert!(!success);
    assert!(stderr.contains("nested"));
}

#[test]
fn test_analyze_json() {
    let project = create_project();

    let (stdout, _, success) = run_colin(&["analyze", path_str(project.path()), "-o", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert!(records[1].get("filtered_lines").is_some());
}

#[test]
fn test_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_colin"))
        .args(["-", "-o", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"a\n\n/* b */\nc\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(parsed["lines"], 2);
}

#[test]
fn test_nonexistent_path() {
    let (_, stderr, success) = run_colin(&["/nonexistent/colin/path"]);

    assert!(!success);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_directory_mode_on_file() {
    let project = create_project();
    let file = project.path().join("README");

    let (_, stderr, success) = run_colin(&[path_str(&file), "--mode", "flat"]);

    assert!(!success);
    assert!(stderr.contains("must refer to a directory"));
}
