//! CLI integration tests
//!
//! These run the built `jsreview` binary inside a temporary directory so a
//! stray jsreview.toml in the repository never leaks into the results.

mod common;

use assert_cmd::Command;
use common::{MINIMAL_CONFIG, TestResult};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn jsreview(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jsreview").expect("binary should build");
    cmd.current_dir(dir.path());
    cmd
}

// ============================================================================
// analyze
// ============================================================================

#[test]
fn test_analyze_file_with_issues_exits_one() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("app.js"), "var x = 1;\nif (x == 2) {}\n")?;

    jsreview(&dir)
        .args(["analyze", "app.js", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Issues (2):"))
        .stdout(predicate::str::contains("line 1: warning [medium]"))
        .stdout(predicate::str::contains("line 2: error [high]"))
        .stdout(predicate::str::contains("[ES6+] Use Modern Variable Declarations"))
        .stdout(predicate::str::contains("Maintainability: 85"))
        .stderr(predicate::str::contains("Analyzing app.js..."));
    Ok(())
}

#[test]
fn test_analyze_clean_file_exits_zero() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("clean.js"), "const x = 1;\n")?;

    jsreview(&dir)
        .args(["analyze", "clean.js", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
    Ok(())
}

#[test]
fn test_analyze_reads_stdin() -> TestResult {
    let dir = TempDir::new()?;

    jsreview(&dir)
        .args(["analyze", "-", "--format", "jsonl"])
        .write_stdin("if (a == b) {}\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"record\":\"issue\""))
        .stdout(predicate::str::contains("\"rule_id\":\"loose-equality\""))
        .stdout(predicate::str::contains("\"record\":\"metrics\""));
    Ok(())
}

#[test]
fn test_analyze_blank_input_is_not_an_error() -> TestResult {
    let dir = TempDir::new()?;

    jsreview(&dir)
        .arg("analyze")
        .write_stdin("   \n\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Nothing to analyze"));
    Ok(())
}

#[test]
fn test_analyze_byte_order_mark_file() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("bom.js"), "\u{FEFF}")?;
    fs::write(dir.path().join("app.js"), "\u{FEFF}var x = 1;\nreturn x;\u{FEFF}\n")?;

    jsreview(&dir)
        .args(["analyze", "bom.js"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Nothing to analyze"));

    let output = jsreview(&dir)
        .args(["analyze", "app.js", "-f", "jsonl", "--view", "issues"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("\"code\":\"var x = 1;\""));
    Ok(())
}

#[test]
fn test_analyze_sample_jsonl() -> TestResult {
    let dir = TempDir::new()?;

    let output = jsreview(&dir)
        .args(["analyze", "--sample", "-f", "jsonl"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    let records: Vec<serde_json::Value> = String::from_utf8(output.stdout)?
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;

    let issues: Vec<u64> = records
        .iter()
        .filter(|r| r["record"] == "issue")
        .filter_map(|r| r["line"].as_u64())
        .collect();
    assert_eq!(issues, vec![2, 3, 18]);

    let metrics = records.last().expect("metrics record");
    assert_eq!(metrics["record"], "metrics");
    assert_eq!(metrics["lines"], 22);
    assert_eq!(metrics["functions"], 2);
    assert_eq!(metrics["complexity"], 3);
    assert_eq!(metrics["maintainability"], 85);
    Ok(())
}

#[test]
fn test_analyze_view_metrics_only() -> TestResult {
    let dir = TempDir::new()?;

    jsreview(&dir)
        .args(["analyze", "--sample", "--view", "metrics", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Metrics:"))
        .stdout(predicate::str::contains("Issues").not());
    Ok(())
}

#[test]
fn test_analyze_example_prints_raw_text() -> TestResult {
    let dir = TempDir::new()?;

    jsreview(&dir)
        .args(["analyze", "--sample", "--example", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("// Instead of:\nfor (let i = 0;"))
        .stdout(predicate::str::contains("items.reduce"));
    Ok(())
}

#[test]
fn test_analyze_example_out_of_range() -> TestResult {
    let dir = TempDir::new()?;

    jsreview(&dir)
        .args(["analyze", "--sample", "--example", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No suggestion #3"));
    Ok(())
}

#[test]
fn test_analyze_missing_file() -> TestResult {
    let dir = TempDir::new()?;

    jsreview(&dir)
        .args(["analyze", "missing.js"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

// ============================================================================
// configuration
// ============================================================================

#[test]
fn test_config_disables_rule() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("jsreview.toml"),
        format!("{}\n[rules]\nvar-usage = false\n", MINIMAL_CONFIG),
    )?;
    fs::write(dir.path().join("app.js"), "var x = 1;\n")?;

    jsreview(&dir)
        .args(["analyze", "app.js", "--format", "jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"record\":\"issue\"").not())
        .stdout(predicate::str::contains("\"category\":\"ES6+\""));
    Ok(())
}

#[test]
fn test_config_output_format_and_cli_override() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("jsreview.toml"),
        format!("{}\n[output]\nformat = \"jsonl\"\n", MINIMAL_CONFIG),
    )?;
    fs::write(dir.path().join("app.js"), "let x = 1;\n")?;

    jsreview(&dir)
        .args(["analyze", "app.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"record\":\"metrics\""));

    jsreview(&dir)
        .args(["analyze", "app.js", "-f", "human", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Metrics:"));
    Ok(())
}

#[test]
fn test_invalid_config_exits_three() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("jsreview.toml"), "[jsreview\nversion = ")?;

    jsreview(&dir)
        .args(["analyze", "--sample"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid configuration syntax"));
    Ok(())
}

#[test]
fn test_explicit_config_path() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("other.toml"),
        format!("{}\n[rules]\nloose-equality = false\n", MINIMAL_CONFIG),
    )?;
    fs::write(dir.path().join("app.js"), "if (a == b) {}\n")?;

    jsreview(&dir)
        .args(["--config", "other.toml", "analyze", "app.js"])
        .assert()
        .success();

    jsreview(&dir)
        .args(["--config", "missing.toml", "analyze", "app.js"])
        .assert()
        .code(2);
    Ok(())
}

// ============================================================================
// sample, list, init
// ============================================================================

#[test]
fn test_sample_command() -> TestResult {
    let dir = TempDir::new()?;

    jsreview(&dir)
        .arg("sample")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("function calculateTotal(items) {"))
        .stdout(predicate::str::contains("function validateUser(user) {"));
    Ok(())
}

#[test]
fn test_list_human() -> TestResult {
    let dir = TempDir::new()?;

    jsreview(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rules (5 enabled):"))
        .stdout(predicate::str::contains("missing-semicolon (line)"))
        .stdout(predicate::str::contains("modern-declarations (suggestion)"));
    Ok(())
}

#[test]
fn test_list_jsonl_respects_config() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("jsreview.toml"),
        format!("{}\n[rules]\narray-methods = false\n", MINIMAL_CONFIG),
    )?;

    let output = jsreview(&dir).args(["list", "-f", "jsonl"]).output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().count(), 4);
    assert!(!stdout.contains("array-methods"));
    Ok(())
}

#[test]
fn test_init_creates_config() -> TestResult {
    let dir = TempDir::new()?;

    jsreview(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created jsreview.toml."));

    let content = fs::read_to_string(dir.path().join("jsreview.toml"))?;
    assert!(content.contains("version = \"1\""));

    jsreview(&dir)
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    jsreview(&dir)
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwrote jsreview.toml."));
    Ok(())
}
