use std::process::Command;

/// Run the `e` binary and capture (stdout, stderr, exit code)
fn run_e(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_e"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute e");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn assert_output_contains(output: &str, expected: &str) {
    assert!(
        output.contains(expected),
        "Output did not contain expected text.\nExpected: {}\nActual output:\n{}",
        expected,
        output
    );
}

fn assert_failed_on(args: &[&str], offending: &str) {
    let (stdout, stderr, exit_code) = run_e(args);

    assert_eq!(exit_code, 1, "args {:?} should fail", args);
    assert!(stdout.is_empty(), "unexpected stdout: {}", stdout);
    assert_output_contains(&stderr, "Error: ");
    assert_output_contains(&stderr, offending);
}

#[test]
fn test_one_hartree() {
    let (stdout, stderr, exit_code) = run_e(&["1 h"]);

    assert_eq!(exit_code, 0);
    assert!(stderr.is_empty(), "unexpected stderr: {}", stderr);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Harthree  : 1");
    assert_eq!(lines[1], "eV        : 27.211386246");
    assert_eq!(lines[5], "nm        : 45.5633525169");
}

#[test]
fn test_separate_value_and_units() {
    let (combined, _, _) = run_e(&["1h"]);
    let (separate, _, exit_code) = run_e(&["1", "h"]);

    assert_eq!(exit_code, 0);
    assert_eq!(combined, separate);
}

#[test]
fn test_negative_value() {
    let (stdout, _stderr, exit_code) = run_e(&["-5", "eV"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().count(), 6);
    assert_output_contains(&stdout, "eV        : -5\n");
}

#[test]
fn test_unparseable_value() {
    assert_failed_on(&["abc"], "'abc'");
}

#[test]
fn test_unsupported_separate_units() {
    assert_failed_on(&["5", "XYZ"], "XYZ");
}

#[test]
fn test_unsupported_combined_units() {
    assert_failed_on(&["5xyz"], "xyz");
}

#[test]
fn test_json_zero_hartree() {
    let (stdout, _stderr, exit_code) = run_e(&["-f", "json", "0h"]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Expected JSON output");
    let entries = value.as_array().expect("Expected JSON array");
    assert_eq!(entries.len(), 6);
    assert_eq!(entries[0]["unit"], "Harthree");
    assert_eq!(entries[0]["value"].as_f64(), Some(0.0));
    assert_eq!(entries[5]["unit"], "nm");
    assert!(entries[5]["value"].is_null());
}

#[test]
fn test_precision_flag() {
    let (stdout, _stderr, exit_code) = run_e(&["-p", "3", "1h"]);

    assert_eq!(exit_code, 0);
    assert_output_contains(&stdout, "eV        : 27.2\n");
}

#[test]
fn test_missing_value_is_usage_error() {
    let (stdout, _stderr, exit_code) = run_e(&[]);

    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
}
