use std::process::Command;

/// Test helper to run CLI commands and capture output
fn run_cli_command(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .arg("run")
        .arg("--")
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Test helper to check if output contains expected text
fn assert_output_contains(output: &str, expected: &str) {
    assert!(
        output.contains(expected),
        "Output did not contain expected text.\nExpected: {}\nActual output:\n{}",
        expected,
        output
    );
}

#[test]
fn test_cli_help_command() {
    let (stdout, _stderr, exit_code) = run_cli_command(&["--help"]);

    assert_eq!(exit_code, 0);
    assert_output_contains(&stdout, "Determine if a given credit card number passes the Luhn test");
    assert_output_contains(&stdout, "--format");
    assert_output_contains(&stdout, "--verbose");
}

#[test]
fn test_cli_version_command() {
    let (stdout, _stderr, exit_code) = run_cli_command(&["--version"]);

    assert_eq!(exit_code, 0);
    assert_output_contains(&stdout, "0.1.0");
}

#[test]
fn test_cli_no_arguments_prints_hint_and_succeeds() {
    let (stdout, _stderr, exit_code) = run_cli_command(&[]);

    assert_eq!(exit_code, 0);
    assert_output_contains(&stdout, "Please pass at least one 16-digit credit card number");
    assert_output_contains(&stdout, "Spaces and dashes are acceptable");
}

#[test]
fn test_cli_valid_number_passes() {
    let (stdout, _stderr, exit_code) = run_cli_command(&["4539 1488 0343 6467"]);

    assert_eq!(exit_code, 0);
    assert_output_contains(&stdout, "Luhn Tester");
    assert_output_contains(&stdout, "Testing 1 argument(s)");
    assert_output_contains(&stdout, "4539-1488-0343-6467: PASSED");
}

#[test]
fn test_cli_bad_checksum_fails() {
    let (stdout, _stderr, exit_code) = run_cli_command(&["1234567812345678"]);

    assert_eq!(exit_code, 0);
    assert_output_contains(&stdout, "1234-5678-1234-5678: FAILED");
}

#[test]
fn test_cli_short_input_is_invalid() {
    let (stdout, _stderr, exit_code) = run_cli_command(&["123"]);

    assert_eq!(exit_code, 0);
    assert_output_contains(&stdout, "123: INVALID INPUT");
}

#[test]
fn test_cli_multiple_arguments_reported_in_order() {
    let (stdout, _stderr, exit_code) = run_cli_command(&[
        "4539-1488-0343-6467",
        "abcd123456789012",
        "1234567812345678",
    ]);

    assert_eq!(exit_code, 0);
    assert_output_contains(&stdout, "Testing 3 argument(s)");

    let passed = stdout.find("PASSED").expect("missing PASSED line");
    let invalid = stdout.find("INVALID INPUT").expect("missing INVALID INPUT line");
    let failed = stdout.find("FAILED").expect("missing FAILED line");
    assert!(passed < invalid && invalid < failed);
}

#[test]
fn test_cli_json_format() {
    let (stdout, _stderr, exit_code) =
        run_cli_command(&["--format", "json", "4539 1488 0343 6467", "123"]);

    assert_eq!(exit_code, 0);

    let reports: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout is not valid JSON");
    let reports = reports.as_array().expect("expected a JSON array");

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["input"], "4539 1488 0343 6467");
    assert_eq!(reports[0]["normalized"], "4539148803436467");
    assert_eq!(reports[0]["verdict"], "passed");
    assert_eq!(reports[1]["verdict"], "invalid");
}

#[test]
fn test_cli_json_format_has_no_banner() {
    let (stdout, _stderr, exit_code) =
        run_cli_command(&["--format", "json", "4539148803436467"]);

    assert_eq!(exit_code, 0);
    assert!(!stdout.contains("Luhn Tester"));
}

#[test]
fn test_cli_verbose_echoes_normalized_form() {
    let (_stdout, stderr, exit_code) = run_cli_command(&["--verbose", "45-39"]);

    assert_eq!(exit_code, 0);
    assert_output_contains(&stderr, "Info:");
    assert_output_contains(&stderr, "4539");
}
