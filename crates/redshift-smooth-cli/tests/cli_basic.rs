//! Basic CLI E2E tests.
//!
//! Tests invoke the CLI via cargo run with throwaway config files and
//! verify output and exit codes. `--dry-run` keeps redshift itself out of
//! the loop.

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

/// Run the CLI and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "redshift-smooth-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Write a throwaway rules file.
fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config");
    file.flush().expect("Failed to flush temp config");
    file
}

const DAY_SCHEDULE: &str = "\
# morning ramp, daytime hold, evening ramp
09:00 -> 09:30 | 4500K
09:30 -- 17:00 | 6500K
17:00 -> 19:30 | 3500K
";

#[test]
fn test_dry_run_inside_an_instant_rule() {
    let config = write_config(DAY_SCHEDULE);
    let (stdout, _, code) = run_cli(&[
        "--config",
        config.path().to_str().unwrap(),
        "--time",
        "15:00",
        "--dry-run",
    ]);
    assert_eq!(code, 0, "dry run failed");
    assert!(stdout.contains("Temperature to set: 6500K"), "{stdout}");
}

#[test]
fn test_json_output_halfway_through_a_gradual_rule() {
    // 17:00 -> 19:30 ramps 6500K down to 3500K; 18:15 is halfway.
    let config = write_config(DAY_SCHEDULE);
    let (stdout, _, code) = run_cli(&[
        "--config",
        config.path().to_str().unwrap(),
        "--time",
        "18:15",
        "--dry-run",
        "--silent",
        "--json",
    ]);
    assert_eq!(code, 0, "json run failed");

    let payload: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("stdout is not valid JSON");
    assert_eq!(payload["time"], 18 * 60 + 15);
    assert_eq!(payload["temperature"], "5000K");
    assert_eq!(payload["previous"], "6500K");
    assert_eq!(payload["rule"]["transition"], "gradual");
}

#[test]
fn test_missing_config_exits_with_config_status() {
    let (_, stderr, code) = run_cli(&["--config", "/no/such/rules.conf", "--dry-run"]);
    assert_eq!(code, 78, "expected EX_CONFIG");
    assert!(stderr.contains("not found"), "{stderr}");
}

#[test]
fn test_empty_config_exits_cleanly() {
    let config = write_config("# comments only\n\n");
    let (stdout, _, code) = run_cli(&[
        "--config",
        config.path().to_str().unwrap(),
        "--dry-run",
    ]);
    assert_eq!(code, 0, "empty schedule should not be fatal");
    assert!(stdout.contains("No rules"), "{stdout}");
}

#[test]
fn test_malformed_line_exits_with_config_status() {
    let config = write_config("09:00 -- | 5000K\n");
    let (_, stderr, code) = run_cli(&[
        "--config",
        config.path().to_str().unwrap(),
        "--dry-run",
    ]);
    assert_eq!(code, 78, "expected EX_CONFIG");
    assert!(stderr.contains("line 1"), "{stderr}");
}

#[test]
fn test_out_of_range_value_is_clamped() {
    let config = write_config("00:00 -- 23:59 | 500K\n");
    let (stdout, stderr, code) = run_cli(&[
        "--config",
        config.path().to_str().unwrap(),
        "--time",
        "12:00",
        "--dry-run",
    ]);
    assert_eq!(code, 0, "clamped run failed");
    assert!(stdout.contains("Temperature to set: 1000K"), "{stdout}");
    assert!(stderr.contains("1000K"), "{stderr}");
}

#[test]
fn test_silent_suppresses_output() {
    let config = write_config(DAY_SCHEDULE);
    let (stdout, _, code) = run_cli(&[
        "--config",
        config.path().to_str().unwrap(),
        "--time",
        "15:00",
        "--dry-run",
        "--silent",
    ]);
    assert_eq!(code, 0, "silent run failed");
    assert!(stdout.is_empty(), "{stdout}");
}
