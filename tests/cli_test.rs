use std::io::Write;
use std::process::{Command, Output, Stdio};

use chrono::{Duration, Utc};
use notify_token::config::{GeneratorConfig, DEFAULT_SECRET};
use notify_token::generator;

const GENERATE: &str = env!("CARGO_BIN_EXE_notify-token");
const VERIFY: &str = env!("CARGO_BIN_EXE_verify_token");

const CONFIG_VARS: [&str; 6] = [
    "JWT_SECRET",
    "TOKEN_SUBJECT",
    "TOKEN_EMAIL",
    "TOKEN_VALIDITY_DAYS",
    "NOTIFICATIONS_ENDPOINT",
    "RUST_LOG",
];

/// Runs a binary in an empty directory so no stray `.env` is picked up.
fn command(bin: &str, dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(bin);
    cmd.current_dir(dir.path());
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn generate_token(dir: &tempfile::TempDir) -> String {
    let output = command(GENERATE, dir)
        .arg("--token-only")
        .output()
        .expect("run notify-token");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    stdout(&output).trim_end().to_string()
}

#[test]
fn test_token_only_prints_single_line() {
    let dir = tempfile::tempdir().unwrap();
    let output = command(GENERATE, &dir)
        .arg("--token-only")
        .output()
        .expect("run notify-token");

    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 1, "stdout: {out:?}");
    assert_eq!(lines[0].split('.').count(), 3);
    assert!(!out.contains("USAGE INSTRUCTIONS"));
}

#[test]
fn test_full_report_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let output = command(GENERATE, &dir).output().expect("run notify-token");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("VALID JWT TOKEN FOR TESTING"));
    assert!(out.contains("http://localhost:3000/notifications/health"));
}

#[test]
fn test_verify_reads_token_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let token = generate_token(&dir);

    let mut child = command(VERIFY, &dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn verify_token");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(format!("{token}\n").as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Token is valid for user: user123"));
    assert!(out.contains("\"sub\": \"user123\""));
    assert!(out.contains("\"email\": \"user@example.com\""));
    assert!(out.contains("Expires in 364 days") || out.contains("Expires in 365 days"));
}

#[test]
fn test_verify_reads_token_from_argv() {
    let dir = tempfile::tempdir().unwrap();
    let token = generate_token(&dir);

    let output = command(VERIFY, &dir).arg(&token).output().unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("\"sub\": \"user123\""));
}

#[test]
fn test_verify_wrong_secret_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let token = generate_token(&dir);

    let output = command(VERIFY, &dir)
        .args(["--secret", "other", &token])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Failed to verify token"));
}

#[test]
fn test_verify_expired_token_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        validity: Duration::days(1),
        ..GeneratorConfig::default()
    };
    let report = generator::generate_at(&config, Utc::now() - Duration::days(3)).unwrap();

    let output = command(VERIFY, &dir).arg(report.token()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_zero_days_exits_1_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = command(GENERATE, &dir).args(["--days", "0"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert_eq!(err.matches("invalid configuration").count(), 1, "stderr: {err}");
    assert!(!err.contains("Invalid configuration"));
}

#[test]
fn test_explicit_default_secret_warning_text() {
    let dir = tempfile::tempdir().unwrap();
    let output = command(GENERATE, &dir)
        .env("JWT_SECRET", DEFAULT_SECRET)
        .arg("--token-only")
        .output()
        .unwrap();

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("using the development default secret"), "stderr: {err}");
    assert!(!err.contains("not set"));
}
