//! CLI integration tests for the `lensgate` binary.
//!
//! These tests run the actual compiled binary via
//! `std::process::Command` to verify end-to-end CLI behavior. The gate
//! stage needs no network, so it is exercised fully; the networked
//! stages are covered by the wiremock tests in `lensgate-stages`.

use std::io::Write;
use std::process::{Command, Stdio};

/// Build a `Command` pointing at the compiled `lensgate` binary.
///
/// Clears `LENSGATE_ENDPOINT` and suppresses tracing output so test
/// assertions only match program output.
fn lensgate_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lensgate"));
    cmd.env_remove("LENSGATE_ENDPOINT");
    cmd.env("RUST_LOG", "off");
    cmd
}

/// Run a subcommand with the given JSON envelope on stdin.
fn run_with_stdin(args: &[&str], stdin_json: &str) -> std::process::Output {
    let mut child = lensgate_bin()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn lensgate");
    child
        .stdin
        .as_mut()
        .expect("stdin piped")
        .write_all(stdin_json.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for lensgate")
}

// ── Version and help ────────────────────────────────────────────────────

#[test]
fn version_output() {
    let output = lensgate_bin()
        .arg("--version")
        .output()
        .expect("failed to run lensgate");

    assert!(output.status.success(), "exit code should be 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("lensgate") && stdout.contains("0.1.0"),
        "version output should contain 'lensgate' and '0.1.0', got: {stdout}"
    );
}

#[test]
fn help_output() {
    let output = lensgate_bin()
        .arg("--help")
        .output()
        .expect("failed to run lensgate");

    assert!(output.status.success(), "exit code should be 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("lensgate classification pipeline CLI"),
        "help output should contain the CLI description, got: {stdout}"
    );
}

#[test]
fn unknown_subcommand_fails() {
    let output = lensgate_bin()
        .arg("this-subcommand-does-not-exist")
        .output()
        .expect("failed to run lensgate");

    assert!(
        !output.status.success(),
        "unknown subcommand should return non-zero exit code"
    );
}

// ── Gate stage through the binary ───────────────────────────────────────

#[test]
fn gate_passes_with_confident_class() {
    let output = run_with_stdin(&["gate"], r#"{"inferences": [0.6, 0.81]}"#);

    assert!(output.status.success(), "gate should pass");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let envelope: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(envelope["statusCode"], 200);
    assert_eq!(envelope["body"], serde_json::json!({}));
}

#[test]
fn gate_fails_with_sentinel_message() {
    let output = run_with_stdin(&["gate"], r#"{"inferences": [0.6, 0.4]}"#);

    assert!(!output.status.success(), "gate should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("THRESHOLD_CONFIDENCE_NOT_MET"),
        "stderr should carry the fixed sentinel, got: {stderr}"
    );
    assert!(
        output.stdout.is_empty(),
        "a failed stage must produce no success envelope"
    );
}

#[test]
fn gate_rejects_malformed_envelope() {
    let output = run_with_stdin(&["gate"], "not json");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("parsing input envelope"),
        "stderr should mention envelope parsing, got: {stderr}"
    );
}

// ── Infer configuration error (no network needed) ───────────────────────

#[test]
fn infer_without_endpoint_is_a_configuration_error() {
    let output = run_with_stdin(
        &["infer", "--endpoint-url", "http://localhost:1"],
        r#"{"encoded_payload": "aGVsbG8="}"#,
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no inference endpoint configured"),
        "stderr should report the configuration error, got: {stderr}"
    );
}
