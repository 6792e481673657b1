//! CLI integration tests for obfusc8
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn obfusc8() -> Command {
    Command::cargo_bin("obfusc8").unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    obfusc8()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encode payloads"));
}

#[test]
fn test_version() {
    obfusc8()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("obfusc8"));
}

#[test]
fn test_list_methods() {
    obfusc8()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("url"))
        .stdout(predicate::str::contains("base64"))
        .stdout(predicate::str::contains("mixed_case"))
        .stdout(predicate::str::contains("rot13"));
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_encode_default_method_is_url() {
    obfusc8()
        .arg("hello world")
        .assert()
        .success()
        .stdout("hello%20world\n");
}

#[test]
fn test_encode_positional_payload() {
    obfusc8()
        .args(["--method", "base64", "hello world"])
        .assert()
        .success()
        .stdout("aGVsbG8gd29ybGQ=\n");
}

#[test]
fn test_encode_from_stdin() {
    obfusc8()
        .args(["--method", "html"])
        .write_stdin("<script>")
        .assert()
        .success()
        .stdout("&lt;script&gt;\n");
}

#[test]
fn test_stdin_trailing_newline_stripped() {
    obfusc8()
        .args(["--method", "url"])
        .write_stdin("hello world\n")
        .assert()
        .success()
        .stdout("hello%20world\n");
}

#[test]
fn test_method_name_case_insensitive() {
    obfusc8()
        .args(["-m", "ROT13", "abc"])
        .assert()
        .success()
        .stdout("nop\n");
}

#[test]
fn test_encode_rot13() {
    obfusc8()
        .args(["-m", "rot13", "Hello, World!"])
        .assert()
        .success()
        .stdout("Uryyb, Jbeyq!\n");
}

#[test]
fn test_encode_mixed_case() {
    obfusc8()
        .args(["-m", "mixed_case", "AB"])
        .assert()
        .success()
        .stdout("aB\n");
}

#[test]
fn test_encode_from_file() {
    let path = std::env::temp_dir().join("obfusc8_cli_test_payload.txt");
    std::fs::write(&path, "hello world\n").unwrap();

    obfusc8()
        .args(["-m", "url", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("hello%20world\n");

    std::fs::remove_file(&path).unwrap();
}

// ============================================================================
// JSON Output
// ============================================================================

#[test]
fn test_json_output() {
    obfusc8()
        .args(["-m", "html", "--json", "<b>"])
        .assert()
        .success()
        .stdout("{\"method\":\"html\",\"encoded\":\"&lt;b&gt;\"}\n");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_method_fails() {
    obfusc8()
        .args(["-m", "bogus_method", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown encoding method"))
        .stderr(predicate::str::contains("--list"));
}

#[test]
fn test_payload_conflicts_with_file() {
    obfusc8()
        .args(["-m", "url", "abc", "--file", "whatever.txt"])
        .assert()
        .failure();
}
