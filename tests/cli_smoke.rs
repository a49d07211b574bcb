#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the binary starts correctly and responds to
//! basic commands without crashing. None of them touch the network.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn dq() -> Command {
    Command::cargo_bin("dq").unwrap()
}

#[test]
fn test_help_displays_usage() {
    dq().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Chat with your documents from the command line",
        ))
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("configure"));
}

#[test]
fn test_version_displays_version() {
    dq().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_chat_help() {
    dq().args(["chat", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("FILE"));
}

#[test]
fn test_configure_show_without_config_uses_default() {
    let temp_dir = TempDir::new().unwrap();

    dq().args(["configure", "--show"])
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("endpoint"))
        .stdout(predicate::str::contains("http://localhost:5000 (default)"));
}

#[test]
fn test_configure_show_reads_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("dq");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[dq]\nendpoint = \"http://qa.internal:8080\"\n",
    )
    .unwrap();

    dq().args(["configure", "--show"])
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("http://qa.internal:8080"));
}

#[test]
fn test_missing_document_argument() {
    dq().write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing document"));
}

#[test]
fn test_nonexistent_document_path() {
    dq().args(["./no_such_file.pdf", "What is X?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to access file"));
}
