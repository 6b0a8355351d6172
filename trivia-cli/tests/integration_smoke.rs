//! Smoke tests to verify command module wiring

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn trivia() -> Command {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("TRIVIA_BIND")
        .env_remove("TRIVIA_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

// === Top Level ===

#[test]
fn test_help_lists_commands() {
    trivia()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("seed"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_unknown_command_fails() {
    trivia().arg("frobnicate").assert().failure();
}

// === Serve / Seed ===

#[test]
fn test_serve_help() {
    trivia()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bind"))
        .stdout(predicate::str::contains("--storage"))
        .stdout(predicate::str::contains("--no-seed"));
}

#[test]
fn test_serve_rejects_unknown_storage() {
    trivia()
        .args(["serve", "--storage", "sqlite"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sqlite"));
}

#[test]
fn test_seed_help() {
    trivia()
        .arg("seed")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--database-url"));
}

// === Config ===

#[test]
fn test_config_path_honors_env() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");

    trivia()
        .env("TRIVIA_CONFIG", &path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn test_config_show_defaults_when_file_missing() {
    let dir = TempDir::new().unwrap();

    trivia()
        .env("TRIVIA_CONFIG", dir.path().join("missing.toml"))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("127.0.0.1:5000"))
        .stdout(predicate::str::contains("postgres://localhost:5432/trivia"));
}

#[test]
fn test_config_show_merges_file_and_env() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[server]\nbind = \"0.0.0.0:8080\"\n\n[storage]\nbackend = \"memory\"\n",
    )
    .unwrap();

    trivia()
        .env("TRIVIA_CONFIG", &path)
        .env("DATABASE_URL", "postgres://db.internal/quiz")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0.0.0:8080"))
        .stdout(predicate::str::contains("memory"))
        .stdout(predicate::str::contains("postgres://db.internal/quiz"));
}

#[test]
fn test_config_show_reports_bad_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[server\nbind = ").unwrap();

    trivia()
        .env("TRIVIA_CONFIG", &path)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

// === Completions ===

#[test]
fn test_completions_bash() {
    trivia()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trivia"));
}
