//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the caller's home directory, .env and STOCKTAKE_* variables
fn stocktake(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stocktake").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("STOCKTAKE_DB")
        .env_remove("STOCKTAKE_SCHEMA")
        .env_remove("STOCKTAKE_CONFIG")
        .env_remove("STOCKTAKE_BIND");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    stocktake(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"));
}

#[test]
fn test_serve_help() {
    let dir = TempDir::new().unwrap();
    stocktake(&dir)
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--schema"));
}

#[test]
fn test_init_db_creates_then_reuses() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("data").join("stocktake.db");

    stocktake(&dir)
        .arg("init-db")
        .arg("--db")
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created database"));
    assert!(db.exists());

    stocktake(&dir)
        .arg("init-db")
        .arg("--db")
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_init_db_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("stocktake.toml");
    std::fs::write(&config, "[database]\npath = \"from-config.db\"\n").unwrap();

    stocktake(&dir)
        .arg("init-db")
        .arg("--config")
        .arg(&config)
        .assert()
        .success();
    assert!(dir.path().join("from-config.db").exists());
}

#[test]
fn test_init_db_missing_schema_fails() {
    let dir = TempDir::new().unwrap();

    stocktake(&dir)
        .arg("init-db")
        .arg("--db")
        .arg(dir.path().join("x.db"))
        .arg("--schema")
        .arg(dir.path().join("missing.sql"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize database"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    stocktake(&dir)
        .arg("init-db")
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}
