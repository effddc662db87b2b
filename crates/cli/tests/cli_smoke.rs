//! CLI smoke tests for pagedb.
//!
//! These tests verify that all CLI commands run without panicking and
//! return appropriate exit codes.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the pagedb binary.
fn pagedb_cmd() -> Command {
  cargo_bin_cmd!("pagedb")
}

/// Create a temp directory holding a one-page database file.
fn temp_db() -> TempDir {
  let temp = TempDir::new().unwrap();
  std::fs::write(temp.path().join("test.db"), vec![0u8; 4096]).unwrap();
  temp
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_runs() {
  pagedb_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("pagedb"));
}

#[test]
fn version_runs() {
  pagedb_cmd().arg("--version").assert().success();
}

// =============================================================================
// parse
// =============================================================================

#[test]
fn parse_prints_statement_summary() {
  pagedb_cmd()
    .args(["parse", "SELECT name, age FROM users WHERE age > 18;"])
    .assert()
    .success()
    .stdout(predicate::str::contains("SELECT 2 column(s) FROM users"));
}

#[test]
fn parse_json_emits_serialized_statement() {
  pagedb_cmd()
    .args(["parse", "DELETE FROM users;", "--format", "json"])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"kind\": \"delete\""))
    .stdout(predicate::str::contains("\"table\": \"users\""));
}

#[test]
fn parse_rejects_invalid_sql() {
  pagedb_cmd()
    .args(["parse", "FROBNICATE users;"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to parse statement"));
}

#[test]
fn parse_rejects_missing_semicolon() {
  pagedb_cmd()
    .args(["parse", "SELECT name FROM users"])
    .assert()
    .failure();
}

// =============================================================================
// recipe
// =============================================================================

#[test]
fn recipe_prints_fixed_descriptor() {
  pagedb_cmd()
    .arg("recipe")
    .assert()
    .success()
    .stdout(predicate::str::contains("os, compiler, build_type, arch"))
    .stdout(predicate::str::contains(
      "CMakeToolchain, CMakeDeps, VirtualRunEnv",
    ))
    .stdout(predicate::str::contains("fmt/11.0.2, tl-expected/20190710"))
    .stdout(predicate::str::contains("catch2/3.7.0"));
}

#[test]
fn recipe_json_emits_serialized_descriptor() {
  pagedb_cmd()
    .args(["recipe", "--format", "json"])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"fmt/11.0.2\""))
    .stdout(predicate::str::contains("\"build_type\""));
}

#[test]
fn recipe_layout_creates_generator_folder() {
  let temp = TempDir::new().unwrap();

  pagedb_cmd()
    .arg("recipe")
    .arg("--layout")
    .arg(temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("conan"));

  assert!(temp.path().join("conan").is_dir());
}

#[test]
fn recipe_rejects_malformed_descriptor_file() {
  let temp = TempDir::new().unwrap();
  let path = temp.path().join("recipe.toml");
  std::fs::write(
    &path,
    "settings = [\"linker\"]\ngenerators = [\"CMakeDeps\"]\n",
  )
  .unwrap();

  pagedb_cmd()
    .arg("recipe")
    .arg("--file")
    .arg(&path)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to load recipe descriptor"));
}

#[test]
fn recipe_loads_descriptor_file() {
  let temp = TempDir::new().unwrap();
  let path = temp.path().join("recipe.toml");
  std::fs::write(
    &path,
    "settings = [\"os\", \"arch\"]\ngenerators = [\"CMakeToolchain\"]\n",
  )
  .unwrap();

  pagedb_cmd()
    .arg("recipe")
    .arg("--file")
    .arg(&path)
    .assert()
    .success()
    .stdout(predicate::str::contains("os, arch"));
}

// =============================================================================
// repl
// =============================================================================

#[test]
fn repl_exits_on_exit_command() {
  pagedb_cmd()
    .arg("repl")
    .write_stdin(".exit\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("db > "));
}

#[test]
fn repl_exits_on_eof() {
  pagedb_cmd().arg("repl").write_stdin("").assert().success();
}

#[test]
fn repl_parses_statements() {
  pagedb_cmd()
    .arg("repl")
    .write_stdin("SELECT * FROM users;\n.exit\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("SELECT * FROM users"));
}

#[test]
fn repl_reports_parse_errors_and_continues() {
  pagedb_cmd()
    .arg("repl")
    .write_stdin("SELECT name FROM\nSELECT * FROM users;\n.exit\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Expected"))
    .stdout(predicate::str::contains("SELECT * FROM users"));
}

#[test]
fn repl_reports_unrecognized_meta_commands() {
  pagedb_cmd()
    .arg("repl")
    .write_stdin(".tables\n.exit\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Unrecognized command '.tables'."));
}

#[test]
fn repl_dbinfo_reports_page_count() {
  let temp = temp_db();

  pagedb_cmd()
    .arg("repl")
    .arg("--db")
    .arg(temp.path().join("test.db"))
    .write_stdin(".dbinfo\n.exit\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Pages:      1"));
}

#[test]
fn repl_dbinfo_without_database_file() {
  pagedb_cmd()
    .arg("repl")
    .write_stdin(".dbinfo\n.exit\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("No database file open"));
}

#[test]
fn repl_rejects_missing_database_file() {
  pagedb_cmd()
    .args(["repl", "--db", "/nonexistent/test.db"])
    .write_stdin(".exit\n")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to open database file"));
}
