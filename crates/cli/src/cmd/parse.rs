//! Implementation of the `pagedb parse` command.
//!
//! Parses one SQL statement and prints either a one-line summary or the
//! serialized statement as JSON.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use pagedb_core::parse;

use crate::output::{OutputFormat, symbols};

pub fn cmd_parse(sql: &str, format: OutputFormat) -> Result<()> {
  let statement = parse(sql).with_context(|| format!("Failed to parse statement: {}", sql))?;

  if format.is_json() {
    let json =
      serde_json::to_string_pretty(&statement).context("Failed to serialize statement")?;
    println!("{}", json);
  } else {
    println!("{} {}", symbols::SUCCESS.green(), statement);
  }

  Ok(())
}
