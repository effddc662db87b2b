//! Implementation of the `pagedb recipe` command.
//!
//! Prints the build recipe descriptor consumed by the build orchestrator:
//! the build variation settings, the build-file generators, and the pinned
//! runtime and test requirements. With `--layout`, also applies the
//! output-folder convention under the given base path.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use pagedb_recipe::Recipe;

use crate::output::{OutputFormat, symbols};

pub fn cmd_recipe(
  file: Option<&Path>,
  layout: Option<&Path>,
  format: OutputFormat,
) -> Result<()> {
  let recipe = match file {
    Some(path) => Recipe::load(path)
      .with_context(|| format!("Failed to load recipe descriptor: {}", path.display()))?,
    None => Recipe::default(),
  };

  if format.is_json() {
    let json = serde_json::to_string_pretty(&recipe).context("Failed to serialize recipe")?;
    println!("{}", json);
  } else {
    println!("Settings:      {}", join(recipe.settings()));
    println!("Generators:    {}", join(recipe.generators()));
    println!("Requires:      {}", join(recipe.requirements()));
    println!("Test requires: {}", join(recipe.test_requirements()));
  }

  if let Some(base) = layout {
    let layout = recipe
      .apply_layout(base)
      .with_context(|| format!("Failed to apply layout under {}", base.display()))?;
    println!(
      "{} Generator output folder: {}",
      symbols::INFO.cyan(),
      layout.generators.display()
    );
  }

  Ok(())
}

fn join<T: ToString>(items: &[T]) -> String {
  items
    .iter()
    .map(|item| item.to_string())
    .collect::<Vec<_>>()
    .join(", ")
}
