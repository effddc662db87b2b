//! Output-folder conventions for generated build files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::RecipeError;
use crate::recipe::Recipe;

/// Folder name generator output is directed into, under the base path.
const GENERATORS_FOLDER: &str = "conan";

/// The selected output locations for a recipe under a base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
  /// The base path the layout was applied under
  pub base: PathBuf,
  /// Where build-file generators write their output
  pub generators: PathBuf,
}

impl Recipe {
  /// Apply the output-folder convention under `base`.
  ///
  /// Creates (or reuses) the generator output folder `<base>/conan` and
  /// returns the selected locations. No other filesystem mutation happens
  /// here; the generators themselves are invoked by the orchestrator.
  pub fn apply_layout(&self, base: &Path) -> Result<OutputLayout, RecipeError> {
    let generators = base.join(GENERATORS_FOLDER);
    fs::create_dir_all(&generators)?;
    debug!(path = %generators.display(), "selected generator output folder");

    Ok(OutputLayout {
      base: base.to_path_buf(),
      generators,
    })
  }
}
