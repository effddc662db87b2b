//! Error types for pagedb-recipe

use thiserror::Error;

/// Errors that can occur while loading or validating a recipe descriptor.
///
/// A descriptor either parses to valid static data or it does not; there is
/// no partial or recovered state.
#[derive(Debug, Error)]
pub enum RecipeError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Malformed descriptor: {0}")]
  Parse(#[from] toml::de::Error),

  #[error("Malformed requirement '{0}': expected '<name>/<version>'")]
  MalformedRequirement(String),

  #[error("Requirement '{0}' has an empty version pin")]
  EmptyVersion(String),

  #[error("Descriptor declares no build settings")]
  NoSettings,

  #[error("Requirement '{0}' appears in both the runtime and test lists")]
  OverlappingRequirement(String),
}
