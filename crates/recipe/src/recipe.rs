//! The build recipe descriptor and its component types.
//!
//! The descriptor is constructed once (either the built-in product recipe via
//! [`Recipe::default`] or from a TOML file via [`Recipe::load`]), read by the
//! build orchestrator to produce a build plan, and discarded. It holds no
//! mutable state: all accessors are side-effect-free reads over fixed data.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RecipeError;

/// A build variation axis.
///
/// The set of settings is closed: an unknown name in a descriptor file fails
/// deserialization, surfacing as a load-time [`RecipeError::Parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Setting {
  Os,
  Compiler,
  BuildType,
  Arch,
}

impl Setting {
  /// Returns the setting name as used in descriptor files
  pub const fn as_str(&self) -> &'static str {
    match self {
      Setting::Os => "os",
      Setting::Compiler => "compiler",
      Setting::BuildType => "build_type",
      Setting::Arch => "arch",
    }
  }
}

impl fmt::Display for Setting {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// A build-file generator the orchestrator should invoke.
///
/// Each variant names an external tool invocation that emits build-system
/// input files (toolchain definitions, dependency graphs, environment
/// exports) from the recipe's data. Order within the list is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Generator {
  #[serde(rename = "CMakeToolchain")]
  CmakeToolchain,
  #[serde(rename = "CMakeDeps")]
  CmakeDeps,
  #[serde(rename = "VirtualRunEnv")]
  VirtualRunEnv,
}

impl Generator {
  /// Returns the generator reference string as consumed by the orchestrator
  pub const fn as_str(&self) -> &'static str {
    match self {
      Generator::CmakeToolchain => "CMakeToolchain",
      Generator::CmakeDeps => "CMakeDeps",
      Generator::VirtualRunEnv => "VirtualRunEnv",
    }
  }
}

impl fmt::Display for Generator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// A pinned library requirement.
///
/// The version is an exact pin: no range or wildcard semantics are applied
/// anywhere in this crate. Resolution failures belong to the external
/// package fetcher, which receives the pair verbatim.
///
/// Serializes as the descriptor-file form `"name/version"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Requirement {
  pub name: String,
  pub version: String,
}

impl Requirement {
  /// Create a requirement from already-validated parts
  pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      version: version.into(),
    }
  }

  /// Parse a `"name/version"` reference, failing fast on malformed input
  pub fn parse(reference: &str) -> Result<Self, RecipeError> {
    let Some((name, version)) = reference.split_once('/') else {
      return Err(RecipeError::MalformedRequirement(reference.to_string()));
    };
    if name.is_empty() {
      return Err(RecipeError::MalformedRequirement(reference.to_string()));
    }
    if version.is_empty() {
      return Err(RecipeError::EmptyVersion(name.to_string()));
    }
    Ok(Self::new(name, version))
  }
}

impl TryFrom<String> for Requirement {
  type Error = RecipeError;

  fn try_from(reference: String) -> Result<Self, Self::Error> {
    Self::parse(&reference)
  }
}

impl From<Requirement> for String {
  fn from(requirement: Requirement) -> Self {
    requirement.to_string()
  }
}

impl fmt::Display for Requirement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.name, self.version)
  }
}

/// The immutable build recipe descriptor.
///
/// Exposes, to an external build orchestrator:
/// 1. which settings vary the build,
/// 2. which generators to run,
/// 3. which runtime requirements to fetch/build,
/// 4. which test-only requirements to fetch/build.
///
/// The runtime and test requirement lists are disjoint; [`Recipe::validate`]
/// rejects descriptors that declare the same pin in both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
  settings: Vec<Setting>,
  generators: Vec<Generator>,
  #[serde(default)]
  requires: Vec<Requirement>,
  #[serde(default)]
  test_requires: Vec<Requirement>,
}

impl Default for Recipe {
  /// The product's fixed build recipe.
  fn default() -> Self {
    Self {
      settings: vec![
        Setting::Os,
        Setting::Compiler,
        Setting::BuildType,
        Setting::Arch,
      ],
      generators: vec![
        Generator::CmakeToolchain,
        Generator::CmakeDeps,
        Generator::VirtualRunEnv,
      ],
      requires: vec![
        Requirement::new("fmt", "11.0.2"),
        Requirement::new("tl-expected", "20190710"),
      ],
      test_requires: vec![Requirement::new("catch2", "3.7.0")],
    }
  }
}

impl Recipe {
  /// Load and validate a descriptor from a TOML file
  pub fn load(path: &Path) -> Result<Self, RecipeError> {
    let content = fs::read_to_string(path)?;
    Self::parse(&content)
  }

  /// Parse and validate a descriptor from TOML text
  pub fn parse(content: &str) -> Result<Self, RecipeError> {
    let recipe: Self = toml::from_str(content)?;
    recipe.validate()?;
    Ok(recipe)
  }

  /// The build variation settings, in declaration order
  pub fn settings(&self) -> &[Setting] {
    &self.settings
  }

  /// The build-file generators to run
  pub fn generators(&self) -> &[Generator] {
    &self.generators
  }

  /// Requirements needed to build and run the product
  pub fn requirements(&self) -> &[Requirement] {
    &self.requires
  }

  /// Requirements needed only to build and run the tests
  pub fn test_requirements(&self) -> &[Requirement] {
    &self.test_requires
  }

  /// Check the descriptor's structural invariants.
  ///
  /// # Errors
  ///
  /// - [`RecipeError::NoSettings`] if no build settings are declared
  /// - [`RecipeError::EmptyVersion`] if a pin is empty
  /// - [`RecipeError::OverlappingRequirement`] if a (name, version) pair
  ///   appears in both the runtime and test lists
  pub fn validate(&self) -> Result<(), RecipeError> {
    if self.settings.is_empty() {
      return Err(RecipeError::NoSettings);
    }
    for requirement in self.requires.iter().chain(&self.test_requires) {
      if requirement.version.is_empty() {
        return Err(RecipeError::EmptyVersion(requirement.name.clone()));
      }
    }
    for requirement in &self.requires {
      if self.test_requires.contains(requirement) {
        return Err(RecipeError::OverlappingRequirement(requirement.to_string()));
      }
    }
    Ok(())
  }
}
