//! pagedb-recipe: Build recipe descriptor for pagedb
//!
//! This crate models the declarative build recipe consumed by an external
//! build orchestrator:
//! - `Setting`: the axes that vary a build (os, compiler, build type, arch)
//! - `Generator`: the build-file generators to run
//! - `Requirement`: an exactly-pinned library requirement
//! - `Recipe`: the immutable descriptor tying these together
//!
//! The recipe performs no dependency resolution and no fetching; it only
//! exposes its declared content plus the output-folder convention for
//! generated build files.

mod error;
mod layout;
mod recipe;

pub use error::RecipeError;
pub use layout::OutputLayout;
pub use recipe::{Generator, Recipe, Requirement, Setting};

/// Result type for recipe operations
pub type Result<T> = std::result::Result<T, RecipeError>;
