use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use output::OutputFormat;

/// pagedb - Paged SQL database toolkit
#[derive(Parser)]
#[command(name = "pagedb")]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Start an interactive SQL session
  Repl {
    /// Database file to open for `.dbinfo`
    #[arg(long)]
    db: Option<PathBuf>,
  },

  /// Parse a single SQL statement and print the result
  Parse {
    /// The statement to parse
    sql: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
  },

  /// Show the build recipe descriptor
  Recipe {
    /// Load the descriptor from a TOML file instead of the built-in recipe
    #[arg(long)]
    file: Option<PathBuf>,

    /// Apply the output-folder convention under this base path
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
  },
}

fn main() -> Result<()> {
  // Initialize logging
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .without_time()
    .init();

  let cli = Cli::parse();

  match cli.command {
    Commands::Repl { db } => cmd::cmd_repl(db.as_deref()),
    Commands::Parse { sql, format } => cmd::cmd_parse(&sql, format),
    Commands::Recipe {
      file,
      layout,
      format,
    } => cmd::cmd_recipe(file.as_deref(), layout.as_deref(), format),
  }
}
