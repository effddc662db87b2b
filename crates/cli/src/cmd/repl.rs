//! Implementation of the `pagedb repl` command.
//!
//! Interactive loop with the `db > ` prompt. Lines starting with `.` are
//! meta commands; anything else is parsed as a SQL statement and its
//! summary (or parse error) is printed. The session ends on `.exit` or EOF.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::debug;

use pagedb_core::{InputBuffer, Pager, parse};

use crate::output::symbols;

pub fn cmd_repl(db: Option<&Path>) -> Result<()> {
  let mut pager = match db {
    Some(path) => Some(
      Pager::open(path)
        .with_context(|| format!("Failed to open database file: {}", path.display()))?,
    ),
    None => None,
  };
  debug!(db = ?db, "starting interactive session");

  let stdin = io::stdin();
  let mut input = InputBuffer::new(stdin.lock());

  loop {
    print!("db > ");
    io::stdout().flush()?;

    let line = input.read_line()?.trim().to_string();
    if input.is_eof() {
      println!();
      break;
    }
    if line.is_empty() {
      continue;
    }

    if line.starts_with('.') {
      if handle_meta_command(&line, pager.as_mut()) == MetaResult::Exit {
        break;
      }
      continue;
    }

    match parse(&line) {
      Ok(statement) => println!("{} {}", symbols::SUCCESS.green(), statement),
      Err(err) => println!("{} {}", symbols::ERROR.red(), err),
    }
  }

  Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum MetaResult {
  Continue,
  Exit,
}

fn handle_meta_command(line: &str, pager: Option<&mut Pager>) -> MetaResult {
  match line {
    ".exit" | ".quit" => MetaResult::Exit,
    ".help" => {
      println!(".exit    End the session");
      println!(".help    Show this help");
      println!(".dbinfo  Show database file statistics");
      MetaResult::Continue
    }
    ".dbinfo" => {
      match pager {
        Some(pager) => {
          println!("Pages:      {}", pager.page_count());
          println!("Cache hits: {}", pager.cache_hits());
        }
        None => println!("No database file open (start with --db <file>)."),
      }
      MetaResult::Continue
    }
    _ => {
      println!("Unrecognized command '{}'.", line);
      MetaResult::Continue
    }
  }
}
