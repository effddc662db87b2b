//! pagedb-core: Database engine front end and back end
//!
//! This crate provides the fundamental pieces of the pagedb engine:
//! - `input`: line-oriented REPL input buffer
//! - `frontend`: SQL tokenizer and recursive-descent statement parser
//! - `backend`: fixed-size-page file pager with an in-memory page cache

pub mod backend;
pub mod frontend;
pub mod input;

pub use backend::pager::{PAGE_SIZE, Page, Pager, PagerError};
pub use frontend::ast::Statement;
pub use frontend::parser::{ParseError, Parser, parse};
pub use frontend::token::{Token, TokenKind};
pub use frontend::tokenizer::{TokenizeError, Tokenizer};
pub use input::InputBuffer;
