//! SQL front end: tokenizer and statement parser.

pub mod ast;
pub mod parser;
pub mod token;
pub mod tokenizer;
