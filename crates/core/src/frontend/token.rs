//! Token types produced by the tokenizer.

use std::fmt;

/// The lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
  Keyword,
  Identifier,
  Literal,
  Operator,
  Punctuation,
  Eof,
}

impl fmt::Display for TokenKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      TokenKind::Keyword => "keyword",
      TokenKind::Identifier => "identifier",
      TokenKind::Literal => "literal",
      TokenKind::Operator => "operator",
      TokenKind::Punctuation => "punctuation",
      TokenKind::Eof => "end of input",
    };
    write!(f, "{}", name)
  }
}

/// A single token with its source text.
///
/// String literals carry their content without the surrounding quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub text: String,
}

impl Token {
  pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
    Self {
      kind,
      text: text.into(),
    }
  }

  /// The end-of-input marker appended to every token stream
  pub fn eof() -> Self {
    Self::new(TokenKind::Eof, "")
  }
}

impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.kind {
      TokenKind::Eof => write!(f, "end of input"),
      _ => write!(f, "{} `{}`", self.kind, self.text),
    }
  }
}
