//! SQL tokenizer.
//!
//! Splits a statement string into [`Token`]s: upper-case keywords,
//! identifiers, numeric and single-quoted string literals, comparison
//! operators (with `==`, `!=`, `<=`, `>=` folded into one token), and
//! punctuation. A final [`TokenKind::Eof`] token is always appended.

use thiserror::Error;

use crate::frontend::token::{Token, TokenKind};

const KEYWORDS: &[&str] = &[
  "SELECT", "FROM", "WHERE", "INSERT", "UPDATE", "DELETE", "INTO", "SET", "VALUES", "JOIN", "ON",
];

const OPERATORS: &[char] = &['=', '<', '>', '!', '+'];

const PUNCTUATION: &[char] = &[',', ';', '(', ')', '*'];

fn is_keyword(word: &str) -> bool {
  KEYWORDS.contains(&word)
}

fn is_operator(ch: char) -> bool {
  OPERATORS.contains(&ch)
}

fn is_punctuation(ch: char) -> bool {
  PUNCTUATION.contains(&ch)
}

/// Errors that can occur while tokenizing a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
  #[error("Unexpected character '{0}'")]
  UnexpectedCharacter(char),

  #[error("Unterminated string literal")]
  UnterminatedString,
}

/// Single-pass tokenizer over a statement string.
#[derive(Debug)]
pub struct Tokenizer<'a> {
  input: &'a [u8],
  pos: usize,
}

impl<'a> Tokenizer<'a> {
  pub fn new(input: &'a str) -> Self {
    Self {
      input: input.as_bytes(),
      pos: 0,
    }
  }

  /// Tokenize the whole input, appending a final EOF token.
  pub fn tokenize(mut self) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::new();

    while let Some(&byte) = self.input.get(self.pos) {
      let ch = byte as char;
      if ch.is_ascii_whitespace() {
        self.pos += 1;
      } else if ch.is_ascii_alphabetic() {
        tokens.push(self.lex_identifier_or_keyword());
      } else if ch.is_ascii_digit() {
        tokens.push(self.lex_number());
      } else if ch == '\'' {
        tokens.push(self.lex_string_literal()?);
      } else if is_operator(ch) {
        tokens.push(self.lex_operator());
      } else if is_punctuation(ch) {
        self.pos += 1;
        tokens.push(Token::new(TokenKind::Punctuation, ch));
      } else {
        return Err(TokenizeError::UnexpectedCharacter(ch));
      }
    }

    tokens.push(Token::eof());
    Ok(tokens)
  }

  fn lex_identifier_or_keyword(&mut self) -> Token {
    let start = self.pos;
    while self
      .input
      .get(self.pos)
      .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_')
    {
      self.pos += 1;
    }
    let word = self.text(start);
    let kind = if is_keyword(&word) {
      TokenKind::Keyword
    } else {
      TokenKind::Identifier
    };
    Token::new(kind, word)
  }

  fn lex_number(&mut self) -> Token {
    let start = self.pos;
    while self
      .input
      .get(self.pos)
      .is_some_and(|b| b.is_ascii_digit() || *b == b'.')
    {
      self.pos += 1;
    }
    Token::new(TokenKind::Literal, self.text(start))
  }

  fn lex_string_literal(&mut self) -> Result<Token, TokenizeError> {
    self.pos += 1; // opening quote
    let start = self.pos;
    while self.input.get(self.pos).is_some_and(|b| *b != b'\'') {
      self.pos += 1;
    }
    if self.pos >= self.input.len() {
      return Err(TokenizeError::UnterminatedString);
    }
    let literal = self.text(start);
    self.pos += 1; // closing quote
    Ok(Token::new(TokenKind::Literal, literal))
  }

  fn lex_operator(&mut self) -> Token {
    let first = self.input[self.pos] as char;
    self.pos += 1;
    // =, <, >, ! fold a following = into a single two-character operator
    if matches!(first, '=' | '<' | '>' | '!') && self.input.get(self.pos) == Some(&b'=') {
      self.pos += 1;
      return Token::new(TokenKind::Operator, format!("{}=", first));
    }
    Token::new(TokenKind::Operator, first)
  }

  fn text(&self, start: usize) -> String {
    String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new(input).tokenize().unwrap()
  }

  #[test]
  fn tokenizes_keywords() {
    let tokens = tokenize("SELECT FROM WHERE");

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0], Token::new(TokenKind::Keyword, "SELECT"));
    assert_eq!(tokens[1], Token::new(TokenKind::Keyword, "FROM"));
    assert_eq!(tokens[2], Token::new(TokenKind::Keyword, "WHERE"));
    assert_eq!(tokens[3], Token::eof());
  }

  #[test]
  fn tokenizes_identifiers_and_literals() {
    let tokens = tokenize("name age 123 'hello'");

    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "name"));
    assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "age"));
    assert_eq!(tokens[2], Token::new(TokenKind::Literal, "123"));
    assert_eq!(tokens[3], Token::new(TokenKind::Literal, "hello"));
    assert_eq!(tokens[4], Token::eof());
  }

  #[test]
  fn tokenizes_operators() {
    let tokens = tokenize("= > < <= >= != +");

    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["=", ">", "<", "<=", ">=", "!=", "+", ""]);
    for token in &tokens[..7] {
      assert_eq!(token.kind, TokenKind::Operator);
    }
    assert_eq!(tokens[7].kind, TokenKind::Eof);
  }

  #[test]
  fn tokenizes_punctuation() {
    let tokens = tokenize(", ; ( ) *");

    assert_eq!(tokens.len(), 6);
    for (token, expected) in tokens.iter().zip([",", ";", "(", ")", "*"]) {
      assert_eq!(token.kind, TokenKind::Punctuation);
      assert_eq!(token.text, expected);
    }
  }

  #[test]
  fn tokenizes_mixed_statement() {
    let tokens = tokenize("SELECT name, age FROM users WHERE age > 18;");

    let expected = [
      (TokenKind::Keyword, "SELECT"),
      (TokenKind::Identifier, "name"),
      (TokenKind::Punctuation, ","),
      (TokenKind::Identifier, "age"),
      (TokenKind::Keyword, "FROM"),
      (TokenKind::Identifier, "users"),
      (TokenKind::Keyword, "WHERE"),
      (TokenKind::Identifier, "age"),
      (TokenKind::Operator, ">"),
      (TokenKind::Literal, "18"),
      (TokenKind::Punctuation, ";"),
      (TokenKind::Eof, ""),
    ];
    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, text)) in tokens.iter().zip(expected) {
      assert_eq!(token.kind, kind);
      assert_eq!(token.text, text);
    }
  }

  #[test]
  fn unterminated_string_literal_is_an_error() {
    let result = Tokenizer::new("SELECT 'hello").tokenize();
    assert_eq!(result, Err(TokenizeError::UnterminatedString));
  }

  #[test]
  fn unexpected_character_is_an_error() {
    let result = Tokenizer::new("SELECT #").tokenize();
    assert_eq!(result, Err(TokenizeError::UnexpectedCharacter('#')));
  }

  #[test]
  fn underscored_identifiers() {
    let tokens = tokenize("user_name");
    assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "user_name"));
  }

  #[test]
  fn decimal_literal() {
    let tokens = tokenize("3.14");
    assert_eq!(tokens[0], Token::new(TokenKind::Literal, "3.14"));
  }

  #[test]
  fn empty_input_yields_only_eof() {
    let tokens = tokenize("");
    assert_eq!(tokens, [Token::eof()]);
  }
}
