//! Recursive-descent SQL statement parser.
//!
//! Grammar (every statement is `;`-terminated):
//!
//! ```text
//! statement ::= select | insert | update | delete | ";"
//! select    ::= "SELECT" ("*" | ident ("," ident)*) "FROM" ident
//!               ["WHERE" condition] ["JOIN" ident "ON" ident "=" ident] ";"
//! insert    ::= "INSERT" "INTO" ident "(" ident ("," ident)* ")"
//!               "VALUES" "(" literal ("," literal)* ")" ";"
//! update    ::= "UPDATE" ident "SET" ident "=" literal
//!               ("," ident "=" literal)* ["WHERE" condition] ";"
//! delete    ::= "DELETE" "FROM" ident ["WHERE" condition] ";"
//! condition ::= ident compare-op literal
//! ```

use thiserror::Error;

use crate::frontend::ast::{
  CompareOp, Condition, DeleteStatement, InsertStatement, JoinClause, Projection, SelectStatement,
  Statement, UpdateStatement,
};
use crate::frontend::token::{Token, TokenKind};
use crate::frontend::tokenizer::{TokenizeError, Tokenizer};

/// Errors that can occur while parsing a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error(transparent)]
  Tokenize(#[from] TokenizeError),

  #[error("Expected {expected}, found {found}")]
  Mismatch { expected: String, found: String },

  #[error("Invalid comparison operator '{0}'")]
  InvalidOperator(String),

  #[error("Expected a statement keyword, found {0}")]
  UnknownStatement(String),
}

/// Token-cursor parser over a single statement string.
#[derive(Debug)]
pub struct Parser {
  tokens: Vec<Token>,
  pos: usize,
}

impl Parser {
  /// Tokenize `input` and prepare to parse it.
  pub fn new(input: &str) -> Result<Self, ParseError> {
    let tokens = Tokenizer::new(input).tokenize()?;
    Ok(Self { tokens, pos: 0 })
  }

  /// Parse one top-level statement, dispatching on the leading keyword.
  pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
    if self.peek().kind == TokenKind::Punctuation && self.peek().text == ";" {
      self.consume_exact(TokenKind::Punctuation, ";")?;
      return Ok(Statement::Empty);
    }

    let token = self.peek();
    if token.kind != TokenKind::Keyword {
      return Err(ParseError::UnknownStatement(token.to_string()));
    }

    match token.text.as_str() {
      "SELECT" => Ok(Statement::Select(self.parse_select()?)),
      "INSERT" => Ok(Statement::Insert(self.parse_insert()?)),
      "UPDATE" => Ok(Statement::Update(self.parse_update()?)),
      "DELETE" => Ok(Statement::Delete(self.parse_delete()?)),
      _ => Err(ParseError::UnknownStatement(token.to_string())),
    }
  }

  pub fn parse_select(&mut self) -> Result<SelectStatement, ParseError> {
    self.consume_exact(TokenKind::Keyword, "SELECT")?;

    let projection = if self.peek().text == "*" {
      self.consume_exact(TokenKind::Punctuation, "*")?;
      Projection::All
    } else {
      let mut columns = Vec::new();
      loop {
        columns.push(self.consume(TokenKind::Identifier)?.text);
        if !self.eat_comma()? {
          break;
        }
      }
      Projection::Columns(columns)
    };

    self.consume_exact(TokenKind::Keyword, "FROM")?;
    let table = self.consume(TokenKind::Identifier)?.text;

    let where_clause = self.parse_optional_where()?;

    let join = if self.peek_is(TokenKind::Keyword, "JOIN") {
      Some(self.parse_join_clause()?)
    } else {
      None
    };

    self.consume_exact(TokenKind::Punctuation, ";")?;
    Ok(SelectStatement {
      projection,
      table,
      where_clause,
      join,
    })
  }

  pub fn parse_insert(&mut self) -> Result<InsertStatement, ParseError> {
    self.consume_exact(TokenKind::Keyword, "INSERT")?;
    self.consume_exact(TokenKind::Keyword, "INTO")?;
    let table = self.consume(TokenKind::Identifier)?.text;

    self.consume_exact(TokenKind::Punctuation, "(")?;
    let mut columns = Vec::new();
    loop {
      columns.push(self.consume(TokenKind::Identifier)?.text);
      if !self.eat_comma()? {
        break;
      }
    }
    self.consume_exact(TokenKind::Punctuation, ")")?;

    self.consume_exact(TokenKind::Keyword, "VALUES")?;
    self.consume_exact(TokenKind::Punctuation, "(")?;
    let mut values = Vec::new();
    loop {
      values.push(self.consume(TokenKind::Literal)?.text);
      if !self.eat_comma()? {
        break;
      }
    }
    self.consume_exact(TokenKind::Punctuation, ")")?;
    self.consume_exact(TokenKind::Punctuation, ";")?;

    Ok(InsertStatement {
      table,
      columns,
      values,
    })
  }

  pub fn parse_update(&mut self) -> Result<UpdateStatement, ParseError> {
    self.consume_exact(TokenKind::Keyword, "UPDATE")?;
    let table = self.consume(TokenKind::Identifier)?.text;

    self.consume_exact(TokenKind::Keyword, "SET")?;
    let mut assignments = Vec::new();
    loop {
      let column = self.consume(TokenKind::Identifier)?.text;
      self.consume_exact(TokenKind::Operator, "=")?;
      let value = self.consume(TokenKind::Literal)?.text;
      assignments.push((column, value));
      if !self.eat_comma()? {
        break;
      }
    }

    let where_clause = self.parse_optional_where()?;
    self.consume_exact(TokenKind::Punctuation, ";")?;

    Ok(UpdateStatement {
      table,
      assignments,
      where_clause,
    })
  }

  pub fn parse_delete(&mut self) -> Result<DeleteStatement, ParseError> {
    self.consume_exact(TokenKind::Keyword, "DELETE")?;
    self.consume_exact(TokenKind::Keyword, "FROM")?;
    let table = self.consume(TokenKind::Identifier)?.text;

    let where_clause = self.parse_optional_where()?;
    self.consume_exact(TokenKind::Punctuation, ";")?;

    Ok(DeleteStatement {
      table,
      where_clause,
    })
  }

  /// `JOIN table ON left = right`; only equality joins are supported.
  fn parse_join_clause(&mut self) -> Result<JoinClause, ParseError> {
    self.consume_exact(TokenKind::Keyword, "JOIN")?;
    let table = self.consume(TokenKind::Identifier)?.text;
    self.consume_exact(TokenKind::Keyword, "ON")?;

    let column = self.consume(TokenKind::Identifier)?.text;
    self.consume_exact(TokenKind::Operator, "=")?;
    let value = self.consume(TokenKind::Identifier)?.text;

    Ok(JoinClause {
      table,
      on: Condition {
        column,
        op: CompareOp::Eq,
        value,
      },
    })
  }

  fn parse_optional_where(&mut self) -> Result<Option<Condition>, ParseError> {
    if !self.peek_is(TokenKind::Keyword, "WHERE") {
      return Ok(None);
    }
    self.consume_exact(TokenKind::Keyword, "WHERE")?;
    Ok(Some(self.parse_condition()?))
  }

  fn parse_condition(&mut self) -> Result<Condition, ParseError> {
    let column = self.consume(TokenKind::Identifier)?.text;
    let op_token = self.consume(TokenKind::Operator)?;
    let op = CompareOp::from_token(&op_token.text)
      .ok_or_else(|| ParseError::InvalidOperator(op_token.text.clone()))?;
    let value = self.consume(TokenKind::Literal)?.text;

    Ok(Condition { column, op, value })
  }

  /// Lookahead at the current token without consuming it.
  fn peek(&self) -> &Token {
    // The token stream always ends with Eof, which is never consumed.
    &self.tokens[self.pos.min(self.tokens.len() - 1)]
  }

  fn peek_is(&self, kind: TokenKind, text: &str) -> bool {
    let token = self.peek();
    token.kind == kind && token.text == text
  }

  /// Consume the next token if it has the given kind.
  fn consume(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
    let token = self.peek();
    if token.kind != kind {
      return Err(ParseError::Mismatch {
        expected: kind.to_string(),
        found: token.to_string(),
      });
    }
    let token = token.clone();
    self.pos += 1;
    Ok(token)
  }

  /// Consume the next token if it has the given kind and exact text.
  fn consume_exact(&mut self, kind: TokenKind, text: &str) -> Result<Token, ParseError> {
    let token = self.peek();
    if token.kind != kind || token.text != text {
      return Err(ParseError::Mismatch {
        expected: format!("{} `{}`", kind, text),
        found: token.to_string(),
      });
    }
    let token = token.clone();
    self.pos += 1;
    Ok(token)
  }

  /// Consume a separating comma if present; reports whether a list continues.
  fn eat_comma(&mut self) -> Result<bool, ParseError> {
    if self.peek_is(TokenKind::Punctuation, ",") {
      self.consume_exact(TokenKind::Punctuation, ",")?;
      Ok(true)
    } else {
      Ok(false)
    }
  }
}

/// Parse a single statement string.
pub fn parse(input: &str) -> Result<Statement, ParseError> {
  Parser::new(input)?.parse_statement()
}
