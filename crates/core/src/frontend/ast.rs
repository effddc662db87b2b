//! Statement types produced by the parser.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A comparison operator in a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
  #[serde(rename = "=")]
  Eq,
  #[serde(rename = "!=")]
  Neq,
  #[serde(rename = "<")]
  Lt,
  #[serde(rename = ">")]
  Gt,
  #[serde(rename = "<=")]
  Lte,
  #[serde(rename = ">=")]
  Gte,
}

impl CompareOp {
  /// Map an operator token's text to a comparison operator, if it is one
  pub fn from_token(text: &str) -> Option<Self> {
    match text {
      "=" => Some(CompareOp::Eq),
      "!=" => Some(CompareOp::Neq),
      "<" => Some(CompareOp::Lt),
      ">" => Some(CompareOp::Gt),
      "<=" => Some(CompareOp::Lte),
      ">=" => Some(CompareOp::Gte),
      _ => None,
    }
  }

  pub const fn as_str(&self) -> &'static str {
    match self {
      CompareOp::Eq => "=",
      CompareOp::Neq => "!=",
      CompareOp::Lt => "<",
      CompareOp::Gt => ">",
      CompareOp::Lte => "<=",
      CompareOp::Gte => ">=",
    }
  }
}

impl fmt::Display for CompareOp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// A `column op value` condition, as used in WHERE clauses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
  pub column: String,
  pub op: CompareOp,
  pub value: String,
}

/// A `JOIN table ON left = right` clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinClause {
  pub table: String,
  pub on: Condition,
}

/// The column projection of a SELECT statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Projection {
  /// `SELECT *`
  All,
  /// An explicit column list
  Columns(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectStatement {
  pub projection: Projection,
  pub table: String,
  pub where_clause: Option<Condition>,
  pub join: Option<JoinClause>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertStatement {
  pub table: String,
  pub columns: Vec<String>,
  pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStatement {
  pub table: String,
  /// `SET column = value` pairs, in source order
  pub assignments: Vec<(String, String)>,
  pub where_clause: Option<Condition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteStatement {
  pub table: String,
  pub where_clause: Option<Condition>,
}

/// A parsed top-level statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Statement {
  Select(SelectStatement),
  Insert(InsertStatement),
  Update(UpdateStatement),
  Delete(DeleteStatement),
  /// A bare `;`
  Empty,
}

impl fmt::Display for Statement {
  /// One-line summary of the statement, as printed by the REPL.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Statement::Select(stmt) => {
        match &stmt.projection {
          Projection::All => write!(f, "SELECT * FROM {}", stmt.table)?,
          Projection::Columns(columns) => {
            write!(f, "SELECT {} column(s) FROM {}", columns.len(), stmt.table)?
          }
        }
        if stmt.where_clause.is_some() {
          write!(f, " with WHERE")?;
        }
        if let Some(join) = &stmt.join {
          write!(f, " joined to {}", join.table)?;
        }
        Ok(())
      }
      Statement::Insert(stmt) => {
        write!(f, "INSERT {} value(s) INTO {}", stmt.values.len(), stmt.table)
      }
      Statement::Update(stmt) => {
        write!(
          f,
          "UPDATE {} setting {} column(s)",
          stmt.table,
          stmt.assignments.len()
        )?;
        if stmt.where_clause.is_some() {
          write!(f, " with WHERE")?;
        }
        Ok(())
      }
      Statement::Delete(stmt) => {
        write!(f, "DELETE FROM {}", stmt.table)?;
        if stmt.where_clause.is_some() {
          write!(f, " with WHERE")?;
        }
        Ok(())
      }
      Statement::Empty => write!(f, "empty statement"),
    }
  }
}
