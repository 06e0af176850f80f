//! # sqlgram-core
//!
//! A recursive descent SQL statement parser that turns one statement into a
//! language-agnostic intermediate representation.
//!
//! This crate provides:
//! - A hand-written tokenizer tracking line and column of every token
//! - A recursive descent parser with Pratt expression parsing for SELECT,
//!   INSERT, UPDATE, DELETE, DROP and CREATE
//! - Caret diagnostics pointing at the first token that does not fit
//!
//! ## Parsing
//!
//! ```rust
//! use sqlgram_core::parse;
//!
//! let result = parse("drop table dishes cascade").unwrap();
//! assert_eq!(result.command(), "drop_table");
//! assert_eq!(
//!     result.to_json().unwrap(),
//!     r#"{"command":"drop_table","target":["dishes"],"drop_behavior":"cascade"}"#
//! );
//! ```
//!
//! ## Diagnostics
//!
//! ```rust
//! use sqlgram_core::parse;
//!
//! let err = parse("drop table play cascade restrict").unwrap_err();
//! let rendered = err.to_string();
//! let lines: Vec<&str> = rendered.lines().collect();
//! assert_eq!(lines[0], "Parse error: Unexpected token on line 1");
//! assert_eq!(lines[1], "drop table play cascade restrict");
//! assert_eq!(lines[2], format!("{}^ found: \"restrict\"", " ".repeat(24)));
//! ```
//!
//! Nothing is executed: the parser only checks syntax.

pub mod ast;
pub mod ir;
pub mod lexer;
pub mod parser;

use tracing::debug;

pub use ast::{Command, Expr, Statement};
pub use ir::{Fields, ParseResult, Value};
pub use lexer::{Lexer, Token, TokenKind, TokenStream};
pub use parser::{ParseError, ParseErrorKind, Parser};

/// Parses one SQL statement into its typed AST.
///
/// # Errors
///
/// Returns a [`ParseError`] at the first token that does not fit the grammar.
pub fn parse_statement(sql: &str) -> Result<Statement, ParseError> {
    match Parser::new(sql).parse_statement() {
        Ok(statement) => {
            debug!(command = statement.command().as_str(), "parsed statement");
            Ok(statement)
        }
        Err(err) => {
            debug!(
                kind = ?err.kind,
                line = err.line,
                column = err.column,
                found = %err.found,
                "rejected statement: {}",
                err.message
            );
            Err(err)
        }
    }
}

/// Parses one SQL statement into its intermediate representation.
///
/// # Errors
///
/// Returns a [`ParseError`] at the first token that does not fit the grammar.
pub fn parse(sql: &str) -> Result<ParseResult, ParseError> {
    parse_statement(sql).map(ParseResult::from)
}
