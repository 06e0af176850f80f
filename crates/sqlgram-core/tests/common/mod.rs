#![allow(dead_code)]

use sqlgram_core::ast::{
    CreateTableStatement, DeleteStatement, InsertStatement, SelectStatement, Statement,
    UpdateStatement,
};
use sqlgram_core::{ParseError, ParseResult, Parser};

pub fn parse(sql: &str) -> Statement {
    Parser::new(sql)
        .parse_statement()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    Parser::new(sql)
        .parse_statement()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_result(sql: &str) -> ParseResult {
    sqlgram_core::parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

/// Parses `sql` and renders the result as `serde_json::Value` for shape checks.
pub fn parse_json(sql: &str) -> serde_json::Value {
    serde_json::to_value(parse_result(sql)).expect("result serializes")
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_insert(sql: &str) -> InsertStatement {
    match parse(sql) {
        Statement::Insert(i) => i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn parse_update(sql: &str) -> UpdateStatement {
    match parse(sql) {
        Statement::Update(u) => u,
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

pub fn parse_delete(sql: &str) -> DeleteStatement {
    match parse(sql) {
        Statement::Delete(d) => d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

pub fn parse_create_table(sql: &str) -> CreateTableStatement {
    match parse(sql) {
        Statement::CreateTable(c) => c,
        other => panic!("Expected CREATE TABLE, got {other:?}"),
    }
}

/// Asserts the error position and offending token text.
pub fn assert_error_at(sql: &str, line: usize, column: usize, found: &str) -> ParseError {
    let err = parse_err(sql);
    assert_eq!(
        (err.line, err.column, err.found.as_str()),
        (line, column, found),
        "wrong error position for: {sql}\n{err}"
    );
    err
}
