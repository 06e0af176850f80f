//! Tests for INSERT statements.

mod common;
use common::*;

use sqlgram_core::ast::{Expr, InsertSource};

#[test]
fn insert_values_with_columns() {
    let i = parse_insert("INSERT INTO users (name, email) VALUES ('Alice', 'a@x.com')");
    assert_eq!(i.table.qualified(), "users");
    assert_eq!(i.columns, vec!["name", "email"]);
    let InsertSource::Values(rows) = &i.values else {
        panic!("Expected VALUES");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], Expr::string("Alice"));
}

#[test]
fn insert_multiple_rows() {
    let i = parse_insert("INSERT INTO t VALUES (1, 2), (3, 4), (5, 6)");
    assert!(i.columns.is_empty());
    assert!(matches!(&i.values, InsertSource::Values(rows) if rows.len() == 3));
}

#[test]
fn insert_schema_qualified() {
    let i = parse_insert("INSERT INTO app.users (id) VALUES (1)");
    assert_eq!(i.table.schema.as_deref(), Some("app"));
    assert_eq!(i.table.name, "users");
}

#[test]
fn insert_select() {
    let i = parse_insert("INSERT INTO archive (id) SELECT id FROM users WHERE active = 0");
    let InsertSource::Query(query) = &i.values else {
        panic!("Expected sub-SELECT");
    };
    assert!(query.where_clause.is_some());
}

#[test]
fn insert_default_values() {
    let i = parse_insert("INSERT INTO counters DEFAULT VALUES");
    assert_eq!(i.values, InsertSource::DefaultValues);
}

#[test]
fn insert_with_parameters() {
    let i = parse_insert("INSERT INTO t (a, b) VALUES (?, ?)");
    let InsertSource::Values(rows) = &i.values else {
        panic!("Expected VALUES");
    };
    assert!(matches!(rows[0][1], Expr::Parameter { position: 2, .. }));
}

#[test]
fn error_missing_into() {
    let err = assert_error_at("INSERT users VALUES (1)", 1, 8, "users");
    assert_eq!(err.message, "Expected INTO");
}

#[test]
fn error_missing_source() {
    let err = parse_err("INSERT INTO t (a)");
    assert_eq!(err.message, "Expected VALUES, SELECT, or DEFAULT VALUES");
}

#[test]
fn error_unclosed_row() {
    let err = assert_error_at("INSERT INTO t VALUES (1, 2", 1, 27, "end of input");
    assert_eq!(err.message, "Expected ')'");
}
