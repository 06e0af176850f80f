//! Tests for DROP statements.

mod common;
use common::*;

use serde_json::json;
use sqlgram_core::ParseErrorKind;
use sqlgram_core::ast::{DropBehavior, DropObject, ObjectName, Statement};

#[test]
fn drop_table_cascade() {
    assert_eq!(
        parse_json("drop table dishes cascade"),
        json!({"command": "drop_table", "target": ["dishes"], "drop_behavior": "cascade"})
    );
}

#[test]
fn drop_index_without_behavior() {
    let result = parse_json("drop index i");
    assert_eq!(result, json!({"command": "drop_index", "target": ["i"]}));
    assert!(result.get("drop_behavior").is_none());
}

#[test]
fn drop_every_object_type() {
    for (sql, command) in [
        ("DROP TABLE t", "drop_table"),
        ("DROP INDEX t", "drop_index"),
        ("DROP CONSTRAINT t", "drop_constraint"),
        ("DROP SEQUENCE t", "drop_sequence"),
        ("DROP VIEW t", "drop_view"),
    ] {
        assert_eq!(parse_result(sql).command(), command, "{sql}");
    }
}

#[test]
fn drop_restrict() {
    let Statement::Drop(drop) = parse("DROP VIEW report RESTRICT") else {
        panic!("Expected DROP");
    };
    assert_eq!(drop.object, DropObject::View);
    assert_eq!(drop.behavior, Some(DropBehavior::Restrict));
}

#[test]
fn drop_schema_qualified_target() {
    let Statement::Drop(drop) = parse("drop table public.dishes") else {
        panic!("Expected DROP");
    };
    assert_eq!(
        drop.names,
        vec![ObjectName {
            schema: Some(String::from("public")),
            name: String::from("dishes"),
        }]
    );
    assert_eq!(parse_json("drop table public.dishes")["target"], json!(["public.dishes"]));
}

#[test]
fn drop_keywords_are_case_insensitive() {
    assert_eq!(
        parse_json("DrOp TaBlE Dishes CASCADE"),
        json!({"command": "drop_table", "target": ["Dishes"], "drop_behavior": "cascade"})
    );
}

#[test]
fn drop_with_trailing_semicolon() {
    assert_eq!(parse_result("drop table dishes;").command(), "drop_table");
}

#[test]
fn drop_quoted_keyword_as_name() {
    assert_eq!(parse_json("drop table \"table\"")["target"], json!(["table"]));
}

#[test]
fn drop_multiline() {
    assert_eq!(
        parse_json("drop table\n  dishes\n  cascade"),
        json!({"command": "drop_table", "target": ["dishes"], "drop_behavior": "cascade"})
    );
}

#[test]
fn error_second_modifier() {
    let err = assert_error_at("drop table play cascade restrict", 1, 25, "restrict");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
    assert_eq!(err.message, "Unexpected token");
    assert_eq!(
        err.caret_line(),
        format!("{}^ found: \"restrict\"", " ".repeat(24))
    );
}

#[test]
fn error_where_clause_reports_operand() {
    let err = assert_error_at("drop table cat where mouse = floor", 1, 22, "mouse");
    assert_eq!(err.message, "Unexpected token");
}

#[test]
fn error_stray_final_token_is_reported() {
    assert_error_at("drop table cat where", 1, 16, "where");
    assert_error_at("drop table cat where;", 1, 16, "where");
}

#[test]
fn error_unknown_object() {
    let err = assert_error_at("drop elephant", 1, 6, "elephant");
    assert_eq!(err.kind, ParseErrorKind::UnknownConstruct);
    assert_eq!(err.message, "Unknown object to drop");
}

#[test]
fn error_missing_object_type() {
    let err = assert_error_at("drop", 1, 5, "end of input");
    assert_eq!(err.kind, ParseErrorKind::Incomplete);
    assert_eq!(err.message, "Unknown object to drop");
}

#[test]
fn error_missing_name() {
    let err = assert_error_at("drop index cascade", 1, 12, "cascade");
    assert_eq!(err.message, "Expected index name");
}

#[test]
fn error_on_later_line() {
    let err = assert_error_at("drop table play\ncascade restrict", 2, 9, "restrict");
    assert_eq!(err.source_line, "cascade restrict");
}

#[test]
fn error_after_semicolon() {
    assert_error_at("drop table a; drop table b", 1, 15, "drop");
}

#[test]
fn repeated_parse_is_stable() {
    let sql = "drop table dishes cascade";
    assert_eq!(parse_result(sql), parse_result(sql));
    assert_eq!(parse_err("drop elephant"), parse_err("drop elephant"));
}
