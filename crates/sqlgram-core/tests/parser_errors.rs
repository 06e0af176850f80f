//! Tests for parser error cases.

mod common;
use common::*;

use sqlgram_core::ParseErrorKind;

#[test]
fn error_empty_input() {
    let err = assert_error_at("", 1, 1, "end of input");
    assert_eq!(err.kind, ParseErrorKind::Incomplete);
    assert_eq!(err.message, "Expected a command");
}

#[test]
fn error_whitespace_and_comments_only() {
    let err = parse_err("  -- nothing here\n  ");
    assert_eq!(err.kind, ParseErrorKind::Incomplete);
    assert_eq!(err.line, 2);
}

#[test]
fn error_incomplete_select() {
    let err = parse_err("SELECT");
    assert_eq!(err.kind, ParseErrorKind::Incomplete);
    assert_eq!(err.message, "Expected expression");
}

#[test]
fn error_missing_from_table() {
    let err = assert_error_at("SELECT * FROM", 1, 14, "end of input");
    assert_eq!(err.message, "Expected table name");
}

#[test]
fn error_unknown_command() {
    let err = assert_error_at("TRUNCATE users", 1, 1, "TRUNCATE");
    assert_eq!(err.kind, ParseErrorKind::UnknownConstruct);
    assert_eq!(err.message, "Unknown command");
}

#[test]
fn error_unclosed_paren() {
    let err = parse_err("SELECT (1 + 2");
    assert_eq!(err.kind, ParseErrorKind::Incomplete);
    assert_eq!(err.message, "Expected ')'");
}

#[test]
fn error_join_without_on_or_using() {
    let err = assert_error_at("SELECT * FROM a INNER JOIN b WHERE a.id = 1", 1, 30, "WHERE");
    assert_eq!(err.message, "Expected ON or USING");
}

#[test]
fn error_clause_out_of_order() {
    let err = assert_error_at("SELECT * FROM t ORDER BY a WHERE b = 1", 1, 28, "WHERE");
    assert_eq!(err.message, "Unexpected token");
}

#[test]
fn error_trailing_garbage() {
    assert_error_at("DELETE FROM t WHERE a = 1 b", 1, 27, "b");
}

#[test]
fn error_unterminated_string() {
    let err = assert_error_at("SELECT 'oops FROM t", 1, 8, "'oops FROM t");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
    assert_eq!(err.message, "Unterminated string literal");
}

#[test]
fn error_unexpected_character() {
    let err = assert_error_at("SELECT a FROM t WHERE a # 1", 1, 25, "#");
    assert_eq!(err.message, "Unexpected character: #");
}

#[test]
fn error_display_has_three_lines() {
    let err = parse_err("SELECT *\nFROM users\nWHERE id = = 1");
    let rendered = err.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Parse error: Expected expression on line 3");
    assert_eq!(lines[1], "WHERE id = = 1");
    assert_eq!(lines[2], "           ^ found: \"=\"");
}

#[test]
fn error_empty_literals_report_source_text() {
    let err = assert_error_at("drop table ''", 1, 12, "''");
    assert_eq!(err.message, "Expected table name");
    assert_error_at("select 1 ''", 1, 10, "''");
    assert_error_at("drop table t \"\"", 1, 14, "\"\"");
    assert!(parse_err("drop table ''").to_string().ends_with("^ found: \"''\""));
}

#[test]
fn error_line_and_found_are_always_set() {
    let malformed = [
        "",
        "   ",
        "x",
        "SELECT",
        "drop",
        "CREATE",
        "INSERT INTO",
        "UPDATE t SET",
        "drop table ''",
        "select 1 ''",
        "drop table t \"\"",
        "select '' ''",
        "SELECT 'abc FROM t",
        "SELECT a FROM t WHERE a # 1",
        "SELECT \"unterminated",
        "SELECT *\nFROM t\nWHERE",
        "SELECT *\nFROM\n",
        "drop table a;;",
        "CREATE TABLE t (id INT,)",
    ];
    for sql in malformed {
        let err = parse_err(sql);
        assert!(err.line >= 1, "line for {sql:?}");
        assert!(err.column >= 1, "column for {sql:?}");
        assert!(!err.found.is_empty(), "found for {sql:?}");
    }

    let err = parse_err("SELECT *\nFROM\n");
    assert_eq!((err.line, err.column), (3, 1));
    assert_eq!(err.found, "end of input");
}

#[test]
fn error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(parse_err("drop elephant"));
    assert!(err.to_string().starts_with("Parse error: Unknown object to drop on line 1"));
}
