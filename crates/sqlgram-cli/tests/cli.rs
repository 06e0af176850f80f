//! End-to-end tests for the `sqlgram` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

fn sqlgram(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sqlgram"))
        .args(args)
        .env_remove("SQLGRAM_FILE")
        .env_remove("SQLGRAM_PRETTY")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn sqlgram");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for sqlgram")
}

fn script(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn parses_arguments() {
    let output = sqlgram(&["drop table dishes cascade", "drop index i"], "");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\"command\":\"drop_table\",\"target\":[\"dishes\"],\"drop_behavior\":\"cascade\"}\n\
         {\"command\":\"drop_index\",\"target\":[\"i\"]}\n"
    );
}

#[test]
fn reports_caret_diagnostic() {
    let output = sqlgram(&["drop table play cascade restrict"], "");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        format!(
            "Parse error: Unexpected token on line 1\ndrop table play cascade restrict\n{}^ found: \"restrict\"\n",
            " ".repeat(24)
        )
    );
}

#[test]
fn reads_script_file() {
    let file = script("-- schema\nCREATE TABLE t (id INT);\nDROP TABLE t;\n");
    let path = file.path().to_str().expect("utf-8 temp path");
    let output = sqlgram(&["--file", path], "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let commands: Vec<String> = stdout
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).expect("valid JSON");
            value["command"].as_str().unwrap_or_default().to_string()
        })
        .collect();
    assert_eq!(commands, vec!["create_table", "drop_table"]);
}

#[test]
fn reads_file_from_environment() {
    let file = script("drop view v");
    let output = Command::new(env!("CARGO_BIN_EXE_sqlgram"))
        .env("SQLGRAM_FILE", file.path())
        .env_remove("SQLGRAM_PRETTY")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run sqlgram");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\"command\":\"drop_view\",\"target\":[\"v\"]}\n"
    );
}

#[test]
fn reads_stdin_with_pretty_output() {
    let output = sqlgram(&["--pretty"], "drop index i;");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\n  \"command\": \"drop_index\",\n  \"target\": [\n    \"i\"\n  ]\n}\n"
    );
}

#[test]
fn keep_going_reports_all_failures_with_script_lines() {
    let output = sqlgram(
        &["--keep-going"],
        "drop elephant;\ndrop table ok;\n\ndrop table cat where mouse = floor;",
    );
    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 1);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Parse error: Unknown object to drop on line 1"));
    assert!(stderr.contains("Parse error: Unexpected token on line 4"));
    assert!(stderr.contains("^ found: \"mouse\""));
}

#[test]
fn missing_file_fails() {
    let output = sqlgram(&["--file", "/nonexistent/sqlgram/script.sql"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
}

#[test]
fn empty_stdin_is_incomplete() {
    let output = sqlgram(&[], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr)
        .starts_with("Parse error: Expected a command on line 1"));
}
