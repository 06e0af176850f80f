//! Command-line front end for `sqlgram-core`.
//!
//! Reads SQL statements from arguments, a script file or stdin, parses each
//! one and prints its intermediate representation as one JSON document per
//! line. Parse failures are reported with the caret diagnostic.
//!
//! # CLI Usage
//!
//! ```bash
//! # One statement per argument
//! sqlgram "drop table dishes cascade"
//!
//! # A script, split on `;`
//! sqlgram --file schema.sql --pretty
//!
//! # Report every failing statement instead of stopping at the first
//! cat migrations/*.sql | sqlgram --keep-going
//! ```

pub mod error;
pub mod split;

use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

pub use error::{CliError, Result};
pub use split::{Fragment, split_statements};

/// Output settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Indent the JSON output.
    pub pretty: bool,
    /// Keep parsing after a failure.
    pub keep_going: bool,
}

/// Outcome of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// Statements parsed successfully.
    pub parsed: usize,
    /// Statements rejected.
    pub failed: usize,
}

/// Treats every argument as one statement.
#[must_use]
pub fn fragments_from_args(args: &[String]) -> Vec<Fragment> {
    args.iter().map(Fragment::whole).collect()
}

/// Reads and splits a script file.
///
/// # Errors
///
/// Returns [`CliError::Read`] if the file cannot be read.
pub fn read_script(path: &Path) -> Result<Vec<Fragment>> {
    let script = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(fragments_or_empty(&script))
}

/// Reads and splits a script from `reader`.
///
/// # Errors
///
/// Returns [`CliError::Io`] if reading fails.
pub fn read_stream(mut reader: impl Read) -> Result<Vec<Fragment>> {
    let mut script = String::new();
    reader.read_to_string(&mut script)?;
    Ok(fragments_or_empty(&script))
}

/// A script without statements is parsed as one empty statement, so that
/// it is reported instead of silently accepted.
fn fragments_or_empty(script: &str) -> Vec<Fragment> {
    let fragments = split_statements(script);
    debug!(statements = fragments.len(), "split script");
    if fragments.is_empty() {
        vec![Fragment::whole("")]
    } else {
        fragments
    }
}

/// Parses every fragment, writing JSON results to `out`.
///
/// With [`Options::keep_going`], diagnostics go to `diag` and the run
/// continues; otherwise the first failure is returned as
/// [`CliError::Parse`]. Error line numbers are relative to the script.
///
/// # Errors
///
/// Returns the first parse error (unless keeping going), or any I/O or
/// serialization error.
pub fn run(
    fragments: &[Fragment],
    options: Options,
    out: &mut impl Write,
    diag: &mut impl Write,
) -> Result<Report> {
    let mut report = Report::default();

    for fragment in fragments {
        match sqlgram_core::parse(&fragment.sql) {
            Ok(result) => {
                let json = if options.pretty {
                    result.to_json_pretty()?
                } else {
                    result.to_json()?
                };
                writeln!(out, "{json}")?;
                report.parsed += 1;
            }
            Err(mut err) => {
                err.line += fragment.line - 1;
                report.failed += 1;
                if !options.keep_going {
                    return Err(err.into());
                }
                writeln!(diag, "{err}")?;
            }
        }
    }

    out.flush()?;
    debug!(parsed = report.parsed, failed = report.failed, "run finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_strings(fragments: &[Fragment], options: Options) -> (Result<Report>, String, String) {
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let result = run(fragments, options, &mut out, &mut diag);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(diag).unwrap(),
        )
    }

    #[test]
    fn test_run_prints_one_document_per_statement() {
        let fragments = fragments_from_args(&[
            String::from("drop table dishes cascade"),
            String::from("drop index i"),
        ]);
        let (result, out, diag) = run_to_strings(&fragments, Options::default());
        assert_eq!(
            result.unwrap(),
            Report {
                parsed: 2,
                failed: 0
            }
        );
        assert_eq!(
            out,
            "{\"command\":\"drop_table\",\"target\":[\"dishes\"],\"drop_behavior\":\"cascade\"}\n\
             {\"command\":\"drop_index\",\"target\":[\"i\"]}\n"
        );
        assert!(diag.is_empty());
    }

    #[test]
    fn test_run_stops_at_first_failure() {
        let fragments = split_statements("drop elephant; drop table a");
        let (result, out, _) = run_to_strings(&fragments, Options::default());
        let Err(CliError::Parse(err)) = result else {
            panic!("Expected parse error");
        };
        assert_eq!(err.message, "Unknown object to drop");
        assert!(out.is_empty());
    }

    #[test]
    fn test_keep_going_reports_every_failure() {
        let fragments = split_statements("drop elephant;\ndrop table a;\ndrop table b c d");
        let options = Options {
            keep_going: true,
            ..Options::default()
        };
        let (result, out, diag) = run_to_strings(&fragments, options);
        assert_eq!(
            result.unwrap(),
            Report {
                parsed: 1,
                failed: 2
            }
        );
        assert_eq!(out.lines().count(), 1);
        assert!(diag.contains("Parse error: Unknown object to drop on line 1"));
        assert!(diag.contains("Parse error: Unexpected token on line 3"));
    }

    #[test]
    fn test_empty_script_is_reported() {
        let fragments = read_stream("  -- nothing\n".as_bytes()).unwrap();
        assert_eq!(fragments, vec![Fragment::whole("")]);
        let (result, _, _) = run_to_strings(&fragments, Options::default());
        assert!(matches!(result, Err(CliError::Parse(err)) if err.found == "end of input"));
    }
}
