//! sqlgram CLI
//!
//! Parses SQL statements and prints their intermediate representation.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use sqlgram_cli::{CliError, Options, fragments_from_args, read_script, read_stream, run};

/// Parse SQL statements into a JSON intermediate representation.
#[derive(Parser)]
#[command(name = "sqlgram")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Statements to parse, one per argument.
    sql: Vec<String>,

    /// Script file to parse, split on `;` (stdin if neither SQL nor a file is given).
    #[arg(short, long, env = "SQLGRAM_FILE")]
    file: Option<PathBuf>,

    /// Indent the JSON output.
    #[arg(short, long, env = "SQLGRAM_PRETTY")]
    pretty: bool,

    /// Report every failing statement instead of stopping at the first.
    #[arg(short, long)]
    keep_going: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for results
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let fragments = if !cli.sql.is_empty() {
        fragments_from_args(&cli.sql)
    } else if let Some(path) = &cli.file {
        read_script(path)?
    } else {
        read_stream(io::stdin().lock())?
    };

    let options = Options {
        pretty: cli.pretty,
        keep_going: cli.keep_going,
    };

    let mut out = io::stdout().lock();
    let mut diag = io::stderr().lock();

    match run(&fragments, options, &mut out, &mut diag) {
        Ok(report) if report.failed == 0 => Ok(ExitCode::SUCCESS),
        Ok(report) => {
            info!(
                "{} of {} statements failed to parse",
                report.failed,
                report.failed + report.parsed
            );
            Ok(ExitCode::FAILURE)
        }
        Err(CliError::Parse(err)) => {
            writeln!(diag, "{err}")?;
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
