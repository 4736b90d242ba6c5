//! Filemap Binary
//!
//! Runs commands given as arguments (batch mode) or read from stdin
//! (interactive mode) against a database file.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use filemap::interpreter::{self, ExitStatus};
use filemap::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// Filemap
#[derive(Parser, Debug)]
#[command(name = "filemap")]
#[command(about = "Single-file persistent key-value store")]
#[command(version)]
struct Args {
    /// Database file
    #[arg(short = 'f', long, env = "DB_FILE")]
    db_file: PathBuf,

    /// Prompt shown in interactive mode
    #[arg(long, default_value = "$ ")]
    prompt: String,

    /// Commands to run, separated by `;` (interactive mode if omitted)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    commands: Vec<String>,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries command results
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("Filemap v{}", filemap::VERSION);
    tracing::debug!("Database file: {}", args.db_file.display());

    let config = Config::builder()
        .db_file(&args.db_file)
        .prompt(&args.prompt)
        .build();

    let stdin = io::stdin();
    let status = interpreter::run(
        &config,
        &args.commands,
        stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    );

    if status == ExitStatus::Failure {
        tracing::debug!("exiting with failure status");
    }
    ExitCode::from(status.code())
}
