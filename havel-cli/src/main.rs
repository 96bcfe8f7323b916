//! CLI entry point for the `havel` binary.
//!
//! Parses arguments with clap, realizes and analyzes the requested degree
//! sequence, renders the summary to stdout, and maps failures to a structured
//! `error` event and a non-zero exit code.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use havel_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse arguments, run the command, and write its summary to stdout.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        report_failure(&err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Emits one `error` event carrying the core codes and, for unrealizable
/// sequences, the vertex that could not be connected.
fn report_failure(err: &anyhow::Error) {
    let diagnostics = err
        .downcast_ref::<CliError>()
        .map(CliError::diagnostics)
        .unwrap_or_default();
    let message = format!("{err:#}");

    error!(
        error = %message,
        code = diagnostics.code.map(|code| field::display(code.as_str())),
        input_code = diagnostics.input_code.map(|code| field::display(code.as_str())),
        vertex = diagnostics.vertex,
        degree = diagnostics.degree,
        reason = diagnostics.reason.map(field::display),
        "command execution failed"
    );
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
