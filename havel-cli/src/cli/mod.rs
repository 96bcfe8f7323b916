//! Command-line interface for realizing degree sequences and reporting their
//! connectivity.
//!
//! `analyze` realizes the sequence and runs the selected connectivity
//! analyzers; `realize` stops after realization and prints the edge list.
//! Both accept degrees as arguments or a `V d1 .. dV` document on a file or
//! stdin.

mod commands;
mod input;
mod render;

pub use commands::{
    AnalyzeCommand, Cli, CliError, Command, ExecutionSummary, FailureDiagnostics, InputArgs,
    MethodArg, Outcome, OutputFormat, RealizeCommand, run_cli,
};
pub use render::render_summary;

#[cfg(test)]
mod tests;
