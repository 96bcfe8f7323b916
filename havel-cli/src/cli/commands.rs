//! Command implementations and argument parsing for the havel CLI.

use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use havel_core::{
    Analysis, AnalyzerBuilder, DEFAULT_MAX_VERTICES, DegreeSequence, HavelError, HavelErrorCode,
    InfeasibleReason, InputErrorCode, MethodSelection, RealizedGraph, realize,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::{InputSource, load_sequence};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "havel",
    about = "Realize degree sequences as simple graphs and analyze their connectivity."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Realize a degree sequence and report its connectivity.
    Analyze(AnalyzeCommand),
    /// Realize a degree sequence and print the edge list.
    Realize(RealizeCommand),
}

/// Where the degree sequence comes from.
#[derive(Debug, Args, Clone, Default)]
pub struct InputArgs {
    /// Degree of each vertex, in vertex order.
    #[arg(value_name = "DEGREE", allow_negative_numbers = true)]
    pub degrees: Vec<i64>,

    /// Read the vertex count followed by that many degrees from a file, or
    /// from stdin when the path is `-`.
    #[arg(long, short = 'i', value_name = "PATH", conflicts_with = "degrees")]
    pub input: Option<PathBuf>,
}

/// Options accepted by the `analyze` command.
#[derive(Debug, Args, Clone)]
pub struct AnalyzeCommand {
    /// Degree sequence source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Connectivity analyzers to run.
    #[arg(long, value_enum, default_value_t = MethodArg::Survey)]
    pub method: MethodArg,

    /// Largest vertex count accepted before analysis is refused.
    #[arg(
        long = "max-vertices",
        default_value_t = DEFAULT_MAX_VERTICES,
        value_parser = clap::value_parser!(usize),
    )]
    pub max_vertices: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Options accepted by the `realize` command.
#[derive(Debug, Args, Clone)]
pub struct RealizeCommand {
    /// Degree sequence source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Connectivity analyzers selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// Single-vertex removal survey.
    Survey,
    /// Exact max-flow connectivity.
    Exact,
    /// Both analyzers.
    Both,
}

impl From<MethodArg> for MethodSelection {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Survey => Self::Survey,
            MethodArg::Exact => Self::Exact,
            MethodArg::Both => Self::Both,
        }
    }
}

/// Rendering formats for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented text.
    Human,
    /// A single JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading the degree sequence.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A token in the input was not an integer.
    #[error("token {position} (`{token}`) is not an integer")]
    Parse {
        /// One-based position of the token in the input.
        position: usize,
        /// The offending token.
        token: String,
    },
    /// The arguments did not describe exactly one degree sequence.
    #[error("{reason}")]
    Usage {
        /// What was wrong with the invocation.
        reason: &'static str,
    },
    /// Core realization or analysis failed.
    #[error(transparent)]
    Core(#[from] HavelError),
}

impl CliError {
    /// Structured fields describing the failure for the final `error` event.
    #[must_use]
    pub fn diagnostics(&self) -> FailureDiagnostics {
        let Self::Core(core) = self else {
            return FailureDiagnostics::default();
        };
        let mut diagnostics = FailureDiagnostics {
            code: Some(core.code()),
            input_code: core.input_code(),
            ..FailureDiagnostics::default()
        };
        if let HavelError::InfeasibleSequence {
            vertex,
            degree,
            reason,
        } = core
        {
            diagnostics.vertex = Some(*vertex);
            diagnostics.degree = Some(*degree);
            diagnostics.reason = Some(*reason);
        }
        diagnostics
    }
}

/// Machine-readable view of a [`CliError`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FailureDiagnostics {
    /// Stable core error code.
    pub code: Option<HavelErrorCode>,
    /// Nested input-validation code.
    pub input_code: Option<InputErrorCode>,
    /// Vertex being connected when realization failed.
    pub vertex: Option<usize>,
    /// Residual degree that vertex still required.
    pub degree: Option<usize>,
    /// Which feasibility check failed.
    pub reason: Option<InfeasibleReason>,
}

/// What a command produced.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Output of `analyze`.
    Analysis(Analysis),
    /// Output of `realize`.
    Realization(RealizedGraph),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// The degree sequence that was processed.
    pub sequence: DegreeSequence,
    /// Requested output format.
    pub format: OutputFormat,
    /// Command result.
    pub outcome: Outcome,
}

impl ExecutionSummary {
    /// The realized graph, whichever command ran.
    #[must_use]
    pub fn graph(&self) -> &RealizedGraph {
        match &self.outcome {
            Outcome::Analysis(analysis) => analysis.graph(),
            Outcome::Realization(graph) => graph,
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, realization, or analysis fails.
///
/// # Examples
/// ```
/// # use havel_cli::cli::{AnalyzeCommand, Cli, Command, InputArgs, MethodArg, OutputFormat, Outcome, run_cli};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let cli = Cli {
///     command: Command::Analyze(AnalyzeCommand {
///         input: InputArgs { degrees: vec![3, 3, 3, 3], input: None },
///         method: MethodArg::Survey,
///         max_vertices: 16,
///         format: OutputFormat::Human,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let Outcome::Analysis(analysis) = summary.outcome else { unreachable!() };
/// assert_eq!(analysis.k(), Some(3));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Analyze(analyze) => {
            Span::current().record("command", field::display("analyze"));
            run_analyze(analyze)
        }
        Command::Realize(realize) => {
            Span::current().record("command", field::display("realize"));
            run_realize(realize)
        }
    }
}

#[instrument(
    name = "cli.analyze",
    err,
    skip(command),
    fields(method = ?command.method, max_vertices = command.max_vertices, source = field::Empty),
)]
pub(super) fn run_analyze(command: AnalyzeCommand) -> Result<ExecutionSummary, CliError> {
    let analyzer = AnalyzerBuilder::new()
        .with_method(command.method.into())
        .with_max_vertices(command.max_vertices)
        .build()?;

    let sequence = load_recorded(&command.input)?;
    let analysis = analyzer.run(&sequence)?;
    info!(
        vertices = sequence.len(),
        edges = analysis.graph().edge_count(),
        k = analysis.k(),
        "command completed"
    );
    Ok(ExecutionSummary {
        sequence,
        format: command.format,
        outcome: Outcome::Analysis(analysis),
    })
}

#[instrument(
    name = "cli.realize",
    err,
    skip(command),
    fields(source = field::Empty),
)]
pub(super) fn run_realize(command: RealizeCommand) -> Result<ExecutionSummary, CliError> {
    let sequence = load_recorded(&command.input)?;
    let graph = realize(&sequence)?;
    info!(
        vertices = sequence.len(),
        edges = graph.edge_count(),
        "command completed"
    );
    Ok(ExecutionSummary {
        sequence,
        format: command.format,
        outcome: Outcome::Realization(graph),
    })
}

/// Loads the sequence and records its origin on the current span.
fn load_recorded(args: &InputArgs) -> Result<DegreeSequence, CliError> {
    let source = InputSource::from_args(args)?;
    Span::current().record("source", field::display(source.label()));
    load_sequence(&source)
}
