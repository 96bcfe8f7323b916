//! Unit tests for argument parsing, input loading, and rendering.

use super::input::{InputSource, parse_declared};
use super::{
    AnalyzeCommand, Cli, CliError, Command, ExecutionSummary, FailureDiagnostics, InputArgs,
    MethodArg, Outcome, OutputFormat, RealizeCommand, render_summary, run_cli,
};

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use clap::Parser;
use havel_core::{HavelErrorCode, InfeasibleReason, InputErrorCode};
use havel_test_support::tracing::RecordingLayer;
use rstest::rstest;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn inline(degrees: &[i64]) -> InputArgs {
    InputArgs {
        degrees: degrees.to_vec(),
        input: None,
    }
}

fn from_path(path: impl Into<PathBuf>) -> InputArgs {
    InputArgs {
        degrees: Vec::new(),
        input: Some(path.into()),
    }
}

fn analyze(input: InputArgs, method: MethodArg, format: OutputFormat) -> Cli {
    Cli {
        command: Command::Analyze(AnalyzeCommand {
            input,
            method,
            max_vertices: 64,
            format,
        }),
    }
}

fn realize(input: InputArgs, format: OutputFormat) -> Cli {
    Cli {
        command: Command::Realize(RealizeCommand { input, format }),
    }
}

fn write_input(dir: &TempDir, contents: &str) -> Result<PathBuf, std::io::Error> {
    let path = dir.path().join("degrees.txt");
    fs::write(&path, contents)?;
    Ok(path)
}

fn render_to_string(summary: &ExecutionSummary) -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    render_summary(summary, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn core_code(err: &CliError) -> Option<HavelErrorCode> {
    match err {
        CliError::Core(core) => Some(core.code()),
        _ => None,
    }
}

fn core_input_code(err: &CliError) -> Option<InputErrorCode> {
    match err {
        CliError::Core(core) => core.input_code(),
        _ => None,
    }
}

#[test]
fn clap_parses_analyze_with_defaults() -> TestResult {
    let cli = Cli::try_parse_from(["havel", "analyze", "3", "3", "3", "3"])?;
    let Command::Analyze(command) = cli.command else {
        panic!("expected analyze command");
    };
    assert_eq!(command.input.degrees, vec![3, 3, 3, 3]);
    assert_eq!(command.input.input, None);
    assert_eq!(command.method, MethodArg::Survey);
    assert_eq!(command.max_vertices, havel_core::DEFAULT_MAX_VERTICES);
    assert_eq!(command.format, OutputFormat::Human);
    Ok(())
}

#[test]
fn clap_parses_analyze_options() -> TestResult {
    let cli = Cli::try_parse_from([
        "havel",
        "analyze",
        "--method",
        "both",
        "--max-vertices",
        "8",
        "--format",
        "json",
        "--input",
        "-",
    ])?;
    let Command::Analyze(command) = cli.command else {
        panic!("expected analyze command");
    };
    assert!(command.input.degrees.is_empty());
    assert_eq!(command.input.input, Some(PathBuf::from("-")));
    assert_eq!(command.method, MethodArg::Both);
    assert_eq!(command.max_vertices, 8);
    assert_eq!(command.format, OutputFormat::Json);
    Ok(())
}

#[test]
fn clap_accepts_negative_degrees_for_later_validation() -> TestResult {
    let cli = Cli::try_parse_from(["havel", "realize", "1", "-1"])?;
    let Command::Realize(command) = cli.command else {
        panic!("expected realize command");
    };
    assert_eq!(command.input.degrees, vec![1, -1]);
    Ok(())
}

#[test]
fn clap_rejects_degrees_together_with_input() {
    let result = Cli::try_parse_from(["havel", "analyze", "1", "1", "--input", "degrees.txt"]);
    assert!(result.is_err());
}

#[rstest]
#[case::nothing(InputArgs::default())]
#[case::both(InputArgs { degrees: vec![1, 1], input: Some(PathBuf::from("-")) })]
fn input_source_requires_exactly_one_origin(#[case] args: InputArgs) {
    let err = InputSource::from_args(&args).expect_err("invalid origin");
    assert!(matches!(err, CliError::Usage { .. }), "unexpected error: {err:?}");
}

#[rstest]
#[case::dash(from_path("-"), InputSource::Stdin)]
#[case::file(from_path("deg.txt"), InputSource::File(PathBuf::from("deg.txt")))]
#[case::inline(inline(&[2, 2, 2]), InputSource::Inline(vec![2, 2, 2]))]
fn input_source_resolves_origin(#[case] args: InputArgs, #[case] expected: InputSource) {
    assert_eq!(InputSource::from_args(&args).expect("valid origin"), expected);
}

#[rstest]
#[case::single_line("4 3 3 3 3", vec![3, 3, 3, 3])]
#[case::console_layout("4\n3 3 3 3\n", vec![3, 3, 3, 3])]
#[case::ragged_whitespace("  2\t1\n\n 1  ", vec![1, 1])]
fn parse_declared_reads_count_then_degrees(#[case] raw: &str, #[case] expected: Vec<usize>) {
    let sequence = parse_declared(Cursor::new(raw), Path::new("-")).expect("input must parse");
    assert_eq!(sequence.degrees(), expected.as_slice());
}

#[rstest]
#[case::empty("", InputErrorCode::EmptySequence)]
#[case::zero_count("0", InputErrorCode::NonPositiveVertexCount)]
#[case::negative_count("-2 1 1", InputErrorCode::NonPositiveVertexCount)]
#[case::too_few("3 1 1", InputErrorCode::LengthMismatch)]
#[case::too_many("1 0 0", InputErrorCode::LengthMismatch)]
#[case::negative_degree("2 1 -1", InputErrorCode::NegativeDegree)]
fn parse_declared_reports_input_errors(#[case] raw: &str, #[case] expected: InputErrorCode) {
    let err = parse_declared(Cursor::new(raw), Path::new("-")).expect_err("input must fail");
    assert_eq!(core_input_code(&err), Some(expected));
}

#[test]
fn parse_declared_reports_token_position() {
    let err = parse_declared(Cursor::new("3 1 x 1"), Path::new("-")).expect_err("bad token");
    match err {
        CliError::Parse { position, token } => {
            assert_eq!(position, 3);
            assert_eq!(token, "x");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
#[case::survey(MethodArg::Survey, true, false)]
#[case::exact(MethodArg::Exact, false, true)]
#[case::both(MethodArg::Both, true, true)]
fn run_cli_analyzes_inline_degrees(
    #[case] method: MethodArg,
    #[case] survey: bool,
    #[case] exact: bool,
) -> TestResult {
    let summary = run_cli(analyze(inline(&[3, 3, 3, 3]), method, OutputFormat::Human))?;
    let Outcome::Analysis(analysis) = &summary.outcome else {
        panic!("expected analysis outcome");
    };
    assert_eq!(analysis.graph().edge_count(), 6);
    assert_eq!(analysis.survey().is_some(), survey);
    assert_eq!(analysis.exact().is_some(), exact);
    assert_eq!(analysis.k(), Some(3));
    Ok(())
}

#[test]
fn run_cli_reads_input_file() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_input(&dir, "2\n1 1\n")?;
    let summary = run_cli(analyze(from_path(path), MethodArg::Survey, OutputFormat::Human))?;
    assert_eq!(summary.sequence.degrees(), &[1, 1]);
    assert_eq!(summary.graph().edge_count(), 1);
    Ok(())
}

#[test]
fn run_cli_reports_missing_file() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("absent.txt");
    let err = run_cli(realize(from_path(path.clone()), OutputFormat::Human))
        .expect_err("missing file must fail");
    match err {
        CliError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[test]
fn run_cli_surfaces_infeasible_sequences() {
    let err = run_cli(analyze(
        inline(&[5, 1, 1, 1, 1]),
        MethodArg::Both,
        OutputFormat::Human,
    ))
    .expect_err("sequence is not graphic");
    assert_eq!(core_code(&err), Some(HavelErrorCode::InfeasibleSequence));
    assert!(err.to_string().starts_with("the degree sequence cannot form a simple graph"));
}

#[test]
fn run_cli_enforces_vertex_bound() {
    let cli = Cli {
        command: Command::Analyze(AnalyzeCommand {
            input: inline(&[0, 0, 0]),
            method: MethodArg::Survey,
            max_vertices: 2,
            format: OutputFormat::Human,
        }),
    };
    let err = run_cli(cli).expect_err("too many vertices");
    assert_eq!(core_code(&err), Some(HavelErrorCode::TooManyVertices));
}

#[test]
fn run_cli_rejects_zero_vertex_bound() {
    let cli = Cli {
        command: Command::Analyze(AnalyzeCommand {
            input: inline(&[1, 1]),
            method: MethodArg::Survey,
            max_vertices: 0,
            format: OutputFormat::Human,
        }),
    };
    let err = run_cli(cli).expect_err("zero bound must fail");
    assert_eq!(core_code(&err), Some(HavelErrorCode::InvalidMaxVertices));
}

#[test]
fn realize_command_skips_analysis() -> TestResult {
    let summary = run_cli(realize(inline(&[2, 2, 2, 2]), OutputFormat::Human))?;
    let Outcome::Realization(graph) = &summary.outcome else {
        panic!("expected realization outcome");
    };
    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(edges, vec![(0, 1), (0, 2), (1, 3), (2, 3)]);
    Ok(())
}

#[test]
fn render_human_analysis_lists_each_method() -> TestResult {
    let summary = run_cli(analyze(
        inline(&[3, 3, 3, 3]),
        MethodArg::Both,
        OutputFormat::Human,
    ))?;
    let rendered = render_to_string(&summary)?;
    assert_eq!(
        rendered,
        "vertices: 4\n\
         edges: 6\n\
         survey edge connectivity: 3\n\
         survey vertex connectivity: 3\n\
         survey k: 3\n\
         exact edge connectivity: 3\n\
         exact vertex connectivity: 3\n\
         exact k: 3\n"
    );
    Ok(())
}

#[test]
fn render_human_realization_lists_edges() -> TestResult {
    let summary = run_cli(realize(inline(&[1, 1, 0, 2]), OutputFormat::Human))?;
    let rendered = render_to_string(&summary)?;
    assert_eq!(rendered, "vertices: 4\nedges: 2\n0\t3\n1\t3\n");
    Ok(())
}

#[test]
fn render_json_analysis() -> TestResult {
    let summary = run_cli(analyze(inline(&[1, 1]), MethodArg::Both, OutputFormat::Json))?;
    let value: serde_json::Value = serde_json::from_str(&render_to_string(&summary)?)?;
    assert_eq!(value["degrees"], serde_json::json!([1, 1]));
    assert_eq!(value["vertices"], 2);
    assert_eq!(value["edges"], 1);
    assert_eq!(value["k"], 1);
    assert_eq!(
        value["reports"],
        serde_json::json!([
            { "method": "survey", "edge": 1, "vertex": 1, "k": 1 },
            { "method": "exact", "edge": 1, "vertex": 1, "k": 1 },
        ])
    );
    Ok(())
}

#[test]
fn render_json_realization() -> TestResult {
    let summary = run_cli(realize(inline(&[1, 1, 0, 2]), OutputFormat::Json))?;
    let value: serde_json::Value = serde_json::from_str(&render_to_string(&summary)?)?;
    assert_eq!(value["degrees"], serde_json::json!([1, 1, 0, 2]));
    assert_eq!(
        value["graph"],
        serde_json::json!({ "vertices": 4, "edges": [[0, 3], [1, 3]] })
    );
    Ok(())
}

#[test]
fn run_cli_records_command_spans() -> TestResult {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let cli = analyze(inline(&[2, 2, 2]), MethodArg::Exact, OutputFormat::Human);

    tracing::subscriber::with_default(subscriber, || run_cli(cli))?;

    let run_span = layer.span_named("cli.run").expect("cli.run span must exist");
    assert_eq!(run_span.fields.get("command"), Some(&"analyze".to_owned()));

    let analyze_span = layer
        .span_named("cli.analyze")
        .expect("cli.analyze span must exist");
    assert_eq!(analyze_span.fields.get("source"), Some(&"arguments".to_owned()));
    assert_eq!(analyze_span.fields.get("method"), Some(&"Exact".to_owned()));
    assert_eq!(analyze_span.fields.get("max_vertices"), Some(&"64".to_owned()));

    assert!(layer.span_named("core.exact").is_some());
    assert!(layer.has_event(Level::INFO, "command completed"));
    Ok(())
}

#[test]
fn run_cli_records_file_source() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_input(&dir, "3 2 2 2")?;
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let cli = realize(from_path(path.clone()), OutputFormat::Human);

    tracing::subscriber::with_default(subscriber, || run_cli(cli))?;

    let realize_span = layer
        .span_named("cli.realize")
        .expect("cli.realize span must exist");
    assert_eq!(
        realize_span.fields.get("source"),
        Some(&path.display().to_string())
    );
    Ok(())
}

#[test]
fn infeasible_failure_diagnostics_name_the_vertex() {
    let err = run_cli(analyze(
        inline(&[5, 1, 1, 1, 1]),
        MethodArg::Survey,
        OutputFormat::Human,
    ))
    .expect_err("sequence is not graphic");
    assert_eq!(
        err.diagnostics(),
        FailureDiagnostics {
            code: Some(HavelErrorCode::InfeasibleSequence),
            input_code: None,
            vertex: Some(0),
            degree: Some(5),
            reason: Some(InfeasibleReason::DegreeExceedsPeers { peers: 4 }),
        }
    );
}

#[test]
fn huge_degrees_fail_as_infeasible() {
    let err = run_cli(analyze(
        inline(&[i64::MAX, i64::MAX, i64::MAX]),
        MethodArg::Both,
        OutputFormat::Human,
    ))
    .expect_err("degrees exceed the vertex count");
    let diagnostics = err.diagnostics();
    assert_eq!(diagnostics.code, Some(HavelErrorCode::InfeasibleSequence));
    assert_eq!(diagnostics.vertex, Some(0));
}

#[rstest]
#[case::input(
    inline(&[1, -1]),
    Some(HavelErrorCode::InvalidInput),
    Some(InputErrorCode::NegativeDegree)
)]
#[case::usage(InputArgs::default(), None, None)]
fn failure_diagnostics_carry_codes(
    #[case] input: InputArgs,
    #[case] code: Option<HavelErrorCode>,
    #[case] input_code: Option<InputErrorCode>,
) {
    let err = run_cli(realize(input, OutputFormat::Human)).expect_err("command must fail");
    let diagnostics = err.diagnostics();
    assert_eq!(diagnostics.code, code);
    assert_eq!(diagnostics.input_code, input_code);
    assert_eq!(diagnostics.vertex, None);
    assert_eq!(diagnostics.reason, None);
}
