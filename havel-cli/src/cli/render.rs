//! Human and JSON rendering of command summaries.

use std::io::{self, Write};

use havel_core::{Analysis, ConnectivityReport, Method, RealizedGraph};
use serde::Serialize;

use super::commands::{ExecutionSummary, OutputFormat, Outcome};

/// Writes `summary` to `writer` in the format the command requested.
///
/// # Errors
/// Returns any error raised by `writer`, or a JSON encoding failure wrapped
/// as [`io::Error`].
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Human => render_human(summary, &mut writer),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &SummaryView::from(summary))
                .map_err(io::Error::other)?;
            writeln!(writer)
        }
    }
}

fn render_human(summary: &ExecutionSummary, writer: &mut impl Write) -> io::Result<()> {
    let graph = summary.graph();
    writeln!(writer, "vertices: {}", graph.vertex_count())?;
    writeln!(writer, "edges: {}", graph.edge_count())?;
    match &summary.outcome {
        Outcome::Analysis(analysis) => {
            for report in analysis.reports() {
                let label = report.method();
                writeln!(writer, "{label} edge connectivity: {}", report.edge())?;
                writeln!(writer, "{label} vertex connectivity: {}", report.vertex())?;
                writeln!(writer, "{label} k: {}", report.k())?;
            }
        }
        Outcome::Realization(graph) => {
            for (u, v) in graph.edges() {
                writeln!(writer, "{u}\t{v}")?;
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(untagged)]
enum SummaryView<'a> {
    Analysis {
        degrees: &'a [usize],
        vertices: usize,
        edges: usize,
        reports: Vec<ReportView>,
        k: Option<usize>,
    },
    Realization {
        degrees: &'a [usize],
        graph: &'a RealizedGraph,
    },
}

impl<'a> From<&'a ExecutionSummary> for SummaryView<'a> {
    fn from(summary: &'a ExecutionSummary) -> Self {
        let degrees = summary.sequence.degrees();
        match &summary.outcome {
            Outcome::Analysis(analysis) => analysis_view(degrees, analysis),
            Outcome::Realization(graph) => Self::Realization { degrees, graph },
        }
    }
}

fn analysis_view<'a>(degrees: &'a [usize], analysis: &Analysis) -> SummaryView<'a> {
    SummaryView::Analysis {
        degrees,
        vertices: analysis.graph().vertex_count(),
        edges: analysis.graph().edge_count(),
        reports: analysis.reports().map(ReportView::from).collect(),
        k: analysis.k(),
    }
}

/// Flattened report with the derived `k` included.
#[derive(Serialize)]
struct ReportView {
    method: Method,
    edge: usize,
    vertex: usize,
    k: usize,
}

impl From<ConnectivityReport> for ReportView {
    fn from(report: ConnectivityReport) -> Self {
        Self {
            method: report.method(),
            edge: report.edge(),
            vertex: report.vertex(),
            k: report.k(),
        }
    }
}
