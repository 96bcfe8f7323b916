//! Realization-then-analysis pipeline.
//!
//! Provides the [`Analyzer`] entry point, which realizes a degree sequence and
//! only then runs the selected connectivity analyzers on the result.

use std::num::NonZeroUsize;

use tracing::{info, instrument};

use crate::{
    Result,
    builder::MethodSelection,
    connectivity::{self, ConnectivityReport},
    degree::DegreeSequence,
    error::HavelError,
    graph::RealizedGraph,
    realize::realize,
};

/// Entry point for realizing and analyzing degree sequences.
///
/// # Examples
/// ```
/// use havel_core::{AnalyzerBuilder, DegreeSequence};
///
/// let analyzer = AnalyzerBuilder::new().build()?;
/// let analysis = analyzer.run(&DegreeSequence::new(vec![1, 1])?)?;
/// assert_eq!(analysis.graph().edge_count(), 1);
/// assert_eq!(analysis.survey().map(|report| report.k()), Some(1));
/// assert!(analysis.exact().is_none());
/// # Ok::<(), havel_core::HavelError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    method: MethodSelection,
    max_vertices: NonZeroUsize,
}

impl Analyzer {
    pub(crate) fn new(method: MethodSelection, max_vertices: NonZeroUsize) -> Self {
        Self {
            method,
            max_vertices,
        }
    }

    /// Returns the analyzers this instance runs.
    #[must_use]
    #[rustfmt::skip]
    pub fn method(&self) -> MethodSelection { self.method }

    /// Returns the largest vertex count this instance accepts.
    #[must_use]
    #[rustfmt::skip]
    pub fn max_vertices(&self) -> NonZeroUsize { self.max_vertices }

    /// Realizes `sequence` and runs the selected analyzers.
    ///
    /// # Errors
    /// Returns [`HavelError::TooManyVertices`] when the sequence exceeds the
    /// configured bound and [`HavelError::InfeasibleSequence`] when it cannot
    /// be realized; no analysis runs in either case.
    #[instrument(
        name = "core.run",
        err,
        skip(self, sequence),
        fields(vertices = sequence.len(), method = ?self.method),
    )]
    pub fn run(&self, sequence: &DegreeSequence) -> Result<Analysis> {
        if sequence.len() > self.max_vertices.get() {
            return Err(HavelError::TooManyVertices {
                vertices: sequence.len(),
                max_vertices: self.max_vertices.get(),
            });
        }

        let graph = realize(sequence)?;
        self.analyze(graph)
    }

    /// Runs the selected analyzers on an already realized graph.
    ///
    /// # Errors
    /// Returns [`HavelError::TooManyVertices`] when the graph exceeds the
    /// configured bound.
    pub fn analyze(&self, graph: RealizedGraph) -> Result<Analysis> {
        if graph.vertex_count() > self.max_vertices.get() {
            return Err(HavelError::TooManyVertices {
                vertices: graph.vertex_count(),
                max_vertices: self.max_vertices.get(),
            });
        }

        let survey = self
            .method
            .runs_survey()
            .then(|| connectivity::survey(&graph))
            .transpose()?;
        let exact = self
            .method
            .runs_exact()
            .then(|| connectivity::exact(&graph))
            .transpose()?;

        let analysis = Analysis {
            graph,
            survey,
            exact,
        };
        info!(
            edges = analysis.graph.edge_count(),
            k = analysis.k(),
            "analysis completed"
        );
        Ok(analysis)
    }
}

/// Output of [`Analyzer::run`]: the realized graph and the selected reports.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Analysis {
    graph: RealizedGraph,
    survey: Option<ConnectivityReport>,
    exact: Option<ConnectivityReport>,
}

impl Analysis {
    /// The realized graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &RealizedGraph { &self.graph }

    /// Removal-survey report, when selected.
    #[must_use]
    #[rustfmt::skip]
    pub fn survey(&self) -> Option<ConnectivityReport> { self.survey }

    /// Exact report, when selected.
    #[must_use]
    #[rustfmt::skip]
    pub fn exact(&self) -> Option<ConnectivityReport> { self.exact }

    /// Reports in the order survey, exact.
    pub fn reports(&self) -> impl Iterator<Item = ConnectivityReport> + '_ {
        self.survey.into_iter().chain(self.exact)
    }

    /// Headline `k`: the survey value when it ran, otherwise the exact one.
    #[must_use]
    pub fn k(&self) -> Option<usize> {
        self.survey.or(self.exact).map(|report| report.k())
    }
}
