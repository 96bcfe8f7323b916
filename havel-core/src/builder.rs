//! Builder utilities for configuring the analysis pipeline.
//!
//! Exposes the analyzer selection surface and the vertex bound validated
//! before an [`Analyzer`] is constructed.

use std::num::NonZeroUsize;

use crate::{Result, analyzer::Analyzer, error::HavelError};

/// Default upper bound on the number of vertices an [`Analyzer`] accepts.
///
/// The survey performs `O(V²)` breadth-first searches, so inputs are kept to
/// demonstration sizes unless the caller raises the bound explicitly.
pub const DEFAULT_MAX_VERTICES: usize = 512;

/// Selects which connectivity analyzers [`Analyzer::run`] executes.
///
/// # Examples
/// ```
/// use havel_core::MethodSelection;
///
/// assert_eq!(MethodSelection::default(), MethodSelection::Survey);
/// assert!(MethodSelection::Both.runs_exact());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MethodSelection {
    /// Run only the single-vertex removal survey.
    #[default]
    Survey,
    /// Run only the max-flow based exact analyzer.
    Exact,
    /// Run both analyzers.
    Both,
}

impl MethodSelection {
    /// Returns `true` when the removal survey is selected.
    #[must_use]
    pub const fn runs_survey(self) -> bool {
        matches!(self, Self::Survey | Self::Both)
    }

    /// Returns `true` when the exact analyzer is selected.
    #[must_use]
    pub const fn runs_exact(self) -> bool {
        matches!(self, Self::Exact | Self::Both)
    }
}

/// Configures and constructs [`Analyzer`] instances.
///
/// # Examples
/// ```
/// use havel_core::{AnalyzerBuilder, MethodSelection};
///
/// let analyzer = AnalyzerBuilder::new()
///     .with_method(MethodSelection::Both)
///     .with_max_vertices(64)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(analyzer.max_vertices().get(), 64);
/// assert_eq!(analyzer.method(), MethodSelection::Both);
/// ```
#[derive(Debug, Clone)]
pub struct AnalyzerBuilder {
    method: MethodSelection,
    max_vertices: usize,
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self {
            method: MethodSelection::default(),
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

impl AnalyzerBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses the analyzers to run.
    #[must_use]
    pub fn with_method(mut self, method: MethodSelection) -> Self {
        self.method = method;
        self
    }

    /// Returns the configured analyzer selection.
    #[must_use]
    pub fn method(&self) -> MethodSelection {
        self.method
    }

    /// Overrides the maximum accepted vertex count.
    #[must_use]
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Returns the configured maximum vertex count.
    #[must_use]
    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    /// Validates the configuration and constructs an [`Analyzer`].
    ///
    /// # Errors
    /// Returns [`HavelError::InvalidMaxVertices`] when the vertex bound is zero.
    pub fn build(self) -> Result<Analyzer> {
        let max_vertices = NonZeroUsize::new(self.max_vertices).ok_or(
            HavelError::InvalidMaxVertices {
                got: self.max_vertices,
            },
        )?;
        Ok(Analyzer::new(self.method, max_vertices))
    }
}
