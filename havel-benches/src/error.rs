//! Benchmark setup error type.

use havel_core::HavelError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Sequence construction or realization failed.
    #[error("havel operation failed: {0}")]
    Core(#[from] HavelError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// An edge percentage above 100 was requested.
    #[error("edge percentage must be at most 100 (got {got})")]
    PercentOutOfRange {
        /// Rejected percentage.
        got: u32,
    },
    /// A regular degree that no simple graph on the given vertices can carry.
    #[error("degree {degree} is not realizable as a circulant on {vertices} vertices")]
    UnrealizableCirculant {
        /// Requested degree per vertex.
        degree: usize,
        /// Number of vertices.
        vertices: usize,
    },
}
