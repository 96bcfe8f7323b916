//! Benchmark parameter types.

use std::fmt;

/// Parameters for a random-sequence benchmark run.
#[derive(Clone, Debug)]
pub struct SequenceBenchParams {
    /// Number of vertices in the sequence.
    pub vertices: usize,
    /// Probability, in percent, that any vertex pair is joined.
    pub edge_percent: u32,
}

impl fmt::Display for SequenceBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}%", self.vertices, self.edge_percent)
    }
}

/// Parameters for a regular-graph benchmark run.
#[derive(Clone, Debug)]
pub struct RegularBenchParams {
    /// Number of vertices.
    pub vertices: usize,
    /// Degree shared by every vertex.
    pub degree: usize,
}

impl fmt::Display for RegularBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertices, self.degree)
    }
}
