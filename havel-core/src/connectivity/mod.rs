//! Connectivity analysis for realized graphs.
//!
//! Two analyzers are offered:
//!
//! - [`survey`] removes each vertex in turn and scores the remaining graph by
//!   BFS. It is a brute-force surrogate and its scores are *not* the
//!   graph-theoretic connectivities in general (a 4-cycle scores 3).
//! - [`exact`] computes the textbook edge- and vertex-connectivity with
//!   unit-capacity max-flow.
//!
//! Both return a [`ConnectivityReport`] whose [`ConnectivityReport::k`] is the
//! minimum of its two values.

mod exact;
mod flow;
mod survey;

use std::fmt;

pub use self::{
    exact::{edge_connectivity, exact, vertex_connectivity},
    survey::{survey, survey_edge_score, survey_vertex_score},
};

/// Identifies which analyzer produced a [`ConnectivityReport`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Method {
    /// Single-vertex removal survey.
    Survey,
    /// Max-flow based exact connectivity.
    Exact,
}

impl Method {
    /// Stable lowercase name used in logs and rendered output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Survey => "survey",
            Self::Exact => "exact",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Edge and vertex connectivity values produced by one analyzer.
///
/// # Examples
/// ```
/// use havel_core::{DegreeSequence, realize, survey};
///
/// let graph = realize(&DegreeSequence::new(vec![3, 3, 3, 3])?)?;
/// let report = survey(&graph)?;
/// assert_eq!((report.edge(), report.vertex(), report.k()), (3, 3, 3));
/// # Ok::<(), havel_core::HavelError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConnectivityReport {
    method: Method,
    edge: usize,
    vertex: usize,
}

impl ConnectivityReport {
    pub(crate) const fn new(method: Method, edge: usize, vertex: usize) -> Self {
        Self {
            method,
            edge,
            vertex,
        }
    }

    /// Analyzer that produced the values.
    #[must_use]
    #[rustfmt::skip]
    pub const fn method(&self) -> Method { self.method }

    /// Edge-connectivity value.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> usize { self.edge }

    /// Vertex-connectivity value.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> usize { self.vertex }

    /// Largest `k` for which the graph counts as `k`-connected: the minimum of
    /// the edge and vertex values.
    #[must_use]
    pub fn k(&self) -> usize {
        self.edge.min(self.vertex)
    }
}
