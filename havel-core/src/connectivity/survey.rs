//! Single-vertex removal survey.
//!
//! For every vertex `u` the survey excludes `u` from traversal and runs a BFS
//! from each other vertex. Two scores are taken per trial:
//!
//! - edge score: the size of the largest reachable set;
//! - vertex score: how many start vertices reach everything except `u`.
//!
//! Each reported value is the minimum over all trials. Cost is `O(V)` trials
//! of `O(V)` searches, each `O(V + E)`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{
    error::Result,
    graph::{Graph, RealizedGraph},
    reachability::reachable_from,
};

use super::{ConnectivityReport, Method};

/// Runs both survey scores.
///
/// # Errors
/// Propagates [`crate::HavelError::VertexOutOfRange`] from reachability
/// queries, which cannot occur for a well-formed [`RealizedGraph`].
#[instrument(
    name = "core.survey",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn survey(graph: &RealizedGraph) -> Result<ConnectivityReport> {
    let edge = survey_edge_score(graph)?;
    let vertex = survey_vertex_score(graph)?;
    debug!(edge, vertex, "removal survey completed");
    Ok(ConnectivityReport::new(Method::Survey, edge, vertex))
}

/// Minimum over removed vertices of the largest set reachable from any other
/// vertex.
///
/// # Errors
/// See [`survey`].
///
/// # Examples
/// ```
/// use havel_core::{DegreeSequence, realize, survey_edge_score};
///
/// // path 1 - 0 - 2: removing the centre leaves singletons
/// let path = realize(&DegreeSequence::new(vec![2, 1, 1])?)?;
/// assert_eq!(survey_edge_score(&path)?, 1);
/// # Ok::<(), havel_core::HavelError>(())
/// ```
pub fn survey_edge_score(graph: &RealizedGraph) -> Result<usize> {
    min_over_removals(graph, largest_component_without)
}

/// Minimum over removed vertices of the number of start vertices whose BFS
/// reaches every remaining vertex.
///
/// # Errors
/// See [`survey`].
pub fn survey_vertex_score(graph: &RealizedGraph) -> Result<usize> {
    min_over_removals(graph, spanning_starts_without)
}

fn largest_component_without(graph: &Graph, removed: usize) -> Result<usize> {
    let mut largest = 0;
    for start in (0..graph.vertex_count()).filter(|&start| start != removed) {
        largest = largest.max(reachable_from(graph, start, Some(removed))?.len());
    }
    Ok(largest)
}

fn spanning_starts_without(graph: &Graph, removed: usize) -> Result<usize> {
    let mut witnesses = 0;
    for start in (0..graph.vertex_count()).filter(|&start| start != removed) {
        if reachable_from(graph, start, Some(removed))?.spans_all_except(Some(removed)) {
            witnesses += 1;
        }
    }
    Ok(witnesses)
}

#[cfg(not(feature = "parallel"))]
fn min_over_removals<F>(graph: &Graph, trial: F) -> Result<usize>
where
    F: Fn(&Graph, usize) -> Result<usize>,
{
    let mut best: Option<usize> = None;
    for removed in 0..graph.vertex_count() {
        let score = trial(graph, removed)?;
        best = Some(best.map_or(score, |current| current.min(score)));
    }
    Ok(best.unwrap_or(0))
}

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
fn min_over_removals<F>(graph: &Graph, trial: F) -> Result<usize>
where
    F: Fn(&Graph, usize) -> Result<usize> + Sync,
{
    let scores = (0..graph.vertex_count())
        .into_par_iter()
        .map(|removed| trial(graph, removed))
        .collect::<Result<Vec<_>>>()?;
    Ok(scores.into_iter().min().unwrap_or(0))
}
