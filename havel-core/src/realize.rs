//! Havel–Hakimi realization of degree sequences.
//!
//! Each round sorts the unsatisfied vertices by residual degree, takes the
//! largest, and connects it to the next `d` vertices. Vertex ids travel with
//! their residual degree in [`DegreeRecord`]s, so the edges always join the
//! vertices the degrees belong to regardless of where sorting moved them.

use tracing::{debug, instrument, trace};

use crate::{
    degree::{DegreeRecord, DegreeSequence},
    error::{HavelError, InfeasibleReason, Result},
    graph::{Graph, RealizedGraph},
};

/// Realizes `sequence` as a simple graph.
///
/// Ties in residual degree are broken by ascending vertex id so the produced
/// graph is reproducible. At most `sequence.len()` rounds run.
///
/// # Errors
/// Returns [`HavelError::InfeasibleSequence`] when no simple graph has the
/// requested degrees. No partial graph is returned in that case.
///
/// # Examples
/// ```
/// use havel_core::{DegreeSequence, HavelErrorCode, realize};
///
/// let k4 = realize(&DegreeSequence::new(vec![3, 3, 3, 3])?)?;
/// assert_eq!(k4.edge_count(), 6);
///
/// let err = realize(&DegreeSequence::new(vec![5, 1, 1, 1, 1])?).expect_err("infeasible");
/// assert_eq!(err.code(), HavelErrorCode::InfeasibleSequence);
/// # Ok::<(), havel_core::HavelError>(())
/// ```
#[instrument(
    name = "core.realize",
    err,
    skip(sequence),
    fields(vertices = sequence.len(), degree_sum = sequence.sum()),
)]
pub fn realize(sequence: &DegreeSequence) -> Result<RealizedGraph> {
    let mut graph = Graph::new(sequence.len());
    let mut pending = sequence.records();

    loop {
        pending.sort_by(|left, right| {
            right
                .remaining
                .cmp(&left.remaining)
                .then_with(|| left.vertex.cmp(&right.vertex))
        });
        while pending.last().is_some_and(|record| record.remaining == 0) {
            pending.pop();
        }
        if pending.is_empty() {
            break;
        }

        let hub = pending.remove(0);
        let peers = connect_hub(hub, &mut pending)?;
        trace!(vertex = hub.vertex, degree = hub.remaining, ?peers, "connecting vertex");
        for peer in peers {
            graph.add_edge(hub.vertex, peer)?;
        }
    }

    debug!(edges = graph.edge_count(), "degree sequence realized");
    Ok(RealizedGraph::new(graph))
}

/// Decrements the residual degrees of the `hub.remaining` leading records and
/// returns their vertex ids.
fn connect_hub(hub: DegreeRecord, pending: &mut [DegreeRecord]) -> Result<Vec<usize>> {
    let infeasible = |reason: InfeasibleReason| {
        debug!(vertex = hub.vertex, degree = hub.remaining, %reason, "degree sequence is not graphic");
        HavelError::InfeasibleSequence {
            vertex: hub.vertex,
            degree: hub.remaining,
            reason,
        }
    };

    let peer_count = pending.len();
    let Some(targets) = pending.get_mut(..hub.remaining) else {
        return Err(infeasible(InfeasibleReason::DegreeExceedsPeers {
            peers: peer_count,
        }));
    };

    let mut peers = Vec::with_capacity(targets.len());
    for target in targets {
        target.remaining = target.remaining.checked_sub(1).ok_or_else(|| {
            infeasible(InfeasibleReason::NegativeResidual {
                neighbour: target.vertex,
            })
        })?;
        peers.push(target.vertex);
    }
    Ok(peers)
}
