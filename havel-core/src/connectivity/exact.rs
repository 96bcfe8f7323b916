//! Exact edge- and vertex-connectivity via max-flow.
//!
//! Edge connectivity λ is the smallest `0 -> t` unit-capacity flow over all
//! `t`. Vertex connectivity κ splits each vertex into an in/out pair joined by
//! a unit arc and takes the smallest flow over non-adjacent pairs; a complete
//! graph has κ = V − 1. Both are 0 for graphs that are disconnected or have
//! fewer than two vertices.

use tracing::{debug, instrument};

use crate::{
    error::Result,
    graph::{Graph, RealizedGraph},
    reachability::reachable_from,
};

use super::{ConnectivityReport, Method, flow::FlowNetwork};

/// Computes exact edge and vertex connectivity.
///
/// # Errors
/// Propagates [`crate::HavelError::VertexOutOfRange`] from reachability
/// queries, which cannot occur for a well-formed [`RealizedGraph`].
///
/// # Examples
/// ```
/// use havel_core::{DegreeSequence, exact, realize, survey};
///
/// // the 4-cycle: the survey over-reports, the exact analyzer does not
/// let cycle = realize(&DegreeSequence::new(vec![2, 2, 2, 2])?)?;
/// assert_eq!(survey(&cycle)?.k(), 3);
/// assert_eq!(exact(&cycle)?.k(), 2);
/// # Ok::<(), havel_core::HavelError>(())
/// ```
#[instrument(
    name = "core.exact",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn exact(graph: &RealizedGraph) -> Result<ConnectivityReport> {
    let edge = edge_connectivity(graph)?;
    let vertex = vertex_connectivity(graph)?;
    debug!(edge, vertex, "exact connectivity computed");
    Ok(ConnectivityReport::new(Method::Exact, edge, vertex))
}

/// Minimum number of edges whose removal disconnects the graph.
///
/// # Errors
/// See [`exact`].
pub fn edge_connectivity(graph: &RealizedGraph) -> Result<usize> {
    if !is_connected_nontrivial(graph)? {
        return Ok(0);
    }
    let bound = graph.min_degree();
    let mut best = bound;
    for sink in 1..graph.vertex_count() {
        let mut network = edge_network(graph);
        best = best.min(network.max_flow(0, sink, best));
        if best == 0 {
            break;
        }
    }
    Ok(best)
}

/// Minimum number of vertices whose removal disconnects the graph (or leaves
/// a single vertex).
///
/// # Errors
/// See [`exact`].
pub fn vertex_connectivity(graph: &RealizedGraph) -> Result<usize> {
    if !is_connected_nontrivial(graph)? {
        return Ok(0);
    }
    let vertices = graph.vertex_count();
    let mut best = vertices - 1;
    for source in 0..vertices {
        for sink in (source + 1)..vertices {
            if graph.has_edge(source, sink) {
                continue;
            }
            let mut network = split_network(graph, source, sink);
            best = best.min(network.max_flow(out_node(source), in_node(sink), best));
        }
    }
    Ok(best)
}

fn is_connected_nontrivial(graph: &Graph) -> Result<bool> {
    if graph.vertex_count() < 2 {
        return Ok(false);
    }
    Ok(reachable_from(graph, 0, None)?.spans_all_except(None))
}

fn edge_network(graph: &Graph) -> FlowNetwork {
    let mut network = FlowNetwork::new(graph.vertex_count());
    for (u, v) in graph.edges() {
        network.add_pair(u, v, 1, 1);
    }
    network
}

const fn in_node(vertex: usize) -> usize {
    2 * vertex
}

const fn out_node(vertex: usize) -> usize {
    2 * vertex + 1
}

/// Vertex-split network where only vertices other than `source` and `sink`
/// have unit throughput.
fn split_network(graph: &Graph, source: usize, sink: usize) -> FlowNetwork {
    let vertices = graph.vertex_count();
    let unbounded = vertices;
    let mut network = FlowNetwork::new(2 * vertices);
    for vertex in 0..vertices {
        let throughput = if vertex == source || vertex == sink {
            unbounded
        } else {
            1
        };
        network.add_pair(in_node(vertex), out_node(vertex), throughput, 0);
    }
    for (u, v) in graph.edges() {
        network.add_pair(out_node(u), in_node(v), unbounded, 0);
        network.add_pair(out_node(v), in_node(u), unbounded, 0);
    }
    network
}
