//! Breadth-first reachability with optional vertex exclusion.
//!
//! Connectivity analysis simulates deleting a vertex by never entering it
//! during traversal; the graph itself is not modified.

use std::collections::VecDeque;

use crate::{error::Result, graph::Graph};

/// Vertices reached by a single [`reachable_from`] query.
///
/// # Examples
/// ```
/// use havel_core::{Graph, reachable_from};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1)?;
/// graph.add_edge(1, 2)?;
///
/// let all = reachable_from(&graph, 0, None)?;
/// assert_eq!(all.len(), 3);
///
/// let cut = reachable_from(&graph, 0, Some(1))?;
/// assert_eq!(cut.vertices().collect::<Vec<_>>(), vec![0]);
/// # Ok::<(), havel_core::HavelError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReachableSet {
    visited: Vec<bool>,
    count: usize,
}

impl ReachableSet {
    fn empty(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            count: 0,
        }
    }

    /// Marks `vertex`, returning `true` when it was not yet a member.
    fn visit(&mut self, vertex: usize) -> bool {
        let Some(seen) = self.visited.get_mut(vertex) else {
            return false;
        };
        if *seen {
            return false;
        }
        *seen = true;
        self.count += 1;
        true
    }

    /// Returns `true` when `vertex` was reached.
    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        self.visited.get(vertex).copied().unwrap_or(false)
    }

    /// Number of reached vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.count }

    /// Returns `true` when nothing was reached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Reached vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.visited
            .iter()
            .enumerate()
            .filter_map(|(vertex, &seen)| seen.then_some(vertex))
    }

    /// Returns `true` when every vertex other than `excluded` was reached.
    #[must_use]
    pub fn spans_all_except(&self, excluded: Option<usize>) -> bool {
        let excluded_count = usize::from(excluded.is_some_and(|vertex| vertex < self.visited.len()));
        self.count + excluded_count == self.visited.len()
    }
}

/// Collects every vertex reachable from `start`, never entering `excluded`.
///
/// Vertices are marked when discovered, so each is queued at most once. When
/// `start` is the excluded vertex the result is empty.
///
/// # Errors
/// Returns [`crate::HavelError::VertexOutOfRange`] when `start` or `excluded`
/// does not exist in `graph`.
pub fn reachable_from(graph: &Graph, start: usize, excluded: Option<usize>) -> Result<ReachableSet> {
    graph.check_vertex(start)?;
    if let Some(vertex) = excluded {
        graph.check_vertex(vertex)?;
    }

    let mut reached = ReachableSet::empty(graph.vertex_count());
    if excluded == Some(start) {
        return Ok(reached);
    }

    let mut queue = VecDeque::from([start]);
    reached.visit(start);
    while let Some(current) = queue.pop_front() {
        for &next in graph.neighbors(current).unwrap_or_default() {
            if Some(next) != excluded && reached.visit(next) {
                queue.push_back(next);
            }
        }
    }
    Ok(reached)
}
