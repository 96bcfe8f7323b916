//! Simple undirected graph storage.
//!
//! Vertices are dense ids `0..vertex_count`. Each vertex keeps a sorted,
//! duplicate-free neighbour list so enumeration order is deterministic.

use std::ops::Deref;

use crate::error::{HavelError, Result};

/// Undirected graph without self-loops or parallel edges.
///
/// # Examples
/// ```
/// use havel_core::Graph;
///
/// let mut graph = Graph::new(3);
/// assert!(graph.add_edge(0, 2)?);
/// assert!(!graph.add_edge(2, 0)?);
/// assert_eq!(graph.neighbors(2), Some(&[0][..]));
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), havel_core::HavelError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Inserts the undirected edge `{u, v}`.
    ///
    /// Returns `false` when the edge was already present, leaving the graph
    /// unchanged.
    ///
    /// # Errors
    /// Returns [`HavelError::SelfLoop`] when `u == v` and
    /// [`HavelError::VertexOutOfRange`] when either endpoint does not exist.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(HavelError::SelfLoop { vertex: u });
        }
        let inserted = insert_sorted(&mut self.adjacency[u], v);
        if inserted {
            insert_sorted(&mut self.adjacency[v], u);
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    /// Neighbours of `v` in ascending order, or `None` when `v` does not exist.
    #[must_use]
    pub fn neighbors(&self, v: usize) -> Option<&[usize]> {
        self.adjacency.get(v).map(Vec::as_slice)
    }

    /// Returns `true` when `{u, v}` is an edge.
    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors(u)
            .is_some_and(|neighbours| neighbours.binary_search(&v).is_ok())
    }

    /// Degree of `v`, or `None` when `v` does not exist.
    #[must_use]
    pub fn degree(&self, v: usize) -> Option<usize> {
        self.neighbors(v).map(<[usize]>::len)
    }

    /// Degrees of all vertices indexed by vertex id.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        self.adjacency.iter().map(Vec::len).collect()
    }

    /// Smallest vertex degree; `0` for an empty graph.
    #[must_use]
    pub fn min_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).min().unwrap_or(0)
    }

    /// Iterates every edge once as `(smaller, larger)` in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, neighbours)| {
                neighbours
                    .iter()
                    .copied()
                    .filter(move |&v| u < v)
                    .map(move |v| (u, v))
            })
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(HavelError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

fn insert_sorted(list: &mut Vec<usize>, value: usize) -> bool {
    match list.binary_search(&value) {
        Ok(_) => false,
        Err(position) => {
            list.insert(position, value);
            true
        }
    }
}

/// A graph produced by a successful realization.
///
/// Connectivity analysis only accepts this type, so it can never observe a
/// partially built graph. Read access goes through [`Deref`] to [`Graph`].
///
/// # Examples
/// ```
/// use havel_core::{DegreeSequence, realize};
///
/// let graph = realize(&DegreeSequence::new(vec![1, 1])?)?;
/// assert_eq!(graph.edge_count(), 1);
/// assert!(graph.has_edge(0, 1));
/// # Ok::<(), havel_core::HavelError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(into = "RealizedGraphRepr"))]
pub struct RealizedGraph {
    graph: Graph,
}

impl RealizedGraph {
    pub(crate) fn new(graph: Graph) -> Self {
        Self { graph }
    }

    /// Borrows the underlying graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_graph(&self) -> &Graph { &self.graph }

    /// Releases the underlying graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

impl Deref for RealizedGraph {
    type Target = Graph;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct RealizedGraphRepr {
    vertices: usize,
    edges: Vec<(usize, usize)>,
}

#[cfg(feature = "serde")]
impl From<RealizedGraph> for RealizedGraphRepr {
    fn from(value: RealizedGraph) -> Self {
        Self {
            vertices: value.vertex_count(),
            edges: value.edges().collect(),
        }
    }
}
