//! Weighted directed graph over the crate's own containers.
//!
//! `AdjacencyGraph` maps each vertex to an ordered edge list: a
//! [`ChainedHashMap`] from vertex to a [`LinkedList`] of outgoing
//! [`Edge`]s. Edges imply vertex existence (`add_edge` registers both
//! endpoints), and both self-loops and parallel edges are retained.
//! Weights are any finite `f64` at this layer; non-negativity is the
//! shortest-path engine's constraint, not the graph's.
//!
//! Consumers that only read the graph go through the [`Graph`] trait
//! (`has_vertex` / `vertices` / `edges` / `vertex_count`), which hides
//! the adjacency representation behind boxed iterators.

use core::fmt;
use core::hash::Hash;

use crate::chained_hash_map::ChainedHashMap;
use crate::linked_list::LinkedList;

/// A directed, weighted edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

/// Error returned when an operation names a vertex the graph has never
/// seen. Distinct from an "empty result": asking for the edges of an
/// unknown vertex is a contract violation, not an empty edge list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V> {
    UnknownVertex(V),
}

impl<V: fmt::Display> fmt::Display for GraphError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownVertex(vertex) => {
                write!(f, "vertex '{vertex}' does not exist in the graph")
            }
        }
    }
}

impl<V: fmt::Display + fmt::Debug> std::error::Error for GraphError<V> {}

/// Read-only view of a weighted directed graph.
///
/// Pathfinding consumes graphs exclusively through this trait and makes
/// no assumption about the adjacency representation behind it.
pub trait Graph<V> {
    fn has_vertex(&self, vertex: &V) -> bool;

    fn vertex_count(&self) -> usize;

    /// All vertices, in implementation-defined order.
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Outgoing edges of `vertex`, in insertion order.
    fn edges(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = &Edge<V>> + '_>, GraphError<V>>;
}

/// Adjacency-list graph: vertex → ordered list of outgoing edges.
pub struct AdjacencyGraph<V> {
    adjacency: ChainedHashMap<V, LinkedList<Edge<V>>>,
}

impl<V> AdjacencyGraph<V>
where
    V: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        AdjacencyGraph {
            adjacency: ChainedHashMap::new(),
        }
    }

    /// Registers `vertex` with no outgoing edges. Idempotent.
    pub fn add_vertex(&mut self, vertex: V) {
        if !self.adjacency.contains_key(&vertex) {
            self.adjacency.insert(vertex, LinkedList::new());
        }
    }

    /// Adds a directed edge `from → to`. Both endpoints become vertices
    /// if they were not already; duplicate edges are kept as parallel
    /// edges, and `from == to` is a valid self-loop.
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.push(Edge { from, to, weight });
        }
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .map(|edges| edges.iter().any(|edge| edge.to == *to))
            .unwrap_or(false)
    }

    /// Total number of stored edges; parallel edges count individually.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(LinkedList::len).sum()
    }
}

impl<V> Default for AdjacencyGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Graph<V> for AdjacencyGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn edges(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = &Edge<V>> + '_>, GraphError<V>> {
        match self.adjacency.get(vertex) {
            Some(edges) => Ok(Box::new(edges.iter())),
            None => Err(GraphError::UnknownVertex(vertex.clone())),
        }
    }
}
