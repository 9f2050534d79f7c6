//! Dijkstra single-source shortest paths.
//!
//! Composes the crate's other layers: the frontier is a stable
//! [`PriorityQueue`], and the per-run distance / predecessor / settled
//! bookkeeping lives in [`ChainedHashMap`]s that never escape the call.
//! The graph is consumed purely through the [`Graph`] trait.
//!
//! The frontier uses lazy deletion instead of decrease-key: relaxing a
//! vertex pushes a fresh `(vertex, distance)` entry and stale duplicates
//! are skipped when popped, because a vertex is settled the first time
//! it leaves the queue. Non-negative weights make that first pop final,
//! which is also what justifies the early exit once the target is
//! settled. A negative weight voids both guarantees, so relaxation fails
//! fast on one rather than returning a plausible wrong answer.
//!
//! Unreachable targets are not errors: `find_path` returns `Ok(None)`
//! and `find_distances` simply omits the vertex.

use core::fmt;
use core::hash::Hash;

use crate::chained_hash_map::ChainedHashMap;
use crate::graph::{Graph, GraphError};
use crate::priority_queue::PriorityQueue;

/// A shortest path: the visited vertices from start to end, inclusive,
/// and the summed edge weight.
#[derive(Clone, Debug, PartialEq)]
pub struct Path<V> {
    pub vertices: Vec<V>,
    pub distance: f64,
}

/// Failure modes of a pathfinding call.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError<V> {
    /// Start or end vertex is not part of the graph.
    UnknownVertex(V),
    /// A negative edge weight was encountered during relaxation; the
    /// algorithm's correctness argument does not survive it.
    NegativeWeight { from: V, to: V, weight: f64 },
}

impl<V> From<GraphError<V>> for PathError<V> {
    fn from(err: GraphError<V>) -> Self {
        match err {
            GraphError::UnknownVertex(vertex) => PathError::UnknownVertex(vertex),
        }
    }
}

impl<V: fmt::Display> fmt::Display for PathError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::UnknownVertex(vertex) => {
                write!(f, "vertex '{vertex}' does not exist in the graph")
            }
            PathError::NegativeWeight { from, to, weight } => write!(
                f,
                "negative weight {weight} on edge {from} -> {to}: Dijkstra requires non-negative weights"
            ),
        }
    }
}

impl<V: fmt::Display + fmt::Debug> std::error::Error for PathError<V> {}

/// Distance and predecessor maps of one finished run.
struct SearchState<V> {
    distances: ChainedHashMap<V, f64>,
    previous: ChainedHashMap<V, V>,
}

/// Shortest path from `start` to `end`, or `Ok(None)` if `end` is
/// unreachable. `find_path(g, a, a)` is `[a]` at distance 0.
pub fn find_path<V, G>(graph: &G, start: &V, end: &V) -> Result<Option<Path<V>>, PathError<V>>
where
    V: Eq + Hash + Clone,
    G: Graph<V> + ?Sized,
{
    if !graph.has_vertex(end) {
        return Err(PathError::UnknownVertex(end.clone()));
    }
    let state = run(graph, start, Some(end))?;
    Ok(reconstruct(&state, start, end, graph.vertex_count()))
}

/// Minimal distance from `start` to every *reachable* vertex.
/// Unreachable vertices are absent from the returned map.
pub fn find_distances<V, G>(graph: &G, start: &V) -> Result<ChainedHashMap<V, f64>, PathError<V>>
where
    V: Eq + Hash + Clone,
    G: Graph<V> + ?Sized,
{
    let state = run(graph, start, None)?;
    Ok(state.distances)
}

/// Shortest path from `start` to every other vertex of the graph, in a
/// single run; `None` where no path exists.
pub fn all_paths<V, G>(
    graph: &G,
    start: &V,
) -> Result<ChainedHashMap<V, Option<Path<V>>>, PathError<V>>
where
    V: Eq + Hash + Clone,
    G: Graph<V> + ?Sized,
{
    let state = run(graph, start, None)?;
    let mut paths = ChainedHashMap::new();
    for vertex in graph.vertices() {
        if vertex == start {
            continue;
        }
        paths.insert(
            vertex.clone(),
            reconstruct(&state, start, vertex, graph.vertex_count()),
        );
    }
    Ok(paths)
}

/// The relaxation loop. Runs until the frontier drains, or until
/// `target` is settled when one is given.
fn run<V, G>(graph: &G, start: &V, target: Option<&V>) -> Result<SearchState<V>, PathError<V>>
where
    V: Eq + Hash + Clone,
    G: Graph<V> + ?Sized,
{
    if !graph.has_vertex(start) {
        return Err(PathError::UnknownVertex(start.clone()));
    }

    let mut distances: ChainedHashMap<V, f64> = ChainedHashMap::new();
    let mut previous: ChainedHashMap<V, V> = ChainedHashMap::new();
    let mut settled: ChainedHashMap<V, ()> = ChainedHashMap::new();
    let mut frontier: PriorityQueue<V, f64> = PriorityQueue::new();

    // Every vertex other than `start` is implicitly at +inf until a
    // relaxation discovers it.
    distances.insert(start.clone(), 0.0);
    frontier.enqueue(start.clone(), 0.0);

    while let Ok(vertex) = frontier.dequeue() {
        if settled.contains_key(&vertex) {
            // Stale duplicate left behind by an earlier relaxation.
            continue;
        }
        settled.insert(vertex.clone(), ());

        if target == Some(&vertex) {
            break;
        }

        let base = match distances.get(&vertex) {
            Some(distance) => *distance,
            None => continue,
        };

        for edge in graph.edges(&vertex)? {
            if edge.weight < 0.0 {
                return Err(PathError::NegativeWeight {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    weight: edge.weight,
                });
            }
            let alt = base + edge.weight;
            let improves = match distances.get(&edge.to) {
                Some(current) => alt < *current,
                None => true,
            };
            if improves {
                distances.insert(edge.to.clone(), alt);
                previous.insert(edge.to.clone(), vertex.clone());
                frontier.enqueue(edge.to.clone(), alt);
            }
        }
    }

    Ok(SearchState {
        distances,
        previous,
    })
}

/// Walks the predecessor map backwards from `end`. The walk is bounded
/// by the vertex count; failing to reach `start` within that bound means
/// the predecessor chain is not a path from `start` and the target is
/// reported unreachable.
fn reconstruct<V>(
    state: &SearchState<V>,
    start: &V,
    end: &V,
    vertex_count: usize,
) -> Option<Path<V>>
where
    V: Eq + Hash + Clone,
{
    let distance = *state.distances.get(end)?;

    let mut vertices = vec![end.clone()];
    let mut current = end;
    while current != start {
        if vertices.len() > vertex_count {
            return None;
        }
        current = state.previous.get(current)?;
        vertices.push(current.clone());
    }
    vertices.reverse();
    Some(Path { vertices, distance })
}
