//! chainpath: a single-threaded, in-memory algorithms toolkit with
//! ordered containers, a chained hash table, a stable binary min-heap,
//! and a Dijkstra shortest-path engine composed on top of them.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: build each structure in a safe, verifiable layer so the
//!   pathfinding engine at the top can be reasoned about purely through
//!   the contracts of the layers below.
//! - Layers:
//!   - SinglyLinkedList<T> / LinkedList<T>: slotmap-arena lists with
//!     indexed access; the doubly-linked variant walks from the nearer
//!     end. The arena exclusively owns all nodes, so links are
//!     generational keys, never references, and clearing is one arena
//!     drop.
//!   - ChainedHashMap<K, V, S>: separate-chaining table over a bucket
//!     array; entries store a precomputed u64 hash so resizing never
//!     re-invokes `K: Hash`. Doubles capacity when the load factor
//!     passes 0.75. Deterministic FNV-1a hashing by default, any
//!     `BuildHasher` via the `S` seam.
//!   - PriorityQueue<T, P>: dense array binary min-heap ordered by
//!     priority then insertion sequence, so equal priorities dequeue
//!     FIFO.
//!   - AdjacencyGraph<V> + Graph<V> trait: vertex to ordered edge list,
//!     built from the map and list layers; readers see only the trait.
//!   - dijkstra: lazy-deletion frontier over the queue, run-scoped
//!     distance/predecessor maps, negative weights rejected mid-run.
//!
//! Constraints
//! - Single-threaded: no internal locking anywhere; callers sharing an
//!   instance across threads must serialize access externally.
//! - No logging: every outcome is a return value.
//! - Absence vs. violation: a missing map key or an unreachable target
//!   is a normal `None`; an out-of-range index, an empty-queue dequeue,
//!   an unknown vertex, or a negative weight is an `Err` from a small
//!   per-module error enum.
//!
//! Non-goals
//! - Persistence, concurrency, batch multi-graph processing.
//! - Negative edge weights: rejected with `PathError::NegativeWeight`,
//!   not handled via Bellman-Ford.

pub mod chained_hash_map;
mod chained_hash_map_proptest;
pub mod dijkstra;
pub mod fnv;
pub mod graph;
pub mod linked_list;
pub mod priority_queue;
pub mod singly_linked_list;

// Public surface
pub use chained_hash_map::{ChainedHashMap, CollisionStats};
pub use dijkstra::{all_paths, find_distances, find_path, Path, PathError};
pub use fnv::{Fnv1aBuildHasher, Fnv1aHasher};
pub use graph::{AdjacencyGraph, Edge, Graph, GraphError};
pub use linked_list::{LinkedList, ListError};
pub use priority_queue::{PriorityQueue, QueueError};
pub use singly_linked_list::SinglyLinkedList;
