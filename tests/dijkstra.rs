// Dijkstra integration suite over AdjacencyGraph.
//
// Core invariants exercised:
// - Optimality: the returned distance is minimal and the path's edge
//   weights sum to it.
// - Unreachability is a first-class Ok(None), not an error.
// - Unknown endpoints and negative weights are errors, surfaced before
//   any plausible-but-wrong result can be produced.
use chainpath::{all_paths, find_distances, find_path, AdjacencyGraph, PathError};

// Test: single edge a -> b with weight 5.
#[test]
fn single_edge_path() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("a", "b", 5.0);
    let path = find_path(&graph, &"a", &"b").unwrap().unwrap();
    assert_eq!(path.vertices, vec!["a", "b"]);
    assert_eq!(path.distance, 5.0);
}

// Test: a 4-cycle a->b->c->d->a of weight-1 edges plus a direct a->d
// edge of weight 10. The three-hop route wins over the direct edge.
#[test]
fn cycle_beats_direct_edge() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("a", "b", 1.0);
    graph.add_edge("b", "c", 1.0);
    graph.add_edge("c", "d", 1.0);
    graph.add_edge("d", "a", 1.0);
    graph.add_edge("a", "d", 10.0);
    let path = find_path(&graph, &"a", &"d").unwrap().unwrap();
    assert_eq!(path.vertices, vec!["a", "b", "c", "d"]);
    assert_eq!(path.distance, 3.0);
}

// Test: start equals end.
#[test]
fn trivial_path_to_self() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("a", "b", 1.0);
    let path = find_path(&graph, &"a", &"a").unwrap().unwrap();
    assert_eq!(path.vertices, vec!["a"]);
    assert_eq!(path.distance, 0.0);
}

// Test: disconnected vertices yield Ok(None); find_distances omits
// them rather than reporting a sentinel.
#[test]
fn disconnected_vertices_are_unreachable() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("a", "b", 1.0);
    graph.add_vertex("island");
    assert_eq!(find_path(&graph, &"a", &"island").unwrap(), None);
    // Edges are directed; b cannot get back to a either.
    assert_eq!(find_path(&graph, &"b", &"a").unwrap(), None);

    let distances = find_distances(&graph, &"a").unwrap();
    assert_eq!(distances.get(&"b"), Some(&1.0));
    assert_eq!(distances.get(&"island"), None);
}

// Test: a negative edge weight is an error, even when a correct-looking
// answer could have been produced along a different route.
#[test]
fn negative_weight_is_rejected() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("a", "b", 2.0);
    graph.add_edge("a", "c", 1.0);
    graph.add_edge("c", "b", -5.0);
    assert_eq!(
        find_path(&graph, &"a", &"b"),
        Err(PathError::NegativeWeight {
            from: "c",
            to: "b",
            weight: -5.0
        })
    );
}

// Test: unknown start or end vertex.
#[test]
fn unknown_endpoints_are_errors() {
    let mut graph = AdjacencyGraph::new();
    graph.add_vertex("a");
    assert_eq!(
        find_path(&graph, &"missing", &"a"),
        Err(PathError::UnknownVertex("missing"))
    );
    assert_eq!(
        find_path(&graph, &"a", &"missing"),
        Err(PathError::UnknownVertex("missing"))
    );
}

// Test: 26-vertex weight-1 chain; distance 25, all vertices visited in
// order.
#[test]
fn linear_chain_visits_every_vertex() {
    let labels: Vec<String> = (b'a'..=b'z').map(|c| (c as char).to_string()).collect();
    let mut graph = AdjacencyGraph::new();
    for pair in labels.windows(2) {
        graph.add_edge(pair[0].clone(), pair[1].clone(), 1.0);
    }
    let path = find_path(&graph, &labels[0], &labels[25]).unwrap().unwrap();
    assert_eq!(path.distance, 25.0);
    assert_eq!(path.vertices, labels);
}

// Test: parallel edges; the cheaper one is used.
#[test]
fn parallel_edges_use_the_cheaper() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("a", "b", 9.0);
    graph.add_edge("a", "b", 4.0);
    let path = find_path(&graph, &"a", &"b").unwrap().unwrap();
    assert_eq!(path.distance, 4.0);
}

// Test: self-loops never shorten anything and never trap the search.
#[test]
fn self_loops_are_harmless() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("a", "a", 0.0);
    graph.add_edge("a", "b", 3.0);
    let path = find_path(&graph, &"a", &"b").unwrap().unwrap();
    assert_eq!(path.vertices, vec!["a", "b"]);
    assert_eq!(path.distance, 3.0);
}

// Test: all_paths agrees with per-target find_path on a small dense
// graph, including the unreachable entry.
#[test]
fn all_paths_matches_individual_queries() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("s", "a", 2.0);
    graph.add_edge("s", "b", 7.0);
    graph.add_edge("a", "b", 3.0);
    graph.add_edge("b", "t", 1.0);
    graph.add_vertex("lonely");

    let bulk = all_paths(&graph, &"s").unwrap();
    for target in ["a", "b", "t", "lonely"] {
        let single = find_path(&graph, &"s", &target).unwrap();
        assert_eq!(bulk.get(&target), Some(&single), "target {target}");
    }
    assert_eq!(bulk.len(), 4);
}

// Test: early exit does not truncate correctness when the target is
// popped before the frontier drains.
#[test]
fn early_exit_still_optimal() {
    // Diamond: s->m1->t and s->m2->t, with m2 cheaper overall, plus a
    // long tail beyond t that must not need exploring.
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("s", "m1", 1.0);
    graph.add_edge("m1", "t", 5.0);
    graph.add_edge("s", "m2", 2.0);
    graph.add_edge("m2", "t", 2.0);
    graph.add_edge("t", "far", 100.0);
    let path = find_path(&graph, &"s", &"t").unwrap().unwrap();
    assert_eq!(path.vertices, vec!["s", "m2", "t"]);
    assert_eq!(path.distance, 4.0);
}
