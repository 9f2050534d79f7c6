// Dijkstra property tests.
//
// Property 1: on random non-negative graphs, the heap-backed engine
// agrees with a naive minimum-unvisited-scan oracle (the O(V^2)
// formulation) on the distance to every vertex.
//
// Property 2: every returned path is well-formed: starts at the start
// vertex, ends at the target, follows existing edges, and its edge
// weights (cheapest parallel edge per hop) sum to the reported
// distance.
//
// Weights are small integers carried as f64, so sums are exact and the
// comparisons are not flaky.
use chainpath::{find_distances, find_path, AdjacencyGraph, Graph};
use proptest::prelude::*;

const UNREACHED: f64 = f64::INFINITY;

// Naive single-source shortest distances: scan for the closest
// unvisited vertex instead of using a heap.
fn oracle_distances(n: usize, edges: &[(usize, usize, f64)], start: usize) -> Vec<f64> {
    let mut dist = vec![UNREACHED; n];
    let mut visited = vec![false; n];
    dist[start] = 0.0;
    loop {
        let mut current = None;
        let mut best = UNREACHED;
        for v in 0..n {
            if !visited[v] && dist[v] < best {
                best = dist[v];
                current = Some(v);
            }
        }
        let Some(u) = current else { break };
        visited[u] = true;
        for &(from, to, weight) in edges {
            if from == u && dist[u] + weight < dist[to] {
                dist[to] = dist[u] + weight;
            }
        }
    }
    dist
}

fn build_graph(n: usize, edges: &[(usize, usize, f64)]) -> AdjacencyGraph<usize> {
    let mut graph = AdjacencyGraph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, weight);
    }
    graph
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
    proptest::collection::vec(
        (0..n, 0..n, 0u8..32u8).prop_map(|(f, t, w)| (f, t, w as f64)),
        0..60,
    )
}

proptest! {
    #[test]
    fn prop_distances_match_naive_scan(
        n in 2usize..12,
        edges in edge_strategy(11),
        start_raw in 0usize..12,
    ) {
        let edges: Vec<_> = edges
            .into_iter()
            .filter(|&(f, t, _)| f < n && t < n)
            .collect();
        let start = start_raw % n;
        let graph = build_graph(n, &edges);

        let expected = oracle_distances(n, &edges, start);
        let actual = find_distances(&graph, &start).unwrap();

        for v in 0..n {
            match actual.get(&v) {
                Some(&d) => prop_assert_eq!(d, expected[v], "vertex {}", v),
                None => prop_assert_eq!(expected[v], UNREACHED, "vertex {}", v),
            }
        }
    }

    #[test]
    fn prop_paths_are_well_formed(
        n in 2usize..12,
        edges in edge_strategy(11),
        start_raw in 0usize..12,
        end_raw in 0usize..12,
    ) {
        let edges: Vec<_> = edges
            .into_iter()
            .filter(|&(f, t, _)| f < n && t < n)
            .collect();
        let start = start_raw % n;
        let end = end_raw % n;
        let graph = build_graph(n, &edges);

        let expected = oracle_distances(n, &edges, start);
        match find_path(&graph, &start, &end).unwrap() {
            None => prop_assert_eq!(expected[end], UNREACHED),
            Some(path) => {
                prop_assert_eq!(path.distance, expected[end]);
                prop_assert_eq!(path.vertices.first(), Some(&start));
                prop_assert_eq!(path.vertices.last(), Some(&end));
                prop_assert!(path.vertices.len() <= graph.vertex_count());

                // Each hop follows a real edge; take the cheapest of any
                // parallel edges for the weight sum.
                let mut total = 0.0;
                for hop in path.vertices.windows(2) {
                    let cheapest = graph
                        .edges(&hop[0])
                        .unwrap()
                        .filter(|edge| edge.to == hop[1])
                        .map(|edge| edge.weight)
                        .fold(UNREACHED, f64::min);
                    prop_assert!(cheapest < UNREACHED, "missing edge {} -> {}", hop[0], hop[1]);
                    total += cheapest;
                }
                prop_assert_eq!(total, path.distance);
            }
        }
    }
}
