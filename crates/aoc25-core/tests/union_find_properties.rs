//! Property-based tests for [`UnionFind`] and [`DisjointSet`].
//!
//! Connectivity is checked against `petgraph`'s connected-component and
//! path queries on the same random edge list (2-100 elements, 0-150 edges).
#![allow(clippy::expect_used)]

use aoc25_core::{DisjointSet, UnionFind};
use petgraph::algo::{connected_components, has_path_connecting};
use petgraph::graph::{NodeIndex, UnGraph};
use proptest::prelude::*;

fn arb_edges() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..=100).prop_flat_map(|n| {
        let edge = (0..n, 0..n);
        (Just(n), prop::collection::vec(edge, 0..150))
    })
}

fn graph_of(n: usize, edges: &[(usize, usize)]) -> UnGraph<(), ()> {
    let mut graph = UnGraph::with_capacity(n, edges.len());
    for _ in 0..n {
        graph.add_node(());
    }
    for &(a, b) in edges {
        graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
    }
    graph
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn component_count_matches_petgraph((n, edges) in arb_edges()) {
        let mut uf = UnionFind::new(n);
        for &(a, b) in &edges {
            uf.union(a, b);
        }
        let graph = graph_of(n, &edges);
        prop_assert_eq!(uf.component_count(), connected_components(&graph));

        let sizes = uf.component_sizes();
        prop_assert_eq!(sizes.len(), uf.component_count());
        prop_assert_eq!(sizes.iter().map(|&(_, size)| size).sum::<usize>(), n);
    }

    #[test]
    fn connected_matches_reachability(
        (n, edges) in arb_edges(),
        queries in prop::collection::vec((0usize..100, 0usize..100), 1..30),
    ) {
        let mut uf = UnionFind::new(n);
        for &(a, b) in &edges {
            uf.union(a, b);
        }
        let graph = graph_of(n, &edges);
        for (a, b) in queries {
            let (a, b) = (a % n, b % n);
            let reachable =
                has_path_connecting(&graph, NodeIndex::new(a), NodeIndex::new(b), None);
            prop_assert_eq!(uf.connected(a, b), reachable, "{} ~ {}", a, b);
        }
    }

    #[test]
    fn union_reports_merges_once((n, edges) in arb_edges()) {
        let mut uf = UnionFind::new(n);
        let merges = edges.iter().filter(|&&(a, b)| uf.union(a, b)).count();
        prop_assert_eq!(uf.component_count(), n - merges);

        // Replaying the same edges merges nothing.
        let before = uf.clone();
        for &(a, b) in &edges {
            prop_assert!(!uf.union(a, b));
        }
        prop_assert_eq!(uf.component_count(), before.component_count());
    }

    #[test]
    fn find_is_idempotent((n, edges) in arb_edges()) {
        let mut uf = UnionFind::new(n);
        for &(a, b) in &edges {
            uf.union(a, b);
        }
        for x in 0..n {
            let root = uf.find(x);
            prop_assert_eq!(uf.find(root), root);
            prop_assert_eq!(uf.find(x), root);
        }
    }

    #[test]
    fn keyed_sets_agree_with_dense_sets((n, edges) in arb_edges()) {
        let mut dense = UnionFind::new(n);
        let mut keyed: DisjointSet<String> = DisjointSet::new();
        for x in 0..n {
            keyed.make_set(format!("box-{x}"));
        }
        for &(a, b) in &edges {
            let merged = dense.union(a, b);
            prop_assert_eq!(keyed.union(format!("box-{a}"), format!("box-{b}")), merged);
        }
        prop_assert_eq!(keyed.component_count(), dense.component_count());

        let mut keyed_sizes: Vec<usize> =
            keyed.component_sizes().into_iter().map(|(_, size)| size).collect();
        let mut dense_sizes: Vec<usize> =
            dense.component_sizes().into_iter().map(|(_, size)| size).collect();
        keyed_sizes.sort_unstable();
        dense_sizes.sort_unstable();
        prop_assert_eq!(keyed_sizes, dense_sizes);
    }
}
