// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end searches on small hand-checked graphs.

mod common;

use common::{config, edges, embeddings, run};
use motif_search::config::SchedulePolicy;
use motif_search::state::Mapping;

#[test]
fn test_two_edge_path_on_triangle() {
    let graph = edges(&[(0, 1, 0), (1, 2, 1), (2, 0, 2)]);
    let motif = edges(&[(0, 1, 0), (1, 2, 1)]);
    let outcome = run(&graph, &motif, config(1, SchedulePolicy::Static, false));

    assert_eq!(outcome.report.result_count, 2);
    assert_eq!(embeddings(&outcome.results), vec![vec![0, 1], vec![1, 2]]);

    let from_first = outcome
        .results
        .iter()
        .find(|m| m.root == 0)
        .expect("occurrence rooted at edge 0");
    assert_eq!(from_first.graph_node_for(0), Some(0));
    assert_eq!(from_first.graph_node_for(1), Some(1));
    assert_eq!(from_first.graph_node_for(2), Some(2));

    // Edge 1 starts a second occurrence: 2 -> 0 arrives within one tick.
    let from_second = outcome
        .results
        .iter()
        .find(|m| m.root == 1)
        .expect("occurrence rooted at edge 1");
    assert_eq!(from_second.graph_node_for(0), Some(1));
    assert_eq!(from_second.graph_node_for(1), Some(2));
    assert_eq!(from_second.graph_node_for(2), Some(0));

    assert!(outcome.results.iter().all(|m| m.root != 2));
}

#[test]
fn test_single_edge_motif_matches_every_edge() {
    let graph = edges(&[(0, 1, 0), (1, 2, 1), (2, 0, 2)]);
    let motif = edges(&[(0, 1, 0)]);
    let outcome = run(&graph, &motif, config(2, SchedulePolicy::Static, false));

    assert_eq!(outcome.report.result_count, 3);
    let mut found = outcome.results.clone();
    found.sort_by_key(|m| m.root);
    for (root, found) in found.iter().enumerate() {
        let edge = graph[root];
        assert_eq!(found.edges, vec![root]);
        assert_eq!(
            found.mappings,
            vec![Mapping::new(0, edge.u, 1), Mapping::new(1, edge.v, 1)]
        );
    }
}

#[test]
fn test_late_edge_misses_window() {
    let graph = edges(&[(0, 1, 0), (0, 1, 5)]);
    let motif = edges(&[(0, 1, 0), (0, 1, 1)]);
    let outcome = run(&graph, &motif, config(1, SchedulePolicy::Static, false));
    assert_eq!(outcome.report.result_count, 0);
    assert!(outcome.results.is_empty());
}

#[test]
fn test_repeated_edge_shares_mappings() {
    let graph = edges(&[(0, 1, 0), (0, 1, 1)]);
    let motif = edges(&[(0, 1, 0), (0, 1, 1)]);
    let outcome = run(&graph, &motif, config(1, SchedulePolicy::Static, false));
    assert_eq!(outcome.report.result_count, 1);
    assert_eq!(
        outcome.results[0].mappings,
        vec![Mapping::new(0, 0, 2), Mapping::new(1, 1, 2)]
    );
}

#[test]
fn test_self_loops_match_only_self_loops() {
    let graph = edges(&[(0, 0, 0), (0, 1, 1), (1, 1, 2), (2, 3, 3)]);
    let motif = edges(&[(5, 5, 0)]);
    let outcome = run(&graph, &motif, config(1, SchedulePolicy::Static, false));
    assert_eq!(embeddings(&outcome.results), vec![vec![0], vec![2]]);
    assert_eq!(outcome.results[0].mappings.len(), 1);
    assert_eq!(outcome.results[0].mappings[0].count, 2);
}

#[test]
fn test_empty_graph_finds_nothing() {
    let outcome = run(&[], &edges(&[(0, 1, 0)]), config(4, SchedulePolicy::Dynamic, false));
    assert_eq!(outcome.report.result_count, 0);
    assert_eq!(outcome.report.total_cycles, 0);
    assert_eq!(outcome.report.end_to_end_cycles, 0);
}
