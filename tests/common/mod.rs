// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use motif_search::config::SchedulePolicy;
use motif_search::graph::EdgeIndex;
use motif_search::{Edge, MotifMatch, Orchestrator, RunOutcome, SimConfig, TemporalGraph};
use std::collections::HashMap;

/// Build edges from `(u, v, time)` triples.
pub fn edges(triples: &[(u32, u32, i64)]) -> Vec<Edge> {
    triples.iter().map(|&(u, v, t)| Edge::new(u, v, t)).collect()
}

/// A config with unit-ish defaults and the given lanes and schedule.
pub fn config(lanes: usize, schedule: SchedulePolicy, parallel: bool) -> SimConfig {
    SimConfig {
        lanes,
        schedule,
        parallel,
        ..SimConfig::default()
    }
}

/// Run a complete search.
pub fn run(graph: &[Edge], motif: &[Edge], config: SimConfig) -> RunOutcome {
    Orchestrator::new(config, TemporalGraph::new(graph.to_vec()), motif.to_vec())
        .expect("valid search inputs")
        .run()
        .expect("search succeeds")
}

/// Matched edge tuples, sorted, for order-independent comparison.
pub fn embeddings(results: &[MotifMatch]) -> Vec<Vec<EdgeIndex>> {
    let mut found: Vec<Vec<EdgeIndex>> = results.iter().map(|m| m.edges.clone()).collect();
    found.sort();
    found
}

/// Every strictly increasing edge tuple that embeds the motif within its
/// window, by exhaustive enumeration. Only meaningful for time-ordered graphs.
pub fn brute_force(graph: &[Edge], motif: &[Edge]) -> Vec<Vec<EdgeIndex>> {
    let window = motif.last().map_or(0, |e| e.time) - motif.first().map_or(0, |e| e.time);
    let mut found = Vec::new();
    let mut chosen = Vec::new();
    extend(graph, motif, window, 0, &mut chosen, &mut found);
    found.sort();
    found
}

fn extend(
    graph: &[Edge],
    motif: &[Edge],
    window: i64,
    from: EdgeIndex,
    chosen: &mut Vec<EdgeIndex>,
    found: &mut Vec<Vec<EdgeIndex>>,
) {
    if chosen.len() == motif.len() {
        if embeds(graph, motif, chosen) {
            found.push(chosen.clone());
        }
        return;
    }
    for index in from..graph.len() {
        if let Some(&root) = chosen.first() {
            if graph[index].time > graph[root].time + window {
                continue;
            }
        }
        chosen.push(index);
        extend(graph, motif, window, index + 1, chosen, found);
        chosen.pop();
    }
}

/// The motif-to-graph node map implied by `chosen` is a bijection.
fn embeds(graph: &[Edge], motif: &[Edge], chosen: &[EdgeIndex]) -> bool {
    let mut forward: HashMap<u32, u32> = HashMap::new();
    let mut backward: HashMap<u32, u32> = HashMap::new();
    for (m, &g) in motif.iter().zip(chosen) {
        let e = graph[g];
        for (mn, gn) in [(m.u, e.u), (m.v, e.v)] {
            if *forward.entry(mn).or_insert(gn) != gn {
                return false;
            }
            if *backward.entry(gn).or_insert(mn) != mn {
                return false;
            }
        }
    }
    true
}
