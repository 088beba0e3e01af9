// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Two-phase edge search.
//!
//! Phase one narrows the edge list to candidates that touch the pinned graph
//! nodes and sit at or after the search cursor. Phase two walks those
//! candidates in order and accepts the first one that fits the time window,
//! the motif edge's shape and the current table.

use crate::context::{Task, TaskType};
use crate::graph::{Edge, EdgeIndex, NodeId, TemporalGraph};
use crate::memo::SearchMemo;
use crate::sim::latency::CycleCounter;
use crate::state::{CorrespondenceTable, Counters, Statistics};

/// Edge records per edge-cache line.
const EDGES_PER_LINE: usize = 8;

/// Answers search tasks against one graph.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    graph: &'a TemporalGraph,
}

impl<'a> SearchEngine<'a> {
    pub fn new(graph: &'a TemporalGraph) -> Self {
        Self { graph }
    }

    /// Run both phases and leave the answer in `task`.
    pub fn search(
        &self,
        task: &mut Task,
        root: EdgeIndex,
        memo: &mut SearchMemo,
        clock: &mut CycleCounter,
        stats: &mut Statistics,
    ) {
        let candidates = self.phase_one(task, root, memo, clock, stats);
        self.phase_two(task, &candidates, clock);
    }

    /// Indices of edges at or after `task.eg` whose endpoints equal the
    /// pinned graph nodes, in increasing order.
    ///
    /// Indexed lookups produce the same list a full scan would; the cost
    /// still models the scan through the edge cache.
    pub fn phase_one(
        &self,
        task: &Task,
        root: EdgeIndex,
        memo: &mut SearchMemo,
        clock: &mut CycleCounter,
        stats: &mut Statistics,
    ) -> Vec<EdgeIndex> {
        let l = clock.model();
        clock.charge(l.mov * 2);
        let lines = self.graph.len().div_ceil(EDGES_PER_LINE) as u64;
        clock.charge((l.cache * 2 + l.jump * 2 + l.mov + l.add) * lines);

        let adjacent = self.graph.adjacent(task.ug, task.vg);
        let key = memo.key(task.ug, task.vg, adjacent.len());
        let start = match key {
            Some(key) => {
                clock.charge(l.cam + l.jump);
                match memo.start(key, root) {
                    Some(offset) => {
                        stats.increment(Counters::MemoHits);
                        offset.min(adjacent.len())
                    }
                    None => {
                        stats.increment(Counters::MemoMisses);
                        0
                    }
                }
            }
            None => 0,
        };

        let scanned = &adjacent[start..];
        if let Some(key) = key {
            let live = start + scanned.partition_point(|&index| index < root);
            memo.record(key, root, live);
            clock.charge(l.cam);
        }
        clock.charge((l.jump * 2 + l.mov + l.cache + l.add) * scanned.len() as u64);

        let from = scanned.partition_point(|&index| index < task.eg);
        scanned[from..].to_vec()
    }

    /// Accept the first candidate that fits; otherwise turn the task into a
    /// backtrack.
    pub fn phase_two(&self, task: &mut Task, candidates: &[EdgeIndex], clock: &mut CycleCounter) {
        let l = clock.model();
        clock.charge((l.add + l.cache * 3) * candidates.len() as u64);
        let wanted = Edge::new(task.um, task.vm, 0);

        for &index in candidates {
            let edge = self.graph.edge(index);
            if edge.time <= task.deadline
                && wanted.same_shape(edge)
                && consistent(&task.table, edge.u, task.um)
                && consistent(&task.table, edge.v, task.vm)
            {
                task.eg = index;
                task.kind = TaskType::Bookkeep;
                return;
            }
            clock.charge(l.jump * 5 + l.mov * 2);
        }
        task.eg = self.graph.len();
        task.kind = TaskType::Backtrack;
    }
}

/// Graph node `g` may play motif node `m`: it already does, or it plays
/// nothing yet.
#[inline]
fn consistent(table: &CorrespondenceTable, g: NodeId, m: NodeId) -> bool {
    table.is_mapped(g, m) || !table.has_mapping(g)
}
