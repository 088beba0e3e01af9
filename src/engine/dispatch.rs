// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use crate::context::{LaneContext, Task, TaskType};
use crate::graph::Motif;
use crate::sim::latency::CycleCounter;

/// Turns the lane context into a search request for the next motif edge.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
    motif: &'a Motif,
}

impl<'a> Dispatcher<'a> {
    pub fn new(motif: &'a Motif) -> Self {
        Self { motif }
    }

    /// Fill `task` from the context: which motif edge to match, the graph
    /// nodes its endpoints are pinned to, and copies of the table and
    /// deadline.
    pub fn dispatch(&self, ctx: &LaneContext, task: &mut Task, clock: &mut CycleCounter) {
        let l = clock.model();
        task.kind = TaskType::Search;
        task.em = ctx.matched;
        task.eg = ctx.cursor;

        let wanted = self.motif.edge(task.em);
        task.um = wanted.u;
        task.vm = wanted.v;
        clock.charge(l.cam * 4);

        task.ug = ctx.table.graph_node_for(task.um);
        task.vg = ctx.table.graph_node_for(task.vm);
        clock.charge(l.jump * 2 + l.cam * 2 + l.mov * 2);

        task.table = ctx.table.clone();
        task.deadline = ctx.deadline;
        clock.charge(l.cam * 2);
    }
}
