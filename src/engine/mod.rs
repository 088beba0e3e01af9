// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking state machine.
//!
//! A lane alternates between three components until its root task is
//! exhausted:
//!
//! 1. The [`ContextManager`] consumes a task and updates the lane context:
//!    `Bookkeep` commits the edge the task names, `Backtrack` steps the cursor
//!    past the current candidate and pops committed edges whose window is
//!    exhausted.
//! 2. The [`Dispatcher`] turns the context into a search request for the next
//!    motif edge.
//! 3. The [`SearchEngine`] answers the request, producing either a `Bookkeep`
//!    task (an edge was found) or a `Backtrack` task (none was).
//!
//! The context manager reports what the lane should do next:
//! - `Dispatch`: search for the next motif edge
//! - `Remanage`: an occurrence was recorded; backtrack to find siblings
//! - `End`: the root edge was popped; the search tree is exhausted
//!
//! Every transition charges the lane's cycle counter; the counter never feeds
//! back into control flow.

pub mod dispatch;
pub mod search;

pub use dispatch::Dispatcher;
pub use search::SearchEngine;

use crate::context::{LaneContext, Task, TaskType};
use crate::error::{Result, SearchError};
use crate::graph::{Edge, EdgeIndex, Motif, TemporalGraph};
use crate::sim::latency::CycleCounter;
use crate::state::{CorrespondenceTable, Counters, Inserted, MotifMatch, Removed, ResultStore, Statistics};
use tracing::trace;

/// What the lane should do after a context update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerStatus {
    /// The root task's search tree is exhausted.
    End,
    /// Dispatch a search for the next motif edge.
    Dispatch,
    /// An occurrence was recorded; keep looking for siblings.
    Remanage,
}

/// Applies tasks to a lane context.
#[derive(Debug, Clone, Copy)]
pub struct ContextManager<'a> {
    graph: &'a TemporalGraph,
    motif: &'a Motif,
    results: &'a ResultStore,
}

impl<'a> ContextManager<'a> {
    pub fn new(graph: &'a TemporalGraph, motif: &'a Motif, results: &'a ResultStore) -> Self {
        Self {
            graph,
            motif,
            results,
        }
    }

    /// Apply `task` to the context and report the next step.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidTransition`] for a `Search` task, which only
    ///   the search engine may consume.
    /// - [`SearchError::MissingMapping`] if backtracking finds the table out
    ///   of step with the matched-edge stack.
    pub fn update(
        &self,
        ctx: &mut LaneContext,
        task: &mut Task,
        clock: &mut CycleCounter,
        stats: &mut Statistics,
    ) -> Result<ManagerStatus> {
        let l = clock.model();
        ctx.cursor = task.eg;
        ctx.matched = task.em;
        clock.charge(l.cam * 3 + l.jump);
        match task.kind {
            TaskType::Bookkeep => Ok(self.bookkeep(ctx, task, clock, stats)),
            TaskType::Backtrack => self.backtrack(ctx, clock, stats),
            TaskType::Search => Err(SearchError::InvalidTransition { kind: task.kind }),
        }
    }

    /// Commit the edge named by the task, or record an occurrence if it
    /// completes the motif.
    fn bookkeep(
        &self,
        ctx: &mut LaneContext,
        task: &Task,
        clock: &mut CycleCounter,
        stats: &mut Statistics,
    ) -> ManagerStatus {
        let l = clock.model();
        let edge = *self.graph.edge(task.eg);
        let wanted = *self.motif.edge(task.em);

        if ctx.stack.is_empty() && !wanted.same_shape(&edge) {
            trace!(root = task.eg, "root edge cannot play the first motif edge");
            stats.increment(Counters::RejectedRoots);
            return ManagerStatus::End;
        }
        clock.charge(l.cam * 4 + l.cache * 2);

        if task.em == self.motif.last_index() {
            let mut table = ctx.table.clone();
            map_endpoints(&mut table, &edge, &wanted, clock);
            let mut edges = ctx.stack.clone();
            edges.push(task.eg);
            clock.charge((l.cam * 3 + l.dram * 3) * table.len() as u64);
            trace!(root = ?edges.first(), "motif found");
            self.results.record(MotifMatch::new(edges, &table));
            stats.increment(Counters::Matches);
            return ManagerStatus::Remanage;
        }

        map_endpoints(&mut ctx.table, &edge, &wanted, clock);
        clock.charge(l.jump);
        if ctx.stack.is_empty() {
            ctx.deadline = edge.time.saturating_add(self.motif.window());
            clock.charge(l.cam + l.add + l.cache);
        }
        ctx.stack.push(task.eg);
        ctx.matched += 1;
        ctx.cursor = task.eg + 1;
        clock.charge(l.cam * 4 + l.add * 2);
        stats.increment(Counters::Commits);
        trace!(edge = task.eg, matched = ctx.matched, deadline = ctx.deadline, "committed edge");
        ManagerStatus::Dispatch
    }

    /// Step past the current candidate, popping committed edges until the
    /// cursor names an edge inside the window again.
    fn backtrack(
        &self,
        ctx: &mut LaneContext,
        clock: &mut CycleCounter,
        stats: &mut Statistics,
    ) -> Result<ManagerStatus> {
        let l = clock.model();
        // A single-edge motif reports its root without committing it.
        if ctx.stack.is_empty() {
            clock.charge(l.cam);
            return Ok(ManagerStatus::End);
        }
        stats.increment(Counters::Backtracks);
        ctx.cursor += 1;
        clock.charge(l.cam + l.add);

        while self.exhausted(ctx) {
            clock.charge(l.jump * 2 + l.cam * 2 + l.cache);
            if ctx.stack.len() == 1 {
                ctx.stack.pop();
                clock.charge(l.cam);
                trace!("backtracked past the root edge, search tree complete");
                return Ok(ManagerStatus::End);
            }
            let Some(popped) = ctx.stack.pop() else {
                return Ok(ManagerStatus::End);
            };
            ctx.cursor = popped + 1;
            ctx.matched -= 1;
            clock.charge(l.cam * 4 + l.add * 3);
            self.unmap_endpoints(ctx, popped, clock)?;
            stats.increment(Counters::Pops);
            trace!(edge = popped, matched = ctx.matched, "popped edge");
        }
        Ok(ManagerStatus::Dispatch)
    }

    /// True if the cursor is past the end of the edge list or the deadline.
    fn exhausted(&self, ctx: &LaneContext) -> bool {
        self.graph
            .get(ctx.cursor)
            .map_or(true, |edge| edge.time > ctx.deadline)
    }

    /// Release the mappings the popped edge held for motif edge `ctx.matched`.
    fn unmap_endpoints(
        &self,
        ctx: &mut LaneContext,
        popped: EdgeIndex,
        clock: &mut CycleCounter,
    ) -> Result<()> {
        let l = clock.model();
        let edge = self.graph.edge(popped);
        let wanted = self.motif.edge(ctx.matched);
        for (g, m) in [(edge.u, wanted.u), (edge.v, wanted.v)] {
            match ctx.table.remove(g, m)? {
                Removed::Deleted => clock.charge(l.cam * 3),
                Removed::Decremented => clock.charge(l.cam + l.add),
            }
        }
        Ok(())
    }
}

/// Map both endpoints of `edge` onto the endpoints of motif edge `wanted`.
fn map_endpoints(table: &mut CorrespondenceTable, edge: &Edge, wanted: &Edge, clock: &mut CycleCounter) {
    let l = clock.model();
    for (g, m) in [(edge.u, wanted.u), (edge.v, wanted.v)] {
        match table.insert(g, m) {
            Inserted::Created => clock.charge(l.cam * 3),
            Inserted::Incremented => clock.charge(l.cam + l.add),
        }
    }
}
