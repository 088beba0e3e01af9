// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use crate::config::MemoConfig;
use crate::context::{LaneContext, Task, TaskType};
use crate::engine::{ContextManager, Dispatcher, ManagerStatus, SearchEngine};
use crate::error::Result;
use crate::graph::{EdgeIndex, Motif, TemporalGraph};
use crate::memo::SearchMemo;
use crate::state::{Counters, ResultStore, Statistics};
use tracing::debug;

use super::latency::{CycleCounter, LatencyModel};

/// Read-only inputs every lane searches against, plus the shared result sink.
#[derive(Debug, Clone, Copy)]
pub struct SearchInputs<'a> {
    pub graph: &'a TemporalGraph,
    pub motif: &'a Motif,
    pub results: &'a ResultStore,
}

/// One simulated compute lane.
#[derive(Debug)]
pub struct Lane {
    id: usize,
    context: LaneContext,
    memo: SearchMemo,
    clock: CycleCounter,
    stats: Statistics,
}

impl Lane {
    pub fn new(id: usize, model: LatencyModel, memo: &MemoConfig) -> Self {
        Self {
            id,
            context: LaneContext::new(),
            memo: SearchMemo::new(memo),
            clock: CycleCounter::new(model),
            stats: Statistics::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Simulated cycles spent so far.
    pub fn cycles(&self) -> u64 {
        self.clock.cycles()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Enumerate every occurrence of the motif rooted at graph edge `root`.
    ///
    /// The context is cleared first, so nothing leaks from the previous root.
    /// The memo is kept: roots reach a lane in increasing order.
    pub fn execute_root(&mut self, inputs: SearchInputs<'_>, root: EdgeIndex) -> Result<()> {
        let l = self.clock.model();
        let started = self.clock.cycles();
        self.clock.charge(l.dequeue);
        self.stats.increment(Counters::RootTasks);
        self.context.reset();

        let manager = ContextManager::new(inputs.graph, inputs.motif, inputs.results);
        let dispatcher = Dispatcher::new(inputs.motif);
        let engine = SearchEngine::new(inputs.graph);
        let mut task = Task::root(root, inputs.motif);

        loop {
            self.clock.charge(l.task);
            match manager.update(&mut self.context, &mut task, &mut self.clock, &mut self.stats)? {
                ManagerStatus::End => break,
                ManagerStatus::Dispatch => {
                    dispatcher.dispatch(&self.context, &mut task, &mut self.clock);
                    self.stats.increment(Counters::Dispatches);
                    self.clock.charge(l.task);
                    engine.search(&mut task, root, &mut self.memo, &mut self.clock, &mut self.stats);
                }
                ManagerStatus::Remanage => task.kind = TaskType::Backtrack,
            }
        }

        debug!(
            lane = self.id,
            root,
            cycles = self.clock.cycles() - started,
            "root task complete"
        );
        Ok(())
    }
}
