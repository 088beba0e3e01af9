// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-lane search context.
//!
//! A lane owns exactly one [`LaneContext`]. Nothing else holds a reference to
//! it while a root task runs; the dispatcher copies what the search engine
//! needs into the [`Task`] instead.
//!
//! # Memory Model
//!
//! ```text
//! Orchestrator {
//!     graph: TemporalGraph,      // immutable, shared by all lanes
//!     motif: Motif,              // immutable, shared by all lanes
//!     results: ResultStore,      // shared, mutex-protected appends
//!     lanes: [Lane {
//!         context: LaneContext,  // owned: table, stack, cursor, deadline
//!         memo: SearchMemo,      // owned
//!         clock: CycleCounter,   // owned, published after each root task
//!     }],
//! }
//! ```

pub mod task;

pub use task::{Task, TaskType};

use crate::graph::{EdgeIndex, Timestamp};
use crate::state::CorrespondenceTable;

/// Mutable state of one lane.
#[derive(Debug, Clone)]
pub struct LaneContext {
    /// Partial embedding.
    pub table: CorrespondenceTable,
    /// Committed graph edges, root first.
    pub stack: Vec<EdgeIndex>,
    /// Latest time a matched edge may carry; set when the root is committed.
    pub deadline: Timestamp,
    /// Next graph edge to resume scanning from.
    pub cursor: EdgeIndex,
    /// Motif edges matched so far.
    pub matched: usize,
}

impl LaneContext {
    pub fn new() -> Self {
        Self {
            table: CorrespondenceTable::new(),
            stack: Vec::new(),
            deadline: Timestamp::MAX,
            cursor: 0,
            matched: 0,
        }
    }

    /// Forget everything about the previous root task.
    pub fn reset(&mut self) {
        self.table.clear();
        self.stack.clear();
        self.deadline = Timestamp::MAX;
        self.cursor = 0;
        self.matched = 0;
    }

    /// Depth of the matched-edge stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for LaneContext {
    fn default() -> Self {
        Self::new()
    }
}
