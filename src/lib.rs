// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Temporal motif search with a cycle-level simulation of a parallel search
//! accelerator.
//!
//! Given a list of timestamped directed edges and a small motif (an ordered
//! edge sequence), the search enumerates every occurrence of the motif whose
//! edges fall inside the motif's time window, measured from the occurrence's
//! first edge. Alongside the search, every lane charges simulated cycles for
//! the operations the hardware would perform.
//!
//! # Architecture
//!
//! ## Shared, immutable
//!
//! - [`graph::TemporalGraph`]: the edge list plus per-node adjacency indexes
//! - [`graph::Motif`]: the pattern and its time window
//! - [`config::SimConfig`]: lane count, schedule, latencies, memoization
//!
//! ## Per lane, owned
//!
//! - [`context::LaneContext`]: correspondence table, matched-edge stack,
//!   cursor and deadline
//! - [`memo::SearchMemo`]: phase-one skip offsets
//! - [`sim::CycleCounter`]: the lane's simulated clock
//!
//! Completed occurrences are appended to one shared [`state::ResultStore`].
//!
//! # Search Algorithm
//!
//! Every graph edge roots one search. A lane commits the root as the first
//! motif edge, then loops through three components (see [`engine`]):
//!
//! 1. **ContextManager**: commit an edge or backtrack
//! 2. **Dispatcher**: describe the next motif edge to match
//! 3. **SearchEngine**: find the next graph edge that can play it
//!
//! until backtracking pops the root edge.
//!
//! # Parallelization
//!
//! Root searches are independent. The [`sim::Orchestrator`] spreads them over
//! lanes with a static or dynamic schedule and reports total and end-to-end
//! cycles.

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod graph;
pub mod io;
pub mod memo;
pub mod sim;
pub mod state;

// Re-export commonly used types
pub use config::SimConfig;
pub use error::{LoadError, Result, SearchError};
pub use graph::{Edge, Motif, TemporalGraph};
pub use sim::{Orchestrator, RunOutcome, RunReport};
pub use state::MotifMatch;
