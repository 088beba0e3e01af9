// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cycle-level simulation of the accelerator.
//!
//! - `latency`: per-operation latency constants and the lane cycle counter
//! - `lane`: one compute lane running the backtracking state machine
//! - `orchestrator`: root task scheduling and run-level accounting

pub mod lane;
pub mod latency;
pub mod orchestrator;

pub use lane::{Lane, SearchInputs};
pub use latency::{CycleCounter, LatencyModel};
pub use orchestrator::{Orchestrator, RunOutcome, RunReport};
