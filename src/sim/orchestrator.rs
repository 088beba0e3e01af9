// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Root task scheduling across lanes.
//!
//! Every graph edge is a root task and every root task runs on exactly one
//! lane. Under the static schedule lane `i` takes roots `i, i + L, i + 2L, ..`.
//! Under the dynamic schedule each root goes to the lane with the fewest
//! cycles published so far, ties to the lowest lane id.
//!
//! With `parallel` set, lanes run on worker threads: a rayon pool for the
//! static schedule, one scoped thread per lane fed through a single-slot
//! channel for the dynamic schedule. Cycle counts are published after each
//! completed root task, so the dynamic assignment depends on thread timing.
//! The set of occurrences found never does.

use crate::config::{SchedulePolicy, SimConfig};
use crate::error::{Result, SearchError};
use crate::graph::{Edge, EdgeIndex, Motif, TemporalGraph};
use crate::state::{MotifMatch, ResultStore, Statistics};
use crossbeam::channel::{self, Select, Sender, TrySendError};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use tracing::{info, warn};

use super::lane::{Lane, SearchInputs};
use super::latency::LatencyModel;

/// Aggregate cycle accounting for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Sum of the cycles of every lane.
    pub total_cycles: u64,
    /// Cycles of the busiest lane.
    pub end_to_end_cycles: u64,
    pub result_count: usize,
    /// Cycles per lane, indexed by lane id.
    pub lane_cycles: Vec<u64>,
    /// Event counters summed over all lanes.
    pub statistics: Statistics,
}

/// Occurrences found by a run together with its report.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub results: Vec<MotifMatch>,
    pub report: RunReport,
}

/// Drives a complete search over one graph.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    config: SimConfig,
    graph: TemporalGraph,
    motif: Motif,
}

impl Orchestrator {
    /// Validate the configuration and the motif against it.
    pub fn new(config: SimConfig, graph: TemporalGraph, motif: Vec<Edge>) -> Result<Self> {
        config.validate()?;
        let motif = Motif::new(motif, config.max_motif_len)?;
        if !graph.is_time_ordered() {
            warn!("graph edges are not sorted by time; occurrences may exceed the motif window");
        }
        Ok(Self {
            config,
            graph,
            motif,
        })
    }

    /// Run every root task to completion.
    ///
    /// # Errors
    ///
    /// The first fatal error raised by any lane; the run is abandoned.
    pub fn run(&self) -> Result<RunOutcome> {
        let results = ResultStore::new();
        let inputs = SearchInputs {
            graph: &self.graph,
            motif: &self.motif,
            results: &results,
        };
        let model = LatencyModel::new(&self.config.latency);
        let mut lanes: Vec<Lane> = (0..self.config.lanes)
            .map(|id| Lane::new(id, model, &self.config.memo))
            .collect();
        info!(
            edges = self.graph.len(),
            motif_edges = self.motif.len(),
            window = self.motif.window(),
            lanes = self.config.lanes,
            schedule = ?self.config.schedule,
            parallel = self.config.parallel,
            "starting motif search"
        );

        let roots = self.graph.len();
        let stride = self.config.lanes;
        match (self.config.schedule, self.config.parallel) {
            (SchedulePolicy::Static, true) => lanes
                .par_iter_mut()
                .try_for_each(|lane| run_static(lane, inputs, stride, roots))?,
            (SchedulePolicy::Static, false) => lanes
                .iter_mut()
                .try_for_each(|lane| run_static(lane, inputs, stride, roots))?,
            (SchedulePolicy::Dynamic, false) => run_dynamic_sequential(&mut lanes, inputs, roots)?,
            (SchedulePolicy::Dynamic, true) => {
                lanes = run_dynamic_parallel(lanes, inputs, roots)?;
            }
        }

        let report = summarize(&lanes, results.len());
        info!(
            results = report.result_count,
            total_cycles = report.total_cycles,
            end_to_end_cycles = report.end_to_end_cycles,
            "motif search complete"
        );
        Ok(RunOutcome {
            results: results.into_inner(),
            report,
        })
    }
}

fn run_static(lane: &mut Lane, inputs: SearchInputs<'_>, stride: usize, roots: usize) -> Result<()> {
    for root in (lane.id()..roots).step_by(stride) {
        lane.execute_root(inputs, root)?;
    }
    Ok(())
}

fn run_dynamic_sequential(lanes: &mut [Lane], inputs: SearchInputs<'_>, roots: usize) -> Result<()> {
    for root in 0..roots {
        // min_by_key keeps the first of equal keys, so ties go to the lowest id.
        if let Some(lane) = lanes.iter_mut().min_by_key(|lane| lane.cycles()) {
            lane.execute_root(inputs, root)?;
        }
    }
    Ok(())
}

fn run_dynamic_parallel(lanes: Vec<Lane>, inputs: SearchInputs<'_>, roots: usize) -> Result<Vec<Lane>> {
    let published: Vec<AtomicU64> = lanes.iter().map(|lane| AtomicU64::new(lane.cycles())).collect();

    thread::scope(|scope| {
        let mut senders = Vec::with_capacity(lanes.len());
        let mut workers = Vec::with_capacity(lanes.len());
        for mut lane in lanes {
            let (sender, inbox) = channel::bounded::<EdgeIndex>(1);
            senders.push(sender);
            let slot = &published[lane.id()];
            workers.push(scope.spawn(move || -> Result<Lane> {
                for root in inbox {
                    lane.execute_root(inputs, root)?;
                    slot.store(lane.cycles(), Ordering::Release);
                }
                Ok(lane)
            }));
        }

        let assigned = assign_roots(&senders, &published, roots);
        drop(senders);

        let mut finished = Vec::with_capacity(workers.len());
        let mut failure = None;
        for worker in workers {
            match worker.join() {
                Ok(Ok(lane)) => finished.push(lane),
                Ok(Err(error)) => {
                    failure.get_or_insert(error);
                }
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        // A lane's own error explains why its inbox went away.
        if let Some(error) = failure {
            return Err(error);
        }
        assigned?;
        Ok(finished)
    })
}

/// Hand each root to the least-loaded lane with room in its inbox.
fn assign_roots(senders: &[Sender<EdgeIndex>], published: &[AtomicU64], roots: usize) -> Result<()> {
    let mut order: Vec<usize> = (0..senders.len()).collect();
    for root in 0..roots {
        order.sort_by_key(|&lane| (published[lane].load(Ordering::Acquire), lane));
        let mut placed = false;
        for &lane in &order {
            match senders[lane].try_send(root) {
                Ok(()) => {
                    placed = true;
                    break;
                }
                Err(TrySendError::Full(_)) => continue,
                Err(TrySendError::Disconnected(_)) => return Err(SearchError::WorkerLost { lane }),
            }
        }
        if placed {
            continue;
        }

        // Every inbox is full; block until any lane takes its pending root.
        let mut select = Select::new();
        for sender in senders {
            select.send(sender);
        }
        let operation = select.select();
        let lane = operation.index();
        operation
            .send(&senders[lane], root)
            .map_err(|_| SearchError::WorkerLost { lane })?;
    }
    Ok(())
}

fn summarize(lanes: &[Lane], result_count: usize) -> RunReport {
    let lane_cycles: Vec<u64> = lanes.iter().map(Lane::cycles).collect();
    let mut statistics = Statistics::new();
    for lane in lanes {
        statistics.merge(lane.statistics());
    }
    RunReport {
        total_cycles: lane_cycles.iter().sum(),
        end_to_end_cycles: lane_cycles.iter().copied().max().unwrap_or(0),
        result_count,
        lane_cycles,
        statistics,
    }
}
