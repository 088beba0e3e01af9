// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Simulator configuration.
//!
//! Everything tunable about a run lives here and is handed to the
//! orchestrator explicitly. Every field has a default, so a JSON config file
//! only needs the values it changes:
//!
//! ```json
//! { "lanes": 16, "schedule": "dynamic", "latency": { "dram": 120 } }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// How root tasks are handed to lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchedulePolicy {
    /// Root task `i` always runs on lane `i mod lanes`.
    #[default]
    Static,
    /// Each root task goes to the lane with the fewest cycles so far.
    Dynamic,
}

/// Per-operation latencies, in cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub cam: u64,
    pub add: u64,
    pub jump: u64,
    pub mov: u64,
    pub dram: u64,
    pub cache_hit: u64,
    /// Probability that an edge-cache access misses and goes to DRAM.
    pub cache_miss_rate: f64,
    pub task: u64,
    pub dequeue: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            cam: 1,
            add: 1,
            jump: 1,
            mov: 1,
            dram: 60,
            cache_hit: 2,
            cache_miss_rate: 0.05,
            task: 4,
            dequeue: 8,
        }
    }
}

/// Phase-one memoization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoConfig {
    pub enabled: bool,
    /// Smallest adjacency candidate list worth memoizing.
    pub threshold: usize,
}

impl Default for MemoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 16,
        }
    }
}

/// Complete simulator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of compute lanes.
    pub lanes: usize,
    /// Longest motif the lanes can hold.
    pub max_motif_len: usize,
    pub schedule: SchedulePolicy,
    /// Run lanes on worker threads. When false, lanes run one after another
    /// on the calling thread, which makes dynamic schedules reproducible.
    pub parallel: bool,
    pub latency: LatencyConfig,
    pub memo: MemoConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            lanes: 8,
            max_motif_len: 5,
            schedule: SchedulePolicy::Static,
            parallel: true,
            latency: LatencyConfig::default(),
            memo: MemoConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Check the values the simulator cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lanes == 0 {
            return Err(ConfigError::NoLanes);
        }
        if self.max_motif_len == 0 {
            return Err(ConfigError::ZeroMotifBound);
        }
        let miss = self.latency.cache_miss_rate;
        if !(0.0..=1.0).contains(&miss) {
            return Err(ConfigError::MissRate(miss));
        }
        if self.memo.enabled && self.memo.threshold == 0 {
            return Err(ConfigError::ZeroMemoThreshold);
        }
        Ok(())
    }
}
