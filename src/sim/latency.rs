// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-operation latency model and the lane cycle counter.
//!
//! Latencies are injected through [`LatencyConfig`]. The one derived value is
//! the expected latency of a cached memory access: a hit costs `cache_hit`, a
//! miss goes to DRAM, weighted by the miss rate.

use crate::config::LatencyConfig;

/// Resolved latency constants, in cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyModel {
    /// Context memory / CAM access.
    pub cam: u64,
    /// Integer add or compare.
    pub add: u64,
    /// Branch.
    pub jump: u64,
    /// Register move.
    pub mov: u64,
    /// Off-chip memory access.
    pub dram: u64,
    /// Expected latency of an access through the edge cache.
    pub cache: u64,
    /// Handing a task between components.
    pub task: u64,
    /// Pulling a root task off the queue.
    pub dequeue: u64,
}

impl LatencyModel {
    pub fn new(config: &LatencyConfig) -> Self {
        let miss = config.cache_miss_rate.clamp(0.0, 1.0);
        let expected = (1.0 - miss) * config.cache_hit as f64 + miss * config.dram as f64;
        Self {
            cam: config.cam,
            add: config.add,
            jump: config.jump,
            mov: config.mov,
            dram: config.dram,
            cache: expected.round() as u64,
            task: config.task,
            dequeue: config.dequeue,
        }
    }

    /// Every operation costs one cycle; handy for reasoning about counts.
    pub fn unit() -> Self {
        Self {
            cam: 1,
            add: 1,
            jump: 1,
            mov: 1,
            dram: 1,
            cache: 1,
            task: 1,
            dequeue: 1,
        }
    }
}

impl Default for LatencyModel {
    fn default() -> Self {
        Self::new(&LatencyConfig::default())
    }
}

/// Monotonic simulated cycle counter owned by one lane.
#[derive(Debug, Clone)]
pub struct CycleCounter {
    model: LatencyModel,
    cycles: u64,
}

impl CycleCounter {
    pub fn new(model: LatencyModel) -> Self {
        Self { model, cycles: 0 }
    }

    /// The latency constants this counter charges with.
    #[inline]
    pub fn model(&self) -> LatencyModel {
        self.model
    }

    /// Advance the counter.
    #[inline]
    pub fn charge(&mut self, cycles: u64) {
        self.cycles = self.cycles.saturating_add(cycles);
    }

    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_cache_latency() {
        let config = LatencyConfig {
            cache_hit: 2,
            dram: 102,
            cache_miss_rate: 0.25,
            ..LatencyConfig::default()
        };
        // 0.75 * 2 + 0.25 * 102 = 27
        assert_eq!(LatencyModel::new(&config).cache, 27);
    }

    #[test]
    fn test_all_hits_and_all_misses() {
        let hits = LatencyConfig {
            cache_miss_rate: 0.0,
            ..LatencyConfig::default()
        };
        assert_eq!(LatencyModel::new(&hits).cache, hits.cache_hit);
        let misses = LatencyConfig {
            cache_miss_rate: 1.0,
            ..LatencyConfig::default()
        };
        assert_eq!(LatencyModel::new(&misses).cache, misses.dram);
    }

    #[test]
    fn test_counter_is_monotonic() {
        let mut counter = CycleCounter::new(LatencyModel::unit());
        counter.charge(3);
        counter.charge(0);
        counter.charge(u64::MAX);
        assert_eq!(counter.cycles(), u64::MAX);
    }
}
