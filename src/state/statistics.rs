// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Each lane keeps its own counters while it searches; the orchestrator sums
//! them into the run report. Counters describe what the search did, and are
//! independent of the simulated cycle count.

use serde::ser::{Serialize, Serializer};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Root tasks a lane accepted.
    RootTasks,
    /// Root edges whose shape cannot play the first motif edge.
    RejectedRoots,
    /// Search requests issued by the dispatcher.
    Dispatches,
    /// Edges committed to the matched-edge stack.
    Commits,
    /// Backtrack steps taken by the context manager.
    Backtracks,
    /// Edges popped off the matched-edge stack.
    Pops,
    /// Completed motif occurrences.
    Matches,
    /// Phase-one scans that started from a memoized offset.
    MemoHits,
    /// Memoizable phase-one scans that had no usable offset.
    MemoMisses,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    #[inline]
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Add every counter of `other` into this one.
    pub fn merge(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }

    /// Counter names and values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        Counters::iter().map(move |counter| (counter.into(), self.get(counter)))
    }
}

impl Serialize for Statistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_merge() {
        let mut a = Statistics::new();
        a.increment(Counters::Matches);
        a.increment(Counters::Matches);
        let mut b = Statistics::new();
        b.increment(Counters::Matches);
        b.increment(Counters::Pops);
        a.merge(&b);
        assert_eq!(a.get(Counters::Matches), 3);
        assert_eq!(a.get(Counters::Pops), 1);
        assert_eq!(a.get(Counters::Commits), 0);
    }

    #[test]
    fn test_names() {
        let mut stats = Statistics::new();
        stats.increment(Counters::MemoHits);
        let names: Vec<_> = stats.iter().map(|(name, _)| name).collect();
        assert_eq!(names.len(), Counters::COUNT);
        assert_eq!(names[0], "root_tasks");
        assert!(stats.iter().any(|(name, value)| name == "memo_hits" && value == 1));
    }

    #[test]
    fn test_serializes_as_map() {
        let mut stats = Statistics::new();
        stats.increment(Counters::RootTasks);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["root_tasks"], 1);
        assert_eq!(json["matches"], 0);
    }
}
