// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Phase-one memoization.
//!
//! When exactly one endpoint of the next motif edge is already mapped, phase
//! one scans the adjacency list of that one graph node. Within a lane, roots
//! arrive in increasing edge order and the cursor never drops below the root,
//! so candidates that sit before the root are dead for the rest of the lane's
//! life. The memo remembers, per constrained node, how far into its adjacency
//! list those dead candidates reach, so the next scan can start past them.
//!
//! An offset recorded for root `r` only lists candidates with index below
//! `r`, so it may be reused by any later scan whose root is at or beyond `r`.

use crate::config::MemoConfig;
use crate::graph::{EdgeIndex, NodeId};
use std::collections::HashMap;

/// The constrained endpoint of a phase-one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoKey {
    /// Only the source is constrained; candidates are its outgoing edges.
    Source(NodeId),
    /// Only the target is constrained; candidates are its incoming edges.
    Target(NodeId),
}

impl MemoKey {
    /// Key for a query, if exactly one endpoint is constrained.
    pub fn for_query(ug: Option<NodeId>, vg: Option<NodeId>) -> Option<Self> {
        match (ug, vg) {
            (Some(u), None) => Some(MemoKey::Source(u)),
            (None, Some(v)) => Some(MemoKey::Target(v)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MemoEntry {
    /// Root the offset was computed for.
    root: EdgeIndex,
    /// Number of leading candidates with index below `root`.
    offset: usize,
}

/// Memo of first-live candidate offsets, owned by one lane.
#[derive(Debug, Clone)]
pub struct SearchMemo {
    enabled: bool,
    threshold: usize,
    entries: HashMap<MemoKey, MemoEntry>,
}

impl SearchMemo {
    pub fn new(config: &MemoConfig) -> Self {
        Self {
            enabled: config.enabled,
            threshold: config.threshold,
            entries: HashMap::new(),
        }
    }

    /// A memo that never memoizes.
    pub fn disabled() -> Self {
        Self::new(&MemoConfig {
            enabled: false,
            threshold: usize::MAX,
        })
    }

    /// Key to memoize a query under, or None if the query does not qualify.
    pub fn key(&self, ug: Option<NodeId>, vg: Option<NodeId>, candidates: usize) -> Option<MemoKey> {
        if !self.enabled || candidates < self.threshold {
            return None;
        }
        MemoKey::for_query(ug, vg)
    }

    /// Offset a scan rooted at `root` may start from.
    pub fn start(&self, key: MemoKey, root: EdgeIndex) -> Option<usize> {
        self.entries
            .get(&key)
            .filter(|entry| entry.root <= root)
            .map(|entry| entry.offset)
    }

    /// Remember that the first `offset` candidates of `key` precede `root`.
    pub fn record(&mut self, key: MemoKey, root: EdgeIndex, offset: usize) {
        let entry = self.entries.entry(key).or_insert(MemoEntry { root, offset });
        if root >= entry.root {
            *entry = MemoEntry { root, offset };
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
