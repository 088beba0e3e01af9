// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shared store of completed motif occurrences.
//!
//! Every lane appends to the same store. Appends are serialized by a mutex;
//! their relative order across lanes carries no meaning.

use super::cam::{CorrespondenceTable, Mapping};
use crate::graph::{EdgeIndex, NodeId};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One occurrence of the motif in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MotifMatch {
    /// The edge the occurrence was rooted at (its first matched edge).
    pub root: EdgeIndex,
    /// Graph edges matched to motif edges `0..k`, in motif order.
    pub edges: Vec<EdgeIndex>,
    /// The completed correspondence table, one entry per motif node.
    pub mappings: Vec<Mapping>,
}

impl MotifMatch {
    /// Snapshot a completed table together with the edges that produced it.
    pub fn new(edges: Vec<EdgeIndex>, table: &CorrespondenceTable) -> Self {
        Self {
            root: edges.first().copied().unwrap_or_default(),
            edges,
            mappings: table.to_sorted_vec(),
        }
    }

    /// The graph node playing motif node `m`.
    pub fn graph_node_for(&self, m: NodeId) -> Option<NodeId> {
        self.mappings
            .iter()
            .find(|mapping| mapping.motif_node == m)
            .map(|mapping| mapping.graph_node)
    }
}

impl fmt::Display for MotifMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mapping in &self.mappings {
            writeln!(
                f,
                "{} {} {}",
                mapping.motif_node, mapping.graph_node, mapping.count
            )?;
        }
        Ok(())
    }
}

/// Append-only collection of occurrences.
#[derive(Debug, Default)]
pub struct ResultStore {
    store: Mutex<Vec<MotifMatch>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one occurrence.
    pub fn record(&self, found: MotifMatch) {
        self.store.lock().push(found);
    }

    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// Copy of the occurrences recorded so far.
    pub fn snapshot(&self) -> Vec<MotifMatch> {
        self.store.lock().clone()
    }

    pub fn into_inner(self) -> Vec<MotifMatch> {
        self.store.into_inner()
    }
}
