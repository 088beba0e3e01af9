// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Correspondence table (CAM) between motif nodes and graph nodes.
//!
//! The table is the partial embedding under construction. Each entry pairs a
//! motif node with a graph node and counts how many committed motif edges
//! resolve an endpoint through it. The table never holds two entries for the
//! same graph node or for the same motif node, so the partial embedding stays
//! injective.
//!
//! Operations are linear scans. The table holds at most two entries per
//! matched motif edge, and motifs are short, so the entries live inline.

use crate::error::{Result, SearchError};
use crate::graph::NodeId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// One motif-node to graph-node correspondence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mapping {
    pub motif_node: NodeId,
    pub graph_node: NodeId,
    pub count: u32,
}

impl Mapping {
    pub fn new(motif_node: NodeId, graph_node: NodeId, count: u32) -> Self {
        Self {
            motif_node,
            graph_node,
            count,
        }
    }
}

/// What `insert` did, for cycle accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inserted {
    /// The pair already existed; its count went up.
    Incremented,
    /// A fresh entry was written (after evicting conflicting entries).
    Created,
}

/// What `remove` did, for cycle accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removed {
    /// The count went down but the entry stays.
    Decremented,
    /// The last reference went away and the entry was deleted.
    Deleted,
}

/// Correspondence table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrespondenceTable {
    entries: SmallVec<[Mapping; 8]>,
}

impl CorrespondenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that graph node `g` plays motif node `m` for one more edge.
    ///
    /// A new pair first evicts any entry that already uses `g` or `m`.
    pub fn insert(&mut self, g: NodeId, m: NodeId) -> Inserted {
        if let Some(entry) = self.find_mut(g, m) {
            if entry.count == 0 {
                report_zero_count(entry);
            }
            entry.count += 1;
            return Inserted::Incremented;
        }
        self.entries
            .retain(|entry| entry.graph_node != g && entry.motif_node != m);
        self.entries.push(Mapping::new(m, g, 1));
        Inserted::Created
    }

    /// Drop one reference to the pair `(m, g)`.
    ///
    /// Every committed edge holds a reference for each endpoint, so a missing
    /// pair means the search state is corrupt.
    pub fn remove(&mut self, g: NodeId, m: NodeId) -> Result<Removed> {
        let Some(position) = self
            .entries
            .iter()
            .position(|entry| entry.graph_node == g && entry.motif_node == m)
        else {
            return Err(SearchError::MissingMapping {
                graph_node: g,
                motif_node: m,
                table: self.to_string(),
            });
        };
        let entry = &mut self.entries[position];
        match entry.count {
            0 | 1 => {
                if entry.count == 0 {
                    report_zero_count(entry);
                }
                self.entries.remove(position);
                Ok(Removed::Deleted)
            }
            _ => {
                entry.count -= 1;
                Ok(Removed::Decremented)
            }
        }
    }

    /// True if graph node `g` currently plays motif node `m`.
    pub fn is_mapped(&self, g: NodeId, m: NodeId) -> bool {
        match self
            .entries
            .iter()
            .find(|entry| entry.graph_node == g && entry.motif_node == m)
        {
            Some(entry) => {
                if entry.count == 0 {
                    report_zero_count(entry);
                }
                true
            }
            None => false,
        }
    }

    /// True if graph node `g` plays any motif node.
    pub fn has_mapping(&self, g: NodeId) -> bool {
        self.entries.iter().any(|entry| entry.graph_node == g)
    }

    /// The graph node currently playing motif node `m`.
    pub fn graph_node_for(&self, m: NodeId) -> Option<NodeId> {
        self.entries
            .iter()
            .find(|entry| entry.motif_node == m)
            .map(|entry| entry.graph_node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Mapping] {
        &self.entries
    }

    /// Sum of all reference counts.
    pub fn total_refs(&self) -> u64 {
        self.entries.iter().map(|entry| entry.count as u64).sum()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries sorted by motif node, for reporting and comparison.
    pub fn to_sorted_vec(&self) -> Vec<Mapping> {
        let mut mappings = self.entries.to_vec();
        mappings.sort_unstable_by_key(|entry| (entry.motif_node, entry.graph_node));
        mappings
    }

    fn find_mut(&mut self, g: NodeId, m: NodeId) -> Option<&mut Mapping> {
        self.entries
            .iter_mut()
            .find(|entry| entry.graph_node == g && entry.motif_node == m)
    }
}

/// A live entry with no references should have been deleted.
fn report_zero_count(entry: &Mapping) {
    tracing::error!(
        graph_node = entry.graph_node,
        motif_node = entry.motif_node,
        "found a zero-count mapping"
    );
    debug_assert!(
        entry.count > 0,
        "zero-count mapping between graph {} and motif {}",
        entry.graph_node,
        entry.motif_node
    );
}

impl fmt::Display for CorrespondenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(
                f,
                "G {} M {} C {}",
                entry.graph_node, entry.motif_node, entry.count
            )?;
        }
        Ok(())
    }
}
