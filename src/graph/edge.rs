// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Timestamped edges.
//!
//! Graph edges and motif edges share one record shape. A graph edge is
//! identified by its position in the edge list, which never changes once the
//! list is built.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in either the graph or the motif.
pub type NodeId = u32;

/// Absolute time of an edge.
pub type Timestamp = i64;

/// Position of an edge in the ordered edge list.
pub type EdgeIndex = usize;

/// A directed edge `u -> v` observed at `time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub u: NodeId,
    pub v: NodeId,
    pub time: Timestamp,
}

impl Edge {
    pub fn new(u: NodeId, v: NodeId, time: Timestamp) -> Self {
        Self { u, v, time }
    }

    /// True if both endpoints are the same node.
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }

    /// True if `other` can stand in for this edge without collapsing or
    /// splitting its endpoints.
    ///
    /// A self-loop only corresponds to a self-loop; committing a mismatched
    /// shape would map two motif nodes onto one graph node (or the reverse).
    #[inline]
    pub fn same_shape(&self, other: &Edge) -> bool {
        self.is_self_loop() == other.is_self_loop()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.u, self.v, self.time)
    }
}
