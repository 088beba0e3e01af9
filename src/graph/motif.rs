// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Target motif.
//!
//! A motif is matched edge by edge in the order given. Its window is the time
//! between its first and last edge; every occurrence must fit inside the
//! window measured from the occurrence's first (root) edge.

use super::edge::{Edge, Timestamp};
use crate::error::MotifError;

/// Ordered sequence of motif edges with the derived time window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    edges: Vec<Edge>,
    window: Timestamp,
}

impl Motif {
    /// Build a motif of at most `max_len` edges.
    pub fn new(edges: Vec<Edge>, max_len: usize) -> Result<Self, MotifError> {
        let (first, last) = match (edges.first(), edges.last()) {
            (Some(first), Some(last)) => (first.time, last.time),
            _ => return Err(MotifError::Empty),
        };
        if edges.len() > max_len {
            return Err(MotifError::TooLong {
                len: edges.len(),
                max: max_len,
            });
        }
        if last < first {
            return Err(MotifError::NegativeWindow { first, last });
        }
        Ok(Self {
            edges,
            window: last - first,
        })
    }

    /// Number of motif edges (`k`).
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always false; a motif has at least one edge.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The motif edge at position `index`.
    #[inline]
    pub fn edge(&self, index: usize) -> &Edge {
        &self.edges[index]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Time span between the first and last motif edge.
    #[inline]
    pub fn window(&self) -> Timestamp {
        self.window
    }

    /// Index of the final motif edge.
    #[inline]
    pub fn last_index(&self) -> usize {
        self.edges.len() - 1
    }

    /// Number of distinct motif nodes; every occurrence maps exactly this many.
    pub fn node_count(&self) -> usize {
        let mut nodes: Vec<_> = self.edges.iter().flat_map(|e| [e.u, e.v]).collect();
        nodes.sort_unstable();
        nodes.dedup();
        nodes.len()
    }
}
