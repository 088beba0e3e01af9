// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ordered temporal edge list with adjacency indexes.
//!
//! The accelerator answers adjacency queries by streaming the whole edge list.
//! The simulator charges for that stream, but answers the query from
//! precomputed per-node index lists so that large graphs stay tractable. Both
//! produce the same ascending list of edge indices.

use super::edge::{Edge, EdgeIndex, NodeId};
use std::borrow::Cow;
use std::collections::HashMap;

/// Immutable edge list shared by every lane.
#[derive(Debug, Clone, Default)]
pub struct TemporalGraph {
    edges: Vec<Edge>,
    /// Every index, for fully unconstrained queries.
    all: Vec<EdgeIndex>,
    /// Edge indices by source node, ascending.
    outgoing: HashMap<NodeId, Vec<EdgeIndex>>,
    /// Edge indices by target node, ascending.
    incoming: HashMap<NodeId, Vec<EdgeIndex>>,
}

impl TemporalGraph {
    /// Index an edge list. Positions in `edges` become the edge handles.
    pub fn new(edges: Vec<Edge>) -> Self {
        let mut outgoing: HashMap<NodeId, Vec<EdgeIndex>> = HashMap::new();
        let mut incoming: HashMap<NodeId, Vec<EdgeIndex>> = HashMap::new();
        for (index, edge) in edges.iter().enumerate() {
            outgoing.entry(edge.u).or_default().push(index);
            incoming.entry(edge.v).or_default().push(index);
        }
        Self {
            all: (0..edges.len()).collect(),
            edges,
            outgoing,
            incoming,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The edge at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn edge(&self, index: EdgeIndex) -> &Edge {
        &self.edges[index]
    }

    /// The edge at `index`, or None past the end of the list.
    #[inline]
    pub fn get(&self, index: EdgeIndex) -> Option<&Edge> {
        self.edges.get(index)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Ascending indices of every edge whose source is `u` (when given) and
    /// whose target is `v` (when given).
    pub fn adjacent(&self, u: Option<NodeId>, v: Option<NodeId>) -> Cow<'_, [EdgeIndex]> {
        const NONE: &[EdgeIndex] = &[];
        match (u, v) {
            (None, None) => Cow::Borrowed(&self.all),
            (Some(u), None) => Cow::Borrowed(self.outgoing.get(&u).map_or(NONE, Vec::as_slice)),
            (None, Some(v)) => Cow::Borrowed(self.incoming.get(&v).map_or(NONE, Vec::as_slice)),
            (Some(u), Some(v)) => Cow::Owned(
                self.outgoing
                    .get(&u)
                    .map_or(NONE, Vec::as_slice)
                    .iter()
                    .copied()
                    .filter(|&index| self.edges[index].v == v)
                    .collect(),
            ),
        }
    }

    /// True if edge times never decrease along the list.
    ///
    /// Backtracking abandons a cursor as soon as one edge passes the deadline,
    /// so occurrences are only complete on time-ordered input.
    pub fn is_time_ordered(&self) -> bool {
        self.edges.windows(2).all(|pair| pair[0].time <= pair[1].time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_scan(graph: &TemporalGraph, u: Option<NodeId>, v: Option<NodeId>) -> Vec<EdgeIndex> {
        graph
            .edges()
            .iter()
            .enumerate()
            .filter(|(_, e)| u.map_or(true, |u| e.u == u) && v.map_or(true, |v| e.v == v))
            .map(|(i, _)| i)
            .collect()
    }

    fn sample() -> TemporalGraph {
        TemporalGraph::new(vec![
            Edge::new(0, 1, 0),
            Edge::new(1, 2, 1),
            Edge::new(0, 2, 2),
            Edge::new(2, 0, 3),
            Edge::new(0, 1, 4),
        ])
    }

    #[test]
    fn test_adjacent_matches_linear_scan() {
        let graph = sample();
        for u in [None, Some(0), Some(1), Some(2), Some(9)] {
            for v in [None, Some(0), Some(1), Some(2), Some(9)] {
                assert_eq!(
                    graph.adjacent(u, v).as_ref(),
                    linear_scan(&graph, u, v).as_slice(),
                    "u={:?} v={:?}",
                    u,
                    v
                );
            }
        }
    }

    #[test]
    fn test_get_past_end() {
        let graph = sample();
        assert!(graph.get(4).is_some());
        assert!(graph.get(5).is_none());
    }

    #[test]
    fn test_time_ordered() {
        assert!(sample().is_time_ordered());
        let unordered = TemporalGraph::new(vec![Edge::new(0, 1, 5), Edge::new(1, 2, 1)]);
        assert!(!unordered.is_time_ordered());
    }
}
