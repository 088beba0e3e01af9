// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The message that flows through one step of the lane state machine.

use crate::graph::{EdgeIndex, Motif, NodeId, Timestamp};
use crate::state::CorrespondenceTable;

/// Which component should act on a task next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskType {
    /// Waiting for the search engine to find the next edge.
    Search,
    /// An edge was found; the context manager should commit it.
    Bookkeep,
    /// No edge was found (or a match was reported); step back.
    Backtrack,
}

/// A search step.
///
/// The context manager reads `kind`, `eg` and `em`; the dispatcher fills in
/// the endpoint constraints together with a snapshot of the table and the
/// deadline; the search engine reads those and writes back `eg` and `kind`.
/// The snapshot is a copy, never a view into the lane's live context.
#[derive(Debug, Clone)]
pub struct Task {
    pub kind: TaskType,
    /// Graph edge to commit (bookkeep) or to resume scanning from (search).
    pub eg: EdgeIndex,
    /// Motif edge being matched.
    pub em: usize,
    /// Graph node the motif source must map to, when already mapped.
    pub ug: Option<NodeId>,
    /// Graph node the motif target must map to, when already mapped.
    pub vg: Option<NodeId>,
    /// Motif source node of edge `em`.
    pub um: NodeId,
    /// Motif target node of edge `em`.
    pub vm: NodeId,
    /// Latest time a matched edge may carry.
    pub deadline: Timestamp,
    /// Table as of dispatch.
    pub table: CorrespondenceTable,
}

impl Task {
    /// Root task for graph edge `root`: commit it as motif edge 0.
    pub fn root(root: EdgeIndex, motif: &Motif) -> Self {
        let first = motif.edge(0);
        Self {
            kind: TaskType::Bookkeep,
            eg: root,
            em: 0,
            ug: None,
            vg: None,
            um: first.u,
            vm: first.v,
            deadline: Timestamp::MAX,
            table: CorrespondenceTable::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    #[test]
    fn test_root_task() {
        let motif = Motif::new(vec![Edge::new(4, 5, 0), Edge::new(5, 6, 1)], 5).unwrap();
        let task = Task::root(7, &motif);
        assert_eq!(task.kind, TaskType::Bookkeep);
        assert_eq!(task.eg, 7);
        assert_eq!(task.em, 0);
        assert_eq!((task.um, task.vm), (4, 5));
        assert_eq!((task.ug, task.vg), (None, None));
        assert!(task.table.is_empty());
    }
}
