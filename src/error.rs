// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the motif search and its simulator.
//!
//! Two failures are fatal invariant violations inside the search itself
//! ([`SearchError::InvalidTransition`] and [`SearchError::MissingMapping`]):
//! they abort the lane that hit them and, through the orchestrator, the run.
//! The remaining variants reject bad input before any lane starts.

use crate::context::TaskType;
use crate::graph::{NodeId, Timestamp};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or running a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A task whose type has no transition reached the context manager.
    #[error("context manager received a {kind:?} task, which has no transition")]
    InvalidTransition { kind: TaskType },

    /// A correspondence that should back a committed edge is missing.
    #[error("no mapping between graph node {graph_node} and motif node {motif_node}; table:\n{table}")]
    MissingMapping {
        graph_node: NodeId,
        motif_node: NodeId,
        table: String,
    },

    /// A dynamic-schedule worker hung up before the run finished.
    #[error("lane {lane} stopped accepting root tasks")]
    WorkerLost { lane: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Motif(#[from] MotifError),
}

/// Invalid simulator configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("at least one lane is required")]
    NoLanes,

    #[error("motif length bound must be positive")]
    ZeroMotifBound,

    #[error("cache miss rate {0} is outside [0, 1]")]
    MissRate(f64),

    #[error("memo threshold must be positive")]
    ZeroMemoThreshold,
}

/// Motif records that cannot be searched for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MotifError {
    #[error("motif has no edges")]
    Empty,

    #[error("motif has {len} edges, more than the configured bound of {max}")]
    TooLong { len: usize, max: usize },

    #[error("motif ends at time {last} before it starts at time {first}")]
    NegativeWindow { first: Timestamp, last: Timestamp },
}

/// Failures reading graph, motif or config files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Motif(#[from] MotifError),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, SearchError>;
