// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Temporal graph types.
//!
//! This module contains the immutable inputs of a search:
//! - Edge: a timestamped `(u, v, time)` record
//! - Motif: the ordered edge sequence to look for, with its time window
//! - TemporalGraph: the ordered edge list plus adjacency indexes

pub mod edge;
pub mod motif;
pub mod temporal;

// Re-export for convenience
pub use edge::{Edge, EdgeIndex, NodeId, Timestamp};
pub use motif::Motif;
pub use temporal::TemporalGraph;
