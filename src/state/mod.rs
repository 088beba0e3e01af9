// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search state.
//!
//! - `cam`: the correspondence table each lane edits while it searches
//! - `results`: the store shared by all lanes for completed occurrences
//! - `statistics`: per-lane event counters

pub mod cam;
pub mod results;
pub mod statistics;

pub use cam::{CorrespondenceTable, Inserted, Mapping, Removed};
pub use results::{MotifMatch, ResultStore};
pub use statistics::{Counters, Statistics};
