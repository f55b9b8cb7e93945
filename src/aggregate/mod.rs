//! Observation aggregation
//!
//! Merges per-document field observations across a sample into a unified
//! per-path view: the set of type tags seen for each path, and whether the
//! path was present in every record observed at its level.
//!
//! # Required-field accounting
//!
//! Required-ness is monotonically falsifiable: a path starts required when
//! first seen in the first record of its level, and is cleared permanently
//! the first time any record at that level lacks it. A path discovered
//! after the first record starts cleared, since earlier records already
//! lacked it. Presence means the key exists in the record at all; an
//! explicit null still counts as present.

mod accumulator;

pub use accumulator::{FieldAccumulator, LevelAccumulator};

#[cfg(test)]
mod tests;
