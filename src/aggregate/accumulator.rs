//! Path-keyed accumulation of field observations

use crate::types::FieldType;
use crate::walk::FieldObservation;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Accumulated state for one field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAccumulator {
    /// Type tags observed for this path across the sample; never empty
    /// once the path has been observed
    pub types: BTreeSet<FieldType>,

    /// Whether this path has been present in every record observed at its
    /// level so far
    pub required: bool,

    /// Accumulated subfield level, if any occurrence carried a nested
    /// record (object value, or first element of an array of objects)
    pub children: Option<LevelAccumulator>,
}

/// Accumulated state for one record level: the top level of the sample, or
/// the nested level under one object/array-of-objects path.
///
/// Keys are full field paths; `BTreeMap` keeps assembled output in
/// canonical lexical order so identical samples produce identical schemas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelAccumulator {
    fields: BTreeMap<String, FieldAccumulator>,
    records_seen: u64,
}

impl LevelAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records this level has observed
    pub fn records_seen(&self) -> u64 {
        self.records_seen
    }

    /// Whether any field has been observed at this level
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate accumulated fields in canonical (lexical path) order
    pub fn fields(&self) -> impl Iterator<Item = (&String, &FieldAccumulator)> {
        self.fields.iter()
    }

    /// Fold one record's observations into this level.
    ///
    /// The record's own key set is what presence is judged against: every
    /// known path missing from it is falsified permanently, and paths new
    /// to this level start required only when this is the level's first
    /// record.
    pub fn observe(&mut self, observations: &[FieldObservation]) {
        let first_record = self.records_seen == 0;

        let present: HashSet<&str> = observations.iter().map(|o| o.path.as_str()).collect();
        for (path, field) in &mut self.fields {
            if !present.contains(path.as_str()) {
                field.required = false;
            }
        }

        for observation in observations {
            let field = self
                .fields
                .entry(observation.path.clone())
                .or_insert_with(|| FieldAccumulator {
                    types: BTreeSet::new(),
                    required: first_record,
                    children: None,
                });
            field.types.insert(observation.field_type);

            // Only an occurrence that actually carried a nested record
            // counts toward the child level; a scalar or empty-array
            // occurrence has no key set for children to be judged against.
            if let Some(children) = &observation.children {
                field
                    .children
                    .get_or_insert_with(LevelAccumulator::new)
                    .observe(children);
            }
        }

        self.records_seen += 1;
    }
}
