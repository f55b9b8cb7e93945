//! Schema assembly from aggregated field state

use super::types::{CollectionSchema, FieldSchema};
use crate::aggregate::{FieldAccumulator, LevelAccumulator};
use crate::types::{FieldType, IndexDescriptor};
use std::collections::BTreeSet;

/// Package aggregated field state plus collection metadata into a
/// [`CollectionSchema`].
///
/// `count` and `indexes` come from the document source, not from the
/// sample; an empty accumulator yields an empty field list, which is a
/// valid schema rather than an error.
pub fn assemble(
    collection: impl Into<String>,
    level: &LevelAccumulator,
    count: u64,
    indexes: Vec<IndexDescriptor>,
) -> CollectionSchema {
    CollectionSchema {
        collection: collection.into(),
        fields: assemble_level(level),
        count,
        indexes,
    }
}

fn assemble_level(level: &LevelAccumulator) -> Vec<FieldSchema> {
    level
        .fields()
        .map(|(path, acc)| assemble_field(path, acc))
        .collect()
}

fn assemble_field(path: &str, acc: &FieldAccumulator) -> FieldSchema {
    FieldSchema {
        field: path.to_string(),
        field_type: render_type(&acc.types),
        is_required: acc.required,
        sub_fields: acc
            .children
            .as_ref()
            .map(assemble_level)
            .unwrap_or_default(),
    }
}

/// Render a type-tag set as its wire representation: the single tag name,
/// or the sorted, deduplicated `|`-joined union of all observed tags.
///
/// `BTreeSet` iteration already yields tags in lexical wire-name order, so
/// the output is stable across runs for identical samples.
pub fn render_type(types: &BTreeSet<FieldType>) -> String {
    types
        .iter()
        .map(FieldType::as_str)
        .collect::<Vec<_>>()
        .join("|")
}
