//! Tests for observation aggregation

use super::*;
use crate::types::{FieldType, DEFAULT_MAX_DEPTH};
use crate::walk::walk_document;
use bson::{doc, Bson, Document};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn observe_all(level: &mut LevelAccumulator, docs: &[Document]) {
    for doc in docs {
        let observations = walk_document(doc, DEFAULT_MAX_DEPTH).unwrap();
        level.observe(&observations);
    }
}

fn field<'a>(level: &'a LevelAccumulator, path: &str) -> &'a FieldAccumulator {
    level
        .fields()
        .find(|(p, _)| p.as_str() == path)
        .unwrap_or_else(|| panic!("missing path {path}"))
        .1
}

fn tags(types: &[FieldType]) -> BTreeSet<FieldType> {
    types.iter().copied().collect()
}

// ============================================================================
// Required-field accounting
// ============================================================================

#[test]
fn test_required_across_three_documents() {
    let mut level = LevelAccumulator::new();
    observe_all(
        &mut level,
        &[
            doc! { "a": 1, "b": 2 },
            doc! { "a": 3 },
            doc! { "a": 4, "b": 5 },
        ],
    );

    assert!(field(&level, "a").required);
    assert!(!field(&level, "b").required);
}

#[test]
fn test_late_field_is_never_required() {
    let mut level = LevelAccumulator::new();
    observe_all(
        &mut level,
        &[
            doc! { "a": 1 },
            doc! { "a": 2, "late": true },
            doc! { "a": 3, "late": false },
        ],
    );

    // "late" appears in every later document, but the first already
    // lacked it.
    assert!(!field(&level, "late").required);
}

#[test]
fn test_required_is_not_restored_once_cleared() {
    let mut level = LevelAccumulator::new();
    observe_all(
        &mut level,
        &[
            doc! { "a": 1, "b": 1 },
            doc! { "a": 2 },
            doc! { "a": 3, "b": 3 },
            doc! { "a": 4, "b": 4 },
        ],
    );

    assert!(!field(&level, "b").required);
}

#[test]
fn test_explicit_null_counts_as_present() {
    let mut level = LevelAccumulator::new();
    observe_all(
        &mut level,
        &[doc! { "a": 1, "b": Bson::Null }, doc! { "a": 2, "b": 2 }],
    );

    assert!(field(&level, "b").required);
    assert_eq!(
        field(&level, "b").types,
        tags(&[FieldType::Null, FieldType::Number])
    );
}

#[test]
fn test_single_document_fields_are_required() {
    let mut level = LevelAccumulator::new();
    observe_all(&mut level, &[doc! { "only": 1 }]);

    assert!(field(&level, "only").required);
}

// ============================================================================
// Type-set unification
// ============================================================================

#[test]
fn test_type_union_across_documents() {
    let mut level = LevelAccumulator::new();
    observe_all(&mut level, &[doc! { "x": 1 }, doc! { "x": "s" }]);

    assert_eq!(
        field(&level, "x").types,
        tags(&[FieldType::Number, FieldType::String])
    );
}

#[test]
fn test_types_never_empty_once_observed() {
    let mut level = LevelAccumulator::new();
    observe_all(&mut level, &[doc! { "a": 1 }, doc! { "b": 2 }]);

    for (_, acc) in level.fields() {
        assert!(!acc.types.is_empty());
    }
}

// ============================================================================
// Subfield levels
// ============================================================================

#[test]
fn test_subfields_aggregate_per_parent_record() {
    let mut level = LevelAccumulator::new();
    observe_all(
        &mut level,
        &[
            doc! { "profile": { "age": 30, "city": "Oslo" } },
            doc! { "profile": { "age": "unknown" } },
        ],
    );

    let profile = field(&level, "profile");
    assert_eq!(profile.types, tags(&[FieldType::Object]));

    let children = profile.children.as_ref().unwrap();
    assert_eq!(children.records_seen(), 2);

    let age = field(children, "profile.age");
    assert!(age.required);
    assert_eq!(age.types, tags(&[FieldType::Number, FieldType::String]));

    let city = field(children, "profile.city");
    assert!(!city.required);
}

#[test]
fn test_scalar_parent_does_not_falsify_children() {
    let mut level = LevelAccumulator::new();
    observe_all(
        &mut level,
        &[
            doc! { "profile": { "age": 30 } },
            // No nested record here: nothing for child presence to be
            // judged against.
            doc! { "profile": 7 },
            doc! { "profile": { "age": 31 } },
        ],
    );

    let profile = field(&level, "profile");
    assert_eq!(profile.types, tags(&[FieldType::Number, FieldType::Object]));

    let children = profile.children.as_ref().unwrap();
    assert_eq!(children.records_seen(), 2);
    assert!(field(children, "profile.age").required);
}

#[test]
fn test_empty_object_falsifies_known_children() {
    let mut level = LevelAccumulator::new();
    observe_all(
        &mut level,
        &[doc! { "profile": { "age": 30 } }, doc! { "profile": {} }],
    );

    let children = field(&level, "profile").children.as_ref().unwrap();
    assert!(!field(children, "profile.age").required);
}

#[test]
fn test_array_of_objects_aggregates_under_marker_path() {
    let mut level = LevelAccumulator::new();
    observe_all(
        &mut level,
        &[
            doc! { "tags": [{ "id": 1 }] },
            doc! { "tags": [{ "id": "abc", "label": "x" }] },
        ],
    );

    let tags_field = field(&level, "tags");
    assert_eq!(tags_field.types, tags(&[FieldType::Array]));

    let children = tags_field.children.as_ref().unwrap();
    let id = field(children, "tags[].id");
    assert!(id.required);
    assert_eq!(id.types, tags(&[FieldType::Number, FieldType::String]));
    assert!(!field(children, "tags[].label").required);
}

#[test]
fn test_empty_array_contributes_no_child_record() {
    let mut level = LevelAccumulator::new();
    observe_all(
        &mut level,
        &[doc! { "tags": [{ "id": 1 }] }, doc! { "tags": [] }],
    );

    let children = field(&level, "tags").children.as_ref().unwrap();
    assert_eq!(children.records_seen(), 1);
    assert!(field(children, "tags[].id").required);
}

// ============================================================================
// Level bookkeeping
// ============================================================================

#[test]
fn test_empty_level() {
    let level = LevelAccumulator::new();
    assert!(level.is_empty());
    assert_eq!(level.records_seen(), 0);
}

#[test]
fn test_fields_iterate_in_lexical_order() {
    let mut level = LevelAccumulator::new();
    observe_all(&mut level, &[doc! { "zeta": 1, "alpha": 2, "mid": 3 }]);

    let order: Vec<&str> = level.fields().map(|(p, _)| p.as_str()).collect();
    assert_eq!(order, vec!["alpha", "mid", "zeta"]);
}
