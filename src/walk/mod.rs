//! Recursive field walker
//!
//! Walks one document's key/value pairs into a flat, ordered list of
//! per-field observations. Nested objects recurse with a dot-qualified
//! parent path; arrays of objects recurse into their first element under a
//! `[]` path marker. Each observation carries exactly one type tag;
//! type-set unification across documents happens in the aggregator.

mod types;

pub use types::FieldObservation;

use crate::classify::classify;
use crate::error::{Error, Result};
use crate::types::ARRAY_ELEMENT_MARKER;
use bson::{Bson, Document};

/// Walk a sampled value that is expected to be a key/value record.
///
/// Anything other than a record is a structural-input error: skipping it
/// silently would corrupt required-field accounting downstream, so the
/// whole inference call fails instead.
pub fn walk(value: &Bson, max_depth: usize) -> Result<Vec<FieldObservation>> {
    match value {
        Bson::Document(doc) => walk_document(doc, max_depth),
        other => Err(Error::malformed_document(classify(other))),
    }
}

/// Walk a document into its ordered field observations.
pub fn walk_document(doc: &Document, max_depth: usize) -> Result<Vec<FieldObservation>> {
    walk_level(doc, None, 0, max_depth)
}

fn walk_level(
    doc: &Document,
    parent: Option<&str>,
    depth: usize,
    max_depth: usize,
) -> Result<Vec<FieldObservation>> {
    if depth >= max_depth {
        return Err(Error::depth_exceeded(max_depth));
    }

    let mut fields = Vec::with_capacity(doc.len());

    for (key, value) in doc {
        let path = match parent {
            Some(parent) => format!("{parent}.{key}"),
            None => key.clone(),
        };
        let field_type = classify(value);

        let children = match value {
            Bson::Document(nested) => Some(walk_level(nested, Some(&path), depth + 1, max_depth)?),
            Bson::Array(items) => match items.first() {
                // Element shape comes from the first element only; a
                // heterogeneous array surfaces nothing past its head.
                Some(Bson::Document(first)) => {
                    let marker = format!("{path}{ARRAY_ELEMENT_MARKER}");
                    Some(walk_level(first, Some(&marker), depth + 1, max_depth)?)
                }
                _ => None,
            },
            _ => None,
        };

        fields.push(FieldObservation {
            path,
            field_type,
            children,
        });
    }

    Ok(fields)
}
