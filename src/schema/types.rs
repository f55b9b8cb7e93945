//! Schema types

use crate::types::IndexDescriptor;
use serde::{Deserialize, Serialize};

/// One inferred field of a collection schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    /// Dot-qualified field path, unique within its parent's field list
    pub field: String,

    /// Observed type tag, or the sorted `|`-joined union when the field
    /// was seen with more than one type (e.g. `"number|string"`)
    #[serde(rename = "type")]
    pub field_type: String,

    /// True iff every record observed at this field's level contained it
    pub is_required: bool,

    /// Child fields, present only for object fields and arrays of objects
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_fields: Vec<FieldSchema>,
}

impl FieldSchema {
    /// Create a leaf field with no subfields
    pub fn new(field: impl Into<String>, field_type: impl Into<String>, is_required: bool) -> Self {
        Self {
            field: field.into(),
            field_type: field_type.into(),
            is_required,
            sub_fields: Vec::new(),
        }
    }

    /// Attach subfields
    #[must_use]
    pub fn with_sub_fields(mut self, sub_fields: Vec<FieldSchema>) -> Self {
        self.sub_fields = sub_fields;
        self
    }
}

/// The inferred description of a whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSchema {
    /// Source collection name
    pub collection: String,

    /// Top-level fields in canonical (lexical path) order
    pub fields: Vec<FieldSchema>,

    /// Total document count of the collection, not just the sample
    pub count: u64,

    /// Index descriptors passed through from the source unchanged
    #[serde(default)]
    pub indexes: Vec<IndexDescriptor>,
}

impl CollectionSchema {
    /// Look up a top-level field by path
    pub fn field(&self, path: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.field == path)
    }

    /// Total number of fields, subfields included
    pub fn field_count(&self) -> usize {
        fn count(fields: &[FieldSchema]) -> usize {
            fields.iter().map(|f| 1 + count(&f.sub_fields)).sum()
        }
        count(&self.fields)
    }

    /// Convert to a JSON value
    pub fn to_json(&self) -> crate::error::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Convert to a pretty JSON string
    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
