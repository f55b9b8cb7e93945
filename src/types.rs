//! Common types used throughout mongoscope
//!
//! This module contains shared type definitions, type aliases,
//! and constants used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// A BSON document (re-exported from bson)
pub type Document = bson::Document;

/// A BSON value (re-exported from bson)
pub type BsonValue = bson::Bson;

/// An opaque index descriptor, passed through from the source unchanged
pub type IndexDescriptor = bson::Document;

// ============================================================================
// Constants
// ============================================================================

/// Default number of documents to sample per inference call
pub const DEFAULT_SAMPLE_SIZE: u32 = 100;

/// Default maximum document nesting depth before inference fails
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Path segment appended to an array field when describing its element shape
pub const ARRAY_ELEMENT_MARKER: &str = "[]";

// ============================================================================
// Field Type
// ============================================================================

/// The closed set of semantic type tags a field value can classify as.
///
/// Variants are declared in lexical order of their wire names; the derived
/// `Ord` is what keeps multi-type unions (`"number|string"`) stably sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    /// A sequence of values
    Array,
    /// A true/false value
    Boolean,
    /// A calendar date/time value
    Date,
    /// An explicit null (or missing-value sentinel)
    Null,
    /// Any numeric value (integer, double, or decimal)
    Number,
    /// A nested key/value record, or a composite value with no primitive kind
    Object,
    /// A database-generated opaque unique reference
    ObjectId,
    /// A text value
    String,
}

impl FieldType {
    /// The wire name of this tag, as it appears in assembled schemas
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Array => "array",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Null => "null",
            FieldType::Number => "number",
            FieldType::Object => "object",
            FieldType::ObjectId => "objectId",
            FieldType::String => "string",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
