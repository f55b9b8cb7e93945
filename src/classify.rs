//! Type classification for BSON values
//!
//! Maps a single value to exactly one semantic type tag from the closed
//! [`FieldType`] set. Classification is pure and total: every representable
//! BSON value has a tag, and classifying the same value twice always yields
//! the same tag.

use crate::types::FieldType;
use bson::Bson;

/// Classify a single value as one of the eight semantic type tags.
///
/// Precedence follows the structural checks in order: null, then sequence,
/// then date, then opaque reference, then record, then primitive kind.
/// Composite BSON-only values (timestamps, binary blobs, regular
/// expressions, code, min/max keys) carry no primitive kind and classify
/// as `object`.
pub fn classify(value: &Bson) -> FieldType {
    match value {
        Bson::Null | Bson::Undefined => FieldType::Null,
        Bson::Array(_) => FieldType::Array,
        Bson::DateTime(_) => FieldType::Date,
        Bson::ObjectId(_) => FieldType::ObjectId,
        Bson::Document(_) => FieldType::Object,
        Bson::String(_) | Bson::Symbol(_) => FieldType::String,
        Bson::Double(_) | Bson::Int32(_) | Bson::Int64(_) | Bson::Decimal128(_) => {
            FieldType::Number
        }
        Bson::Boolean(_) => FieldType::Boolean,
        Bson::Timestamp(_)
        | Bson::Binary(_)
        | Bson::RegularExpression(_)
        | Bson::JavaScriptCode(_)
        | Bson::JavaScriptCodeWithScope(_)
        | Bson::DbPointer(_)
        | Bson::MaxKey
        | Bson::MinKey => FieldType::Object,
    }
}
