//! Walker types

use crate::types::FieldType;

/// One field observed in one document.
///
/// `children` is `Some` only when the walker descended into a nested
/// record: an object value, or the first element of an array of objects.
/// A scalar, a null, or an empty array carries no record level, which is
/// different from descending into an empty object (`Some(vec![])`); the
/// aggregator uses that distinction when falsifying subfield presence.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldObservation {
    /// Dot-qualified path of this field, with a `[]` segment for
    /// array-element levels (e.g. `tags[].id`)
    pub path: String,

    /// The single type tag observed for this field in this document
    pub field_type: FieldType,

    /// Observations for the nested record level, if one was walked
    pub children: Option<Vec<FieldObservation>>,
}

impl FieldObservation {
    /// Create a leaf observation with no nested record level
    pub fn leaf(path: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            path: path.into(),
            field_type,
            children: None,
        }
    }
}
