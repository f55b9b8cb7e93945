//! In-process document source

use super::DocumentSource;
use crate::error::Result;
use crate::types::IndexDescriptor;
use async_trait::async_trait;
use bson::Bson;
use std::collections::HashMap;

/// A document source backed by in-process collections.
///
/// Useful for tests and for offline inference over JSON fixtures. Sampling
/// order is the insertion order of the documents, so inference over a
/// `MemorySource` is fully deterministic.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    collections: HashMap<String, MemoryCollection>,
}

#[derive(Debug, Clone, Default)]
struct MemoryCollection {
    documents: Vec<Bson>,
    /// Overrides the document count when the collection is larger than
    /// the held sample
    total: Option<u64>,
    indexes: Vec<IndexDescriptor>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collection with the given documents
    #[must_use]
    pub fn with_documents(mut self, collection: impl Into<String>, documents: Vec<Bson>) -> Self {
        self.collections
            .entry(collection.into())
            .or_default()
            .documents = documents;
        self
    }

    /// Override a collection's total count (for collections notionally
    /// larger than the documents held here)
    #[must_use]
    pub fn with_total(mut self, collection: impl Into<String>, total: u64) -> Self {
        self.collections.entry(collection.into()).or_default().total = Some(total);
        self
    }

    /// Attach index descriptors to a collection
    #[must_use]
    pub fn with_indexes(
        mut self,
        collection: impl Into<String>,
        indexes: Vec<IndexDescriptor>,
    ) -> Self {
        self.collections
            .entry(collection.into())
            .or_default()
            .indexes = indexes;
        self
    }

    /// Build a source holding one collection parsed from a JSON string.
    ///
    /// Accepts a JSON array of documents or a single document. Extended
    /// JSON is honored, so `{"$oid": ...}` and `{"$date": ...}` fixtures
    /// classify as `objectId` and `date`. Items that are not key/value
    /// records are kept as-is; the walker rejects them at inference time.
    pub fn from_json_str(collection: impl Into<String>, json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let items = match value {
            serde_json::Value::Array(items) => items,
            other => vec![other],
        };
        let documents = items
            .into_iter()
            .map(Bson::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self::new().with_documents(collection, documents))
    }

    /// Names of the collections this source holds, sorted
    pub fn collection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.collections.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    async fn fetch_sample(&self, collection: &str, limit: u32) -> Result<Vec<Bson>> {
        let documents = self
            .collections
            .get(collection)
            .map(|c| c.documents.as_slice())
            .unwrap_or_default();
        Ok(documents.iter().take(limit as usize).cloned().collect())
    }

    async fn count_all(&self, collection: &str) -> Result<u64> {
        Ok(self
            .collections
            .get(collection)
            .map(|c| c.total.unwrap_or(c.documents.len() as u64))
            .unwrap_or(0))
    }

    async fn list_indexes(&self, collection: &str) -> Result<Vec<IndexDescriptor>> {
        Ok(self
            .collections
            .get(collection)
            .map(|c| c.indexes.clone())
            .unwrap_or_default())
    }
}
