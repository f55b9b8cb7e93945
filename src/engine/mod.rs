//! Inference engine
//!
//! Orchestrates one schema inference request: sample the collection, walk
//! each sampled document, aggregate the observations, and assemble the
//! final schema together with the collection's metadata.
//!
//! # Overview
//!
//! The engine module provides:
//! - `SchemaEngine` - Runs inference requests against a document source
//! - `InferenceConfig` - Sample size, depth limit, and I/O timeout
//! - `InferenceStats` - Per-request summary for logging and callers

mod types;

pub use types::{InferenceConfig, InferenceStats};

use crate::aggregate::LevelAccumulator;
use crate::error::{Error, Result};
use crate::schema::{assemble, CollectionSchema};
use crate::source::DocumentSource;
use crate::walk::walk;
use std::future::Future;
use std::time::Instant;
use tracing::info;

/// Schema inference engine over a document source.
///
/// Each inference call owns its own accumulator state; nothing is shared
/// or cached across calls, so concurrent requests are fully independent.
pub struct SchemaEngine<S> {
    /// Document source
    source: S,
    /// Inference configuration
    config: InferenceConfig,
}

impl<S: DocumentSource> SchemaEngine<S> {
    /// Create an engine with default configuration
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: InferenceConfig::default(),
        }
    }

    /// Set inference configuration
    #[must_use]
    pub fn with_config(mut self, config: InferenceConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the inference configuration
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Get the underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Infer the schema of one collection.
    ///
    /// Failures from the source, a malformed sampled item, or a document
    /// nested past the depth limit fail the whole call; no partial
    /// schema is ever returned. An empty sample is not a failure: it
    /// yields a schema with no fields and the collection's true count.
    pub async fn infer_schema(&self, collection: &str) -> Result<CollectionSchema> {
        let (schema, _) = self.infer_schema_with_stats(collection).await?;
        Ok(schema)
    }

    /// Infer the schema of one collection, returning the request summary
    /// alongside it.
    pub async fn infer_schema_with_stats(
        &self,
        collection: &str,
    ) -> Result<(CollectionSchema, InferenceStats)> {
        let start = Instant::now();

        // The three source reads are independent; run the sample fetch
        // concurrently with the count and index lookups and join before
        // assembly.
        let (sample, count, indexes) = tokio::try_join!(
            self.bounded(self.source.fetch_sample(collection, self.config.sample_size)),
            self.bounded(self.source.count_all(collection)),
            self.bounded(self.source.list_indexes(collection)),
        )?;

        let mut level = LevelAccumulator::new();
        for item in &sample {
            let observations = walk(item, self.config.max_depth)?;
            level.observe(&observations);
        }

        let schema = assemble(collection, &level, count, indexes);
        let stats = InferenceStats {
            documents_sampled: sample.len(),
            fields_discovered: schema.field_count(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        };
        info!(
            collection,
            documents = stats.documents_sampled,
            fields = stats.fields_discovered,
            elapsed_ms = stats.elapsed_ms,
            "schema inference complete"
        );
        Ok((schema, stats))
    }

    /// Apply the configured I/O timeout to a source read. The inference
    /// algorithm itself is CPU-bound and never goes through here.
    async fn bounded<T>(&self, operation: impl Future<Output = Result<T>>) -> Result<T> {
        match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, operation)
                .await
                .map_err(|_| Error::Timeout {
                    timeout_ms: limit.as_millis() as u64,
                })?,
            None => operation.await,
        }
    }
}

/// Infer a collection's schema with default settings and the given sample
/// size (convenience wrapper around [`SchemaEngine`]).
pub async fn infer_schema(
    source: impl DocumentSource,
    collection: &str,
    sample_size: u32,
) -> Result<CollectionSchema> {
    let config = InferenceConfig::default().with_sample_size(sample_size);
    SchemaEngine::new(source)
        .with_config(config)
        .infer_schema(collection)
        .await
}
