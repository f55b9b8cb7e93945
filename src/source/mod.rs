//! Document sources
//!
//! The sampling capability the inference engine consumes: a bounded,
//! representative sample of a collection's documents, the collection's
//! total document count, and its index descriptors. The three reads are
//! independent, so callers may issue them concurrently.
//!
//! Two implementations ship with the crate:
//! - [`MongoSource`] - a live MongoDB database via the official driver
//! - [`MemorySource`] - an in-process source for tests, demos, and offline
//!   inference over JSON fixtures

mod memory;
mod mongo;

pub use memory::MemorySource;
pub use mongo::MongoSource;

use crate::error::Result;
use crate::types::IndexDescriptor;
use async_trait::async_trait;
use bson::Bson;

/// A paginated reader over one collection-shaped document store.
///
/// Implementations surface I/O failures as source faults
/// ([`crate::Error::is_source_fault`]); they never retry internally.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch up to `limit` representative documents from a collection.
    ///
    /// A `limit` of 0 fetches nothing. Items are returned as raw values:
    /// the walker, not the source, decides whether each one is a valid
    /// key/value record.
    async fn fetch_sample(&self, collection: &str, limit: u32) -> Result<Vec<Bson>>;

    /// Count all documents in the collection, not just the sample.
    async fn count_all(&self, collection: &str) -> Result<u64>;

    /// List the collection's index descriptors, passed through opaquely.
    async fn list_indexes(&self, collection: &str) -> Result<Vec<IndexDescriptor>>;
}
