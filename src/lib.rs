//! # mongoscope
//!
//! Schema inference for MongoDB document collections from bounded samples.
//! Given a collection of loosely-typed documents, mongoscope produces a
//! unified structural description: the type tags observed per field path,
//! nesting and array-element structure, and whether a field was present in
//! every sampled document.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mongoscope::{MongoSource, Profile, SchemaEngine, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let profile = Profile::load("mongoscope.yaml")?.with_env_fallback();
//!     let source = MongoSource::connect(&profile.connection).await?;
//!
//!     let engine = SchemaEngine::new(source);
//!     let schema = engine.infer_schema("users").await?;
//!
//!     println!("{}", schema.to_json_pretty()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       SchemaEngine                          │
//! │        infer_schema(collection) → CollectionSchema          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌───────────┬────────────┬───┴─────────┬─────────────────────┐
//! │  Source   │  Classify  │    Walk     │  Aggregate/Schema   │
//! ├───────────┼────────────┼─────────────┼─────────────────────┤
//! │ MongoDB   │ 8-tag type │ dot paths   │ type-set union      │
//! │ In-memory │ closed set │ [] markers  │ required flags      │
//! │ fixtures  │            │ depth guard │ canonical order     │
//! └───────────┴────────────┴─────────────┴─────────────────────┘
//! ```
//!
//! A sample is bounded (default 100 documents); the collection's total
//! count and index descriptors are fetched alongside it and passed through
//! into the assembled schema.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for mongoscope
pub mod error;

/// Common types and constants
pub mod types;

/// Type classification for BSON values
pub mod classify;

/// Recursive field walker
pub mod walk;

/// Observation aggregation across a sample
pub mod aggregate;

/// Schema data model and assembly
pub mod schema;

/// Document sources (MongoDB, in-memory)
pub mod source;

/// Inference engine
pub mod engine;

/// Configuration profiles
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{ConnectionConfig, Profile};
pub use engine::{infer_schema, InferenceConfig, InferenceStats, SchemaEngine};
pub use error::{Error, Result};
pub use schema::{CollectionSchema, FieldSchema};
pub use source::{DocumentSource, MemorySource, MongoSource};
pub use types::FieldType;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
