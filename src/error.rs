//! Error types for mongoscope
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::types::FieldType;
use thiserror::Error;

/// The main error type for mongoscope
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A required configuration field was not provided
    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    /// YAML parsing failed
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON parsing failed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Document Source Errors
    // ============================================================================
    /// The underlying driver reported a failure
    #[error("Document source error: {0}")]
    Source(#[from] mongodb::error::Error),

    /// The document source could not be reached
    #[error("Document source unavailable: {message}")]
    SourceUnavailable { message: String },

    /// A source read exceeded the configured timeout
    #[error("Source request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // Inference Errors
    // ============================================================================
    /// A sampled item is not a key/value record
    #[error("Malformed document: expected a key/value record, found {found}")]
    MalformedDocument { found: FieldType },

    /// Document nesting exceeded the configured depth limit
    #[error("Document nesting exceeds maximum depth of {max_depth}")]
    DepthExceeded { max_depth: usize },

    // ============================================================================
    // BSON Conversion Errors
    // ============================================================================
    /// A value could not be serialized to BSON
    #[error("BSON serialization failed: {0}")]
    BsonSerialize(#[from] bson::ser::Error),

    /// An extended-JSON value could not be converted
    #[error("Failed to parse extended JSON: {0}")]
    ExtendedJson(#[from] bson::extjson::de::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// File system or network I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A referenced file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Generic error with a plain message
    #[error("{0}")]
    Other(String),

    /// Generic error from other subsystems
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a source-unavailable error
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            message: message.into(),
        }
    }

    /// Create a malformed-document error for a value of the given type
    pub fn malformed_document(found: FieldType) -> Self {
        Self::MalformedDocument { found }
    }

    /// Create a depth-exceeded error
    pub fn depth_exceeded(max_depth: usize) -> Self {
        Self::DepthExceeded { max_depth }
    }

    /// Create a file-not-found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Check if this error originates from source I/O rather than the
    /// inference algorithm itself. Source faults are propagated to the
    /// caller unmodified and never retried internally.
    pub fn is_source_fault(&self) -> bool {
        matches!(
            self,
            Error::Source(_) | Error::SourceUnavailable { .. } | Error::Timeout { .. }
        )
    }
}

/// Result type alias for mongoscope
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
