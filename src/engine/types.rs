//! Engine types
//!
//! Configuration and per-request summary for the inference engine.

use crate::types::{DEFAULT_MAX_DEPTH, DEFAULT_SAMPLE_SIZE};
use std::time::Duration;

/// Configuration for one inference engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceConfig {
    /// Maximum number of documents to sample per request
    pub sample_size: u32,

    /// Maximum document nesting depth before inference fails
    pub max_depth: usize,

    /// Timeout applied to each source read; `None` disables it
    pub timeout: Option<Duration>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            timeout: None,
        }
    }
}

impl InferenceConfig {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sample size
    #[must_use]
    pub fn with_sample_size(mut self, sample_size: u32) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Set the maximum nesting depth
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the source I/O timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Summary of one inference request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InferenceStats {
    /// Documents actually retrieved and walked
    pub documents_sampled: usize,

    /// Fields in the assembled schema, subfields included
    pub fields_discovered: usize,

    /// Wall-clock time of the whole request
    pub elapsed_ms: u64,
}
