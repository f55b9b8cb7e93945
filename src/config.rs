//! Configuration for mongoscope
//!
//! A profile is a small YAML file holding the source connection settings
//! and inference tuning. Every field has a sensible default except the
//! connection URI, which can also come from the `MONGOSCOPE_URL` or
//! `MONGODB_URL` environment variables.
//!
//! ```yaml
//! connection:
//!   uri: "mongodb://localhost:27017/appdb"
//! inference:
//!   sample_size: 200
//!   timeout_ms: 5000
//! ```

use crate::engine::InferenceConfig;
use crate::error::{Error, Result};
use crate::types::{DEFAULT_MAX_DEPTH, DEFAULT_SAMPLE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variables consulted for the connection URI, in order
const URI_ENV_VARS: &[&str] = &["MONGOSCOPE_URL", "MONGODB_URL"];

/// Top-level profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Source connection settings
    #[serde(default)]
    pub connection: ConnectionConfig,

    /// Inference tuning
    #[serde(default)]
    pub inference: InferenceSettings,
}

/// Source connection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    /// MongoDB connection URI
    #[serde(default)]
    pub uri: String,

    /// Database name; defaults to the database in the URI path
    #[serde(default)]
    pub database: Option<String>,
}

/// Inference tuning as it appears in a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InferenceSettings {
    /// Maximum number of documents to sample per request
    #[serde(default = "default_sample_size")]
    pub sample_size: u32,

    /// Maximum document nesting depth before inference fails
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Source I/O timeout in milliseconds; 0 disables it
    #[serde(default)]
    pub timeout_ms: u64,
}

fn default_sample_size() -> u32 {
    DEFAULT_SAMPLE_SIZE
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            timeout_ms: 0,
        }
    }
}

impl InferenceSettings {
    /// Convert profile settings into an engine configuration
    pub fn to_engine_config(&self) -> InferenceConfig {
        let mut config = InferenceConfig::new()
            .with_sample_size(self.sample_size)
            .with_max_depth(self.max_depth);
        if self.timeout_ms > 0 {
            config = config.with_timeout(Duration::from_millis(self.timeout_ms));
        }
        config
    }
}

impl Profile {
    /// Load a profile from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a profile from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Fill an unset connection URI from the environment
    #[must_use]
    pub fn with_env_fallback(mut self) -> Self {
        if self.connection.uri.is_empty() {
            for var in URI_ENV_VARS {
                if let Ok(uri) = std::env::var(var) {
                    if !uri.is_empty() {
                        self.connection.uri = uri;
                        break;
                    }
                }
            }
        }
        self
    }

    /// Validate that the profile can reach a source
    pub fn require_uri(&self) -> Result<&str> {
        if self.connection.uri.is_empty() {
            return Err(Error::missing_field("connection.uri"));
        }
        Ok(&self.connection.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_profile_defaults() {
        let profile = Profile::from_yaml("{}").unwrap();
        assert_eq!(profile.inference.sample_size, 100);
        assert_eq!(profile.inference.max_depth, 32);
        assert_eq!(profile.inference.timeout_ms, 0);
        assert!(profile.connection.uri.is_empty());
        assert!(profile.connection.database.is_none());
    }

    #[test]
    fn test_profile_from_yaml() {
        let yaml = r#"
connection:
  uri: "mongodb://localhost:27017/appdb"
  database: "other"
inference:
  sample_size: 250
  timeout_ms: 5000
"#;
        let profile = Profile::from_yaml(yaml).unwrap();
        assert_eq!(profile.connection.uri, "mongodb://localhost:27017/appdb");
        assert_eq!(profile.connection.database.as_deref(), Some("other"));
        assert_eq!(profile.inference.sample_size, 250);
        assert_eq!(profile.inference.max_depth, 32);

        let engine_config = profile.inference.to_engine_config();
        assert_eq!(engine_config.timeout, Some(Duration::from_millis(5000)));
    }

    #[test]
    fn test_profile_rejects_unknown_fields() {
        assert!(Profile::from_yaml("connection:\n  url: typo\n").is_err());
    }

    #[test]
    fn test_profile_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "connection:\n  uri: mongodb://localhost/db").unwrap();

        let profile = Profile::load(file.path()).unwrap();
        assert_eq!(profile.connection.uri, "mongodb://localhost/db");
    }

    #[test]
    fn test_profile_load_missing_file() {
        let err = Profile::load("/nonexistent/profile.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_require_uri() {
        let profile = Profile::default();
        assert!(matches!(
            profile.require_uri().unwrap_err(),
            Error::MissingConfigField { .. }
        ));
    }

    #[test]
    fn test_zero_timeout_disables_bound() {
        let profile = Profile::from_yaml("inference:\n  timeout_ms: 0\n").unwrap();
        assert_eq!(profile.inference.to_engine_config().timeout, None);
    }
}
