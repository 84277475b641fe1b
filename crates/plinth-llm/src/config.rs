//! Client configuration
//!
//! Model selection is explicit: every client is constructed from an
//! [`OllamaConfig`] value, there is no process-wide default.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default completion model
pub const DEFAULT_COMPLETION_MODEL: &str = "llama3.1";

/// Default embedding model
pub const DEFAULT_EMBEDDING_MODEL: &str = "nomic-embed-text";

/// Default timeout for service requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Configuration for [`crate::OllamaClient`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Service endpoint (e.g., "http://localhost:11434")
    pub endpoint: String,

    /// Model used for text completion
    pub completion_model: String,

    /// Model used for embeddings
    pub embedding_model: String,

    /// Per-request timeout (seconds)
    pub timeout_secs: u64,

    /// Maximum attempts per request
    pub max_retries: u32,
}

impl OllamaConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.completion_model.is_empty() {
            return Err("completion_model must not be empty".to_string());
        }
        if self.embedding_model.is_empty() {
            return Err("embedding_model must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.max_retries == 0 {
            return Err("max_retries must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            completion_model: DEFAULT_COMPLETION_MODEL.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(OllamaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let mut config = OllamaConfig::default();
        config.endpoint = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = OllamaConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_timeout_duration() {
        let config = OllamaConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
