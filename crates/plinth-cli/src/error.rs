//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Service client error
    #[error("Service error: {0}")]
    Llm(#[from] plinth_llm::LlmError),

    /// Indexing or retrieval error
    #[error("Index error: {0}")]
    Index(#[from] plinth_index::IndexError),

    /// Extraction error
    #[error("Extraction error: {0}")]
    Extraction(#[from] plinth_extractor::ExtractorError),

    /// Sentiment training or evaluation error
    #[error("Sentiment error: {0}")]
    Sentiment(#[from] plinth_sentiment::SentimentError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
