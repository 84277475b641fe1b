//! Error types for sentiment training and classification

use plinth_domain::Sentiment;
use thiserror::Error;

/// Errors that can occur during training, classification, or evaluation
#[derive(Error, Debug)]
pub enum SentimentError {
    /// A label has no training examples; its centroid is undefined
    #[error("Insufficient training data: no examples for label '{label}'")]
    InsufficientData {
        /// The label with zero examples
        label: Sentiment,
    },

    /// Embedding dimensions differ across compared vectors
    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension produced
        actual: usize,
    },

    /// Embedding service error
    #[error("Embedding service error: {0}")]
    Embedding(String),

    /// Completion service error
    #[error("Completion service error: {0}")]
    Completion(String),

    /// CSV read error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error opening a dataset file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
