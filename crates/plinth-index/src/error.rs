//! Error types for indexing and retrieval

use thiserror::Error;

/// Errors that can occur during ingestion, indexing, or querying
#[derive(Error, Debug)]
pub enum IndexError {
    /// The corpus is empty; no grounded answer is possible
    #[error("Empty corpus: no documents to index")]
    EmptyCorpus,

    /// Embedding dimension differs across the corpus or query
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

    /// I/O error while reading documents
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
