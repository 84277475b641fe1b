//! Plinth Document Index
//!
//! Ingests a directory of documents, embeds them once at build time, and
//! answers "which context should ground this query?" in one of two modes:
//!
//! - **Similarity**: embed the query, rank documents by cosine similarity,
//!   return the top K
//! - **Summary**: treat the whole corpus as context
//!
//! The [`QueryEngine`] composes retrieved context with a query string into
//! a single completion call.
//!
//! # Architecture
//!
//! The index is immutable after [`DocumentIndex::build`]; rebuilding
//! requires a fresh ingestion pass. Retrieval recomputes a transient
//! [`RetrievedContext`] per query from the cached build-time embeddings.

#![warn(missing_docs)]

pub mod error;
pub mod index;
pub mod loader;
pub mod query;

pub use error::IndexError;
pub use index::{ContextFragment, DocumentIndex, RetrievalMode, RetrievedContext};
pub use loader::load_documents;
pub use query::QueryEngine;
