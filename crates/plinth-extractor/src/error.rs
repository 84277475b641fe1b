//! Error types for structured extraction

use thiserror::Error;

/// Errors that abort a single extraction call
///
/// Parse and validation failures are NOT here: those degrade to the
/// [`crate::ExtractionResult::Unparseable`] sentinel instead of an error.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Retrieval or completion failure underneath the query engine; fatal
    /// to this field, the caller decides whether the run continues
    #[error("Query error: {0}")]
    Query(#[from] plinth_index::IndexError),
}

/// A model response that could not be parsed or validated
///
/// Carried by the unparseable sentinel so callers can log or inspect the
/// offending response.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unparseable model response: {reason}")]
pub struct UnparseableError {
    /// Why parsing or validation failed
    pub reason: String,

    /// The raw response text from the model
    pub raw_response: String,
}

/// First schema rule the value broke
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaViolation {
    /// A value had the wrong JSON type
    #[error("{path}: expected {expected}")]
    TypeMismatch {
        /// Path to the offending value (e.g. `$.experiences[0].period`)
        path: String,
        /// Expected type name
        expected: &'static str,
    },

    /// A required field was absent
    #[error("{path}: missing required field")]
    MissingField {
        /// Path to the absent field
        path: String,
    },

    /// A field the schema does not declare was present
    #[error("{path}: unexpected field")]
    UnexpectedField {
        /// Path to the extra field
        path: String,
    },
}
