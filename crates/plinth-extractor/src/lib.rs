//! Plinth Structured Extractor
//!
//! Obtains schema-conformant answers from free text the model produces,
//! despite the model being an unreliable text generator.
//!
//! The extractor builds a prompt that states the expected JSON shape
//! explicitly, runs it through a [`plinth_index::QueryEngine`], then
//! strictly parses and validates the response. A malformed response
//! degrades to an explicit unparseable sentinel for that one field; it
//! never aborts the extraction run.
//!
//! # Examples
//!
//! ```
//! use plinth_extractor::{ExtractionSchema, Field};
//!
//! let schema = ExtractionSchema::object(vec![
//!     Field::string("firstName"),
//!     Field::string("lastName"),
//! ]);
//! let value = serde_json::json!({"firstName": "jane", "lastName": "doe"});
//! assert!(schema.validate(&value).is_ok());
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod extractor;
pub mod normalize;
pub mod parser;
pub mod prompt;
pub mod resume;
pub mod schema;

pub use error::{ExtractorError, SchemaViolation, UnparseableError};
pub use extractor::{ExtractionResult, StructuredExtractor};
pub use normalize::normalize_name;
pub use prompt::PromptBuilder;
pub use resume::{FullName, ProfessionalExperience};
pub use schema::{ExtractionSchema, Field, FieldKind};
