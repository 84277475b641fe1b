//! Core extractor implementation

use crate::error::{ExtractorError, UnparseableError};
use crate::parser::parse_structured;
use crate::prompt::PromptBuilder;
use crate::schema::ExtractionSchema;
use plinth_index::QueryEngine;
use plinth_llm::{CompletionProvider, EmbeddingProvider};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Outcome of one extraction call
///
/// Either a value conforming to the schema, or an explicit unparseable
/// sentinel. The sentinel is a value, not an error: one malformed model
/// response degrades one field, not the whole run.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    /// The model's answer parsed and validated against the schema
    Parsed(Value),

    /// The model's answer could not be parsed or validated
    Unparseable(UnparseableError),
}

impl ExtractionResult {
    /// The parsed value, if any
    pub fn value(&self) -> Option<&Value> {
        match self {
            ExtractionResult::Parsed(value) => Some(value),
            ExtractionResult::Unparseable(_) => None,
        }
    }

    /// Consume the result, yielding the parsed value if any
    pub fn into_value(self) -> Option<Value> {
        match self {
            ExtractionResult::Parsed(value) => Some(value),
            ExtractionResult::Unparseable(_) => None,
        }
    }

    /// True when the model's answer was rejected
    pub fn is_unparseable(&self) -> bool {
        matches!(self, ExtractionResult::Unparseable(_))
    }
}

/// Extracts schema-conformant values through a query engine
///
/// # Examples
///
/// ```
/// use plinth_domain::Document;
/// use plinth_extractor::{ExtractionSchema, Field, StructuredExtractor};
/// use plinth_index::{DocumentIndex, QueryEngine};
/// use plinth_llm::{MockCompletion, MockEmbedding};
///
/// # tokio_test::block_on(async {
/// let index = DocumentIndex::build(
///     MockEmbedding::new(8),
///     vec![Document::new("Jane Doe, engineer", "resume.txt")],
/// )
/// .await
/// .unwrap();
/// let engine = QueryEngine::new(index, MockCompletion::new(r#"{"firstName": "Jane"}"#));
/// let extractor = StructuredExtractor::new(engine);
///
/// let schema = ExtractionSchema::object(vec![Field::string("firstName")]);
/// let result = extractor.extract("First name?", &schema).await.unwrap();
/// assert!(!result.is_unparseable());
/// # });
/// ```
pub struct StructuredExtractor<E, C>
where
    E: EmbeddingProvider,
    C: CompletionProvider,
{
    engine: QueryEngine<E, C>,
}

impl<E, C> StructuredExtractor<E, C>
where
    E: EmbeddingProvider,
    C: CompletionProvider,
{
    /// Create an extractor over a query engine
    pub fn new(engine: QueryEngine<E, C>) -> Self {
        Self { engine }
    }

    /// The underlying query engine
    pub fn engine(&self) -> &QueryEngine<E, C> {
        &self.engine
    }

    /// Ask a question and validate the answer against a schema
    ///
    /// Parse and validation failures are logged and returned as the
    /// unparseable sentinel; they never become an `Err`.
    ///
    /// # Errors
    ///
    /// `ExtractorError::Query` when retrieval or the completion call fails;
    /// fatal to this field only.
    pub async fn extract(
        &self,
        question: &str,
        schema: &ExtractionSchema,
    ) -> Result<ExtractionResult, ExtractorError> {
        let prompt = PromptBuilder::new(question, schema).build();
        let raw = self.engine.query(&prompt).await?;

        debug!("Model response length: {} chars", raw.len());

        match parse_structured(&raw, schema) {
            Ok(value) => Ok(ExtractionResult::Parsed(value)),
            Err(e) => {
                warn!(
                    "Unexpected response from the model: {}:\n{}",
                    e.reason, e.raw_response
                );
                Ok(ExtractionResult::Unparseable(e))
            }
        }
    }

    /// Extract and deserialize into a typed value
    ///
    /// Returns `None` when the model's answer was unparseable. The
    /// deserialization target must match the schema; a value that passed
    /// validation but fails to deserialize is also reported as `None` with
    /// a diagnostic.
    pub async fn extract_as<T>(
        &self,
        question: &str,
        schema: &ExtractionSchema,
    ) -> Result<Option<T>, ExtractorError>
    where
        T: DeserializeOwned,
    {
        let result = self.extract(question, schema).await?;

        match result {
            ExtractionResult::Unparseable(_) => Ok(None),
            ExtractionResult::Parsed(value) => match serde_json::from_value::<T>(value) {
                Ok(typed) => Ok(Some(typed)),
                Err(e) => {
                    warn!("Validated value did not deserialize: {}", e);
                    Ok(None)
                }
            },
        }
    }
}
