//! Query engine: retrieved context + query -> one completion call

use crate::error::IndexError;
use crate::index::{DocumentIndex, RetrievalMode, RetrievedContext};
use plinth_llm::{CompletionProvider, EmbeddingProvider};
use tracing::debug;

/// Default number of documents for similarity-mode retrieval
pub const DEFAULT_TOP_K: usize = 2;

const CONTEXT_HEADER: &str = "Context information is below.";

const CONTEXT_RULE: &str = "---------------------";

const GROUNDING_DIRECTIVES: &str = "\
Please always use the provided context to answer.
Do not rely on prior knowledge.
If you don't know the answer, say that you don't know.";

/// Turns (retrieved context, query string) into a single completion call
///
/// The engine owns its index and completion client for the lifetime of one
/// run. Each query makes exactly one outbound completion call; a failure is
/// fatal to that query but a caller looping over independent queries can
/// carry on with the next one.
pub struct QueryEngine<E, C>
where
    E: EmbeddingProvider,
    C: CompletionProvider,
{
    index: DocumentIndex<E>,
    completion: C,
}

impl<E, C> QueryEngine<E, C>
where
    E: EmbeddingProvider,
    C: CompletionProvider,
{
    /// Create a query engine over a built index
    pub fn new(index: DocumentIndex<E>, completion: C) -> Self {
        Self { index, completion }
    }

    /// The underlying index
    pub fn index(&self) -> &DocumentIndex<E> {
        &self.index
    }

    /// The completion provider
    pub fn completion(&self) -> &C {
        &self.completion
    }

    /// Run a query with default similarity retrieval
    ///
    /// # Errors
    ///
    /// Propagates retrieval errors and `IndexError::Completion` when the
    /// completion call does not succeed.
    pub async fn query(&self, query_text: &str) -> Result<String, IndexError> {
        self.query_with_mode(
            query_text,
            RetrievalMode::Similarity {
                top_k: DEFAULT_TOP_K,
            },
        )
        .await
    }

    /// Run a query with an explicit retrieval mode
    pub async fn query_with_mode(
        &self,
        query_text: &str,
        mode: RetrievalMode,
    ) -> Result<String, IndexError> {
        let context = self.index.retrieve(query_text, mode).await?;
        let prompt = build_prompt(&context, query_text);

        debug!("Prompt length: {} chars", prompt.len());

        self.completion
            .complete(&prompt)
            .await
            .map_err(|e| IndexError::Completion(e.to_string()))
    }
}

/// Assemble the grounded prompt: context blocks, then the query, then the
/// grounding directives
fn build_prompt(context: &RetrievedContext, query_text: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(CONTEXT_HEADER);
    prompt.push('\n');
    prompt.push_str(CONTEXT_RULE);
    prompt.push('\n');

    for fragment in &context.fragments {
        prompt.push_str(&fragment.text);
        prompt.push('\n');
    }

    prompt.push_str(CONTEXT_RULE);
    prompt.push_str("\n\n");
    prompt.push_str(query_text);
    prompt.push_str("\n\n");
    prompt.push_str(GROUNDING_DIRECTIVES);

    prompt
}
