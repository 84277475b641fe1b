//! In-memory document index with per-query retrieval

use crate::error::IndexError;
use plinth_domain::vector::cosine_similarity;
use plinth_domain::{Document, DocumentId};
use plinth_llm::EmbeddingProvider;
use tracing::{debug, info};

/// How context is selected for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalMode {
    /// Embed the query and return the top K documents by cosine similarity
    Similarity {
        /// Number of documents to return
        top_k: usize,
    },

    /// Return the entire corpus in ingestion order; used when the task is
    /// "summarize everything" rather than "find the answer"
    Summary,
}

/// One document fragment selected for a query
#[derive(Debug, Clone, PartialEq)]
pub struct ContextFragment {
    /// Id of the source document
    pub document_id: DocumentId,

    /// Path the source document was read from
    pub source_path: String,

    /// Fragment text
    pub text: String,

    /// Similarity score for similarity-mode retrieval, `None` in summary mode
    pub score: Option<f32>,
}

/// Ordered context selected for one query; transient, recomputed per query
#[derive(Debug, Clone, Default)]
pub struct RetrievedContext {
    /// Fragments in relevance order (similarity mode) or ingestion order
    /// (summary mode)
    pub fragments: Vec<ContextFragment>,
}

impl RetrievedContext {
    /// Number of fragments
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// True when no context was selected
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

struct IndexEntry {
    document: Document,
    embedding: Vec<f32>,
}

/// Index over an ingested corpus
///
/// Every document is embedded once at build time; the index owns its
/// documents and does not change afterward. Rebuilding requires a fresh
/// ingestion pass.
///
/// # Examples
///
/// ```
/// use plinth_index::{DocumentIndex, RetrievalMode};
/// use plinth_llm::MockEmbedding;
/// use plinth_domain::Document;
///
/// # tokio_test::block_on(async {
/// let embedder = MockEmbedding::new(8);
/// let docs = vec![Document::new("hello world", "a.txt")];
/// let index = DocumentIndex::build(embedder, docs).await.unwrap();
/// let context = index
///     .retrieve("hello", RetrievalMode::Similarity { top_k: 1 })
///     .await
///     .unwrap();
/// assert_eq!(context.len(), 1);
/// # });
/// ```
pub struct DocumentIndex<E>
where
    E: EmbeddingProvider,
{
    embedder: E,
    entries: Vec<IndexEntry>,
    dimension: usize,
}

impl<E> DocumentIndex<E>
where
    E: EmbeddingProvider,
{
    /// Build an index by embedding every document in sequence
    ///
    /// # Errors
    ///
    /// - `EmptyCorpus` when `documents` is empty (no grounded answer is
    ///   possible, the run must abort)
    /// - `Embedding` when the embedding service fails (fatal during
    ///   indexing)
    /// - `DimensionMismatch` when the service returns inconsistent vector
    ///   dimensions
    pub async fn build(embedder: E, documents: Vec<Document>) -> Result<Self, IndexError> {
        if documents.is_empty() {
            return Err(IndexError::EmptyCorpus);
        }

        let mut entries = Vec::with_capacity(documents.len());
        let mut dimension = 0usize;

        for document in documents {
            let embedding = embedder
                .embed(&document.text)
                .await
                .map_err(|e| IndexError::Embedding(e.to_string()))?;

            if dimension == 0 {
                dimension = embedding.len();
            } else if embedding.len() != dimension {
                return Err(IndexError::DimensionMismatch {
                    expected: dimension,
                    actual: embedding.len(),
                });
            }

            debug!("Indexed {} ({} chars)", document.source_path, document.text.len());
            entries.push(IndexEntry {
                document,
                embedding,
            });
        }

        info!("Built index over {} documents (dimension {})", entries.len(), dimension);

        Ok(Self {
            embedder,
            entries,
            dimension,
        })
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// An index is never empty; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Embedding dimension of the corpus
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The embedding provider the index was built with
    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Select context for a query
    ///
    /// # Errors
    ///
    /// Similarity mode can fail with `Embedding` (query embedding call) or
    /// `DimensionMismatch`; summary mode is infallible in practice.
    pub async fn retrieve(
        &self,
        query: &str,
        mode: RetrievalMode,
    ) -> Result<RetrievedContext, IndexError> {
        match mode {
            RetrievalMode::Summary => Ok(self.retrieve_all()),
            RetrievalMode::Similarity { top_k } => self.retrieve_similar(query, top_k).await,
        }
    }

    fn retrieve_all(&self) -> RetrievedContext {
        let fragments = self
            .entries
            .iter()
            .map(|entry| ContextFragment {
                document_id: entry.document.id,
                source_path: entry.document.source_path.clone(),
                text: entry.document.text.clone(),
                score: None,
            })
            .collect();

        RetrievedContext { fragments }
    }

    async fn retrieve_similar(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<RetrievedContext, IndexError> {
        let query_embedding = self
            .embedder
            .embed(query)
            .await
            .map_err(|e| IndexError::Embedding(e.to_string()))?;

        if query_embedding.len() != self.dimension {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimension,
                actual: query_embedding.len(),
            });
        }

        let mut scored: Vec<(f32, &IndexEntry)> = self
            .entries
            .iter()
            .map(|entry| (cosine_similarity(&query_embedding, &entry.embedding), entry))
            .collect();

        // Descending by similarity; ties keep ingestion order (stable sort)
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        let fragments = scored
            .into_iter()
            .take(top_k)
            .map(|(score, entry)| ContextFragment {
                document_id: entry.document.id,
                source_path: entry.document.source_path.clone(),
                text: entry.document.text.clone(),
                score: Some(score),
            })
            .collect();

        Ok(RetrievedContext { fragments })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plinth_llm::MockEmbedding;

    fn doc(text: &str) -> Document {
        Document::new(text, format!("{}.txt", text.split_whitespace().next().unwrap()))
    }

    #[tokio::test]
    async fn test_build_empty_corpus_fails() {
        let embedder = MockEmbedding::new(8);
        let result = DocumentIndex::build(embedder, Vec::new()).await;
        assert!(matches!(result, Err(IndexError::EmptyCorpus)));
    }

    #[tokio::test]
    async fn test_build_nonempty_corpus_succeeds() {
        let embedder = MockEmbedding::new(8);
        let index = DocumentIndex::build(embedder, vec![doc("alpha"), doc("beta")])
            .await
            .unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.dimension(), 8);
    }

    #[tokio::test]
    async fn test_similarity_retrieval_ranks_by_cosine() {
        let mut embedder = MockEmbedding::new(3);
        embedder.add_embedding("sunny day", vec![1.0, 0.0, 0.0]);
        embedder.add_embedding("cloudy day", vec![0.9, 0.1, 0.0]);
        embedder.add_embedding("stock market", vec![0.0, 0.0, 1.0]);
        embedder.add_embedding("weather", vec![1.0, 0.0, 0.0]);

        let index = DocumentIndex::build(
            embedder,
            vec![doc("stock market"), doc("cloudy day"), doc("sunny day")],
        )
        .await
        .unwrap();

        let context = index
            .retrieve("weather", RetrievalMode::Similarity { top_k: 2 })
            .await
            .unwrap();

        assert_eq!(context.len(), 2);
        assert_eq!(context.fragments[0].text, "sunny day");
        assert_eq!(context.fragments[1].text, "cloudy day");
        assert!(context.fragments[0].score.unwrap() > context.fragments[1].score.unwrap());
    }

    #[tokio::test]
    async fn test_similarity_top_k_larger_than_corpus() {
        let embedder = MockEmbedding::new(8);
        let index = DocumentIndex::build(embedder, vec![doc("only one")])
            .await
            .unwrap();

        let context = index
            .retrieve("anything", RetrievalMode::Similarity { top_k: 10 })
            .await
            .unwrap();
        assert_eq!(context.len(), 1);
    }

    #[tokio::test]
    async fn test_summary_mode_returns_whole_corpus_in_order() {
        let embedder = MockEmbedding::new(8);
        let index = DocumentIndex::build(embedder, vec![doc("first"), doc("second"), doc("third")])
            .await
            .unwrap();

        let context = index.retrieve("ignored", RetrievalMode::Summary).await.unwrap();
        assert_eq!(context.len(), 3);
        assert_eq!(context.fragments[0].text, "first");
        assert_eq!(context.fragments[2].text, "third");
        assert!(context.fragments.iter().all(|f| f.score.is_none()));
    }

    #[tokio::test]
    async fn test_query_dimension_mismatch() {
        let mut embedder = MockEmbedding::new(3);
        embedder.add_embedding("odd one", vec![1.0, 0.0]);

        let index = DocumentIndex::build(embedder, vec![doc("normal text")])
            .await
            .unwrap();

        let result = index
            .retrieve("odd one", RetrievalMode::Similarity { top_k: 1 })
            .await;
        assert!(matches!(result, Err(IndexError::DimensionMismatch { .. })));
    }

    #[tokio::test]
    async fn test_corpus_dimension_mismatch_fails_build() {
        let mut embedder = MockEmbedding::new(3);
        embedder.add_embedding("short", vec![1.0, 0.0]);

        let result = DocumentIndex::build(embedder, vec![doc("normal text"), doc("short")]).await;
        assert!(matches!(result, Err(IndexError::DimensionMismatch { .. })));
    }
}
