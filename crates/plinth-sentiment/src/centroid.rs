//! Nearest-centroid classification over embeddings

use crate::error::SentimentError;
use plinth_domain::vector::cosine_similarity;
use plinth_domain::Sentiment;
use plinth_llm::EmbeddingProvider;
use tracing::{debug, info};

/// One training example before embedding
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledText {
    /// Example text
    pub text: String,

    /// Ground-truth label
    pub label: Sentiment,
}

impl LabeledText {
    /// Create a labeled training example
    pub fn new(text: impl Into<String>, label: Sentiment) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// One embedded training example
///
/// Consumed only during centroid training; every vector compared must share
/// one dimension, fixed by the embedding service.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledEmbedding {
    /// Embedding vector
    pub vector: Vec<f32>,

    /// Ground-truth label
    pub label: Sentiment,
}

/// One mean vector per sentiment label
///
/// Recomputed in full whenever training data changes; there is no
/// incremental update.
#[derive(Debug, Clone, PartialEq)]
pub struct Centroids {
    means: [Vec<f32>; 3],
    dimension: usize,
}

impl Centroids {
    /// Compute centroids from embedded training examples
    ///
    /// Accumulates per-label vector sums and counts, then takes the
    /// element-wise mean per label.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` naming the first label (in precedence order)
    ///   with zero examples
    /// - `DimensionMismatch` when example vectors disagree on dimension
    pub fn from_embeddings(examples: &[LabeledEmbedding]) -> Result<Self, SentimentError> {
        let dimension = match examples.first() {
            Some(example) => example.vector.len(),
            None => {
                return Err(SentimentError::InsufficientData {
                    label: Sentiment::Negative,
                })
            }
        };

        let mut sums = [
            vec![0.0f32; dimension],
            vec![0.0f32; dimension],
            vec![0.0f32; dimension],
        ];
        let mut counts = [0usize; 3];

        for example in examples {
            if example.vector.len() != dimension {
                return Err(SentimentError::DimensionMismatch {
                    expected: dimension,
                    actual: example.vector.len(),
                });
            }

            let idx = label_index(example.label);
            counts[idx] += 1;
            for (acc, value) in sums[idx].iter_mut().zip(&example.vector) {
                *acc += value;
            }
        }

        for label in Sentiment::ALL {
            if counts[label_index(label)] == 0 {
                return Err(SentimentError::InsufficientData { label });
            }
        }

        let mean = |idx: usize| -> Vec<f32> {
            sums[idx].iter().map(|v| v / counts[idx] as f32).collect()
        };
        let means = [mean(0), mean(1), mean(2)];

        Ok(Self { means, dimension })
    }

    /// Embedding dimension of the centroids
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The mean vector for a label
    pub fn mean(&self, label: Sentiment) -> &[f32] {
        &self.means[label_index(label)]
    }

    /// Label of the centroid nearest to a vector
    ///
    /// Similarity is cosine, the same measure the retrieval index uses.
    /// Ties break by the fixed precedence negative, neutral, positive.
    pub fn nearest(&self, vector: &[f32]) -> Sentiment {
        let mut best = Sentiment::Negative;
        let mut best_score = f32::NEG_INFINITY;

        for label in Sentiment::ALL {
            let score = cosine_similarity(vector, self.mean(label));
            // Strictly greater: on a tie the earlier label keeps the win
            if score > best_score {
                best = label;
                best_score = score;
            }
        }

        best
    }
}

/// Classifies text by nearest centroid
///
/// # Examples
///
/// ```
/// use plinth_domain::Sentiment;
/// use plinth_llm::MockEmbedding;
/// use plinth_sentiment::{CentroidClassifier, LabeledText};
///
/// # tokio_test::block_on(async {
/// let examples = vec![
///     LabeledText::new("awful", Sentiment::Negative),
///     LabeledText::new("fine", Sentiment::Neutral),
///     LabeledText::new("great", Sentiment::Positive),
/// ];
/// let classifier = CentroidClassifier::train(MockEmbedding::new(16), &examples)
///     .await
///     .unwrap();
/// let label = classifier.classify("awful").await.unwrap();
/// assert_eq!(label, Sentiment::Negative);
/// # });
/// ```
pub struct CentroidClassifier<E>
where
    E: EmbeddingProvider,
{
    embedder: E,
    centroids: Centroids,
}

impl<E> CentroidClassifier<E>
where
    E: EmbeddingProvider,
{
    /// Train a classifier by embedding every example in sequence
    ///
    /// # Errors
    ///
    /// `Embedding` when the embedding service fails (fatal during
    /// training), plus everything [`Centroids::from_embeddings`] reports.
    pub async fn train(embedder: E, examples: &[LabeledText]) -> Result<Self, SentimentError> {
        let mut embedded = Vec::with_capacity(examples.len());

        for example in examples {
            let vector = embedder
                .embed(&example.text)
                .await
                .map_err(|e| SentimentError::Embedding(e.to_string()))?;
            debug!("Embedded '{}' example ({} dims)", example.label, vector.len());
            embedded.push(LabeledEmbedding {
                vector,
                label: example.label,
            });
        }

        let centroids = Centroids::from_embeddings(&embedded)?;
        info!(
            "Trained centroids from {} examples (dimension {})",
            examples.len(),
            centroids.dimension()
        );

        Ok(Self {
            embedder,
            centroids,
        })
    }

    /// The trained centroids
    pub fn centroids(&self) -> &Centroids {
        &self.centroids
    }

    /// Classify a piece of text
    ///
    /// Deterministic: identical text and identical centroids always yield
    /// the same label.
    ///
    /// # Errors
    ///
    /// `Embedding` when the embedding call fails, `DimensionMismatch` when
    /// the service returns a vector of the wrong dimension.
    pub async fn classify(&self, text: &str) -> Result<Sentiment, SentimentError> {
        let vector = self
            .embedder
            .embed(text)
            .await
            .map_err(|e| SentimentError::Embedding(e.to_string()))?;

        if vector.len() != self.centroids.dimension() {
            return Err(SentimentError::DimensionMismatch {
                expected: self.centroids.dimension(),
                actual: vector.len(),
            });
        }

        Ok(self.centroids.nearest(&vector))
    }
}

fn label_index(label: Sentiment) -> usize {
    match label {
        Sentiment::Negative => 0,
        Sentiment::Neutral => 1,
        Sentiment::Positive => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plinth_llm::MockEmbedding;

    fn embedding(vector: Vec<f32>, label: Sentiment) -> LabeledEmbedding {
        LabeledEmbedding { vector, label }
    }

    #[test]
    fn test_centroids_are_element_wise_means() {
        let centroids = Centroids::from_embeddings(&[
            embedding(vec![1.0, 0.0], Sentiment::Negative),
            embedding(vec![3.0, 2.0], Sentiment::Negative),
            embedding(vec![0.0, 1.0], Sentiment::Neutral),
            embedding(vec![0.0, 5.0], Sentiment::Positive),
        ])
        .unwrap();

        assert_eq!(centroids.mean(Sentiment::Negative), &[2.0, 1.0]);
        assert_eq!(centroids.mean(Sentiment::Neutral), &[0.0, 1.0]);
        assert_eq!(centroids.mean(Sentiment::Positive), &[0.0, 5.0]);
    }

    #[test]
    fn test_missing_label_is_insufficient_data() {
        let result = Centroids::from_embeddings(&[
            embedding(vec![1.0, 0.0], Sentiment::Negative),
            embedding(vec![0.0, 1.0], Sentiment::Positive),
        ]);

        match result {
            Err(SentimentError::InsufficientData { label }) => {
                assert_eq!(label, Sentiment::Neutral);
            }
            _ => panic!("Expected InsufficientData"),
        }
    }

    #[test]
    fn test_empty_training_set_is_insufficient_data() {
        assert!(matches!(
            Centroids::from_embeddings(&[]),
            Err(SentimentError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_dimension_mismatch_in_training() {
        let result = Centroids::from_embeddings(&[
            embedding(vec![1.0, 0.0], Sentiment::Negative),
            embedding(vec![1.0], Sentiment::Neutral),
        ]);
        assert!(matches!(
            result,
            Err(SentimentError::DimensionMismatch { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_nearest_picks_closest_centroid() {
        let centroids = Centroids::from_embeddings(&[
            embedding(vec![1.0, 0.0, 0.0], Sentiment::Negative),
            embedding(vec![0.0, 1.0, 0.0], Sentiment::Neutral),
            embedding(vec![0.0, 0.0, 1.0], Sentiment::Positive),
        ])
        .unwrap();

        assert_eq!(centroids.nearest(&[0.9, 0.1, 0.0]), Sentiment::Negative);
        assert_eq!(centroids.nearest(&[0.1, 0.9, 0.1]), Sentiment::Neutral);
        assert_eq!(centroids.nearest(&[0.0, 0.2, 0.9]), Sentiment::Positive);
    }

    #[test]
    fn test_tie_breaks_by_label_precedence() {
        // Negative and positive centroids coincide; a query on that axis
        // ties and the earlier label in precedence order must win.
        let centroids = Centroids::from_embeddings(&[
            embedding(vec![1.0, 0.0], Sentiment::Negative),
            embedding(vec![0.0, 1.0], Sentiment::Neutral),
            embedding(vec![1.0, 0.0], Sentiment::Positive),
        ])
        .unwrap();

        assert_eq!(centroids.nearest(&[1.0, 0.0]), Sentiment::Negative);
    }

    #[tokio::test]
    async fn test_train_and_classify_with_fixed_embeddings() {
        let mut embedder = MockEmbedding::new(3);
        embedder.add_embedding("terrible service", vec![1.0, 0.0, 0.0]);
        embedder.add_embedding("it was okay", vec![0.0, 1.0, 0.0]);
        embedder.add_embedding("loved it", vec![0.0, 0.0, 1.0]);
        embedder.add_embedding("really terrible", vec![0.95, 0.05, 0.0]);

        let examples = vec![
            LabeledText::new("terrible service", Sentiment::Negative),
            LabeledText::new("it was okay", Sentiment::Neutral),
            LabeledText::new("loved it", Sentiment::Positive),
        ];

        let classifier = CentroidClassifier::train(embedder, &examples).await.unwrap();
        assert_eq!(
            classifier.classify("really terrible").await.unwrap(),
            Sentiment::Negative
        );
    }

    #[tokio::test]
    async fn test_classify_is_deterministic() {
        let examples = vec![
            LabeledText::new("bad", Sentiment::Negative),
            LabeledText::new("meh", Sentiment::Neutral),
            LabeledText::new("good", Sentiment::Positive),
        ];
        let classifier = CentroidClassifier::train(MockEmbedding::new(16), &examples)
            .await
            .unwrap();

        let first = classifier.classify("some new text").await.unwrap();
        let second = classifier.classify("some new text").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_train_missing_label_fails() {
        let examples = vec![
            LabeledText::new("bad", Sentiment::Negative),
            LabeledText::new("good", Sentiment::Positive),
        ];
        let result = CentroidClassifier::train(MockEmbedding::new(16), &examples).await;
        assert!(matches!(
            result,
            Err(SentimentError::InsufficientData {
                label: Sentiment::Neutral
            })
        ));
    }
}
