//! Accuracy scoring over a labeled test set
//!
//! Evaluation walks the test rows strictly sequentially and logs each miss
//! with the running error rate, matching the judge and the classifier
//! against the same report shape.

use crate::centroid::CentroidClassifier;
use crate::dataset::SentimentRecord;
use crate::error::SentimentError;
use crate::judge::{JudgeVerdict, LlmJudge};
use plinth_llm::{CompletionProvider, EmbeddingProvider};
use tracing::info;

/// Outcome of one evaluation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalReport {
    /// Rows evaluated
    pub total: usize,

    /// Rows where the prediction did not match the ground truth
    pub misses: usize,
}

impl EvalReport {
    /// Error rate as a percentage in [0, 100]
    pub fn error_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.misses as f64 / self.total as f64) * 100.0
    }
}

/// Score the LLM judge against labeled rows
///
/// `unknown` verdicts count as misses against any ground truth.
///
/// # Errors
///
/// Propagates the first completion failure; evaluation has no per-row
/// degradation.
pub async fn evaluate_judge<C>(
    judge: &LlmJudge<C>,
    rows: &[SentimentRecord],
) -> Result<EvalReport, SentimentError>
where
    C: CompletionProvider,
{
    let mut misses = 0usize;

    for row in rows {
        let verdict = judge.judge(&row.text).await?;
        let hit = matches!(verdict, JudgeVerdict::Label(label) if label == row.label);

        if !hit {
            misses += 1;
            info!(
                "{}: expected {}, given {} --- error rate: {:.1}%",
                row.text_id,
                row.label,
                verdict,
                (misses as f64 / rows.len() as f64) * 100.0
            );
        }
    }

    Ok(EvalReport {
        total: rows.len(),
        misses,
    })
}

/// Score the centroid classifier against labeled rows
///
/// # Errors
///
/// Propagates the first embedding failure.
pub async fn evaluate_classifier<E>(
    classifier: &CentroidClassifier<E>,
    rows: &[SentimentRecord],
) -> Result<EvalReport, SentimentError>
where
    E: EmbeddingProvider,
{
    let mut misses = 0usize;

    for row in rows {
        let predicted = classifier.classify(&row.text).await?;

        if predicted != row.label {
            misses += 1;
            info!(
                "{}: expected {}, given {} --- error rate: {:.1}%",
                row.text_id,
                row.label,
                predicted,
                (misses as f64 / rows.len() as f64) * 100.0
            );
        }
    }

    Ok(EvalReport {
        total: rows.len(),
        misses,
    })
}
