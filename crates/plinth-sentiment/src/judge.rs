//! LLM judge: classification by direct completion
//!
//! The evaluation variant of the classifier. Instead of embedding
//! geometry, the completion service is asked for exactly one of four
//! literal tokens; anything it returns beyond the three labels is
//! `unknown` and scores as a miss.

use crate::error::SentimentError;
use plinth_domain::Sentiment;
use plinth_llm::CompletionProvider;

const TEXT_RULE: &str = "----------------------";

/// What the judge said about a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgeVerdict {
    /// One of the three sentiment labels
    Label(Sentiment),

    /// The model declined or answered off-script; always a miss
    Unknown,
}

impl std::fmt::Display for JudgeVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JudgeVerdict::Label(label) => write!(f, "{}", label),
            JudgeVerdict::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classifies text with one constrained completion call per judgment
pub struct LlmJudge<C>
where
    C: CompletionProvider,
{
    completion: C,
}

impl<C> LlmJudge<C>
where
    C: CompletionProvider,
{
    /// Create a judge over a completion provider
    pub fn new(completion: C) -> Self {
        Self { completion }
    }

    /// Judge the sentiment of a piece of text
    ///
    /// # Errors
    ///
    /// `Completion` when the service call fails; off-script answers are
    /// not errors, they come back as [`JudgeVerdict::Unknown`].
    pub async fn judge(&self, text: &str) -> Result<JudgeVerdict, SentimentError> {
        let prompt = build_judge_prompt(text);

        let response = self
            .completion
            .complete(&prompt)
            .await
            .map_err(|e| SentimentError::Completion(e.to_string()))?;

        let token = response.trim().to_lowercase();
        Ok(match Sentiment::parse(&token) {
            Some(label) => JudgeVerdict::Label(label),
            None => JudgeVerdict::Unknown,
        })
    }
}

fn build_judge_prompt(text: &str) -> String {
    format!(
        "{rule}{text}{rule}\n\
         What sentiment `positive`, `neutral` or `negative` is the most accurate \
         for the text between `{rule}`?\n\
         Do not justify your answer.\n\
         If you don't know the answer, return `unknown`.\n\
         Your response MUST ONLY be one of the following `positive`, `neutral`, \
         `negative` or `unknown`.\n\
         No punctuation.",
        rule = TEXT_RULE,
        text = text,
    )
}
