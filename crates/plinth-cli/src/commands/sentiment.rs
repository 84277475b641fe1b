//! Sentiment command: centroid training/evaluation and the LLM judge.

use crate::cli::SentimentAction;
use crate::config::Config;
use crate::error::Result;
use plinth_llm::OllamaClient;
use plinth_sentiment::{
    evaluate_classifier, evaluate_judge, load_labeled_csv, CentroidClassifier, LabeledText,
    LlmJudge,
};

/// Run one of the sentiment evaluation modes.
pub async fn execute_sentiment(action: SentimentAction, config: &Config) -> Result<()> {
    let client = OllamaClient::new(config.ollama.clone())?;

    let report = match action {
        SentimentAction::TrainEval { train, test } => {
            let train_rows = load_labeled_csv(&train)?;
            let examples: Vec<LabeledText> =
                train_rows.iter().map(|r| r.as_labeled_text()).collect();

            println!("training on {} examples...", examples.len());
            let classifier = CentroidClassifier::train(client, &examples).await?;

            let test_rows = load_labeled_csv(&test)?;
            println!("evaluating {} rows...", test_rows.len());
            evaluate_classifier(&classifier, &test_rows).await?
        }
        SentimentAction::LlmEval { test } => {
            let judge = LlmJudge::new(client);

            let test_rows = load_labeled_csv(&test)?;
            println!("evaluating {} rows...", test_rows.len());
            evaluate_judge(&judge, &test_rows).await?
        }
    };

    println!(
        "error rate: {:.1}% ({} misses / {} rows)",
        report.error_rate(),
        report.misses,
        report.total
    );

    Ok(())
}
