//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Plinth CLI - ground LLM answers in your own documents.
#[derive(Debug, Parser)]
#[command(name = "plinth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Service endpoint (e.g., http://localhost:11434)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Completion model
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Embedding model
    #[arg(long, global = true)]
    pub embedding_model: Option<String>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract structured candidate data from a resume corpus
    Extract(ExtractArgs),

    /// Ask a grounded question over a document corpus
    Query(QueryArgs),

    /// Summarize a document corpus
    Summarize(SummarizeArgs),

    /// Train and evaluate sentiment classification
    Sentiment(SentimentArgs),

    /// Find conflicting user stories
    Stories(StoriesArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Directory of documents to ingest
    #[arg(short, long)]
    pub data: PathBuf,
}

/// Arguments for the query command.
#[derive(Debug, Parser)]
pub struct QueryArgs {
    /// The question to answer from the corpus
    pub question: String,

    /// Directory of documents to ingest
    #[arg(short, long)]
    pub data: PathBuf,

    /// Number of documents to retrieve as context
    #[arg(long, default_value = "2")]
    pub top_k: usize,
}

/// Arguments for the summarize command.
#[derive(Debug, Parser)]
pub struct SummarizeArgs {
    /// Directory of documents to ingest
    #[arg(short, long)]
    pub data: PathBuf,
}

/// Arguments for sentiment classification.
#[derive(Debug, Parser)]
pub struct SentimentArgs {
    #[command(subcommand)]
    pub action: SentimentAction,
}

/// Sentiment subcommands.
#[derive(Debug, Subcommand)]
pub enum SentimentAction {
    /// Train centroids on a labeled CSV and score them against a test CSV
    TrainEval {
        /// Training data (columns textID, text, sentiment)
        #[arg(long)]
        train: PathBuf,

        /// Test data (same columns)
        #[arg(long)]
        test: PathBuf,
    },

    /// Score the LLM judge against a test CSV
    LlmEval {
        /// Test data (columns textID, text, sentiment)
        #[arg(long)]
        test: PathBuf,
    },
}

/// Arguments for the stories command.
#[derive(Debug, Parser)]
pub struct StoriesArgs {
    /// File with one user story per line; a built-in sample is used when
    /// omitted
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_command_parsing() {
        let cli = Cli::parse_from(["plinth", "query", "Who is the candidate?", "--data", "docs"]);
        match cli.command {
            Command::Query(args) => {
                assert_eq!(args.question, "Who is the candidate?");
                assert_eq!(args.top_k, 2);
            }
            _ => panic!("Expected Query command"),
        }
    }

    #[test]
    fn test_extract_command_parsing() {
        let cli = Cli::parse_from(["plinth", "extract", "--data", "resumes"]);
        assert!(matches!(cli.command, Command::Extract(_)));
    }

    #[test]
    fn test_sentiment_train_eval_parsing() {
        let cli = Cli::parse_from([
            "plinth",
            "sentiment",
            "train-eval",
            "--train",
            "train.csv",
            "--test",
            "test.csv",
        ]);
        match cli.command {
            Command::Sentiment(args) => {
                assert!(matches!(args.action, SentimentAction::TrainEval { .. }));
            }
            _ => panic!("Expected Sentiment command"),
        }
    }

    #[test]
    fn test_global_model_override() {
        let cli = Cli::parse_from(["plinth", "--model", "mistral", "summarize", "--data", "docs"]);
        assert_eq!(cli.model.as_deref(), Some("mistral"));
    }
}
