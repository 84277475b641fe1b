//! Summarize command: whole-corpus summary.

use crate::cli::SummarizeArgs;
use crate::config::Config;
use crate::error::Result;
use plinth_index::{load_documents, DocumentIndex, QueryEngine, RetrievalMode};
use plinth_llm::OllamaClient;

const SUMMARY_QUERY: &str = "\
Summarize the given context.
Return the key points, do not miss anything important.";

/// Ingest a directory and summarize everything in it.
pub async fn execute_summarize(args: SummarizeArgs, config: &Config) -> Result<()> {
    let client = OllamaClient::new(config.ollama.clone())?;

    println!("parsing...");
    let documents = load_documents(&args.data)?;

    println!("indexing...");
    let index = DocumentIndex::build(client.clone(), documents).await?;
    let engine = QueryEngine::new(index, client);

    println!("querying...");
    let response = engine
        .query_with_mode(SUMMARY_QUERY, RetrievalMode::Summary)
        .await?;

    println!("======================");
    println!("{}", response);
    println!("======================");

    Ok(())
}
