//! Query command: one grounded question over a corpus.

use crate::cli::QueryArgs;
use crate::config::Config;
use crate::error::Result;
use plinth_index::{load_documents, DocumentIndex, QueryEngine, RetrievalMode};
use plinth_llm::OllamaClient;

/// Ingest a directory, retrieve similar context, answer one question.
pub async fn execute_query(args: QueryArgs, config: &Config) -> Result<()> {
    let client = OllamaClient::new(config.ollama.clone())?;

    println!("parsing...");
    let documents = load_documents(&args.data)?;

    println!("indexing...");
    let index = DocumentIndex::build(client.clone(), documents).await?;
    let engine = QueryEngine::new(index, client);

    println!(">>> {}", args.question);
    println!("querying...");
    let response = engine
        .query_with_mode(
            &args.question,
            RetrievalMode::Similarity { top_k: args.top_k },
        )
        .await?;

    println!("======================");
    println!("{}", response);
    println!("======================");

    Ok(())
}
