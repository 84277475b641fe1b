//! Extract command: structured candidate data from a resume corpus.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use plinth_extractor::resume::{extract_full_name, extract_professional_experiences};
use plinth_extractor::StructuredExtractor;
use plinth_index::{load_documents, DocumentIndex, QueryEngine};
use plinth_llm::OllamaClient;
use tracing::warn;

/// Ingest a directory, run the resume extractions, print the aggregate.
///
/// A field whose extraction fails (unparseable answer or a failed service
/// call) is printed as `null`; the run continues with the remaining fields.
pub async fn execute_extract(args: ExtractArgs, config: &Config) -> Result<()> {
    let client = OllamaClient::new(config.ollama.clone())?;

    println!("parsing...");
    let documents = load_documents(&args.data)?;

    println!("indexing...");
    let index = DocumentIndex::build(client.clone(), documents).await?;
    let extractor = StructuredExtractor::new(QueryEngine::new(index, client));

    println!("querying...");

    let professional_experiences = match extract_professional_experiences(&extractor).await {
        Ok(experiences) => experiences,
        Err(e) => {
            warn!("Professional experiences extraction failed: {}", e);
            None
        }
    };

    let full_name = match extract_full_name(&extractor).await {
        Ok(name) => name,
        Err(e) => {
            warn!("Full name extraction failed: {}", e);
            None
        }
    };

    let output = serde_json::json!({
        "professionalExperiences": professional_experiences,
        "fullName": full_name,
    });

    println!("======================");
    println!("{}", serde_json::to_string_pretty(&output)?);
    println!("======================");

    Ok(())
}
