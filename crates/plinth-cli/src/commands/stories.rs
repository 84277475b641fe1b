//! Stories command: find conflicting user stories.

use crate::cli::StoriesArgs;
use crate::config::Config;
use crate::error::Result;
use plinth_llm::{CompletionProvider, OllamaClient};
use std::fs;

const DEFAULT_STORIES: [&str; 5] = [
    "As a user, I should be able to create an account with my gmail.",
    "As a user, I should be able to create an account with my phone number.",
    "As a user, I want an option to stay logged in, so that I don't have to enter my credentials every time.",
    "As a user, I want to be able to reset my password if I forget it, so that I can regain access to my account.",
    "As a user, I want to see an error message if I enter incorrect login details, so that I know when my login attempt has failed.",
];

/// Ask the model to point out conflicting user stories.
///
/// Stories come from the given file (one per line) or a built-in sample
/// list. This is the one command that justifies its answer in prose rather
/// than structured output.
pub async fn execute_stories(args: StoriesArgs, config: &Config) -> Result<()> {
    let stories: Vec<String> = match args.file {
        Some(path) => fs::read_to_string(path)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
        None => DEFAULT_STORIES.iter().map(|s| s.to_string()).collect(),
    };

    println!("## User Stories");
    for story in &stories {
        println!("* {}", story);
    }

    let query = "Find conflicting user stories.";
    println!("\n>>> {}", query);

    let bulleted: Vec<String> = stories.iter().map(|s| format!("* {}", s)).collect();
    let prompt = format!(
        "## User Stories\n\n\
         {stories}\n\n\
         -----------\n\
         {query}\n\
         Justify your answer, and give the conflicting user stories.\n\
         If you don't know the answer, say that you don't know.\n\
         Please always use the provided stories to answer.\n\
         Do not rely on prior knowledge.",
        stories = bulleted.join("\n"),
        query = query,
    );

    let client = OllamaClient::new(config.ollama.clone())?;
    let response = client.complete(&prompt).await?;

    println!("======================");
    println!("{}", response);
    println!("======================");

    Ok(())
}
