//! Plinth CLI - document-grounded extraction and sentiment pipelines.

use clap::Parser;
use plinth_cli::commands;
use plinth_cli::{Cli, Command, Config};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> plinth_cli::Result<()> {
    let started = Instant::now();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config and apply flag overrides
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(&cli);

    match cli.command {
        Command::Extract(args) => commands::execute_extract(args, &config).await?,
        Command::Query(args) => commands::execute_query(args, &config).await?,
        Command::Summarize(args) => commands::execute_summarize(args, &config).await?,
        Command::Sentiment(args) => commands::execute_sentiment(args.action, &config).await?,
        Command::Stories(args) => commands::execute_stories(args, &config).await?,
    }

    println!("processing duration: {:.2?}", started.elapsed());

    Ok(())
}
