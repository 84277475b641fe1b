//! Configuration management for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use plinth_llm::OllamaConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI configuration.
///
/// Loaded from `~/.plinth/config.toml` when present, then overridden by
/// command-line flags. There is no ambient global state: the resulting
/// [`OllamaConfig`] is passed explicitly to every client constructor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Completion/embedding service settings
    #[serde(default)]
    pub ollama: OllamaConfig,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".plinth").join("config.toml"))
    }

    /// Load configuration from an explicit path, the default path, or fall
    /// back to defaults when no file exists.
    pub fn load(path_override: Option<&str>) -> Result<Self> {
        let path = match path_override {
            Some(p) => PathBuf::from(p),
            None => Self::path()?,
        };

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else if path_override.is_some() {
            Err(CliError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )))
        } else {
            Ok(Self::default())
        }
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(endpoint) = &cli.endpoint {
            self.ollama.endpoint = endpoint.clone();
        }
        if let Some(model) = &cli.model {
            self.ollama.completion_model = model.clone();
        }
        if let Some(embedding_model) = &cli.embedding_model {
            self.ollama.embedding_model = embedding_model.clone();
        }
    }
}
