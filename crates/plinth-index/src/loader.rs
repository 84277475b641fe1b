//! Document ingestion from a filesystem directory

use crate::error::IndexError;
use plinth_domain::Document;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Load every readable file in a directory as one document each
///
/// Only the top level of the directory is scanned; subdirectories are
/// skipped. Files that are not valid UTF-8 or cannot be read are skipped
/// with a warning rather than failing the run. Entries come back sorted by
/// file name so ingestion order is stable.
///
/// # Errors
///
/// Returns `IndexError::Io` if the directory itself cannot be listed.
pub fn load_documents(dir: impl AsRef<Path>) -> Result<Vec<Document>, IndexError> {
    let dir = dir.as_ref();
    let mut documents = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path().display().to_string();
        match fs::read_to_string(entry.path()) {
            Ok(text) if text.trim().is_empty() => {
                debug!("Skipping empty file: {}", path);
            }
            Ok(text) => {
                documents.push(Document::new(text, path));
            }
            Err(e) => {
                warn!("Skipping unreadable file {}: {}", path, e);
            }
        }
    }

    debug!("Loaded {} documents from {}", documents.len(), dir.display());
    Ok(documents)
}
