// src/shared/cli/json_input.rs
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum JsonInputError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

pub async fn read_json_file(path: &Path) -> Result<Value, JsonInputError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| JsonInputError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&raw).map_err(|source| JsonInputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Pretty-prints `value` to `path`, creating missing parent directories.
pub async fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), JsonInputError> {
    let body = serde_json::to_string_pretty(value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| JsonInputError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    tokio::fs::write(path, body)
        .await
        .map_err(|source| JsonInputError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// A file holds either one document or an array of documents.
pub fn split_documents(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        single => vec![single],
    }
}
