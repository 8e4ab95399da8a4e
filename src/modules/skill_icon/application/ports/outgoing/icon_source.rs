use std::path::Path;

use async_trait::async_trait;

/// One `*.svg` file found in an icon directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconEntry {
    Loaded { file_name: String, content: String },
    Unreadable { file_name: String, reason: String },
}

impl IconEntry {
    pub fn file_name(&self) -> &str {
        match self {
            IconEntry::Loaded { file_name, .. } | IconEntry::Unreadable { file_name, .. } => {
                file_name
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IconSourceError {
    #[error("Cannot read icon directory {path}: {reason}")]
    DirectoryUnreadable { path: String, reason: String },
}

#[async_trait]
pub trait IconSource: Send + Sync {
    /// SVG files of `dir` sorted by file name.
    async fn list_icons(&self, dir: &Path) -> Result<Vec<IconEntry>, IconSourceError>;
}
