use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::modules::skill_icon::application::ports::outgoing::{
    IconEntry, IconSource, IconSourceError,
};

/// Reads `*.svg` files from a local directory. Subdirectories are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsIconSource;

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

#[async_trait]
impl IconSource for FsIconSource {
    async fn list_icons(&self, dir: &Path) -> Result<Vec<IconEntry>, IconSourceError> {
        let unreadable = |e: std::io::Error| IconSourceError::DirectoryUnreadable {
            path: dir.display().to_string(),
            reason: e.to_string(),
        };

        let mut read_dir = tokio::fs::read_dir(dir).await.map_err(unreadable)?;
        let mut paths = Vec::new();
        while let Some(entry) = read_dir.next_entry().await.map_err(unreadable)? {
            let path = entry.path();
            if is_svg(&path) && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut icons = Vec::with_capacity(paths.len());
        for path in paths {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            let entry = match tokio::fs::read_to_string(&path).await {
                Ok(content) => IconEntry::Loaded { file_name, content },
                Err(e) => IconEntry::Unreadable {
                    file_name,
                    reason: e.to_string(),
                },
            };
            icons.push(entry);
        }

        debug!(dir = %dir.display(), count = icons.len(), "Listed icon files");
        Ok(icons)
    }
}
