use async_trait::async_trait;
use tracing::info;

use crate::modules::content_store::application::ports::outgoing::DocumentHeader;
use crate::modules::maintenance::application::domain::candidate_lines;
use crate::modules::maintenance::application::ports::outgoing::{
    ConfirmationPrompt, ConfirmationPromptError,
};

/// Pre-answered gate used with `--yes`. Still prints what will be deleted.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

#[async_trait]
impl ConfirmationPrompt for AutoConfirm {
    async fn ask(&self, candidates: &[DocumentHeader]) -> Result<String, ConfirmationPromptError> {
        for line in candidate_lines(candidates) {
            println!("{line}");
        }
        info!(candidates = candidates.len(), "Deletion confirmed by --yes");
        Ok("y".to_string())
    }
}
