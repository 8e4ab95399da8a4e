use async_trait::async_trait;

use crate::modules::content_store::application::ports::outgoing::DocumentHeader;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfirmationPromptError {
    #[error("Failed to read confirmation: {0}")]
    Io(String),
}

/// Operator gate in front of a destructive batch. Returns the raw answer;
/// interpreting it is up to the caller.
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    async fn ask(&self, candidates: &[DocumentHeader]) -> Result<String, ConfirmationPromptError>;
}
