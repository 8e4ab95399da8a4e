use async_trait::async_trait;

use crate::modules::content_store::application::ports::outgoing::DocumentHeader;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FindOrphansError {
    #[error("Failed to list documents: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait FindOrphansUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<DocumentHeader>, FindOrphansError>;
}
