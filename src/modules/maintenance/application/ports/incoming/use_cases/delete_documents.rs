use async_trait::async_trait;

use crate::modules::content_store::application::ports::outgoing::DocumentHeader;
use crate::modules::maintenance::application::domain::DeletionReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// The operator did not confirm. Nothing was deleted.
    Cancelled,
    Completed(DeletionReport),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteDocumentsError {
    #[error("Confirmation failed: {0}")]
    PromptFailed(String),
}

/// Deletes each candidate in order after confirmation. Individual failures
/// are recorded in the report, never returned as an error.
#[async_trait]
pub trait DeleteDocumentsUseCase: Send + Sync {
    async fn execute(
        &self,
        candidates: Vec<DocumentHeader>,
    ) -> Result<DeletionOutcome, DeleteDocumentsError>;
}
