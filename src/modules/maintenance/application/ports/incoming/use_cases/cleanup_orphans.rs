use async_trait::async_trait;

use crate::modules::content_store::application::ports::outgoing::DocumentHeader;
use crate::modules::maintenance::application::domain::DeletionReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    NothingToClean,
    Cancelled {
        orphans: Vec<DocumentHeader>,
    },
    Completed {
        orphans: Vec<DocumentHeader>,
        report: DeletionReport,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CleanupOrphansError {
    #[error("Failed to list documents: {0}")]
    QueryFailed(String),

    #[error("Confirmation failed: {0}")]
    PromptFailed(String),
}

#[async_trait]
pub trait CleanupOrphansUseCase: Send + Sync {
    async fn execute(&self) -> Result<CleanupOutcome, CleanupOrphansError>;
}
