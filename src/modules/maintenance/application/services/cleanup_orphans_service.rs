use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::maintenance::application::ports::incoming::use_cases::{
    CleanupOrphansError, CleanupOrphansUseCase, CleanupOutcome, DeleteDocumentsError,
    DeleteDocumentsUseCase, DeletionOutcome, FindOrphansError, FindOrphansUseCase,
};

/// Finds orphaned documents and hands them to the deletion workflow.
#[derive(Clone)]
pub struct CleanupOrphansService {
    find_orphans: Arc<dyn FindOrphansUseCase>,
    delete_documents: Arc<dyn DeleteDocumentsUseCase>,
}

impl fmt::Debug for CleanupOrphansService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleanupOrphansService").finish_non_exhaustive()
    }
}

impl CleanupOrphansService {
    pub fn new(
        find_orphans: Arc<dyn FindOrphansUseCase>,
        delete_documents: Arc<dyn DeleteDocumentsUseCase>,
    ) -> Self {
        Self {
            find_orphans,
            delete_documents,
        }
    }
}

#[async_trait]
impl CleanupOrphansUseCase for CleanupOrphansService {
    async fn execute(&self) -> Result<CleanupOutcome, CleanupOrphansError> {
        let orphans = self.find_orphans.execute().await.map_err(|e| match e {
            FindOrphansError::QueryFailed(msg) => CleanupOrphansError::QueryFailed(msg),
        })?;

        if orphans.is_empty() {
            return Ok(CleanupOutcome::NothingToClean);
        }

        let outcome = self
            .delete_documents
            .execute(orphans.clone())
            .await
            .map_err(|e| match e {
                DeleteDocumentsError::PromptFailed(msg) => CleanupOrphansError::PromptFailed(msg),
            })?;

        Ok(match outcome {
            DeletionOutcome::Cancelled => CleanupOutcome::Cancelled { orphans },
            DeletionOutcome::Completed(report) => CleanupOutcome::Completed { orphans, report },
        })
    }
}
