use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::content_store::application::ports::outgoing::{
    DocumentHeader, DocumentQuery, DocumentRepository, DocumentRepositoryError,
};
use crate::modules::maintenance::application::domain::{
    is_confirmed, DeletionReport, SkipReason, SkippedDocument, REFERENCE_SAMPLE_LIMIT,
};
use crate::modules::maintenance::application::ports::incoming::use_cases::{
    DeleteDocumentsError, DeleteDocumentsUseCase, DeletionOutcome,
};
use crate::modules::maintenance::application::ports::outgoing::ConfirmationPrompt;

/// Deletes candidates one at a time, in order. A candidate that is still
/// referenced is skipped with a short sample of who references it.
#[derive(Clone)]
pub struct ReferenceSafeDeletionService {
    repository: Arc<dyn DocumentRepository>,
    query: Arc<dyn DocumentQuery>,
    prompt: Arc<dyn ConfirmationPrompt>,
}

impl fmt::Debug for ReferenceSafeDeletionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceSafeDeletionService")
            .field("repository", &"<dyn DocumentRepository>")
            .field("query", &"<dyn DocumentQuery>")
            .field("prompt", &"<dyn ConfirmationPrompt>")
            .finish()
    }
}

impl ReferenceSafeDeletionService {
    pub fn new(
        repository: Arc<dyn DocumentRepository>,
        query: Arc<dyn DocumentQuery>,
        prompt: Arc<dyn ConfirmationPrompt>,
    ) -> Self {
        Self {
            repository,
            query,
            prompt,
        }
    }

    async fn delete_one(&self, candidate: &DocumentHeader) -> Result<(), SkipReason> {
        match self.repository.delete(&candidate.id).await {
            Ok(()) => Ok(()),
            Err(DocumentRepositoryError::HasReferences { referencing_ids }) => {
                warn!(
                    document_id = %candidate.id,
                    references = referencing_ids.len(),
                    "Document is still referenced"
                );

                let sample_ids: Vec<String> = referencing_ids
                    .iter()
                    .take(REFERENCE_SAMPLE_LIMIT)
                    .cloned()
                    .collect();

                let sample = match self.query.find_summaries(&sample_ids).await {
                    Ok(summaries) => Some(summaries),
                    Err(e) => {
                        warn!(
                            document_id = %candidate.id,
                            error = %e,
                            "Could not fetch reference details"
                        );
                        None
                    }
                };

                Err(SkipReason::HasReferences {
                    referencing_ids,
                    sample,
                })
            }
            Err(other) => {
                warn!(document_id = %candidate.id, error = %other, "Delete failed");
                Err(SkipReason::Failed(other.to_string()))
            }
        }
    }
}

#[async_trait]
impl DeleteDocumentsUseCase for ReferenceSafeDeletionService {
    async fn execute(
        &self,
        candidates: Vec<DocumentHeader>,
    ) -> Result<DeletionOutcome, DeleteDocumentsError> {
        if candidates.is_empty() {
            return Ok(DeletionOutcome::Completed(DeletionReport::default()));
        }

        let answer = self
            .prompt
            .ask(&candidates)
            .await
            .map_err(|e| DeleteDocumentsError::PromptFailed(e.to_string()))?;

        if !is_confirmed(&answer) {
            info!("Deletion cancelled by operator");
            return Ok(DeletionOutcome::Cancelled);
        }

        let total = candidates.len();
        let mut report = DeletionReport::default();

        for (index, candidate) in candidates.into_iter().enumerate() {
            info!(
                document_id = %candidate.id,
                "Processing {}/{}",
                index + 1,
                total
            );

            match self.delete_one(&candidate).await {
                Ok(()) => report.deleted.push(candidate.id),
                Err(reason) => report.skipped.push(SkippedDocument {
                    id: candidate.id,
                    reason,
                }),
            }
        }

        info!(
            deleted = report.deleted_count(),
            skipped = report.skipped_count(),
            "Deletion finished"
        );
        Ok(DeletionOutcome::Completed(report))
    }
}
