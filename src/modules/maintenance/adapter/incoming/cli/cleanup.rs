use crate::modules::maintenance::application::domain::{DeletionReport, SkipReason};
use crate::modules::maintenance::application::ports::incoming::use_cases::{
    CleanupOrphansError, CleanupOrphansUseCase, CleanupOutcome,
};
use crate::shared::cli::CommandReport;

pub async fn run(use_case: &dyn CleanupOrphansUseCase) -> CommandReport {
    match use_case.execute().await {
        Ok(CleanupOutcome::NothingToClean) => {
            let mut report = CommandReport::success();
            report.push("No invalid documents found!");
            report
        }
        Ok(CleanupOutcome::Cancelled { .. }) => {
            let mut report = CommandReport::success();
            report.push("Deletion cancelled.");
            report
        }
        Ok(CleanupOutcome::Completed { report, .. }) => summary(&report),
        Err(CleanupOrphansError::QueryFailed(msg)) => CommandReport::error("QUERY_FAILED", &msg),
        Err(CleanupOrphansError::PromptFailed(msg)) => {
            CommandReport::error("CONFIRMATION_FAILED", &msg)
        }
    }
}

fn summary(deletion: &DeletionReport) -> CommandReport {
    let mut report = CommandReport::success();
    report.push("=== Cleanup Summary ===");
    report.push(format!(
        "Successfully deleted: {} documents",
        deletion.deleted_count()
    ));
    report.push(format!("Skipped: {} documents", deletion.skipped_count()));

    if deletion.skipped.is_empty() {
        return report;
    }

    report.blank();
    report.push("Skipped documents:");
    for skipped in &deletion.skipped {
        report.push(format!("- {}: {}", skipped.id, skipped.reason));
        if let SkipReason::HasReferences {
            referencing_ids,
            sample,
        } = &skipped.reason
        {
            report.push(format!(
                "    referenced by {} document(s)",
                referencing_ids.len()
            ));
            for summary in sample.iter().flatten() {
                report.push(format!(
                    "    {}({}) {}",
                    summary.doc_type,
                    short_id(&summary.id),
                    summary.label()
                ));
            }
        }
    }

    if deletion.has_reference_skips() {
        report.blank();
        report.push(
            "Tip: Documents with references cannot be deleted until the references are removed.",
        );
        report.push(
            "Consider updating the referencing documents first, or check if these are actually valid documents.",
        );
    }
    report
}

fn short_id(id: &str) -> String {
    if id.chars().count() > 8 {
        format!("{}...", id.chars().take(8).collect::<String>())
    } else {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content_store::application::ports::outgoing::{
        DocumentHeader, DocumentSummary,
    };
    use crate::modules::maintenance::application::domain::SkippedDocument;
    use async_trait::async_trait;

    struct StubCleanup(Result<CleanupOutcome, CleanupOrphansError>);

    #[async_trait]
    impl CleanupOrphansUseCase for StubCleanup {
        async fn execute(&self) -> Result<CleanupOutcome, CleanupOrphansError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn summary_lists_skips_and_tip() {
        let deletion = DeletionReport {
            deleted: vec!["old-1".into(), "old-3".into()],
            skipped: vec![
                SkippedDocument {
                    id: "old-2".into(),
                    reason: SkipReason::HasReferences {
                        referencing_ids: vec!["0f4c2a9b-55aa".into()],
                        sample: Some(vec![DocumentSummary {
                            id: "0f4c2a9b-55aa".into(),
                            doc_type: "post".into(),
                            title: Some("Hello Rust".into()),
                            name: None,
                        }]),
                    },
                },
                SkippedDocument {
                    id: "old-4".into(),
                    reason: SkipReason::Failed("Store unreachable: timeout".into()),
                },
            ],
        };
        let stub = StubCleanup(Ok(CleanupOutcome::Completed {
            orphans: vec![DocumentHeader::new("old-1", "experience")],
            report: deletion,
        }));

        let report = run(&stub).await;
        let text = report.text();

        assert!(report.success);
        assert!(text.contains("Successfully deleted: 2 documents"));
        assert!(text.contains("Skipped: 2 documents"));
        assert!(text.contains("- old-2: Has references"));
        assert!(text.contains("post(0f4c2a9b...) Hello Rust"));
        assert!(text.contains("- old-4: Store unreachable: timeout"));
        assert!(text.contains("Tip: Documents with references"));
    }

    #[tokio::test]
    async fn clean_run_has_no_tip() {
        let stub = StubCleanup(Ok(CleanupOutcome::Completed {
            orphans: vec![DocumentHeader::new("old-1", "experience")],
            report: DeletionReport {
                deleted: vec!["old-1".into()],
                skipped: vec![],
            },
        }));

        let text = run(&stub).await.text();
        assert!(!text.contains("Tip:"));
        assert!(!text.contains("Skipped documents:"));
    }

    #[tokio::test]
    async fn cancellation_and_errors() {
        let cancelled = run(&StubCleanup(Ok(CleanupOutcome::Cancelled { orphans: vec![] }))).await;
        assert_eq!(cancelled.text(), "Deletion cancelled.");
        assert!(cancelled.success);

        let failed = run(&StubCleanup(Err(CleanupOrphansError::PromptFailed(
            "stdin closed".into(),
        ))))
        .await;
        assert!(!failed.success);
        assert_eq!(failed.text(), "error[CONFIRMATION_FAILED]: stdin closed");
    }
}
