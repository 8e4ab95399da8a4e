use crate::modules::maintenance::application::domain::candidate_lines;
use crate::modules::maintenance::application::ports::incoming::use_cases::FindOrphansUseCase;
use crate::shared::cli::CommandReport;

pub async fn run(use_case: &dyn FindOrphansUseCase) -> CommandReport {
    match use_case.execute().await {
        Ok(orphans) if orphans.is_empty() => {
            let mut report = CommandReport::success();
            report.push("No invalid documents found!");
            report
        }
        Ok(orphans) => {
            let mut report = CommandReport::success();
            for line in candidate_lines(&orphans) {
                report.push(line);
            }
            report
        }
        Err(e) => CommandReport::error("QUERY_FAILED", &e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content_store::application::ports::outgoing::DocumentHeader;
    use crate::modules::maintenance::application::ports::incoming::use_cases::FindOrphansError;
    use async_trait::async_trait;

    struct StubFindOrphans(Result<Vec<DocumentHeader>, FindOrphansError>);

    #[async_trait]
    impl FindOrphansUseCase for StubFindOrphans {
        async fn execute(&self) -> Result<Vec<DocumentHeader>, FindOrphansError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn lists_each_orphan_with_its_type() {
        let stub = StubFindOrphans(Ok(vec![
            DocumentHeader::new("old-1", "experience"),
            DocumentHeader::new("old-2", "technology"),
        ]));

        let report = run(&stub).await;

        assert!(report.success);
        assert_eq!(
            report.lines,
            vec![
                "Found 2 documents with invalid types:",
                "- old-1 (type: experience)",
                "- old-2 (type: technology)",
            ]
        );
    }

    #[tokio::test]
    async fn empty_result_says_so() {
        let report = run(&StubFindOrphans(Ok(vec![]))).await;
        assert_eq!(report.text(), "No invalid documents found!");
    }

    #[tokio::test]
    async fn query_failure_fails_the_command() {
        let report = run(&StubFindOrphans(Err(FindOrphansError::QueryFailed(
            "HTTP 401".into(),
        ))))
        .await;
        assert!(!report.success);
        assert!(report.text().starts_with("error[QUERY_FAILED]"));
    }
}
