use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::modules::schema::application::domain::entities::SchemaDocument;
use crate::modules::schema::application::domain::preview::{
    document_preview, entry_previews, PreviewContext,
};
use crate::modules::schema::application::domain::validation::ValidationErrors;
use crate::modules::schema::application::helpers::ReferenceResolver;
use crate::modules::schema::application::ports::incoming::use_cases::{
    DocumentValidation, ValidateDocumentsCommand, ValidateDocumentsUseCase, ValidationOutcome,
};

#[derive(Debug, Clone, Default)]
pub struct ValidateDocumentsService {
    resolver: Option<ReferenceResolver>,
}

impl ValidateDocumentsService {
    /// Field checks only.
    pub fn new() -> Self {
        Self { resolver: None }
    }

    /// Field checks plus reference lookups when a command asks for them.
    pub fn with_resolver(resolver: ReferenceResolver) -> Self {
        Self {
            resolver: Some(resolver),
        }
    }

    async fn check(&self, document: &SchemaDocument, check_references: bool) -> ValidationOutcome {
        let mut violations = document.validate().err().map(|e| e.0).unwrap_or_default();

        if check_references {
            let Some(resolver) = &self.resolver else {
                return ValidationOutcome::LookupFailed {
                    violations,
                    reason: "reference checks are not configured".to_string(),
                };
            };
            match resolver.check(document).await {
                Ok(broken) => violations.extend(broken),
                Err(e) => {
                    return ValidationOutcome::LookupFailed {
                        violations,
                        reason: e.to_string(),
                    }
                }
            }
        }

        if violations.is_empty() {
            ValidationOutcome::Passed
        } else {
            ValidationOutcome::Failed(ValidationErrors(violations))
        }
    }
}

fn label_of(payload: &Value, index: usize) -> String {
    payload
        .get("_id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", index + 1))
}

#[async_trait]
impl ValidateDocumentsUseCase for ValidateDocumentsService {
    async fn execute(&self, command: ValidateDocumentsCommand) -> Vec<DocumentValidation> {
        let check_references = command.check_references();

        let parsed: Vec<_> = command
            .into_documents()
            .into_iter()
            .enumerate()
            .map(|(index, payload)| {
                let label = label_of(&payload, index);
                let doc_type = payload
                    .get("_type")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                (label, doc_type, SchemaDocument::from_value(payload))
            })
            .collect();

        let context = PreviewContext::new(
            parsed
                .iter()
                .filter_map(|(_, _, document)| document.as_ref().ok()),
        );

        let mut results = Vec::with_capacity(parsed.len());
        for (label, doc_type, document) in &parsed {
            let (preview, entries, outcome) = match document {
                Ok(document) => (
                    Some(document_preview(document, &context)),
                    entry_previews(document, &context),
                    self.check(document, check_references).await,
                ),
                Err(e) => (None, Vec::new(), ValidationOutcome::Malformed(e.to_string())),
            };

            match &outcome {
                ValidationOutcome::Passed => debug!(document = %label, "Document is valid"),
                other => warn!(document = %label, outcome = ?other, "Document failed validation"),
            }

            results.push(DocumentValidation {
                label: label.clone(),
                doc_type: doc_type.clone(),
                preview,
                entries,
                outcome,
            });
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content_store::application::ports::outgoing::DocumentQueryError;
    use crate::modules::schema::application::ports::incoming::use_cases::ValidateDocumentError;
    use crate::tests::support::fake_store::FakeContentStore;
    use crate::tests::support::fixtures::{valid_person_json, valid_post_json, valid_skill_icon_json};
    use serde_json::json;
    use std::sync::Arc;

    fn command(documents: Vec<Value>, check_references: bool) -> ValidateDocumentsCommand {
        ValidateDocumentsCommand::new(documents, check_references).unwrap()
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(
            ValidateDocumentsCommand::new(vec![], false).unwrap_err(),
            ValidateDocumentError::NoDocuments
        );
    }

    #[tokio::test]
    async fn each_document_gets_its_own_outcome() {
        let mut short_bio = valid_person_json();
        short_bio["_id"] = json!("person-short");
        short_bio["bio"] = json!("Hey!");

        let results = ValidateDocumentsService::new()
            .execute(command(
                vec![
                    valid_skill_icon_json(),
                    short_bio,
                    json!({ "_type": "experience", "title": "Old" }),
                    valid_post_json(),
                ],
                false,
            ))
            .await;

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].label, "skillIcon-rust");
        assert_eq!(
            results[0].preview.as_ref().map(|p| p.title.as_str()),
            Some("Rust")
        );
        assert!(results[0].outcome.is_passed());

        match &results[1].outcome {
            ValidationOutcome::Failed(errors) => {
                assert_eq!(errors.to_string(), "bio: length 4 < minimum 10")
            }
            other => panic!("Expected failure, got {:?}", other),
        }

        assert_eq!(results[2].label, "#3");
        assert_eq!(results[2].preview, None);
        assert_eq!(results[2].doc_type.as_deref(), Some("experience"));
        assert!(matches!(results[2].outcome, ValidationOutcome::Malformed(_)));

        assert!(results[3].outcome.is_passed());
    }

    #[tokio::test]
    async fn previews_resolve_against_the_rest_of_the_batch() {
        let results = ValidateDocumentsService::new()
            .execute(command(
                vec![valid_skill_icon_json(), valid_person_json(), valid_post_json()],
                false,
            ))
            .await;

        assert_eq!(results[1].entries[0].title, "Rust");
        let post = results[2].preview.as_ref().unwrap();
        assert_eq!(post.subtitle.as_deref(), Some("by Zefang Shen"));
        assert_eq!(results[2].entries[0].title, "Code: bash");
    }

    #[tokio::test]
    async fn reference_check_reports_missing_targets() {
        let store = Arc::new(FakeContentStore::with_documents(vec![json!({
            "_id": "person-zefang-shen", "_type": "person"
        })]));
        let service = ValidateDocumentsService::with_resolver(ReferenceResolver::new(store));

        let results = service.execute(command(vec![valid_post_json()], true)).await;

        match &results[0].outcome {
            ValidationOutcome::Failed(errors) => {
                assert!(errors.has_field("technologies[0]"));
                assert_eq!(errors.violations().len(), 1);
            }
            other => panic!("Expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn lookup_failure_keeps_field_violations() {
        let store = Arc::new(FakeContentStore::default());
        store.fail_queries(DocumentQueryError::Transport("offline".into()));
        let service = ValidateDocumentsService::with_resolver(ReferenceResolver::new(store));

        let mut post = valid_post_json();
        post["title"] = json!("");

        let results = service.execute(command(vec![post], true)).await;

        match &results[0].outcome {
            ValidationOutcome::LookupFailed { violations, reason } => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "title");
                assert!(reason.contains("offline"));
            }
            other => panic!("Expected lookup failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn references_are_not_checked_unless_asked() {
        let store = Arc::new(FakeContentStore::default());
        let service = ValidateDocumentsService::with_resolver(ReferenceResolver::new(store.clone()));

        let results = service.execute(command(vec![valid_post_json()], false)).await;

        assert!(results[0].outcome.is_passed());
        assert!(store.summary_requests().is_empty());
    }
}
