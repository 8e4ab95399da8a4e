use std::path::Path;

use serde_json::Value;

use crate::modules::schema::application::ports::incoming::use_cases::{
    CreateDocumentError, CreateDocumentUseCase,
};
use crate::shared::cli::{read_json_file, split_documents, CommandReport};

fn label_of(payload: &Value, index: usize) -> String {
    payload
        .get("_id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", index + 1))
}

/// Creates every document in the file. A failed document does not stop the
/// ones after it.
pub async fn run(use_case: &dyn CreateDocumentUseCase, path: &Path) -> CommandReport {
    let payload = match read_json_file(path).await {
        Ok(payload) => payload,
        Err(e) => return CommandReport::error("READ_FAILED", &e.to_string()),
    };

    let mut report = CommandReport::success();
    for (index, document) in split_documents(payload).into_iter().enumerate() {
        let label = label_of(&document, index);
        match use_case.execute(document).await {
            Ok(created) => report.push(format!("Created {} {}", created.doc_type, created.id)),
            Err(CreateDocumentError::Invalid(errors)) => {
                report.mark_failed();
                report.push(format!("Failed to create {label}: validation failed"));
                for violation in errors.violations() {
                    report.push(format!("  - {violation}"));
                }
            }
            Err(e) => {
                report.mark_failed();
                report.push(format!("Failed to create {label}: {e}"));
            }
        }
    }
    report
}
