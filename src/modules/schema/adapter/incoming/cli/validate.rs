use std::path::Path;

use crate::modules::schema::application::domain::preview::Preview;
use crate::modules::schema::application::domain::validation::Violation;
use crate::modules::schema::application::ports::incoming::use_cases::{
    DocumentValidation, ValidateDocumentsCommand, ValidateDocumentsUseCase, ValidationOutcome,
};
use crate::shared::cli::{read_json_file, split_documents, CommandReport};

fn heading(result: &DocumentValidation, status: &str) -> String {
    let mut line = format!("[{status}] {}", result.label);
    if let Some(doc_type) = &result.doc_type {
        line.push_str(&format!(" ({doc_type})"));
    }
    if let Some(preview) = &result.preview {
        if !preview.title.is_empty() {
            line.push_str(&format!(" \"{}\"", preview.title));
        }
        if let Some(subtitle) = &preview.subtitle {
            line.push_str(&format!(" | {subtitle}"));
        }
    }
    line
}

fn push_entries(report: &mut CommandReport, entries: &[Preview]) {
    for entry in entries {
        match &entry.subtitle {
            Some(subtitle) => report.push(format!("  > {}: {subtitle}", entry.title)),
            None => report.push(format!("  > {}", entry.title)),
        }
    }
}

fn push_violations(report: &mut CommandReport, violations: &[Violation]) {
    for violation in violations {
        report.push(format!("  - {violation}"));
    }
}

/// Renders one line per document plus its violations, then a tally.
pub fn render(results: &[DocumentValidation]) -> CommandReport {
    let mut report = CommandReport::success();
    let mut failed = 0;

    for result in results {
        let status = match &result.outcome {
            ValidationOutcome::Passed => "ok",
            ValidationOutcome::Failed(_) => "invalid",
            ValidationOutcome::Malformed(_) => "malformed",
            ValidationOutcome::LookupFailed { .. } => "unchecked",
        };
        report.push(heading(result, status));
        push_entries(&mut report, &result.entries);

        match &result.outcome {
            ValidationOutcome::Passed => {}
            ValidationOutcome::Failed(errors) => {
                failed += 1;
                push_violations(&mut report, errors.violations());
            }
            ValidationOutcome::Malformed(reason) => {
                failed += 1;
                report.push(format!("  - {reason}"));
            }
            ValidationOutcome::LookupFailed { violations, reason } => {
                failed += 1;
                push_violations(&mut report, violations);
                report.push(format!("  - reference lookup failed: {reason}"));
            }
        }
    }

    report.blank();
    report.push(format!(
        "Validated {} documents: {} passed, {} failed",
        results.len(),
        results.len() - failed,
        failed
    ));
    if failed > 0 {
        report.mark_failed();
    }
    report
}

pub async fn run(
    use_case: &dyn ValidateDocumentsUseCase,
    path: &Path,
    check_references: bool,
) -> CommandReport {
    let payload = match read_json_file(path).await {
        Ok(payload) => payload,
        Err(e) => return CommandReport::error("READ_FAILED", &e.to_string()),
    };

    let command = match ValidateDocumentsCommand::new(split_documents(payload), check_references) {
        Ok(command) => command,
        Err(e) => return CommandReport::error("NO_DOCUMENTS", &e.to_string()),
    };

    render(&use_case.execute(command).await)
}
