use std::path::Path;

use crate::modules::skill_icon::application::ports::incoming::use_cases::{
    ImportReport, ImportSkillIconsUseCase,
};
use crate::shared::cli::CommandReport;

pub fn render(result: &ImportReport) -> CommandReport {
    let mut report = CommandReport::success();

    for id in &result.created {
        report.push(format!("Created {id}"));
    }
    for id in &result.already_present {
        report.push(format!("Skipped {id} (already exists)"));
    }
    for failure in &result.failed {
        report.push(format!("Failed {}: {}", failure.file_name, failure.reason));
    }

    report.blank();
    report.push("=== Import Summary ===");
    report.push(format!("Created: {}", result.created.len()));
    report.push(format!("Already present: {}", result.already_present.len()));
    report.push(format!("Failed: {}", result.failed.len()));

    if !result.failed.is_empty() {
        report.mark_failed();
    }
    report
}

pub async fn run(use_case: &dyn ImportSkillIconsUseCase, dir: &Path) -> CommandReport {
    match use_case.execute(dir).await {
        Ok(result) => render(&result),
        Err(e) => CommandReport::error("SOURCE_UNAVAILABLE", &e.to_string()),
    }
}
