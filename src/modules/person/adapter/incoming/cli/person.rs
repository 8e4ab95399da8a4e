use std::path::Path;

use crate::modules::person::application::ports::incoming::use_cases::{
    GetPersonProfileError, GetPersonProfileUseCase,
};
use crate::shared::cli::{write_json_file, CommandReport};

pub const DEFAULT_OUTPUT: &str = "output/person-data.json";

/// Prints the profile as JSON and saves it to `output`.
pub async fn run(use_case: &dyn GetPersonProfileUseCase, slug: &str, output: &Path) -> CommandReport {
    let profile = match use_case.execute(slug).await {
        Ok(profile) => profile,
        Err(e @ GetPersonProfileError::PersonNotFound(_)) => {
            return CommandReport::error("PERSON_NOT_FOUND", &e.to_string())
        }
        Err(e @ GetPersonProfileError::EmptySlug) => {
            return CommandReport::error("INVALID_SLUG", &e.to_string())
        }
        Err(e) => return CommandReport::error("QUERY_FAILED", &e.to_string()),
    };

    let mut report = CommandReport::success();
    match serde_json::to_string_pretty(&profile) {
        Ok(body) => body.lines().for_each(|line| report.push(line)),
        Err(e) => return CommandReport::error("ENCODE_FAILED", &e.to_string()),
    }

    if let Err(e) = write_json_file(output, &profile).await {
        report.mark_failed();
        report.push(format!("error[WRITE_FAILED]: {e}"));
        return report;
    }

    report.blank();
    report.push(format!(
        "{} skills ({} featured)",
        profile.skills.len(),
        profile.featured_skills().count()
    ));
    report.push(format!("Saved to {}", output.display()));
    report
}
