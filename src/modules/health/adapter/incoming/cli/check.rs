use serde_json::Value;

use crate::modules::health::application::ports::incoming::use_cases::{
    CheckConnectionUseCase, ConnectionReport, WriteProbe,
};
use crate::shared::cli::CommandReport;

fn icon_line(doc: &Value) -> String {
    let id = doc.get("_id").and_then(Value::as_str).unwrap_or("?");
    match doc.get("name").and_then(Value::as_str) {
        Some(name) => format!("- {name} ({id})"),
        None => format!("- {id}"),
    }
}

/// A failed write probe is reported but does not fail the command.
pub fn render(result: &ConnectionReport) -> CommandReport {
    let mut report = CommandReport::success();

    report.push(if result.token_configured {
        "API token: configured"
    } else {
        "API token: not configured"
    });

    report.push(format!(
        "Read access OK: {} recent skill icons",
        result.recent.len()
    ));
    for doc in &result.recent {
        report.push(icon_line(doc));
    }

    match &result.write_probe {
        WriteProbe::Passed => report.push("Write access OK"),
        WriteProbe::Failed(reason) => report.push(format!("Write access failed: {reason}")),
    }
    report
}

pub async fn run(use_case: &dyn CheckConnectionUseCase) -> CommandReport {
    match use_case.execute().await {
        Ok(result) => render(&result),
        Err(e) => CommandReport::error("CONNECTION_FAILED", &e.to_string()),
    }
}
