// src/shared/cli/report.rs
use std::process::ExitCode;

/// Operator-facing output of one command: the lines printed to stdout and
/// whether the command succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReport {
    pub success: bool,
    pub lines: Vec<String>,
}

impl CommandReport {
    pub fn success() -> Self {
        Self {
            success: true,
            lines: Vec::new(),
        }
    }

    pub fn failure() -> Self {
        Self {
            success: false,
            lines: Vec::new(),
        }
    }

    /// Single-line failure with a stable error code, e.g. `QUERY_FAILED`.
    pub fn error(code: &str, message: &str) -> Self {
        let mut report = Self::failure();
        report.push(format!("error[{code}]: {message}"));
        report
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn mark_failed(&mut self) {
        self.success = false;
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
