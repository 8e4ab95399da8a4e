use std::path::Path;

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedIcon {
    pub file_name: String,
    pub reason: String,
}

/// Per-file outcome of one import run. Ids are listed in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub created: Vec<String>,
    pub already_present: Vec<String>,
    pub failed: Vec<FailedIcon>,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.created.len() + self.already_present.len() + self.failed.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportSkillIconsError {
    #[error("{0}")]
    SourceUnavailable(String),
}

#[async_trait]
pub trait ImportSkillIconsUseCase: Send + Sync {
    async fn execute(&self, dir: &Path) -> Result<ImportReport, ImportSkillIconsError>;
}
