use std::fmt;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::content_store::application::ports::outgoing::{
    DocumentQuery, DocumentRepository,
};
use crate::modules::schema::application::domain::entities::DocumentKind;
use crate::modules::skill_icon::application::domain::IconFile;
use crate::modules::skill_icon::application::ports::incoming::use_cases::{
    FailedIcon, ImportReport, ImportSkillIconsError, ImportSkillIconsUseCase,
};
use crate::modules::skill_icon::application::ports::outgoing::{IconEntry, IconSource};

#[derive(Clone)]
pub struct ImportSkillIconsService {
    source: Arc<dyn IconSource>,
    query: Arc<dyn DocumentQuery>,
    repository: Arc<dyn DocumentRepository>,
}

impl fmt::Debug for ImportSkillIconsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportSkillIconsService")
            .field("source", &"<dyn IconSource>")
            .field("query", &"<dyn DocumentQuery>")
            .field("repository", &"<dyn DocumentRepository>")
            .finish()
    }
}

enum IconOutcome {
    Created(String),
    AlreadyPresent(String),
    Failed(String),
}

impl ImportSkillIconsService {
    pub fn new(
        source: Arc<dyn IconSource>,
        query: Arc<dyn DocumentQuery>,
        repository: Arc<dyn DocumentRepository>,
    ) -> Self {
        Self {
            source,
            query,
            repository,
        }
    }

    async fn import_one(&self, icon: IconFile) -> IconOutcome {
        let type_name = DocumentKind::SkillIcon.type_name();
        match self.query.find_header(type_name, &icon.id).await {
            Ok(Some(_)) => return IconOutcome::AlreadyPresent(icon.id),
            Ok(None) => {}
            Err(e) => return IconOutcome::Failed(format!("lookup failed: {e}")),
        }

        let document = icon.to_document();
        if let Err(errors) = document.validate() {
            return IconOutcome::Failed(errors.to_string());
        }

        let payload = match document.to_value() {
            Ok(payload) => payload,
            Err(e) => return IconOutcome::Failed(e.to_string()),
        };

        match self.repository.create(payload).await {
            Ok(id) => IconOutcome::Created(id),
            Err(e) => IconOutcome::Failed(e.to_string()),
        }
    }
}

#[async_trait]
impl ImportSkillIconsUseCase for ImportSkillIconsService {
    async fn execute(&self, dir: &Path) -> Result<ImportReport, ImportSkillIconsError> {
        let entries = self
            .source
            .list_icons(dir)
            .await
            .map_err(|e| ImportSkillIconsError::SourceUnavailable(e.to_string()))?;

        info!(count = entries.len(), dir = %dir.display(), "Importing skill icons");

        let mut report = ImportReport::default();
        for entry in entries {
            let file_name = entry.file_name().to_string();
            let outcome = match entry {
                IconEntry::Loaded { file_name, content } => {
                    self.import_one(IconFile::new(file_name, &content)).await
                }
                IconEntry::Unreadable { reason, .. } => IconOutcome::Failed(reason),
            };

            match outcome {
                IconOutcome::Created(id) => {
                    info!(document_id = %id, file = %file_name, "Skill icon created");
                    report.created.push(id);
                }
                IconOutcome::AlreadyPresent(id) => {
                    info!(document_id = %id, file = %file_name, "Skill icon already exists");
                    report.already_present.push(id);
                }
                IconOutcome::Failed(reason) => {
                    warn!(file = %file_name, reason = %reason, "Skill icon import failed");
                    report.failed.push(FailedIcon { file_name, reason });
                }
            }
        }

        Ok(report)
    }
}
