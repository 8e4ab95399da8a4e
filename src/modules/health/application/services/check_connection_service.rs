use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::modules::content_store::application::ports::outgoing::{
    DocumentQuery, DocumentRepository,
};
use crate::modules::health::application::ports::incoming::use_cases::{
    CheckConnectionError, CheckConnectionUseCase, ConnectionReport, WriteProbe,
};
use crate::modules::schema::application::domain::entities::DocumentKind;

pub const RECENT_LIMIT: usize = 5;

fn probe_document() -> Value {
    json!({
        "_type": DocumentKind::SkillIcon.type_name(),
        "name": "test-connection",
        "icon": "<svg><title>Test</title></svg>"
    })
}

#[derive(Clone)]
pub struct CheckConnectionService {
    query: Arc<dyn DocumentQuery>,
    repository: Arc<dyn DocumentRepository>,
    token_configured: bool,
}

impl fmt::Debug for CheckConnectionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckConnectionService")
            .field("query", &"<dyn DocumentQuery>")
            .field("repository", &"<dyn DocumentRepository>")
            .field("token_configured", &self.token_configured)
            .finish()
    }
}

impl CheckConnectionService {
    pub fn new(
        query: Arc<dyn DocumentQuery>,
        repository: Arc<dyn DocumentRepository>,
        token_configured: bool,
    ) -> Self {
        Self {
            query,
            repository,
            token_configured,
        }
    }

    /// Creates a throw-away skill icon and deletes it again.
    async fn write_probe(&self) -> WriteProbe {
        let id = match self.repository.create(probe_document()).await {
            Ok(id) => id,
            Err(e) => return WriteProbe::Failed(format!("create failed: {e}")),
        };

        match self.repository.delete(&id).await {
            Ok(()) => WriteProbe::Passed,
            Err(e) => WriteProbe::Failed(format!("created {id} but delete failed: {e}")),
        }
    }
}

#[async_trait]
impl CheckConnectionUseCase for CheckConnectionService {
    async fn execute(&self) -> Result<ConnectionReport, CheckConnectionError> {
        let recent = self
            .query
            .list_recent(DocumentKind::SkillIcon.type_name(), RECENT_LIMIT)
            .await
            .map_err(|e| CheckConnectionError::ReadFailed(e.to_string()))?;
        info!(count = recent.len(), "Read probe passed");

        let write_probe = self.write_probe().await;
        match &write_probe {
            WriteProbe::Passed => info!("Write probe passed"),
            WriteProbe::Failed(reason) => warn!(reason = %reason, "Write probe failed"),
        }

        Ok(ConnectionReport {
            token_configured: self.token_configured,
            recent,
            write_probe,
        })
    }
}
