use async_trait::async_trait;
use serde_json::Value;

use crate::modules::schema::application::domain::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedDocument {
    pub id: String,
    pub doc_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateDocumentError {
    #[error("Malformed document: {0}")]
    Malformed(String),

    #[error("Validation failed: {0}")]
    Invalid(ValidationErrors),

    #[error("Slug already exists: {0}")]
    SlugAlreadyExists(String),

    #[error("Lookup failed: {0}")]
    LookupFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateDocumentUseCase: Send + Sync {
    async fn execute(&self, payload: Value) -> Result<CreatedDocument, CreateDocumentError>;
}
