use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentRepositoryError {
    /// Deletion refused because other documents still point at the target.
    #[error("Document is still referenced by {} document(s)", referencing_ids.len())]
    HasReferences { referencing_ids: Vec<String> },

    #[error("Mutation rejected: {0}")]
    Rejected(String),

    #[error("Store unreachable: {0}")]
    Transport(String),
}

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Stores a fully formed document and returns its assigned id.
    async fn create(&self, document: Value) -> Result<String, DocumentRepositoryError>;

    async fn delete(&self, id: &str) -> Result<(), DocumentRepositoryError>;
}
