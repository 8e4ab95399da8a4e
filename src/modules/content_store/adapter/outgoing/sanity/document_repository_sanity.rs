use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;

use super::sanity_client::SanityClient;
use crate::modules::content_store::application::ports::outgoing::{
    DocumentRepository, DocumentRepositoryError,
};

#[derive(Debug, Clone)]
pub struct SanityDocumentRepository {
    client: SanityClient,
}

impl SanityDocumentRepository {
    pub fn new(client: SanityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentRepository for SanityDocumentRepository {
    async fn create(&self, document: Value) -> Result<String, DocumentRepositoryError> {
        let results = self
            .client
            .mutate(vec![json!({ "create": document })])
            .await?;

        let id = results
            .into_iter()
            .next()
            .map(|result| result.id)
            .ok_or_else(|| {
                DocumentRepositoryError::Rejected("Store returned no document id".to_string())
            })?;

        info!(document_id = %id, "Document created");
        Ok(id)
    }

    async fn delete(&self, id: &str) -> Result<(), DocumentRepositoryError> {
        self.client
            .mutate(vec![json!({ "delete": { "id": id } })])
            .await?;

        info!(document_id = %id, "Document deleted");
        Ok(())
    }
}
