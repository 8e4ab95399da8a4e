use async_trait::async_trait;
use serde_json::{json, Value};

use super::groq;
use super::sanity_client::SanityClient;
use crate::modules::content_store::application::ports::outgoing::{
    DocumentHeader, DocumentQuery, DocumentQueryError, DocumentSummary,
};

#[derive(Debug, Clone)]
pub struct SanityDocumentQuery {
    client: SanityClient,
}

impl SanityDocumentQuery {
    pub fn new(client: SanityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentQuery for SanityDocumentQuery {
    async fn list_headers(&self) -> Result<Vec<DocumentHeader>, DocumentQueryError> {
        Ok(self.client.fetch(groq::ALL_HEADERS, &[]).await?)
    }

    async fn find_summaries(
        &self,
        ids: &[String],
    ) -> Result<Vec<DocumentSummary>, DocumentQueryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .client
            .fetch(groq::SUMMARIES_BY_ID, &[("ids", json!(ids))])
            .await?)
    }

    async fn find_header(
        &self,
        doc_type: &str,
        id: &str,
    ) -> Result<Option<DocumentHeader>, DocumentQueryError> {
        Ok(self
            .client
            .fetch(
                groq::HEADER_BY_TYPE_AND_ID,
                &[("type", json!(doc_type)), ("id", json!(id))],
            )
            .await?)
    }

    async fn list_recent(
        &self,
        doc_type: &str,
        limit: usize,
    ) -> Result<Vec<Value>, DocumentQueryError> {
        Ok(self
            .client
            .fetch(&groq::recent_by_type(limit), &[("type", json!(doc_type))])
            .await?)
    }

    async fn slug_taken(&self, doc_type: &str, slug: &str) -> Result<bool, DocumentQueryError> {
        Ok(self
            .client
            .fetch(
                groq::SLUG_TAKEN,
                &[("type", json!(doc_type)), ("slug", json!(slug))],
            )
            .await?)
    }
}
