use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity of a stored document: its id and type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentHeader {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "_type")]
    pub doc_type: String,
}

impl DocumentHeader {
    pub fn new(id: impl Into<String>, doc_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            doc_type: doc_type.into(),
        }
    }
}

/// Header plus the human-readable label fields used in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "_type")]
    pub doc_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DocumentSummary {
    /// `title`, then `name`, then the id.
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentQueryError {
    #[error("Store unreachable: {0}")]
    Transport(String),

    #[error("Query rejected: {0}")]
    Rejected(String),

    #[error("Unexpected query result: {0}")]
    Decode(String),
}

#[async_trait]
pub trait DocumentQuery: Send + Sync {
    /// Id and type of every stored document.
    async fn list_headers(&self) -> Result<Vec<DocumentHeader>, DocumentQueryError>;

    /// Summaries of the documents with the given ids. Ids that do not exist
    /// are absent from the result.
    async fn find_summaries(
        &self,
        ids: &[String],
    ) -> Result<Vec<DocumentSummary>, DocumentQueryError>;

    async fn find_header(
        &self,
        doc_type: &str,
        id: &str,
    ) -> Result<Option<DocumentHeader>, DocumentQueryError>;

    /// Most recently created documents of a type, newest first.
    async fn list_recent(
        &self,
        doc_type: &str,
        limit: usize,
    ) -> Result<Vec<Value>, DocumentQueryError>;

    /// Whether a document of `doc_type` already uses `slug`.
    async fn slug_taken(&self, doc_type: &str, slug: &str) -> Result<bool, DocumentQueryError>;
}
