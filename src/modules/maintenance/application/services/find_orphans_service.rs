use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::content_store::application::ports::outgoing::{DocumentHeader, DocumentQuery};
use crate::modules::maintenance::application::domain::{detect_orphans, TypeCatalog};
use crate::modules::maintenance::application::ports::incoming::use_cases::{
    FindOrphansError, FindOrphansUseCase,
};

#[derive(Clone)]
pub struct FindOrphansService {
    query: Arc<dyn DocumentQuery>,
    catalog: TypeCatalog,
}

impl fmt::Debug for FindOrphansService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindOrphansService")
            .field("query", &"<dyn DocumentQuery>")
            .field("catalog", &self.catalog)
            .finish()
    }
}

impl FindOrphansService {
    pub fn new(query: Arc<dyn DocumentQuery>, catalog: TypeCatalog) -> Self {
        Self { query, catalog }
    }
}

#[async_trait]
impl FindOrphansUseCase for FindOrphansService {
    async fn execute(&self) -> Result<Vec<DocumentHeader>, FindOrphansError> {
        let documents = self
            .query
            .list_headers()
            .await
            .map_err(|e| FindOrphansError::QueryFailed(e.to_string()))?;

        let orphans = detect_orphans(&self.catalog, &documents);
        info!(
            scanned = documents.len(),
            orphaned = orphans.len(),
            "Orphan scan finished"
        );
        Ok(orphans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content_store::application::ports::outgoing::{
        DocumentQueryError, DocumentSummary,
    };
    use mockall::mock;
    use serde_json::Value;

    mock! {
        pub Query {}
        #[async_trait]
        impl DocumentQuery for Query {
            async fn list_headers(&self) -> Result<Vec<DocumentHeader>, DocumentQueryError>;
            async fn find_summaries(&self, ids: &[String]) -> Result<Vec<DocumentSummary>, DocumentQueryError>;
            async fn find_header(&self, doc_type: &str, id: &str) -> Result<Option<DocumentHeader>, DocumentQueryError>;
            async fn list_recent(&self, doc_type: &str, limit: usize) -> Result<Vec<Value>, DocumentQueryError>;
            async fn slug_taken(&self, doc_type: &str, slug: &str) -> Result<bool, DocumentQueryError>;
        }
    }

    #[tokio::test]
    async fn returns_documents_of_unknown_types() {
        let mut query = MockQuery::new();
        query.expect_list_headers().times(1).returning(|| {
            Ok(vec![
                DocumentHeader::new("p1", "person"),
                DocumentHeader::new("d1", "draft.post"),
                DocumentHeader::new("i1", "sanity.imageAsset"),
            ])
        });

        let service = FindOrphansService::new(Arc::new(query), TypeCatalog::schema_default());
        let orphans = service.execute().await.unwrap();

        assert_eq!(orphans, vec![DocumentHeader::new("d1", "draft.post")]);
    }

    #[tokio::test]
    async fn query_failure_is_reported() {
        let mut query = MockQuery::new();
        query
            .expect_list_headers()
            .returning(|| Err(DocumentQueryError::Transport("timeout".into())));

        let service = FindOrphansService::new(Arc::new(query), TypeCatalog::schema_default());
        let result = service.execute().await;

        match result {
            Err(FindOrphansError::QueryFailed(msg)) => assert!(msg.contains("timeout")),
            other => panic!("Expected QueryFailed, got {:?}", other),
        }
    }
}
