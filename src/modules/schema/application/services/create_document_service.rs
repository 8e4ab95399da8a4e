use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::info;

use crate::modules::content_store::application::ports::outgoing::{
    DocumentQuery, DocumentRepository,
};
use crate::modules::schema::application::domain::defaults::{
    apply_creation_defaults, generate_key,
};
use crate::modules::schema::application::domain::entities::{DocumentKind, SchemaDocument};
use crate::modules::schema::application::domain::validation::ValidationErrors;
use crate::modules::schema::application::helpers::ReferenceResolver;
use crate::modules::schema::application::ports::incoming::use_cases::{
    CreateDocumentError, CreateDocumentUseCase, CreatedDocument,
};

#[derive(Clone)]
pub struct CreateDocumentService {
    repository: Arc<dyn DocumentRepository>,
    query: Arc<dyn DocumentQuery>,
    resolver: ReferenceResolver,
}

impl fmt::Debug for CreateDocumentService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateDocumentService")
            .field("repository", &"<dyn DocumentRepository>")
            .field("query", &"<dyn DocumentQuery>")
            .finish()
    }
}

impl CreateDocumentService {
    pub fn new(repository: Arc<dyn DocumentRepository>, query: Arc<dyn DocumentQuery>) -> Self {
        Self {
            repository,
            resolver: ReferenceResolver::new(query.clone()),
            query,
        }
    }

    async fn ensure_unique_slug(&self, document: &SchemaDocument) -> Result<(), CreateDocumentError> {
        let SchemaDocument::Person(person) = document else {
            return Ok(());
        };
        let Some(slug) = person.slug.as_ref().and_then(|s| s.current()) else {
            return Ok(());
        };

        let taken = self
            .query
            .slug_taken(DocumentKind::Person.type_name(), slug)
            .await
            .map_err(|e| CreateDocumentError::LookupFailed(e.to_string()))?;

        if taken {
            return Err(CreateDocumentError::SlugAlreadyExists(slug.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CreateDocumentUseCase for CreateDocumentService {
    async fn execute(&self, payload: Value) -> Result<CreatedDocument, CreateDocumentError> {
        let mut document = SchemaDocument::from_value(payload)
            .map_err(|e| CreateDocumentError::Malformed(e.to_string()))?;

        let mut next_key = generate_key;
        apply_creation_defaults(&mut document, Utc::now(), &mut next_key);

        document.validate().map_err(CreateDocumentError::Invalid)?;

        let broken = self
            .resolver
            .check(&document)
            .await
            .map_err(|e| CreateDocumentError::LookupFailed(e.to_string()))?;
        if !broken.is_empty() {
            return Err(CreateDocumentError::Invalid(ValidationErrors(broken)));
        }

        self.ensure_unique_slug(&document).await?;

        let doc_type = document.kind().type_name().to_string();
        let value = document
            .to_value()
            .map_err(|e| CreateDocumentError::Malformed(e.to_string()))?;

        let id = self
            .repository
            .create(value)
            .await
            .map_err(|e| CreateDocumentError::RepositoryError(e.to_string()))?;

        info!(document_id = %id, doc_type = %doc_type, "Document created");
        Ok(CreatedDocument { id, doc_type })
    }
}
