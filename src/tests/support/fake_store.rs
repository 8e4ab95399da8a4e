use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::content_store::application::ports::outgoing::{
    DocumentHeader, DocumentQuery, DocumentQueryError, DocumentRepository,
    DocumentRepositoryError, DocumentSummary,
};

/// In-memory content lake with scripted failures.
#[derive(Debug, Default)]
pub struct FakeContentStore {
    documents: Mutex<Vec<Value>>,
    delete_failures: Mutex<HashMap<String, DocumentRepositoryError>>,
    create_failures: Mutex<HashMap<String, DocumentRepositoryError>>,
    query_failure: Mutex<Option<DocumentQueryError>>,
    summary_failure: Mutex<Option<DocumentQueryError>>,
    delete_attempts: Mutex<Vec<String>>,
    summary_requests: Mutex<Vec<Vec<String>>>,
    generated: Mutex<usize>,
}

fn field<'a>(doc: &'a Value, name: &str) -> Option<&'a str> {
    doc.get(name).and_then(Value::as_str)
}

impl FakeContentStore {
    pub fn with_documents(documents: Vec<Value>) -> Self {
        let store = Self::default();
        *store.documents.lock().unwrap() = documents;
        store
    }

    pub fn insert(&self, document: Value) {
        self.documents.lock().unwrap().push(document);
    }

    pub fn fail_delete(&self, id: &str, error: DocumentRepositoryError) {
        self.delete_failures
            .lock()
            .unwrap()
            .insert(id.to_string(), error);
    }

    /// Fails creation of documents whose `_id` or `name` equals `key`.
    pub fn fail_create(&self, key: &str, error: DocumentRepositoryError) {
        self.create_failures
            .lock()
            .unwrap()
            .insert(key.to_string(), error);
    }

    pub fn fail_queries(&self, error: DocumentQueryError) {
        *self.query_failure.lock().unwrap() = Some(error);
    }

    pub fn fail_summaries(&self, error: DocumentQueryError) {
        *self.summary_failure.lock().unwrap() = Some(error);
    }

    pub fn documents(&self) -> Vec<Value> {
        self.documents.lock().unwrap().clone()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .any(|doc| field(doc, "_id") == Some(id))
    }

    pub fn delete_attempts(&self) -> Vec<String> {
        self.delete_attempts.lock().unwrap().clone()
    }

    pub fn summary_requests(&self) -> Vec<Vec<String>> {
        self.summary_requests.lock().unwrap().clone()
    }

    fn check_queries(&self) -> Result<(), DocumentQueryError> {
        match self.query_failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn header_of(doc: &Value) -> Option<DocumentHeader> {
        Some(DocumentHeader::new(field(doc, "_id")?, field(doc, "_type")?))
    }
}

#[async_trait]
impl DocumentQuery for FakeContentStore {
    async fn list_headers(&self) -> Result<Vec<DocumentHeader>, DocumentQueryError> {
        self.check_queries()?;
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter_map(Self::header_of)
            .collect())
    }

    async fn find_summaries(
        &self,
        ids: &[String],
    ) -> Result<Vec<DocumentSummary>, DocumentQueryError> {
        self.summary_requests.lock().unwrap().push(ids.to_vec());
        self.check_queries()?;
        if let Some(error) = self.summary_failure.lock().unwrap().clone() {
            return Err(error);
        }

        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|doc| field(doc, "_id").is_some_and(|id| ids.iter().any(|i| i == id)))
            .filter_map(|doc| {
                let header = Self::header_of(doc)?;
                Some(DocumentSummary {
                    id: header.id,
                    doc_type: header.doc_type,
                    title: field(doc, "title").map(str::to_string),
                    name: field(doc, "name").map(str::to_string),
                })
            })
            .collect())
    }

    async fn find_header(
        &self,
        doc_type: &str,
        id: &str,
    ) -> Result<Option<DocumentHeader>, DocumentQueryError> {
        self.check_queries()?;
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter_map(Self::header_of)
            .find(|header| header.id == id && header.doc_type == doc_type))
    }

    async fn list_recent(
        &self,
        doc_type: &str,
        limit: usize,
    ) -> Result<Vec<Value>, DocumentQueryError> {
        self.check_queries()?;
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|doc| field(doc, "_type") == Some(doc_type))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn slug_taken(&self, doc_type: &str, slug: &str) -> Result<bool, DocumentQueryError> {
        self.check_queries()?;
        Ok(self.documents.lock().unwrap().iter().any(|doc| {
            field(doc, "_type") == Some(doc_type)
                && doc.pointer("/slug/current").and_then(Value::as_str) == Some(slug)
        }))
    }
}

#[async_trait]
impl DocumentRepository for FakeContentStore {
    async fn create(&self, mut document: Value) -> Result<String, DocumentRepositoryError> {
        {
            let failures = self.create_failures.lock().unwrap();
            for key in [field(&document, "_id"), field(&document, "name")]
                .into_iter()
                .flatten()
            {
                if let Some(error) = failures.get(key) {
                    return Err(error.clone());
                }
            }
        }

        let id = match field(&document, "_id") {
            Some(id) if self.contains(id) => {
                return Err(DocumentRepositoryError::Rejected(format!(
                    "Document by ID \"{id}\" already exists"
                )))
            }
            Some(id) => id.to_string(),
            None => {
                let mut generated = self.generated.lock().unwrap();
                *generated += 1;
                let id = format!("generated-{}", *generated);
                document["_id"] = Value::String(id.clone());
                id
            }
        };

        self.documents.lock().unwrap().push(document);
        Ok(id)
    }

    async fn delete(&self, id: &str) -> Result<(), DocumentRepositoryError> {
        self.delete_attempts.lock().unwrap().push(id.to_string());
        if let Some(error) = self.delete_failures.lock().unwrap().get(id) {
            return Err(error.clone());
        }
        self.documents
            .lock()
            .unwrap()
            .retain(|doc| field(doc, "_id") != Some(id));
        Ok(())
    }
}
