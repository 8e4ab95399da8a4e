use async_trait::async_trait;
use serde_json::Value;

use crate::modules::schema::application::domain::preview::Preview;
use crate::modules::schema::application::domain::validation::{ValidationErrors, Violation};

//
// ──────────────────────────────────────────────────────────
// Validate Documents Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ValidateDocumentsCommand {
    documents: Vec<Value>,
    check_references: bool,
}

impl ValidateDocumentsCommand {
    pub fn new(
        documents: Vec<Value>,
        check_references: bool,
    ) -> Result<Self, ValidateDocumentError> {
        if documents.is_empty() {
            return Err(ValidateDocumentError::NoDocuments);
        }
        Ok(Self {
            documents,
            check_references,
        })
    }

    pub fn documents(&self) -> &[Value] {
        &self.documents
    }

    pub fn into_documents(self) -> Vec<Value> {
        self.documents
    }

    pub fn check_references(&self) -> bool {
        self.check_references
    }
}

//
// ──────────────────────────────────────────────────────────
// Result
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Passed,
    Failed(ValidationErrors),

    /// The payload could not be read as a document of a declared type.
    Malformed(String),

    /// Field checks ran but the reference lookup did not.
    LookupFailed {
        violations: Vec<Violation>,
        reason: String,
    },
}

impl ValidationOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, ValidationOutcome::Passed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentValidation {
    /// `_id` when present, otherwise the position in the input.
    pub label: String,
    pub doc_type: Option<String>,
    /// Document preview, when the payload could be read.
    pub preview: Option<Preview>,
    /// Previews of nested skills and blocks.
    pub entries: Vec<Preview>,
    pub outcome: ValidationOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidateDocumentError {
    #[error("No documents to validate")]
    NoDocuments,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Validates each document on its own; one bad document never hides the
/// result of another.
#[async_trait]
pub trait ValidateDocumentsUseCase: Send + Sync {
    async fn execute(&self, command: ValidateDocumentsCommand) -> Vec<DocumentValidation>;
}
