mod create_document;
mod validate_documents;

pub use create_document::{CreateDocumentError, CreateDocumentUseCase, CreatedDocument};
pub use validate_documents::{
    DocumentValidation, ValidateDocumentError, ValidateDocumentsCommand,
    ValidateDocumentsUseCase, ValidationOutcome,
};
