mod create_document_service;
mod validate_documents_service;

pub use create_document_service::CreateDocumentService;
pub use validate_documents_service::ValidateDocumentsService;
