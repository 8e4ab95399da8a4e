mod document_query;
mod document_repository;

pub use document_query::{DocumentHeader, DocumentQuery, DocumentQueryError, DocumentSummary};
pub use document_repository::{DocumentRepository, DocumentRepositoryError};
