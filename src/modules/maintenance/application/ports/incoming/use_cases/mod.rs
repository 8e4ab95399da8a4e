mod cleanup_orphans;
mod delete_documents;
mod find_orphans;

pub use cleanup_orphans::{CleanupOrphansError, CleanupOrphansUseCase, CleanupOutcome};
pub use delete_documents::{DeleteDocumentsError, DeleteDocumentsUseCase, DeletionOutcome};
pub use find_orphans::{FindOrphansError, FindOrphansUseCase};
