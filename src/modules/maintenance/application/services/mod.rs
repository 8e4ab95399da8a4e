mod cleanup_orphans_service;
mod find_orphans_service;
mod reference_safe_deletion_service;

pub use cleanup_orphans_service::CleanupOrphansService;
pub use find_orphans_service::FindOrphansService;
pub use reference_safe_deletion_service::ReferenceSafeDeletionService;
