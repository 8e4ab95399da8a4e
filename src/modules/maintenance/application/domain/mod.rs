mod candidates;
mod confirmation;
mod deletion_report;
mod orphans;
mod type_catalog;

pub use candidates::candidate_lines;
pub use confirmation::is_confirmed;
pub use deletion_report::{DeletionReport, SkipReason, SkippedDocument, REFERENCE_SAMPLE_LIMIT};
pub use orphans::detect_orphans;
pub use type_catalog::{TypeCatalog, RESERVED_TYPES};
