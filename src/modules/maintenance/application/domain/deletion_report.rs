use std::fmt;

use crate::modules::content_store::application::ports::outgoing::DocumentSummary;

/// Upper bound on referencing documents looked up for a skipped deletion.
pub const REFERENCE_SAMPLE_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Other documents still point at the candidate. `sample` holds the
    /// looked-up details, or `None` when that lookup failed.
    HasReferences {
        referencing_ids: Vec<String>,
        sample: Option<Vec<DocumentSummary>>,
    },

    /// Any other store failure, with its raw message.
    Failed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::HasReferences { sample: Some(_), .. } => write!(f, "Has references"),
            SkipReason::HasReferences { sample: None, .. } => {
                write!(f, "Has references (details unavailable)")
            }
            SkipReason::Failed(message) => f.write_str(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    pub id: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionReport {
    pub deleted: Vec<String>,
    pub skipped: Vec<SkippedDocument>,
}

impl DeletionReport {
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn has_reference_skips(&self) -> bool {
        self.skipped
            .iter()
            .any(|s| matches!(s.reason, SkipReason::HasReferences { .. }))
    }
}
