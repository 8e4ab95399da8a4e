use super::type_catalog::TypeCatalog;
use crate::modules::content_store::application::ports::outgoing::DocumentHeader;

/// Documents whose type tag is neither declared nor reserved, in the order
/// they were listed. Reference counts play no part in the decision.
pub fn detect_orphans(catalog: &TypeCatalog, documents: &[DocumentHeader]) -> Vec<DocumentHeader> {
    documents
        .iter()
        .filter(|doc| !catalog.is_known(&doc.doc_type))
        .cloned()
        .collect()
}
