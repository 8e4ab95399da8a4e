use crate::modules::content_store::application::ports::outgoing::DocumentHeader;

/// `Found N documents with invalid types:` followed by one line per document.
pub fn candidate_lines(candidates: &[DocumentHeader]) -> Vec<String> {
    let mut lines = vec![format!(
        "Found {} documents with invalid types:",
        candidates.len()
    )];
    lines.extend(
        candidates
            .iter()
            .map(|doc| format!("- {} (type: {})", doc.id, doc.doc_type)),
    );
    lines
}
