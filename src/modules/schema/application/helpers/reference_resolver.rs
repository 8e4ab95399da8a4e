use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::modules::content_store::application::ports::outgoing::{
    DocumentQuery, DocumentQueryError,
};
use crate::modules::schema::application::domain::entities::SchemaDocument;
use crate::modules::schema::application::domain::validation::{Rule, Violation};

/// Checks that every reference of a document points at an existing document
/// of the expected type.
#[derive(Clone)]
pub struct ReferenceResolver {
    query: Arc<dyn DocumentQuery>,
}

impl fmt::Debug for ReferenceResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceResolver")
            .field("query", &"<dyn DocumentQuery>")
            .finish()
    }
}

impl ReferenceResolver {
    pub fn new(query: Arc<dyn DocumentQuery>) -> Self {
        Self { query }
    }

    /// One store lookup for all distinct targets. Returns the broken edges
    /// as violations.
    pub async fn check(
        &self,
        document: &SchemaDocument,
    ) -> Result<Vec<Violation>, DocumentQueryError> {
        let edges = document.references();
        if edges.is_empty() {
            return Ok(Vec::new());
        }

        let mut targets: Vec<String> = edges.iter().map(|edge| edge.target.clone()).collect();
        targets.sort();
        targets.dedup();

        let found = self.query.find_summaries(&targets).await?;
        let types: HashMap<&str, &str> = found
            .iter()
            .map(|summary| (summary.id.as_str(), summary.doc_type.as_str()))
            .collect();

        let violations = edges
            .into_iter()
            .filter_map(|edge| match types.get(edge.target.as_str()) {
                None => Some(Violation::new(
                    edge.field,
                    Rule::DanglingReference {
                        target: edge.target,
                    },
                )),
                Some(actual) if *actual != edge.expected.type_name() => Some(Violation::new(
                    edge.field,
                    Rule::WrongReferenceType {
                        target: edge.target,
                        expected: edge.expected.type_name().to_string(),
                        actual: actual.to_string(),
                    },
                )),
                Some(_) => None,
            })
            .collect();

        Ok(violations)
    }
}
