use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Person, Post, Project, Reference, SkillIcon};
use crate::modules::schema::application::domain::validation::{
    field_path, item_path, FieldValidator, ValidationErrors,
};

//
// ──────────────────────────────────────────────────────────
// Document kinds
// ──────────────────────────────────────────────────────────
//

/// Document types declared by this schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentKind {
    Person,
    Post,
    Project,
    SkillIcon,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Person,
        DocumentKind::Post,
        DocumentKind::Project,
        DocumentKind::SkillIcon,
    ];

    /// Type tag as stored in `_type`.
    pub fn type_name(&self) -> &'static str {
        match self {
            DocumentKind::Person => "person",
            DocumentKind::Post => "post",
            DocumentKind::Project => "project",
            DocumentKind::SkillIcon => "skillIcon",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }

    pub fn type_names() -> Vec<String> {
        Self::ALL.iter().map(|k| k.type_name().to_string()).collect()
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

//
// ──────────────────────────────────────────────────────────
// Schema document
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum SchemaDocument {
    #[serde(rename = "person")]
    Person(Person),

    #[serde(rename = "post")]
    Post(Post),

    #[serde(rename = "project")]
    Project(Project),

    #[serde(rename = "skillIcon")]
    SkillIcon(SkillIcon),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDocumentError {
    #[error("Document has no _type")]
    MissingType,

    #[error("Unknown document type: {0}")]
    UnknownType(String),

    #[error("Malformed {doc_type} document: {message}")]
    Malformed { doc_type: String, message: String },
}

/// Edge from a field of one document to the document it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEdge {
    pub field: String,
    pub target: String,
    pub expected: DocumentKind,
}

impl SchemaDocument {
    /// Reads a raw store payload. The `_type` tag is checked first so an
    /// unknown type is not reported as a shape error.
    pub fn from_value(value: Value) -> Result<Self, ParseDocumentError> {
        let doc_type = match value.get("_type") {
            Some(Value::String(t)) => t.clone(),
            _ => return Err(ParseDocumentError::MissingType),
        };

        if DocumentKind::from_type_name(&doc_type).is_none() {
            return Err(ParseDocumentError::UnknownType(doc_type));
        }

        serde_json::from_value(value).map_err(|e| ParseDocumentError::Malformed {
            doc_type,
            message: e.to_string(),
        })
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            SchemaDocument::Person(_) => DocumentKind::Person,
            SchemaDocument::Post(_) => DocumentKind::Post,
            SchemaDocument::Project(_) => DocumentKind::Project,
            SchemaDocument::SkillIcon(_) => DocumentKind::SkillIcon,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            SchemaDocument::Person(d) => d.id.as_deref(),
            SchemaDocument::Post(d) => d.id.as_deref(),
            SchemaDocument::Project(d) => d.id.as_deref(),
            SchemaDocument::SkillIcon(d) => d.id.as_deref(),
        }
    }

    /// Field-level checks. Reference targets are not looked up here.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = FieldValidator::new();
        match self {
            SchemaDocument::Person(d) => d.validate_into(&mut v),
            SchemaDocument::Post(d) => d.validate_into(&mut v),
            SchemaDocument::Project(d) => d.validate_into(&mut v),
            SchemaDocument::SkillIcon(d) => d.validate_into(&mut v),
        }
        v.finish()
    }

    /// Outgoing references that carry a target id. Image assets are opaque
    /// and never listed.
    pub fn references(&self) -> Vec<ReferenceEdge> {
        let mut edges = Vec::new();
        match self {
            SchemaDocument::Person(person) => {
                for (index, skill) in person.skills().iter().enumerate() {
                    let field = field_path(&item_path("skills", index), "skillIcon");
                    push_edge(
                        &mut edges,
                        field,
                        skill.skill_icon.as_ref(),
                        DocumentKind::SkillIcon,
                    );
                }
            }
            SchemaDocument::Post(post) => {
                push_list(&mut edges, "authors", post.authors.as_deref(), DocumentKind::Person);
                push_list(
                    &mut edges,
                    "technologies",
                    post.technologies.as_deref(),
                    DocumentKind::SkillIcon,
                );
            }
            SchemaDocument::Project(project) => {
                push_list(
                    &mut edges,
                    "contributors",
                    project.contributors.as_deref(),
                    DocumentKind::Person,
                );
                push_list(
                    &mut edges,
                    "technologies",
                    project.technologies.as_deref(),
                    DocumentKind::SkillIcon,
                );
            }
            SchemaDocument::SkillIcon(_) => {}
        }
        edges
    }
}

fn push_edge(
    edges: &mut Vec<ReferenceEdge>,
    field: String,
    reference: Option<&Reference>,
    expected: DocumentKind,
) {
    if let Some(target) = reference.and_then(Reference::target_id) {
        edges.push(ReferenceEdge {
            field,
            target: target.to_string(),
            expected,
        });
    }
}

fn push_list(
    edges: &mut Vec<ReferenceEdge>,
    field: &str,
    references: Option<&[Reference]>,
    expected: DocumentKind,
) {
    for (index, reference) in references.unwrap_or_default().iter().enumerate() {
        push_edge(edges, item_path(field, index), Some(reference), expected);
    }
}
