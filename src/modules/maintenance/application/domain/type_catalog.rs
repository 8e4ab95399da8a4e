use std::collections::BTreeSet;

use crate::modules::schema::application::domain::entities::DocumentKind;

/// System types the store manages itself. They must never be deleted.
pub const RESERVED_TYPES: [&str; 7] = [
    "system.group",
    "system.retention",
    "system.user",
    "system.role",
    "system.permission",
    "system.token",
    "sanity.imageAsset",
];

/// Type tags that are expected in the dataset: the declared schema types
/// plus the reserved system types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCatalog {
    declared: BTreeSet<String>,
    reserved: BTreeSet<String>,
}

impl TypeCatalog {
    pub fn new<D, R>(declared: D, reserved: R) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            declared: declared.into_iter().map(Into::into).collect(),
            reserved: reserved.into_iter().map(Into::into).collect(),
        }
    }

    /// Declared types of this schema and the fixed reserved list.
    pub fn schema_default() -> Self {
        Self::new(DocumentKind::type_names(), RESERVED_TYPES)
    }

    /// Builds the catalog from operator input. An empty `declared` list falls
    /// back to the schema types; `extra_reserved` adds to the fixed list.
    pub fn from_options(declared: Vec<String>, extra_reserved: Vec<String>) -> Self {
        let declared: Vec<String> = declared
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        let mut catalog = if declared.is_empty() {
            Self::schema_default()
        } else {
            Self::new(declared, RESERVED_TYPES)
        };
        catalog.reserved.extend(
            extra_reserved
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        );
        catalog
    }

    pub fn is_known(&self, doc_type: &str) -> bool {
        self.declared.contains(doc_type) || self.reserved.contains(doc_type)
    }

    pub fn declared(&self) -> impl Iterator<Item = &str> {
        self.declared.iter().map(String::as_str)
    }

    pub fn reserved(&self) -> impl Iterator<Item = &str> {
        self.reserved.iter().map(String::as_str)
    }
}
