use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::schema::application::domain::policies::field_rules::SEO_META_DESCRIPTION_MAX;
use crate::modules::schema::application::domain::validation::{field_path, FieldValidator};

/// Pointer to another document by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "_type", default = "Reference::type_name")]
    pub kind: String,

    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(rename = "_ref", default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(rename = "_weak", default, skip_serializing_if = "Option::is_none")]
    pub weak: Option<bool>,
}

impl Default for Reference {
    fn default() -> Self {
        Self {
            kind: Self::type_name(),
            key: None,
            target: None,
            weak: None,
        }
    }
}

impl Reference {
    fn type_name() -> String {
        "reference".to_string()
    }

    pub fn to(id: impl Into<String>) -> Self {
        Self {
            target: Some(id.into()),
            ..Self::default()
        }
    }

    /// Target id, ignoring blank values.
    pub fn target_id(&self) -> Option<&str> {
        self.target.as_deref().filter(|id| !id.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slug {
    #[serde(rename = "_type", default = "Slug::type_name")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
}

impl Slug {
    fn type_name() -> String {
        "slug".to_string()
    }

    pub fn new(current: impl Into<String>) -> Self {
        Self {
            kind: Self::type_name(),
            current: Some(current.into()),
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

/// Image field whose asset is resolved by the store. The asset and the crop
/// data are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageField {
    #[serde(rename = "_type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotspot: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<Value>,
}

/// Main image of a post or project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturedImage {
    #[serde(rename = "_type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotspot: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl FeaturedImage {
    pub fn validate_at(&self, prefix: &str, v: &mut FieldValidator) {
        v.required_text(&field_path(prefix, "alt"), self.alt.as_deref());
        v.url(&field_path(prefix, "sourceUrl"), self.source_url.as_deref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<Vec<String>>,
}

impl SeoSettings {
    pub fn validate_at(&self, prefix: &str, v: &mut FieldValidator) {
        v.max_length(
            &field_path(prefix, "metaDescription"),
            self.meta_description.as_deref(),
            SEO_META_DESCRIPTION_MAX,
        );
    }
}
