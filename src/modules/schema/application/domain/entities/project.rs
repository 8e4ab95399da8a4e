use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{FeaturedImage, Reference, SeoSettings};
use super::content_block::{validate_content, ContentBlock};
use crate::modules::schema::application::domain::policies::field_rules::{
    PROJECT_SUMMARY_MAX, PROJECT_TITLE_MAX,
};
use crate::modules::schema::application::domain::policies::ProjectStatus;
use crate::modules::schema::application::domain::validation::{item_path, FieldValidator};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// References to `person` documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Vec<Reference>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<FeaturedImage>,

    /// Content blocks describing the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<ContentBlock>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<Reference>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl Project {
    pub fn validate_into(&self, v: &mut FieldValidator) {
        if v.required_text("title", self.title.as_deref()) {
            v.max_length("title", self.title.as_deref(), PROJECT_TITLE_MAX);
        }
        if v.required_text("summary", self.summary.as_deref()) {
            v.max_length("summary", self.summary.as_deref(), PROJECT_SUMMARY_MAX);
        }

        if v.required_list("contributors", self.contributors.as_ref(), 1) {
            for (index, contributor) in self.contributors.iter().flatten().enumerate() {
                v.reference(&item_path("contributors", index), Some(contributor), true);
            }
        }

        if let Some(image) = &self.featured_image {
            image.validate_at("featuredImage", v);
        }

        validate_content("description", self.description.as_ref(), v);

        for (index, technology) in self.technologies.iter().flatten().enumerate() {
            v.reference(&item_path("technologies", index), Some(technology), true);
        }

        if let Some(seo) = &self.seo {
            seo.validate_at("seo", v);
        }

        if v.required_text("status", self.status.as_deref()) {
            v.one_of("status", self.status.as_deref(), ProjectStatus::VALUES);
        }

        v.required("startDate", self.start_date.as_ref());
    }

    pub fn status(&self) -> Option<ProjectStatus> {
        self.status.as_deref().and_then(ProjectStatus::parse)
    }

    pub fn contributors(&self) -> &[Reference] {
        self.contributors.as_deref().unwrap_or_default()
    }
}
