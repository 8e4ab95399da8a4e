use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{FeaturedImage, Reference, SeoSettings};
use super::content_block::{validate_content, ContentBlock};
use crate::modules::schema::application::domain::policies::field_rules::{
    POST_SUMMARY_MAX, POST_TITLE_MAX,
};
use crate::modules::schema::application::domain::validation::{item_path, FieldValidator};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// References to `person` documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Reference>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<FeaturedImage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentBlock>>,

    /// References to `skillIcon` documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<Reference>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<f64>,

    /// Original article URL when the post is syndicated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn validate_into(&self, v: &mut FieldValidator) {
        if v.required_text("title", self.title.as_deref()) {
            v.max_length("title", self.title.as_deref(), POST_TITLE_MAX);
        }
        if v.required_text("summary", self.summary.as_deref()) {
            v.max_length("summary", self.summary.as_deref(), POST_SUMMARY_MAX);
        }

        if v.required_list("authors", self.authors.as_ref(), 1) {
            for (index, author) in self.authors.iter().flatten().enumerate() {
                v.reference(&item_path("authors", index), Some(author), true);
            }
        }

        if let Some(image) = &self.featured_image {
            image.validate_at("featuredImage", v);
        }

        validate_content("content", self.content.as_ref(), v);

        for (index, technology) in self.technologies.iter().flatten().enumerate() {
            v.reference(&item_path("technologies", index), Some(technology), true);
        }

        v.url("mediumUrl", self.medium_url.as_deref());

        if let Some(seo) = &self.seo {
            seo.validate_at("seo", v);
        }

        v.required("publishedAt", self.published_at.as_ref());
    }

    pub fn authors(&self) -> &[Reference] {
        self.authors.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::schema::application::domain::entities::SeoSettings;
    use crate::tests::support::fixtures::valid_post;

    fn violations(post: &Post) -> Vec<String> {
        let mut v = FieldValidator::new();
        post.validate_into(&mut v);
        v.into_violations().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn valid_post_passes() {
        assert!(violations(&valid_post()).is_empty());
    }

    #[test]
    fn post_needs_at_least_one_author() {
        let post = Post {
            authors: Some(vec![]),
            ..valid_post()
        };
        assert_eq!(violations(&post), vec!["authors: 0 items < minimum 1"]);
    }

    #[test]
    fn title_and_summary_limits() {
        let post = Post {
            title: Some("t".repeat(201)),
            summary: Some("s".repeat(301)),
            ..valid_post()
        };
        assert_eq!(
            violations(&post),
            vec![
                "title: length 201 > maximum 200",
                "summary: length 301 > maximum 300"
            ]
        );
    }

    #[test]
    fn seo_description_is_capped() {
        let post = Post {
            seo: Some(SeoSettings {
                meta_description: Some("d".repeat(161)),
                meta_keywords: Some(vec!["rust".into()]),
            }),
            ..valid_post()
        };
        assert_eq!(
            violations(&post),
            vec!["seo.metaDescription: length 161 > maximum 160"]
        );
    }

    #[test]
    fn missing_content_and_publish_time_are_reported() {
        let post = Post {
            content: None,
            published_at: None,
            ..valid_post()
        };
        assert_eq!(
            violations(&post),
            vec!["content: is required", "publishedAt: is required"]
        );
    }

    #[test]
    fn external_url_must_be_absolute() {
        let post = Post {
            medium_url: Some("medium.com/post".into()),
            ..valid_post()
        };
        assert_eq!(
            violations(&post),
            vec!["mediumUrl: \"medium.com/post\" is not a valid URL"]
        );
    }
}
