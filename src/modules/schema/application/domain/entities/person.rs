use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{ImageField, Reference, Slug};
use crate::modules::schema::application::domain::policies::field_rules::{
    PERSON_BIO_MAX, PERSON_BIO_MIN, PERSON_JOB_TITLE_MAX, PERSON_TAGLINE_MAX,
};
use crate::modules::schema::application::domain::policies::SkillCategory;
use crate::modules::schema::application::domain::validation::{
    field_path, item_path, FieldValidator,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Derived from first and last name when the person is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<ImageField>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_summary: Option<Vec<CareerSummaryItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerSummaryItem {
    #[serde(rename = "_key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    #[serde(rename = "_key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_icon: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

impl Skill {
    pub fn category(&self) -> Option<SkillCategory> {
        self.category.as_deref().and_then(SkillCategory::parse)
    }

    fn validate_at(&self, prefix: &str, v: &mut FieldValidator) {
        let category = field_path(prefix, "type");
        if v.required_text(&category, self.category.as_deref()) {
            v.one_of(&category, self.category.as_deref(), SkillCategory::VALUES);
        }
        v.reference(
            &field_path(prefix, "skillIcon"),
            self.skill_icon.as_ref(),
            true,
        );
        v.required_text(
            &field_path(prefix, "description"),
            self.description.as_deref(),
        );
        v.required(
            &field_path(prefix, "yearsOfExperience"),
            self.years_of_experience.as_ref(),
        );
        v.required(&field_path(prefix, "isFeatured"), self.is_featured.as_ref());
    }
}

impl CareerSummaryItem {
    fn validate_at(&self, prefix: &str, v: &mut FieldValidator) {
        v.required_text(&field_path(prefix, "name"), self.name.as_deref());
        v.required(&field_path(prefix, "count"), self.count.as_ref());
        v.required_text(
            &field_path(prefix, "description"),
            self.description.as_deref(),
        );
    }
}

impl Person {
    pub fn validate_into(&self, v: &mut FieldValidator) {
        v.required_text("firstName", self.first_name.as_deref());
        v.required_text("lastName", self.last_name.as_deref());
        v.required_text(
            "slug",
            self.slug.as_ref().and_then(|slug| slug.current()),
        );

        if v.required_text("jobTitle", self.job_title.as_deref()) {
            v.max_length("jobTitle", self.job_title.as_deref(), PERSON_JOB_TITLE_MAX);
        }
        if v.required_text("tagline", self.tagline.as_deref()) {
            v.max_length("tagline", self.tagline.as_deref(), PERSON_TAGLINE_MAX);
        }
        if v.required_text("bio", self.bio.as_deref()) {
            v.length(
                "bio",
                self.bio.as_deref(),
                Some(PERSON_BIO_MIN),
                Some(PERSON_BIO_MAX),
            );
        }

        for (index, item) in self.career_summary.iter().flatten().enumerate() {
            item.validate_at(&item_path("careerSummary", index), v);
        }
        for (index, skill) in self.skills.iter().flatten().enumerate() {
            skill.validate_at(&item_path("skills", index), v);
        }

        v.required("publishedAt", self.published_at.as_ref());
    }

    /// `first last`, trimmed. `None` when both names are blank.
    pub fn display_name(&self) -> Option<String> {
        let name = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        let name = name.trim();
        (!name.is_empty()).then(|| name.to_string())
    }

    pub fn skills(&self) -> &[Skill] {
        self.skills.as_deref().unwrap_or_default()
    }
}
