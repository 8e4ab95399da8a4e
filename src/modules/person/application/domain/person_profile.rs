use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::schema::application::domain::entities::{
    CareerSummaryItem, ImageField, SkillIcon, Slug,
};

/// Published view of a person with skill icons dereferenced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonProfile {
    #[serde(rename = "_id")]
    pub id: String,

    pub slug: Option<Slug>,
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<ImageField>,

    pub job_title: Option<String>,
    pub tagline: Option<String>,
    pub bio: Option<String>,

    #[serde(deserialize_with = "null_as_empty")]
    pub career_summary: Vec<CareerSummaryItem>,

    #[serde(deserialize_with = "null_as_empty")]
    pub skills: Vec<ProfileSkill>,

    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileSkill {
    #[serde(rename = "type")]
    pub category: Option<String>,

    /// `None` when the referenced icon no longer exists.
    pub skill_icon: Option<SkillIcon>,

    pub description: Option<String>,
    pub years_of_experience: Option<f64>,
    pub is_featured: Option<bool>,
}

impl PersonProfile {
    pub fn featured_skills(&self) -> impl Iterator<Item = &ProfileSkill> {
        self.skills
            .iter()
            .filter(|skill| skill.is_featured.unwrap_or(false))
    }
}

// The store projects missing arrays as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_projected_profile() {
        let profile: PersonProfile = serde_json::from_value(json!({
            "_id": "person-zefang-shen",
            "slug": { "_type": "slug", "current": "zefang-shen" },
            "firstName": "Zefang",
            "middleName": null,
            "lastName": "Shen",
            "careerSummary": null,
            "skills": [
                {
                    "type": "software-development",
                    "skillIcon": { "_id": "skillIcon-rust", "name": "Rust", "icon": "<svg></svg>" },
                    "description": "Systems programming",
                    "yearsOfExperience": 4,
                    "isFeatured": true
                },
                { "type": "data-science", "skillIcon": null, "isFeatured": false }
            ],
            "publishedAt": "2024-01-15T08:00:00Z"
        }))
        .unwrap();

        assert_eq!(profile.slug.as_ref().and_then(Slug::current), Some("zefang-shen"));
        assert!(profile.career_summary.is_empty());
        assert_eq!(profile.skills.len(), 2);
        assert_eq!(
            profile.skills[0].skill_icon.as_ref().and_then(|i| i.name.as_deref()),
            Some("Rust")
        );
        assert_eq!(profile.skills[1].skill_icon, None);
        assert_eq!(profile.featured_skills().count(), 1);
    }
}
