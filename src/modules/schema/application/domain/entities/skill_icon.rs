use serde::{Deserialize, Serialize};

use crate::modules::schema::application::domain::validation::FieldValidator;

/// Named SVG icon shared by many skill entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillIcon {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Raw SVG markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SkillIcon {
    pub fn validate_into(&self, v: &mut FieldValidator) {
        v.required_text("name", self.name.as_deref());
        if v.required_text("icon", self.icon.as_deref()) {
            v.svg_markup("icon", self.icon.as_deref());
        }
    }
}
