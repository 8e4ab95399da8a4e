pub mod field_rules;

pub use field_rules::{
    is_accepted_url, is_svg_markup, CalloutTone, CodeLanguage, Decorator, ImageSize, ListStyle,
    ProjectStatus, SkillCategory, TextStyle,
};
