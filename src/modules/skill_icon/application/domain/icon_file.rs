// src/modules/skill_icon/application/domain/icon_file.rs
use std::sync::OnceLock;

use regex::Regex;

use crate::modules::schema::application::domain::entities::{SchemaDocument, SkillIcon};

const ID_PREFIX: &str = "skillIcon-";

fn title_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").ok())
        .as_ref()
}

/// Icon name: the first `<title>` text, else the file name without `.svg`.
pub fn icon_name(svg: &str, file_name: &str) -> String {
    let title = title_pattern()
        .and_then(|pattern| pattern.captures(svg))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|title| !title.is_empty());

    match title {
        Some(title) => title.to_string(),
        None => file_name
            .strip_suffix(".svg")
            .or_else(|| file_name.strip_suffix(".SVG"))
            .unwrap_or(file_name)
            .to_string(),
    }
}

/// `skillIcon-` followed by the lower-cased name with every character
/// outside `[a-z0-9]` replaced by `-`.
pub fn icon_id(name: &str) -> String {
    let suffix: String = name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{ID_PREFIX}{suffix}")
}

/// SVG file read from an icon directory, ready to become a SkillIcon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFile {
    pub file_name: String,
    pub id: String,
    pub name: String,
    pub svg: String,
}

impl IconFile {
    pub fn new(file_name: impl Into<String>, content: &str) -> Self {
        let file_name = file_name.into();
        let name = icon_name(content, &file_name);
        Self {
            id: icon_id(&name),
            svg: content.trim().to_string(),
            file_name,
            name,
        }
    }

    pub fn to_document(&self) -> SchemaDocument {
        SchemaDocument::SkillIcon(SkillIcon {
            id: Some(self.id.clone()),
            name: Some(self.name.clone()),
            icon: Some(self.svg.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_comes_from_title_element() {
        let svg = r#"<svg><TITLE id="t"> PostgreSQL </TITLE><path/></svg>"#;
        assert_eq!(icon_name(svg, "pg.svg"), "PostgreSQL");
    }

    #[test]
    fn name_falls_back_to_file_stem() {
        assert_eq!(icon_name("<svg><path/></svg>", "docker.svg"), "docker");
        assert_eq!(icon_name("<svg><title>  </title></svg>", "go.svg"), "go");
    }

    #[test]
    fn id_replaces_everything_outside_ascii_alphanumerics() {
        assert_eq!(icon_id("Rust"), "skillIcon-rust");
        assert_eq!(icon_id("Node.js"), "skillIcon-node-js");
        assert_eq!(icon_id("C# / .NET"), "skillIcon-c-----net");
    }

    #[test]
    fn icon_file_trims_markup() {
        let file = IconFile::new("rust.svg", "\n  <svg><title>Rust</title></svg>\n");
        assert_eq!(file.id, "skillIcon-rust");
        assert_eq!(file.svg, "<svg><title>Rust</title></svg>");
        assert!(file.to_document().validate().is_ok());
    }
}
