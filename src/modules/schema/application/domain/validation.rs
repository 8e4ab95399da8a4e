// src/modules/schema/application/domain/validation.rs
use std::fmt;

use super::entities::Reference;
use super::policies::{is_accepted_url, is_svg_markup};

//
// ──────────────────────────────────────────────────────────
// Rules & violations
// ──────────────────────────────────────────────────────────
//

/// A broken field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required,
    TooShort { actual: usize, min: usize },
    TooLong { actual: usize, max: usize },
    TooFewItems { actual: usize, min: usize },
    NotAllowed {
        value: String,
        allowed: &'static [&'static str],
    },
    InvalidSvg,
    InvalidUrl { value: String },
    DanglingReference { target: String },
    WrongReferenceType {
        target: String,
        expected: String,
        actual: String,
    },
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => write!(f, "is required"),
            Rule::TooShort { actual, min } => write!(f, "length {actual} < minimum {min}"),
            Rule::TooLong { actual, max } => write!(f, "length {actual} > maximum {max}"),
            Rule::TooFewItems { actual, min } => write!(f, "{actual} items < minimum {min}"),
            Rule::NotAllowed { value, allowed } => {
                write!(f, "\"{value}\" is not one of [{}]", allowed.join(", "))
            }
            Rule::InvalidSvg => write!(f, "must start with <svg and end with </svg>"),
            Rule::InvalidUrl { value } => write!(f, "\"{value}\" is not a valid URL"),
            Rule::DanglingReference { target } => {
                write!(f, "reference \"{target}\" does not resolve")
            }
            Rule::WrongReferenceType {
                target,
                expected,
                actual,
            } => write!(
                f,
                "reference \"{target}\" points to a {actual}, expected {expected}"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub rule: Rule,
}

impl Violation {
    pub fn new(field: impl Into<String>, rule: Rule) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.rule)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", render(.0))]
pub struct ValidationErrors(pub Vec<Violation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

fn render(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Joins a parent path and a field name: `("skills[0]", "description")`
/// becomes `skills[0].description`.
pub fn field_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

pub fn item_path(prefix: &str, index: usize) -> String {
    format!("{prefix}[{index}]")
}

//
// ──────────────────────────────────────────────────────────
// Field validator
// ──────────────────────────────────────────────────────────
//

/// Collects violations while a document is walked field by field.
///
/// Every check is a no-op for absent optional values: only the `required*`
/// checks complain about missing data.
#[derive(Debug, Default)]
pub struct FieldValidator {
    violations: Vec<Violation>,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, rule: Rule) {
        self.violations.push(Violation::new(field, rule));
    }

    /// Required string: absent or blank counts as missing.
    pub fn required_text(&mut self, field: &str, value: Option<&str>) -> bool {
        match value {
            Some(v) if !v.trim().is_empty() => true,
            _ => {
                self.push(field, Rule::Required);
                false
            }
        }
    }

    pub fn required<T>(&mut self, field: &str, value: Option<&T>) -> bool {
        if value.is_none() {
            self.push(field, Rule::Required);
            return false;
        }
        true
    }

    /// Required list with a minimum item count. Absent reports `Required`,
    /// a present but shorter list reports `TooFewItems`.
    pub fn required_list<T>(&mut self, field: &str, value: Option<&Vec<T>>, min: usize) -> bool {
        match value {
            None => {
                self.push(field, Rule::Required);
                false
            }
            Some(items) if items.len() < min => {
                self.push(
                    field,
                    Rule::TooFewItems {
                        actual: items.len(),
                        min,
                    },
                );
                false
            }
            Some(_) => true,
        }
    }

    pub fn length(
        &mut self,
        field: &str,
        value: Option<&str>,
        min: Option<usize>,
        max: Option<usize>,
    ) {
        let Some(value) = value else {
            return;
        };
        let actual = value.chars().count();

        if let Some(min) = min {
            if actual < min {
                self.push(field, Rule::TooShort { actual, min });
            }
        }
        if let Some(max) = max {
            if actual > max {
                self.push(field, Rule::TooLong { actual, max });
            }
        }
    }

    pub fn max_length(&mut self, field: &str, value: Option<&str>, max: usize) {
        self.length(field, value, None, Some(max));
    }

    pub fn one_of(&mut self, field: &str, value: Option<&str>, allowed: &'static [&'static str]) {
        if let Some(value) = value {
            if !allowed.contains(&value) {
                self.push(
                    field,
                    Rule::NotAllowed {
                        value: value.to_string(),
                        allowed,
                    },
                );
            }
        }
    }

    pub fn svg_markup(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value {
            if !is_svg_markup(value) {
                self.push(field, Rule::InvalidSvg);
            }
        }
    }

    pub fn url(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value {
            if !is_accepted_url(value) {
                self.push(
                    field,
                    Rule::InvalidUrl {
                        value: value.to_string(),
                    },
                );
            }
        }
    }

    /// A present reference must carry its target id.
    pub fn reference(&mut self, field: &str, value: Option<&Reference>, required: bool) {
        match value {
            None if required => self.push(field, Rule::Required),
            None => {}
            Some(reference) => {
                if reference.target_id().is_none() {
                    self.push(field_path(field, "_ref"), Rule::Required);
                }
            }
        }
    }

    pub fn extend(&mut self, violations: impl IntoIterator<Item = Violation>) {
        self.violations.extend(violations);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_renders_field_and_rule() {
        let v = Violation::new("bio", Rule::TooShort { actual: 4, min: 10 });
        assert_eq!(v.to_string(), "bio: length 4 < minimum 10");

        let v = Violation::new(
            "skills[0].type",
            Rule::NotAllowed {
                value: "cooking".into(),
                allowed: &["ai", "tools"],
            },
        );
        assert_eq!(
            v.to_string(),
            "skills[0].type: \"cooking\" is not one of [ai, tools]"
        );
    }

    #[test]
    fn required_text_treats_blank_as_missing() {
        let mut v = FieldValidator::new();
        assert!(!v.required_text("firstName", Some("   ")));
        assert!(!v.required_text("lastName", None));
        assert!(v.required_text("jobTitle", Some("Engineer")));

        let errors = v.finish().unwrap_err();
        assert!(errors.has_field("firstName"));
        assert!(errors.has_field("lastName"));
        assert!(!errors.has_field("jobTitle"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut v = FieldValidator::new();
        // 5 characters, 10 bytes
        v.max_length("tagline", Some("ééééé"), 5);
        assert!(v.is_empty());

        v.length("bio", Some("short"), Some(10), Some(1024));
        assert_eq!(
            v.into_violations(),
            vec![Violation::new("bio", Rule::TooShort { actual: 5, min: 10 })]
        );
    }

    #[test]
    fn absent_optional_values_are_always_valid() {
        let mut v = FieldValidator::new();
        v.max_length("seo.metaDescription", None, 160);
        v.one_of("status", None, &["planning"]);
        v.svg_markup("icon", None);
        v.url("mediumUrl", None);
        v.reference("photo", None, false);
        assert!(v.finish().is_ok());
    }

    #[test]
    fn required_list_distinguishes_absent_from_short() {
        let mut v = FieldValidator::new();
        let empty: Vec<u8> = vec![];
        v.required_list::<u8>("authors", None, 1);
        v.required_list("contributors", Some(&empty), 1);

        let violations = v.into_violations();
        assert_eq!(violations[0].rule, Rule::Required);
        assert_eq!(
            violations[1].rule,
            Rule::TooFewItems { actual: 0, min: 1 }
        );
        assert_eq!(violations[1].to_string(), "contributors: 0 items < minimum 1");
    }

    #[test]
    fn reference_without_target_is_reported_on_ref_field() {
        let mut v = FieldValidator::new();
        v.reference("skills[0].skillIcon", Some(&Reference::default()), true);
        let violations = v.into_violations();
        assert_eq!(violations[0].field, "skills[0].skillIcon._ref");
    }

    #[test]
    fn errors_display_joins_violations() {
        let errors = ValidationErrors(vec![
            Violation::new("name", Rule::Required),
            Violation::new("icon", Rule::InvalidSvg),
        ]);
        assert_eq!(
            errors.to_string(),
            "name: is required; icon: must start with <svg and end with </svg>"
        );
    }
}
