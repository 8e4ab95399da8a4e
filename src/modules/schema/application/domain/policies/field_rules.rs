// src/modules/schema/application/domain/policies/field_rules.rs

//
// ──────────────────────────────────────────────────────────
// Length limits
// ──────────────────────────────────────────────────────────
//

pub const PERSON_JOB_TITLE_MAX: usize = 50;
pub const PERSON_TAGLINE_MAX: usize = 50;
pub const PERSON_BIO_MIN: usize = 10;
pub const PERSON_BIO_MAX: usize = 1024;

pub const POST_TITLE_MAX: usize = 200;
pub const POST_SUMMARY_MAX: usize = 300;

pub const PROJECT_TITLE_MAX: usize = 500;
pub const PROJECT_SUMMARY_MAX: usize = 500;

pub const SEO_META_DESCRIPTION_MAX: usize = 160;

pub const SLUG_MAX: usize = 200;

/// Schemes accepted by `url` fields.
pub const URL_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

//
// ──────────────────────────────────────────────────────────
// Value lists
// ──────────────────────────────────────────────────────────
//

/// Declares a closed list of string values as a typed enum.
macro_rules! value_list {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

value_list! {
    /// Category of a person's skill entry.
    SkillCategory {
        Ai => "ai",
        SoftwareDevelopment => "software-development",
        Tools => "tools",
        Professional => "professional",
    }
}

value_list! {
    ProjectStatus {
        Planning => "planning",
        InProgress => "in-progress",
        Completed => "completed",
        OnHold => "on-hold",
        Cancelled => "cancelled",
        Maintenance => "maintenance",
    }
}

value_list! {
    CalloutTone {
        Info => "info",
        Warning => "warning",
        Error => "error",
        Success => "success",
    }
}

value_list! {
    CodeLanguage {
        Python => "python",
        TypeScript => "typescript",
        CSharp => "csharp",
        JavaScript => "javascript",
        Html => "html",
        Css => "css",
        Json => "json",
        Bash => "bash",
        Sql => "sql",
    }
}

value_list! {
    ImageSize {
        Small => "small",
        Medium => "medium",
        Large => "large",
        FullWidth => "fullWidth",
    }
}

value_list! {
    TextStyle {
        Normal => "normal",
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        Blockquote => "blockquote",
    }
}

value_list! {
    ListStyle {
        Bullet => "bullet",
        Number => "number",
    }
}

value_list! {
    /// Inline decorators allowed on rich text spans.
    Decorator {
        Strong => "strong",
        Emphasis => "em",
        Code => "code",
        Underline => "underline",
        StrikeThrough => "strike-through",
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::InProgress
    }
}

impl Default for CalloutTone {
    fn default() -> Self {
        CalloutTone::Info
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        ImageSize::Medium
    }
}

//
// ──────────────────────────────────────────────────────────
// Shape checks
// ──────────────────────────────────────────────────────────
//

/// Shallow SVG check: the trimmed markup starts with `<svg` and ends with
/// `</svg>`. Well-formedness of the XML in between is not inspected.
pub fn is_svg_markup(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.starts_with("<svg") && trimmed.ends_with("</svg>")
}

/// Absolute URL with one of [`URL_SCHEMES`].
pub fn is_accepted_url(value: &str) -> bool {
    match reqwest::Url::parse(value) {
        Ok(url) => URL_SCHEMES.contains(&url.scheme()),
        Err(_) => false,
    }
}
