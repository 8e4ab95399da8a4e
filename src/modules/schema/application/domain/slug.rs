use super::policies::field_rules::SLUG_MAX;

/// Lower-cases `source` and collapses every run of non-alphanumeric
/// characters into a single `-`, without leading or trailing dashes.
pub fn slugify(source: &str) -> String {
    let mut slug = String::with_capacity(source.len());
    let mut pending_dash = false;

    for ch in source.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    let truncated: String = slug.chars().take(SLUG_MAX).collect();
    truncated.trim_end_matches('-').to_string()
}

/// Slug source for a person is `<firstName>-<lastName>`. Both names must be
/// present.
pub fn person_slug(first_name: Option<&str>, last_name: Option<&str>) -> Option<String> {
    let first = first_name.map(str::trim).filter(|s| !s.is_empty())?;
    let last = last_name.map(str::trim).filter(|s| !s.is_empty())?;

    let slug = slugify(&format!("{first}-{last}"));
    (!slug.is_empty()).then_some(slug)
}
