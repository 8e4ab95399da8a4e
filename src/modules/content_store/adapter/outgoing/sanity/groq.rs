// GROQ queries sent to the content lake.

pub const ALL_HEADERS: &str = "*[]{ _id, _type }";

pub const SUMMARIES_BY_ID: &str = "*[_id in $ids]{ _id, _type, title, name }";

pub const HEADER_BY_TYPE_AND_ID: &str = "*[_type == $type && _id == $id][0]{ _id, _type }";

/// Slice bounds must be literals, so the limit is written into the query.
pub fn recent_by_type(limit: usize) -> String {
    format!("*[_type == $type] | order(_createdAt desc) [0...{limit}]")
}

pub const SLUG_TAKEN: &str = "count(*[_type == $type && slug.current == $slug]) > 0";

pub const PERSON_PROFILE_BY_SLUG: &str = r#"*[_type == "person" && slug.current == $slug][0]{
  _id,
  slug,
  firstName,
  middleName,
  lastName,
  photo,
  jobTitle,
  tagline,
  bio,
  careerSummary[]{ name, count, description },
  skills[]{ "type": type, skillIcon->{ _id, name, icon }, description, yearsOfExperience, isFeatured },
  publishedAt
}"#;
