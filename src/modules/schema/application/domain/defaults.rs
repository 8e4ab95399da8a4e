// src/modules/schema/application/domain/defaults.rs
//
// Values filled in when a document is first created. Fields the author
// already set are left alone, except the person slug which is always
// derived from the names.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::entities::{
    CalloutBlock, ContentBlock, ImageBlock, Person, Post, Project, Reference, RichTextBlock,
    SchemaDocument, Slug,
};
use super::policies::{CalloutTone, ImageSize, ProjectStatus};
use super::slug::person_slug;

/// Random 12 hex character key for array items.
pub fn generate_key() -> String {
    Uuid::new_v4().simple().to_string().chars().take(12).collect()
}

pub fn apply_creation_defaults(
    document: &mut SchemaDocument,
    now: DateTime<Utc>,
    next_key: &mut dyn FnMut() -> String,
) {
    match document {
        SchemaDocument::Person(person) => person_defaults(person, now, next_key),
        SchemaDocument::Post(post) => post_defaults(post, now, next_key),
        SchemaDocument::Project(project) => project_defaults(project, now, next_key),
        SchemaDocument::SkillIcon(_) => {}
    }
}

fn fill_key(key: &mut Option<String>, next_key: &mut dyn FnMut() -> String) {
    if key.as_deref().map_or(true, |k| k.trim().is_empty()) {
        *key = Some(next_key());
    }
}

fn person_defaults(person: &mut Person, now: DateTime<Utc>, next_key: &mut dyn FnMut() -> String) {
    person.slug = person_slug(person.first_name.as_deref(), person.last_name.as_deref())
        .map(Slug::new);
    person.published_at.get_or_insert(now);

    for item in person.career_summary.iter_mut().flatten() {
        fill_key(&mut item.key, next_key);
    }
    for skill in person.skills.iter_mut().flatten() {
        fill_key(&mut skill.key, next_key);
        skill.is_featured.get_or_insert(false);
    }
}

fn post_defaults(post: &mut Post, now: DateTime<Utc>, next_key: &mut dyn FnMut() -> String) {
    post.is_draft.get_or_insert(true);
    post.published_at.get_or_insert(now);

    reference_keys(post.authors.as_mut(), next_key);
    reference_keys(post.technologies.as_mut(), next_key);
    content_defaults(post.content.as_mut(), next_key);
}

fn project_defaults(
    project: &mut Project,
    now: DateTime<Utc>,
    next_key: &mut dyn FnMut() -> String,
) {
    project
        .status
        .get_or_insert_with(|| ProjectStatus::default().as_str().to_string());
    project.is_featured.get_or_insert(false);
    project.is_draft.get_or_insert(true);
    project.start_date.get_or_insert(now);

    reference_keys(project.contributors.as_mut(), next_key);
    reference_keys(project.technologies.as_mut(), next_key);
    content_defaults(project.description.as_mut(), next_key);
}

fn reference_keys(references: Option<&mut Vec<Reference>>, next_key: &mut dyn FnMut() -> String) {
    for reference in references.into_iter().flatten() {
        fill_key(&mut reference.key, next_key);
    }
}

fn content_defaults(blocks: Option<&mut Vec<ContentBlock>>, next_key: &mut dyn FnMut() -> String) {
    for block in blocks.into_iter().flatten() {
        match block {
            ContentBlock::RichText(text) => rich_text_defaults(text, next_key),
            ContentBlock::Image(image) => image_defaults(image, next_key),
            ContentBlock::Code(code) => fill_key(&mut code.key, next_key),
            ContentBlock::Callout(callout) => callout_defaults(callout, next_key),
        }
    }
}

fn rich_text_defaults(block: &mut RichTextBlock, next_key: &mut dyn FnMut() -> String) {
    fill_key(&mut block.key, next_key);
    for span in &mut block.children {
        fill_key(&mut span.key, next_key);
    }
    for def in &mut block.mark_defs {
        if def.is_link() {
            def.blank.get_or_insert(true);
        }
    }
}

fn image_defaults(block: &mut ImageBlock, next_key: &mut dyn FnMut() -> String) {
    fill_key(&mut block.key, next_key);
    block
        .size
        .get_or_insert_with(|| ImageSize::default().as_str().to_string());
}

fn callout_defaults(block: &mut CalloutBlock, next_key: &mut dyn FnMut() -> String) {
    fill_key(&mut block.key, next_key);
    block
        .tone
        .get_or_insert_with(|| CalloutTone::default().as_str().to_string());
    for item in block.content.iter_mut().flatten() {
        rich_text_defaults(item.as_block_mut(), next_key);
    }
}
