// src/modules/schema/application/domain/preview.rs
//
// List previews for documents and blocks, computed from typed fields.

use std::collections::HashMap;

use super::entities::{
    CalloutBlock, CodeBlock, ContentBlock, Person, Post, Project, Reference, SchemaDocument,
    Skill, SkillIcon,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub title: String,
    pub subtitle: Option<String>,
}

impl Preview {
    fn new(title: impl Into<String>, subtitle: Option<String>) -> Self {
        Self {
            title: title.into(),
            subtitle,
        }
    }
}

/// Documents of one batch by `_id`. Previews resolve their references
/// against it instead of the store.
#[derive(Debug, Default)]
pub struct PreviewContext<'a> {
    documents: HashMap<&'a str, &'a SchemaDocument>,
}

impl<'a> PreviewContext<'a> {
    pub fn new(documents: impl IntoIterator<Item = &'a SchemaDocument>) -> Self {
        Self {
            documents: documents
                .into_iter()
                .filter_map(|doc| doc.id().map(|id| (id, doc)))
                .collect(),
        }
    }

    fn lookup(&self, reference: Option<&Reference>) -> Option<&'a SchemaDocument> {
        reference
            .and_then(Reference::target_id)
            .and_then(|id| self.documents.get(id).copied())
    }

    fn person(&self, reference: Option<&Reference>) -> Option<&'a Person> {
        match self.lookup(reference) {
            Some(SchemaDocument::Person(person)) => Some(person),
            _ => None,
        }
    }

    fn skill_icon(&self, reference: Option<&Reference>) -> Option<&'a SkillIcon> {
        match self.lookup(reference) {
            Some(SchemaDocument::SkillIcon(icon)) => Some(icon),
            _ => None,
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn person_preview(person: &Person) -> Preview {
    let skills = person.skills();
    let total = skills.len();
    let featured = skills
        .iter()
        .filter(|skill| skill.is_featured.unwrap_or(false))
        .count();
    let plural = if total == 1 { "" } else { "s" };

    Preview::new(
        person
            .display_name()
            .unwrap_or_else(|| "Untitled Person".to_string()),
        Some(format!("{total} skill{plural} • {featured} featured")),
    )
}

/// `icon` is the skill icon the entry references, when it resolved.
fn skill_preview(skill: &Skill, icon: Option<&SkillIcon>) -> Preview {
    let title = icon
        .and_then(|icon| icon.name.clone())
        .unwrap_or_else(|| "Untitled Skill".to_string());

    let description = match skill.description.as_deref() {
        Some(text) if !text.is_empty() => format!("{}...", truncate(text, 20)),
        _ => "No description".to_string(),
    };
    let subtitle = if skill.is_featured.unwrap_or(false) {
        format!("⭐ {description}")
    } else {
        description
    };

    Preview::new(title, Some(subtitle))
}

fn authored_preview(
    title: Option<&str>,
    first: Option<&Person>,
    count: usize,
    overflow: &str,
) -> Preview {
    let mut names = Vec::new();
    if let Some(person) = first {
        if let (Some(first_name), Some(last_name)) =
            (person.first_name.as_deref(), person.last_name.as_deref())
        {
            names.push(format!("{first_name} {last_name}"));
        }
    }
    if count > 1 {
        names.push(overflow.to_string());
    }

    let by = if names.is_empty() {
        "Unknown Author".to_string()
    } else {
        names.join(", ")
    };

    Preview::new(title.unwrap_or_default(), Some(format!("by {by}")))
}

/// `first_author` is the resolved document behind `authors[0]`.
fn post_preview(post: &Post, first_author: Option<&Person>) -> Preview {
    authored_preview(
        post.title.as_deref(),
        first_author,
        post.authors().len(),
        "et al.",
    )
}

fn project_preview(project: &Project, first_contributor: Option<&Person>) -> Preview {
    authored_preview(
        project.title.as_deref(),
        first_contributor,
        project.contributors().len(),
        "...",
    )
}

fn code_preview(block: &CodeBlock) -> Preview {
    let language = block.language.as_deref().unwrap_or("Plain text");
    Preview::new(
        format!("Code: {language}"),
        block
            .code
            .as_deref()
            .map(|code| format!("{}...", truncate(code, 50))),
    )
}

fn callout_preview(block: &CalloutBlock) -> Preview {
    let tone = block.tone().unwrap_or_default();
    let text = block
        .content
        .iter()
        .flatten()
        .next()
        .and_then(|item| item.as_block().first_text())
        .unwrap_or("No content");

    Preview::new(
        format!("{} Callout", tone.as_str().to_uppercase()),
        Some(text.to_string()),
    )
}

fn block_previews(blocks: Option<&Vec<ContentBlock>>) -> Vec<Preview> {
    blocks
        .into_iter()
        .flatten()
        .filter_map(|block| match block {
            ContentBlock::Code(code) => Some(code_preview(code)),
            ContentBlock::Callout(callout) => Some(callout_preview(callout)),
            ContentBlock::RichText(_) | ContentBlock::Image(_) => None,
        })
        .collect()
}

/// Preview of a whole document. Authors and contributors resolve through
/// `context`; anything outside it counts as unknown.
pub fn document_preview(document: &SchemaDocument, context: &PreviewContext<'_>) -> Preview {
    match document {
        SchemaDocument::Person(person) => person_preview(person),
        SchemaDocument::Post(post) => post_preview(post, context.person(post.authors().first())),
        SchemaDocument::Project(project) => {
            project_preview(project, context.person(project.contributors().first()))
        }
        SchemaDocument::SkillIcon(icon) => Preview::new(
            icon.name.clone().unwrap_or_else(|| "Untitled Skill Icon".to_string()),
            None,
        ),
    }
}

/// Previews of a document's nested entries: a person's skills, and the code
/// and callout blocks of post and project content.
pub fn entry_previews(document: &SchemaDocument, context: &PreviewContext<'_>) -> Vec<Preview> {
    match document {
        SchemaDocument::Person(person) => person
            .skills()
            .iter()
            .map(|skill| skill_preview(skill, context.skill_icon(skill.skill_icon.as_ref())))
            .collect(),
        SchemaDocument::Post(post) => block_previews(post.content.as_ref()),
        SchemaDocument::Project(project) => block_previews(project.description.as_ref()),
        SchemaDocument::SkillIcon(_) => Vec::new(),
    }
}
