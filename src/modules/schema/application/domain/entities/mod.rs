mod common;
mod content_block;
mod document;
mod person;
mod post;
mod project;
mod skill_icon;

pub use common::{FeaturedImage, ImageField, Reference, SeoSettings, Slug};
pub use content_block::{
    validate_content, CalloutBlock, CalloutContent, CodeBlock, ContentBlock, ImageBlock, MarkDef,
    RichTextBlock, Span,
};
pub use document::{DocumentKind, ParseDocumentError, ReferenceEdge, SchemaDocument};
pub use person::{CareerSummaryItem, Person, Skill};
pub use post::Post;
pub use project::Project;
pub use skill_icon::SkillIcon;
