use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::schema::application::domain::policies::{
    CalloutTone, CodeLanguage, Decorator, ImageSize, ListStyle, TextStyle,
};
use crate::modules::schema::application::domain::validation::{
    field_path, item_path, FieldValidator, Rule,
};

/// One unit of rich content inside an ordered content sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum ContentBlock {
    #[serde(rename = "block")]
    RichText(RichTextBlock),

    #[serde(rename = "image")]
    Image(ImageBlock),

    #[serde(rename = "codeBlock")]
    Code(CodeBlock),

    #[serde(rename = "callout")]
    Callout(CalloutBlock),
}

impl ContentBlock {
    pub fn validate_at(&self, prefix: &str, v: &mut FieldValidator) {
        match self {
            ContentBlock::RichText(block) => block.validate_at(prefix, v),
            ContentBlock::Image(block) => block.validate_at(prefix, v),
            ContentBlock::Code(block) => block.validate_at(prefix, v),
            ContentBlock::Callout(block) => block.validate_at(prefix, v),
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            ContentBlock::RichText(block) => block.key.as_deref(),
            ContentBlock::Image(block) => block.key.as_deref(),
            ContentBlock::Code(block) => block.key.as_deref(),
            ContentBlock::Callout(block) => block.key.as_deref(),
        }
    }
}

/// Validates an ordered content sequence stored under `field`.
pub fn validate_content(field: &str, blocks: Option<&Vec<ContentBlock>>, v: &mut FieldValidator) {
    if v.required_list(field, blocks, 1) {
        for (index, block) in blocks.into_iter().flatten().enumerate() {
            block.validate_at(&item_path(field, index), v);
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Rich text
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RichTextBlock {
    #[serde(rename = "_key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_item: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,

    pub children: Vec<Span>,

    pub mark_defs: Vec<MarkDef>,
}

impl RichTextBlock {
    pub fn validate_at(&self, prefix: &str, v: &mut FieldValidator) {
        v.one_of(
            &field_path(prefix, "style"),
            self.style.as_deref(),
            TextStyle::VALUES,
        );
        v.one_of(
            &field_path(prefix, "listItem"),
            self.list_item.as_deref(),
            ListStyle::VALUES,
        );

        for (index, def) in self.mark_defs.iter().enumerate() {
            def.validate_at(&item_path(&field_path(prefix, "markDefs"), index), v);
        }

        for (index, span) in self.children.iter().enumerate() {
            let span_path = item_path(&field_path(prefix, "children"), index);
            for mark in &span.marks {
                let annotated = self
                    .mark_defs
                    .iter()
                    .any(|def| def.key.as_deref() == Some(mark.as_str()));
                if !annotated && Decorator::parse(mark).is_none() {
                    v.push(
                        field_path(&span_path, "marks"),
                        Rule::NotAllowed {
                            value: mark.clone(),
                            allowed: Decorator::VALUES,
                        },
                    );
                }
            }
        }
    }

    /// Text of the first child span, if it has any.
    pub fn first_text(&self) -> Option<&str> {
        self.children
            .first()
            .and_then(|span| span.text.as_deref())
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Span {
    #[serde(rename = "_type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(rename = "_key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    pub marks: Vec<String>,
}

impl Span {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: Some("span".to_string()),
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Annotation attached to spans through `marks`. Only `link` is declared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkDef {
    #[serde(rename = "_type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(rename = "_key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blank: Option<bool>,
}

impl MarkDef {
    pub fn is_link(&self) -> bool {
        self.kind.as_deref() == Some("link")
    }

    fn validate_at(&self, prefix: &str, v: &mut FieldValidator) {
        if self.is_link() {
            let href = field_path(prefix, "href");
            if v.required_text(&href, self.href.as_deref()) {
                v.url(&href, self.href.as_deref());
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Image
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageBlock {
    #[serde(rename = "_key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotspot: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl ImageBlock {
    fn validate_at(&self, prefix: &str, v: &mut FieldValidator) {
        v.required_text(&field_path(prefix, "alt"), self.alt.as_deref());
        v.one_of(
            &field_path(prefix, "size"),
            self.size.as_deref(),
            ImageSize::VALUES,
        );
    }
}

//
// ──────────────────────────────────────────────────────────
// Code
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeBlock {
    #[serde(rename = "_key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl CodeBlock {
    fn validate_at(&self, prefix: &str, v: &mut FieldValidator) {
        v.one_of(
            &field_path(prefix, "language"),
            self.language.as_deref(),
            CodeLanguage::VALUES,
        );
        v.required_text(&field_path(prefix, "code"), self.code.as_deref());
    }
}

//
// ──────────────────────────────────────────────────────────
// Callout
// ──────────────────────────────────────────────────────────
//

/// Callout bodies only hold rich text blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum CalloutContent {
    #[serde(rename = "block")]
    Block(RichTextBlock),
}

impl CalloutContent {
    pub fn as_block(&self) -> &RichTextBlock {
        match self {
            CalloutContent::Block(block) => block,
        }
    }

    pub fn as_block_mut(&mut self) -> &mut RichTextBlock {
        match self {
            CalloutContent::Block(block) => block,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalloutBlock {
    #[serde(rename = "_key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<CalloutContent>>,
}

impl CalloutBlock {
    fn validate_at(&self, prefix: &str, v: &mut FieldValidator) {
        v.one_of(
            &field_path(prefix, "type"),
            self.tone.as_deref(),
            CalloutTone::VALUES,
        );

        let content = field_path(prefix, "content");
        if v.required_list(&content, self.content.as_ref(), 1) {
            for (index, item) in self.content.iter().flatten().enumerate() {
                item.as_block().validate_at(&item_path(&content, index), v);
            }
        }
    }

    pub fn tone(&self) -> Option<CalloutTone> {
        self.tone.as_deref().and_then(CalloutTone::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn violations_of(block: &ContentBlock) -> Vec<String> {
        let mut v = FieldValidator::new();
        block.validate_at("content[0]", &mut v);
        v.into_violations().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn blocks_are_read_by_type_tag() {
        let blocks: Vec<ContentBlock> = serde_json::from_value(json!([
            { "_type": "block", "_key": "a", "style": "h2", "children": [{ "_type": "span", "text": "Intro" }] },
            { "_type": "image", "_key": "b", "alt": "Diagram", "asset": { "_ref": "image-1" } },
            { "_type": "codeBlock", "_key": "c", "language": "bash", "code": "cargo test" },
            { "_type": "callout", "_key": "d", "type": "warning", "content": [
                { "_type": "block", "children": [{ "_type": "span", "text": "Careful" }] }
            ] }
        ]))
        .unwrap();

        assert!(matches!(blocks[0], ContentBlock::RichText(_)));
        assert!(matches!(blocks[1], ContentBlock::Image(_)));
        assert!(matches!(blocks[2], ContentBlock::Code(_)));
        match &blocks[3] {
            ContentBlock::Callout(callout) => {
                assert_eq!(callout.tone(), Some(CalloutTone::Warning));
                assert_eq!(
                    callout.content.as_ref().unwrap()[0].as_block().first_text(),
                    Some("Careful")
                );
            }
            other => panic!("Expected callout, got {:?}", other),
        }
        assert_eq!(blocks[3].key(), Some("d"));
    }

    #[test]
    fn unknown_block_type_is_rejected() {
        let result: Result<ContentBlock, _> =
            serde_json::from_value(json!({ "_type": "video", "url": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn callout_serializes_nested_block_type() {
        let callout = ContentBlock::Callout(CalloutBlock {
            tone: Some("info".into()),
            content: Some(vec![CalloutContent::Block(RichTextBlock {
                children: vec![Span::text("hello")],
                ..RichTextBlock::default()
            })]),
            ..CalloutBlock::default()
        });

        let value = serde_json::to_value(&callout).unwrap();
        assert_eq!(value["_type"], "callout");
        assert_eq!(value["content"][0]["_type"], "block");
        assert_eq!(value["content"][0]["children"][0]["text"], "hello");
    }

    #[test]
    fn code_block_requires_code_and_known_language() {
        let block = ContentBlock::Code(CodeBlock {
            language: Some("cobol".into()),
            ..CodeBlock::default()
        });

        let violations = violations_of(&block);
        assert_eq!(violations.len(), 2);
        assert!(violations[0].starts_with("content[0].language: \"cobol\" is not one of"));
        assert_eq!(violations[1], "content[0].code: is required");
    }

    #[test]
    fn callout_requires_at_least_one_block() {
        let block = ContentBlock::Callout(CalloutBlock {
            tone: Some("info".into()),
            content: Some(vec![]),
            ..CalloutBlock::default()
        });

        assert_eq!(
            violations_of(&block),
            vec!["content[0].content: 0 items < minimum 1".to_string()]
        );
    }

    #[test]
    fn image_block_requires_alt_and_known_size() {
        let block = ContentBlock::Image(ImageBlock {
            size: Some("huge".into()),
            ..ImageBlock::default()
        });

        let violations = violations_of(&block);
        assert_eq!(violations[0], "content[0].alt: is required");
        assert!(violations[1].starts_with("content[0].size:"));
    }

    #[test]
    fn rich_text_checks_marks_and_links() {
        let block: ContentBlock = serde_json::from_value(json!({
            "_type": "block",
            "style": "h5",
            "markDefs": [{ "_type": "link", "_key": "l1" }],
            "children": [
                { "_type": "span", "text": "see", "marks": ["l1", "strong", "blink"] }
            ]
        }))
        .unwrap();

        let violations = violations_of(&block);
        assert_eq!(violations.len(), 3);
        assert!(violations[0].starts_with("content[0].style: \"h5\""));
        assert_eq!(violations[1], "content[0].markDefs[0].href: is required");
        assert!(violations[2].starts_with("content[0].children[0].marks: \"blink\""));
    }

    #[test]
    fn validate_content_requires_non_empty_sequence() {
        let mut v = FieldValidator::new();
        validate_content("content", None, &mut v);
        validate_content("description", Some(&vec![]), &mut v);
        let rendered: Vec<String> = v.into_violations().iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "content: is required".to_string(),
                "description: 0 items < minimum 1".to_string()
            ]
        );
    }
}
