use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use crate::modules::schema::application::domain::entities::{
    ContentBlock, Person, Post, Project, Reference, RichTextBlock, Span,
};

pub fn valid_person_json() -> Value {
    json!({
        "_id": "person-zefang-shen",
        "_type": "person",
        "firstName": "Zefang",
        "lastName": "Shen",
        "slug": { "_type": "slug", "current": "zefang-shen" },
        "jobTitle": "Software Engineer",
        "tagline": "Building calm, reliable systems",
        "bio": "Engineer who enjoys Rust, data pipelines and writing about both.",
        "careerSummary": [
            { "_key": "cs1", "name": "Years coding", "count": 8, "description": "Professional experience" }
        ],
        "skills": [
            {
                "_key": "sk1",
                "type": "software-development",
                "skillIcon": { "_type": "reference", "_ref": "skillIcon-rust" },
                "description": "Systems programming",
                "yearsOfExperience": 4,
                "isFeatured": true
            }
        ],
        "publishedAt": "2024-01-15T08:00:00Z"
    })
}

pub fn valid_person() -> Person {
    serde_json::from_value(valid_person_json()).unwrap()
}

pub fn valid_post_json() -> Value {
    json!({
        "_id": "post-hello-rust",
        "_type": "post",
        "title": "Hello Rust",
        "summary": "Notes from a first year of Rust in production.",
        "authors": [{ "_type": "reference", "_key": "a1", "_ref": "person-zefang-shen" }],
        "content": [
            {
                "_type": "block",
                "_key": "b1",
                "style": "normal",
                "markDefs": [],
                "children": [{ "_type": "span", "_key": "s1", "text": "It started with a borrow checker error.", "marks": ["em"] }]
            },
            { "_type": "codeBlock", "_key": "b2", "language": "bash", "code": "cargo new hello" }
        ],
        "technologies": [{ "_type": "reference", "_key": "t1", "_ref": "skillIcon-rust" }],
        "isDraft": false,
        "publishedAt": "2024-02-01T10:00:00Z"
    })
}

pub fn valid_post() -> Post {
    serde_json::from_value(valid_post_json()).unwrap()
}

pub fn valid_project() -> Project {
    Project {
        id: Some("project-portfolio".into()),
        title: Some("Portfolio CMS".into()),
        summary: Some("Content studio for a personal site.".into()),
        contributors: Some(vec![Reference::to("person-zefang-shen")]),
        description: Some(vec![ContentBlock::RichText(RichTextBlock {
            children: vec![Span::text("Structured content for posts and projects.")],
            ..RichTextBlock::default()
        })]),
        technologies: Some(vec![Reference::to("skillIcon-rust")]),
        status: Some("in-progress".into()),
        is_featured: Some(true),
        is_draft: Some(false),
        start_date: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
        ..Project::default()
    }
}

pub fn valid_skill_icon_json() -> Value {
    json!({
        "_id": "skillIcon-rust",
        "_type": "skillIcon",
        "name": "Rust",
        "icon": "<svg xmlns=\"http://www.w3.org/2000/svg\"><title>Rust</title></svg>"
    })
}
