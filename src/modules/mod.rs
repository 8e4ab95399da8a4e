pub mod content_store;
pub mod health;
pub mod maintenance;
pub mod person;
pub mod schema;
pub mod skill_icon;
