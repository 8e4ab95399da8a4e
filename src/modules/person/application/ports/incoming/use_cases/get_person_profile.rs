use async_trait::async_trait;

use crate::modules::person::application::domain::PersonProfile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetPersonProfileError {
    #[error("Slug cannot be empty")]
    EmptySlug,

    #[error("No person with slug \"{0}\"")]
    PersonNotFound(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPersonProfileUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<PersonProfile, GetPersonProfileError>;
}
