use async_trait::async_trait;
use serde_json::json;

use crate::modules::content_store::adapter::outgoing::sanity::{groq, SanityClient};
use crate::modules::content_store::application::ports::outgoing::DocumentQueryError;
use crate::modules::person::application::domain::PersonProfile;
use crate::modules::person::application::ports::outgoing::PersonProfileQuery;

#[derive(Debug, Clone)]
pub struct SanityPersonProfileQuery {
    client: SanityClient,
}

impl SanityPersonProfileQuery {
    pub fn new(client: SanityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PersonProfileQuery for SanityPersonProfileQuery {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PersonProfile>, DocumentQueryError> {
        Ok(self
            .client
            .fetch(groq::PERSON_PROFILE_BY_SLUG, &[("slug", json!(slug))])
            .await?)
    }
}
