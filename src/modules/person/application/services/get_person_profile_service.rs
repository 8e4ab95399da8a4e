use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::person::application::domain::PersonProfile;
use crate::modules::person::application::ports::incoming::use_cases::{
    GetPersonProfileError, GetPersonProfileUseCase,
};
use crate::modules::person::application::ports::outgoing::PersonProfileQuery;

#[derive(Clone)]
pub struct GetPersonProfileService {
    query: Arc<dyn PersonProfileQuery>,
}

impl fmt::Debug for GetPersonProfileService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetPersonProfileService")
            .field("query", &"<dyn PersonProfileQuery>")
            .finish()
    }
}

impl GetPersonProfileService {
    pub fn new(query: Arc<dyn PersonProfileQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl GetPersonProfileUseCase for GetPersonProfileService {
    async fn execute(&self, slug: &str) -> Result<PersonProfile, GetPersonProfileError> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(GetPersonProfileError::EmptySlug);
        }

        match self.query.find_by_slug(slug).await {
            Ok(Some(profile)) => {
                info!(document_id = %profile.id, slug = %slug, "Person profile loaded");
                Ok(profile)
            }
            Ok(None) => {
                warn!(slug = %slug, "Person not found");
                Err(GetPersonProfileError::PersonNotFound(slug.to_string()))
            }
            Err(e) => Err(GetPersonProfileError::QueryFailed(e.to_string())),
        }
    }
}
