use async_trait::async_trait;

use crate::modules::content_store::application::ports::outgoing::DocumentQueryError;
use crate::modules::person::application::domain::PersonProfile;

#[async_trait]
pub trait PersonProfileQuery: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PersonProfile>, DocumentQueryError>;
}
