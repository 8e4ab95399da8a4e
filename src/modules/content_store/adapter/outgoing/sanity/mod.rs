mod document_query_sanity;
mod document_repository_sanity;
pub mod groq;
mod sanity_client;
mod sanity_config;

pub use document_query_sanity::SanityDocumentQuery;
pub use document_repository_sanity::SanityDocumentRepository;
pub use sanity_client::{classify_mutation_failure, MutationResult, SanityClient, SanityClientError};
pub use sanity_config::{SanityConfig, SanityConfigError};
