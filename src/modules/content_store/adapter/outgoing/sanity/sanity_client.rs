use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::sanity_config::SanityConfig;
use crate::modules::content_store::application::ports::outgoing::{
    DocumentQueryError, DocumentRepositoryError,
};

const REFERENCE_CONFLICT_TYPE: &str = "documentHasExistingReferencesError";
const REFERENCE_CONFLICT_MESSAGE: &str = "references to it";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SanityClientError {
    #[error("Failed to build HTTP client: {0}")]
    Setup(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<SanityClientError> for DocumentQueryError {
    fn from(error: SanityClientError) -> Self {
        match error {
            SanityClientError::Setup(msg) | SanityClientError::Transport(msg) => {
                DocumentQueryError::Transport(msg)
            }
            SanityClientError::Status { status, body } => {
                DocumentQueryError::Rejected(format!("HTTP {status}: {}", error_description(&body)))
            }
            SanityClientError::Decode(msg) => DocumentQueryError::Decode(msg),
        }
    }
}

impl From<SanityClientError> for DocumentRepositoryError {
    fn from(error: SanityClientError) -> Self {
        match error {
            SanityClientError::Setup(msg) | SanityClientError::Transport(msg) => {
                DocumentRepositoryError::Transport(msg)
            }
            SanityClientError::Status { status, body } => classify_mutation_failure(status, &body),
            SanityClientError::Decode(msg) => DocumentRepositoryError::Rejected(msg),
        }
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MutationResult {
    pub id: String,

    #[serde(default)]
    pub operation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MutationResponse {
    #[serde(default, rename = "transactionId")]
    transaction_id: Option<String>,

    #[serde(default)]
    results: Vec<MutationResult>,
}

/// HTTP client for one project and dataset of the content lake.
#[derive(Debug, Clone)]
pub struct SanityClient {
    http: reqwest::Client,
    config: Arc<SanityConfig>,
}

impl SanityClient {
    pub fn new(config: SanityConfig) -> Result<Self, SanityClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("profile-cms/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SanityClientError::Setup(e.to_string()))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn has_token(&self) -> bool {
        self.config.has_token()
    }

    /// Runs a GROQ query. Parameters are passed as `$name` and JSON encoded.
    pub async fn fetch<T>(&self, query: &str, params: &[(&str, Value)]) -> Result<T, SanityClientError>
    where
        T: DeserializeOwned,
    {
        let mut pairs = vec![("query".to_string(), query.to_string())];
        for (name, value) in params {
            pairs.push((format!("${name}"), value.to_string()));
        }

        let url = reqwest::Url::parse_with_params(&self.config.query_endpoint(), &pairs)
            .map_err(|e| SanityClientError::Setup(e.to_string()))?;

        debug!(query = %query, "Running store query");

        let mut request = self.http.get(url);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SanityClientError::Transport(e.to_string()))?;

        let body: QueryResponse<T> = Self::read_json(response).await?;
        Ok(body.result)
    }

    /// Applies mutations in one transaction and returns the touched ids.
    pub async fn mutate(&self, mutations: Vec<Value>) -> Result<Vec<MutationResult>, SanityClientError> {
        let url = reqwest::Url::parse_with_params(
            &self.config.mutate_endpoint(),
            &[("returnIds", "true")],
        )
        .map_err(|e| SanityClientError::Setup(e.to_string()))?;

        let mut request = self.http.post(url).json(&json!({ "mutations": mutations }));
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SanityClientError::Transport(e.to_string()))?;

        let body: MutationResponse = Self::read_json(response).await?;
        debug!(
            transaction_id = body.transaction_id.as_deref().unwrap_or("-"),
            results = body.results.len(),
            "Mutation applied"
        );
        Ok(body.results)
    }

    async fn read_json<T>(response: reqwest::Response) -> Result<T, SanityClientError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SanityClientError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(SanityClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| SanityClientError::Decode(e.to_string()))
    }
}

/// Human-readable message of a store error body, or the raw body.
fn error_description(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            let error = value.get("error")?;
            error
                .get("description")
                .or_else(|| error.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

fn referencing_ids(errors: &[&Value]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for error in errors {
        for id in error
            .get("referencingIDs")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
        {
            if !ids.iter().any(|known| known == id) {
                ids.push(id.to_string());
            }
        }
    }
    ids
}

/// Turns a failed mutation response into a repository error. Reference
/// conflicts are read from `error.items[].error`; the message text is only
/// consulted when the structured type is missing.
pub fn classify_mutation_failure(status: u16, body: &str) -> DocumentRepositoryError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    let items: Vec<&Value> = parsed
        .as_ref()
        .and_then(|value| value.pointer("/error/items"))
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(|item| item.get("error")).collect())
        .unwrap_or_default();

    let conflicts: Vec<&Value> = items
        .iter()
        .copied()
        .filter(|error| {
            error.get("type").and_then(Value::as_str) == Some(REFERENCE_CONFLICT_TYPE)
        })
        .collect();

    if !conflicts.is_empty() {
        return DocumentRepositoryError::HasReferences {
            referencing_ids: referencing_ids(&conflicts),
        };
    }

    let description = error_description(body);
    if description.contains(REFERENCE_CONFLICT_MESSAGE) {
        return DocumentRepositoryError::HasReferences {
            referencing_ids: referencing_ids(&items),
        };
    }

    DocumentRepositoryError::Rejected(format!("HTTP {status}: {description}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_reference_conflict_is_detected() {
        let body = json!({
            "error": {
                "description": "Mutation failed",
                "type": "mutationError",
                "items": [{
                    "error": {
                        "id": "orphan-1",
                        "type": "documentHasExistingReferencesError",
                        "description": "Document cannot be deleted",
                        "referencingIDs": ["post-1", "post-2", "post-1"]
                    },
                    "index": 0
                }]
            }
        })
        .to_string();

        assert_eq!(
            classify_mutation_failure(409, &body),
            DocumentRepositoryError::HasReferences {
                referencing_ids: vec!["post-1".into(), "post-2".into()]
            }
        );
    }

    #[test]
    fn message_fallback_detects_reference_conflict() {
        let body = json!({
            "error": {
                "description": "Document \"x\" cannot be deleted as there are references to it from \"y\"",
                "type": "mutationError"
            }
        })
        .to_string();

        assert_eq!(
            classify_mutation_failure(409, &body),
            DocumentRepositoryError::HasReferences {
                referencing_ids: vec![]
            }
        );
    }

    #[test]
    fn other_failures_keep_the_raw_reason() {
        let body = json!({
            "error": { "description": "Insufficient permissions", "type": "permissionError" }
        })
        .to_string();

        assert_eq!(
            classify_mutation_failure(403, &body),
            DocumentRepositoryError::Rejected("HTTP 403: Insufficient permissions".into())
        );
        assert_eq!(
            classify_mutation_failure(502, "Bad Gateway"),
            DocumentRepositoryError::Rejected("HTTP 502: Bad Gateway".into())
        );
    }

    #[test]
    fn query_errors_map_to_port_errors() {
        let error = SanityClientError::Status {
            status: 400,
            body: r#"{"error":{"description":"expected '}'","type":"queryParseError"}}"#.into(),
        };
        assert_eq!(
            DocumentQueryError::from(error),
            DocumentQueryError::Rejected("HTTP 400: expected '}'".into())
        );
        assert_eq!(
            DocumentQueryError::from(SanityClientError::Decode("eof".into())),
            DocumentQueryError::Decode("eof".into())
        );
    }
}
