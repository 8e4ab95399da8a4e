use std::env;
use std::time::Duration;

pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "2023-05-03";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SanityConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, PartialEq, Eq)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub token: Option<String>,
    pub request_timeout: Duration,
}

impl std::fmt::Debug for SanityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SanityConfig")
            .field("project_id", &self.project_id)
            .field("dataset", &self.dataset)
            .field("api_version", &self.api_version)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl SanityConfig {
    /// Load the store connection from `SANITY_*` environment variables.
    pub fn from_env() -> Result<Self, SanityConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SanityConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let project_id = read("SANITY_PROJECT_ID").ok_or(SanityConfigError::Missing("SANITY_PROJECT_ID"))?;
        let dataset = read("SANITY_DATASET").unwrap_or_else(|| DEFAULT_DATASET.to_string());
        let api_version =
            read("SANITY_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        let token = read("SANITY_API_TOKEN");

        let request_timeout = match read("SANITY_REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(SanityConfigError::Invalid {
                        key: "SANITY_REQUEST_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let config = Self {
            project_id,
            dataset,
            api_version: api_version.trim_start_matches('v').to_string(),
            token,
            request_timeout,
        };
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), SanityConfigError> {
        let is_identifier = |value: &str| {
            !value.is_empty()
                && value
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };

        if !is_identifier(&self.project_id) {
            return Err(SanityConfigError::Invalid {
                key: "SANITY_PROJECT_ID",
                value: self.project_id.clone(),
            });
        }
        if !is_identifier(&self.dataset) {
            return Err(SanityConfigError::Invalid {
                key: "SANITY_DATASET",
                value: self.dataset.clone(),
            });
        }
        if !is_identifier(&self.api_version) {
            return Err(SanityConfigError::Invalid {
                key: "SANITY_API_VERSION",
                value: self.api_version.clone(),
            });
        }
        Ok(())
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn api_base(&self) -> String {
        format!(
            "https://{}.api.sanity.io/v{}",
            self.project_id, self.api_version
        )
    }

    pub fn query_endpoint(&self) -> String {
        format!("{}/data/query/{}", self.api_base(), self.dataset)
    }

    pub fn mutate_endpoint(&self) -> String {
        format!("{}/data/mutate/{}", self.api_base(), self.dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<SanityConfig, SanityConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SanityConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_project_is_set() {
        let config = config_from(&[("SANITY_PROJECT_ID", "v7ufktq0")]).unwrap();

        assert_eq!(config.dataset, "production");
        assert_eq!(config.api_version, "2023-05-03");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(!config.has_token());
        assert_eq!(
            config.query_endpoint(),
            "https://v7ufktq0.api.sanity.io/v2023-05-03/data/query/production"
        );
    }

    #[test]
    fn missing_project_is_an_error() {
        assert_eq!(
            config_from(&[("SANITY_DATASET", "staging")]),
            Err(SanityConfigError::Missing("SANITY_PROJECT_ID"))
        );
        assert_eq!(
            config_from(&[("SANITY_PROJECT_ID", "   ")]),
            Err(SanityConfigError::Missing("SANITY_PROJECT_ID"))
        );
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let result = config_from(&[
            ("SANITY_PROJECT_ID", "abc"),
            ("SANITY_REQUEST_TIMEOUT_SECS", "soon"),
        ]);
        assert!(matches!(
            result,
            Err(SanityConfigError::Invalid { key: "SANITY_REQUEST_TIMEOUT_SECS", .. })
        ));
    }

    #[test]
    fn invalid_dataset_is_rejected() {
        let result = config_from(&[("SANITY_PROJECT_ID", "abc"), ("SANITY_DATASET", "bad/set")]);
        assert_eq!(
            result,
            Err(SanityConfigError::Invalid {
                key: "SANITY_DATASET",
                value: "bad/set".into()
            })
        );
    }

    #[test]
    fn token_is_redacted_in_debug_output() {
        let config = config_from(&[
            ("SANITY_PROJECT_ID", "abc"),
            ("SANITY_API_TOKEN", "sk-secret"),
            ("SANITY_API_VERSION", "v2024-01-01"),
        ])
        .unwrap();

        assert!(config.has_token());
        assert_eq!(config.api_version, "2024-01-01");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-secret"));
    }
}
