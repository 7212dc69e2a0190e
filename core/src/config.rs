use std::env;
use std::time::Duration;

use crate::app::DEFAULT_IMPORTANT_KEYWORDS;
use crate::error::ConfigError;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Base URL of the portal backend, without a trailing slash
    pub api_url: String,
    /// Per-request timeout for collection fetches
    pub request_timeout: Duration,
    /// Keywords that mark a notice or message as important
    pub important_keywords: Vec<String>,
}

impl PortalConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("PORTAL_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout = match lookup("PORTAL_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                    key: "PORTAL_TIMEOUT_SECS",
                    message: format!("{} ({:?})", e, raw),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        key: "PORTAL_TIMEOUT_SECS",
                        message: "must be at least 1".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let important_keywords = match lookup("PORTAL_IMPORTANT_KEYWORDS") {
            Some(raw) => {
                let keywords: Vec<String> = raw
                    .split(',')
                    .map(|k| k.trim().to_string())
                    .filter(|k| !k.is_empty())
                    .collect();
                if keywords.is_empty() {
                    return Err(ConfigError::Invalid {
                        key: "PORTAL_IMPORTANT_KEYWORDS",
                        message: "no keywords given".to_string(),
                    });
                }
                keywords
            }
            None => DEFAULT_IMPORTANT_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        };

        Ok(Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            request_timeout,
            important_keywords,
        })
    }

    /// Override the backend URL (e.g. from a command line flag)
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }
}
