use std::time::Duration;

use crate::config::errors::ConfigError;

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Open Bank Project connection settings.
///
/// Every field is optional here because it is typically sourced from the
/// environment; [`ObpConfig::require_direct_login`] decides what is actually needed.
#[derive(Debug, Clone, Default)]
pub struct ObpConfig {
    pub base_url: Option<String>,
    pub api_version: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub consumer_key: Option<String>,
    pub direct_login_endpoint: Option<String>,
    pub timeout: Option<Duration>
}

/// Complete DirectLogin settings, with every required value present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectLoginSettings {
    pub base_url: String,
    pub api_version: String,
    pub username: String,
    pub password: String,
    pub consumer_key: String,
    pub direct_login_endpoint: String,
    pub timeout: Duration
}

impl DirectLoginSettings {
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/obp/{}/{}", self.base_url.trim_end_matches('/'), self.api_version, path.trim_start_matches('/'))
    }
}

impl ObpConfig {
    /// Collects the DirectLogin settings, reporting every missing variable at once.
    pub fn require_direct_login(&self) -> Result<DirectLoginSettings, ConfigError> {
        let required = [
            ("OBP_BASE_URL", &self.base_url),
            ("OBP_API_VERSION", &self.api_version),
            ("OBP_USERNAME", &self.username),
            ("OBP_PASSWORD", &self.password),
            ("OBP_CONSUMER_KEY", &self.consumer_key),
            ("OBP_DIRECTLOGIN_ENDPOINT", &self.direct_login_endpoint)
        ];

        let names: Vec<&'static str> = required.iter()
            .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
            .map(|(name, _)| *name)
            .collect();

        if !names.is_empty() {
            return Err(ConfigError::MissingCredentials { names });
        }

        let value = |field: &Option<String>| field.clone().unwrap_or_default();

        Ok(DirectLoginSettings {
            base_url: value(&self.base_url),
            api_version: value(&self.api_version),
            username: value(&self.username),
            password: value(&self.password),
            consumer_key: value(&self.consumer_key),
            direct_login_endpoint: value(&self.direct_login_endpoint),
            timeout: self.timeout.unwrap_or(DEFAULT_HTTP_TIMEOUT)
        })
    }
}
