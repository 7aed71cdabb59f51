use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_aux::prelude::deserialize_vec_from_string_or_vec;

/// Application configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. irev.yaml file (if exists)
/// 3. Environment variables with IREV_ prefix (always wins)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for [`crate::irev::HttpIrevClient`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Bearer tokens, rotated randomly per request (required).
    /// Accepts either an array or comma-separated string.
    #[serde(default, deserialize_with = "deserialize_list")]
    pub auth_tokens: Vec<String>,

    /// API hosts, rotated randomly per request.
    /// Empty means the built-in IReV hosts.
    #[serde(default, deserialize_with = "deserialize_list")]
    pub hosts: Vec<String>,

    /// User agent sent with every request. Unset means a desktop Safari agent;
    /// upstream blocks agents that do not look like a browser.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ApiConfig {
    /// Config with the given tokens and everything else defaulted.
    #[must_use]
    pub fn with_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            auth_tokens: tokens.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log filter directive (debug, info, warn, error, or `irev_client=debug`).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Deserialize a list from comma-separated string or array, filtering blank values.
fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Vec<String> = deserialize_vec_from_string_or_vec(deserializer)?;
    Ok(items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Sources are merged in priority order:
    /// 1. Struct defaults (lowest)
    /// 2. irev.yaml file (if exists)
    /// 3. Environment variables with IREV_ prefix (highest)
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("irev.yaml")
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("IREV_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.auth_tokens.is_empty() {
            return Err(ConfigError::Validation(
                "api.auth_tokens is required. Set IREV_API__AUTH_TOKENS environment variable or configure in irev.yaml.".into(),
            ));
        }

        for host in &self.api.hosts {
            if !host.starts_with("http://") && !host.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "api.hosts contains invalid host '{host}'. Must start with http:// or https://"
                )));
            }
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation("logging.level cannot be empty".into()));
        }

        Ok(())
    }
}
