//! Environment configuration loader for chatrelay.
//!
//! All configuration comes from environment variables, matching how the
//! relay is deployed: store credentials under `MYSQL_*`, completion
//! provider credentials under `AZURE_OPENAI_*` plus `DEPLOYMENT_ID`.
//!
//! Secrets are wrapped in [`SecretString`] so they never appear in Debug
//! output or logs.

use secrecy::SecretString;
use thiserror::Error;

/// A required environment variable was absent.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable '{0}'")]
    MissingVar(String),
}

/// MySQL store connection settings.
#[derive(Debug, Clone)]
pub struct MysqlConfig {
    pub host: String,
    pub user: String,
    pub password: SecretString,
    pub database: String,
}

/// Azure OpenAI completion provider settings.
#[derive(Debug, Clone)]
pub struct AzureOpenAiConfig {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`.
    pub endpoint: String,
    pub api_key: SecretString,
    /// Deployment (model) identifier within the resource.
    pub deployment_id: String,
}

/// Full relay configuration: store plus completion provider.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub mysql: MysqlConfig,
    pub azure: AzureOpenAiConfig,
}

impl RelayConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// The seam exists so parsing can be tested without mutating the
    /// process environment (`std::env::set_var` is unsafe in edition 2024).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::MissingVar(key.to_string()))
        };

        Ok(Self {
            mysql: MysqlConfig {
                host: require("MYSQL_HOST")?,
                user: require("MYSQL_USER")?,
                password: SecretString::from(require("MYSQL_PASSWORD")?),
                database: require("MYSQL_DATABASE")?,
            },
            azure: AzureOpenAiConfig {
                endpoint: require("AZURE_OPENAI_ENDPOINT")?,
                api_key: SecretString::from(require("AZURE_OPENAI_KEY")?),
                deployment_id: require("DEPLOYMENT_ID")?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("MYSQL_HOST", "localhost"),
            ("MYSQL_USER", "relay"),
            ("MYSQL_PASSWORD", "hunter2"),
            ("MYSQL_DATABASE", "chat"),
            ("AZURE_OPENAI_ENDPOINT", "https://example.openai.azure.com"),
            ("AZURE_OPENAI_KEY", "key-123"),
            ("DEPLOYMENT_ID", "gpt-35-turbo"),
        ])
    }

    #[test]
    fn test_from_lookup_complete() {
        let env = full_env();
        let config = RelayConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.mysql.host, "localhost");
        assert_eq!(config.mysql.database, "chat");
        assert_eq!(config.azure.deployment_id, "gpt-35-turbo");
    }

    #[test]
    fn test_from_lookup_missing_var() {
        let mut env = full_env();
        env.remove("AZURE_OPENAI_KEY");
        let err = RelayConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap_err();
        assert!(err.to_string().contains("AZURE_OPENAI_KEY"));
    }

    #[test]
    fn test_from_lookup_empty_value_treated_as_missing() {
        let mut env = full_env();
        env.insert("MYSQL_HOST", "");
        let err = RelayConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap_err();
        assert!(err.to_string().contains("MYSQL_HOST"));
    }

    #[test]
    fn test_secrets_are_redacted_in_debug() {
        let env = full_env();
        let config = RelayConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("key-123"));
    }
}
