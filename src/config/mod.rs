#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::{FactError, Result};
use crate::utils::validation::{self, Validate};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://numbersapi.p.rapidapi.com";
pub const DEFAULT_API_HOST: &str = "numbersapi.p.rapidapi.com";

/// Values given on the command line or through the environment. Each one wins over the
/// TOML file.
#[derive(Debug, Clone, Default)]
pub struct ApiOverrides {
    pub base_url: Option<String>,
    pub api_host: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub api_host: String,
    pub api_key: String,
    pub timeout_seconds: Option<u64>,
}

// Hand-written so the key never reaches a log line.
impl std::fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSettings")
            .field("base_url", &self.base_url)
            .field("api_host", &self.api_host)
            .field("api_key", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl ApiSettings {
    pub fn resolve(overrides: ApiOverrides, file: Option<TomlConfig>) -> Result<Self> {
        let file = file.unwrap_or_default().api;

        let api_key = overrides.api_key.or(file.key);
        let api_key = validation::validate_required_field("api.key", &api_key)?.clone();

        let settings = Self {
            base_url: overrides
                .base_url
                .or(file.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_host: overrides
                .api_host
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            api_key,
            timeout_seconds: overrides.timeout_seconds.or(file.timeout_seconds),
        };

        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for ApiSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn api_host(&self) -> &str {
        &self.api_host
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for ApiSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.base_url)?;
        validation::validate_non_empty_string("api.host", &self.api_host)?;
        validation::validate_resolved("api.key", &self.api_key)?;
        if self.api_key.trim().is_empty() {
            return Err(FactError::MissingConfigError {
                field: "api.key".to_string(),
            });
        }
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
