//! Application configuration module
//!
//! Provides the configuration consumed by the countries client and the
//! token issuer. Values come from the builder or from the environment.

use reqwest::Url;
use thiserror::Error;

/// Default base URL of the external countries service
pub const DEFAULT_COUNTRIES_API_URL: &str = "https://restcountries.com/v3.1";

/// Environment variable overriding the countries service base URL
pub const COUNTRIES_API_URL_VAR: &str = "COUNTRIES_API_URL";

/// Environment variable holding the token signing secret
pub const SECRET_KEY_VAR: &str = "SECRET_KEY";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the countries REST service
    pub countries_api_url: Url,
    /// Secret used to sign session tokens
    pub secret_key: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from `COUNTRIES_API_URL` and `SECRET_KEY`.
    ///
    /// A missing `SECRET_KEY` is not an error here; it only fails once a
    /// token issuer is built from this config.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Ok(url) = std::env::var(COUNTRIES_API_URL_VAR) {
            builder = builder.countries_api_url(url);
        }
        if let Ok(secret) = std::env::var(SECRET_KEY_VAR) {
            builder = builder.secret_key(secret);
        }
        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.countries_api_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl(self.countries_api_url.to_string()));
        }
        Ok(())
    }

    /// The signing secret, or an error naming the missing variable
    pub fn require_secret_key(&self) -> Result<&str, ConfigError> {
        match self.secret_key.as_deref() {
            Some(secret) if !secret.trim().is_empty() => Ok(secret),
            _ => Err(ConfigError::MissingValue(SECRET_KEY_VAR)),
        }
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    countries_api_url: Option<String>,
    secret_key: Option<String>,
}

impl AppConfigBuilder {
    /// Set the countries service base URL
    pub fn countries_api_url(mut self, url: impl Into<String>) -> Self {
        self.countries_api_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn secret_key(mut self, secret: impl Into<String>) -> Self {
        self.secret_key = Some(secret.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let raw_url = self
            .countries_api_url
            .unwrap_or_else(|| DEFAULT_COUNTRIES_API_URL.to_string());
        let countries_api_url =
            Url::parse(raw_url.trim()).map_err(|_| ConfigError::InvalidUrl(raw_url.clone()))?;

        let config = AppConfig {
            countries_api_url,
            secret_key: self.secret_key,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
