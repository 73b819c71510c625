//! Shared Module
//!
//! Types that do not depend on the server feature: the application
//! configuration used by both the countries client and the token issuer.

/// Application configuration
pub mod config;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
