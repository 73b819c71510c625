//! Globetrotter - Backend Core
//!
//! Backend helpers for a travel web application: a client for the external
//! countries REST service and a session token issuer.
//!
//! # Module Structure
//!
//! - **`shared`** - configuration, available without features
//! - **`backend`** - server-side code (only compiled with `ssr` feature)
//!   - `countries` - exact lookup, full listing, prefix search, normalization
//!   - `auth` - JWT session tokens
//!   - `error` - `BackendError`
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend modules and the binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use globetrotter::backend::{CountriesClient, CountryDetails, TokenIssuer, User};
//! use globetrotter::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//!
//! let client = CountriesClient::new(&config);
//! let details: Vec<CountryDetails> = client
//!     .search_countries("can")
//!     .await?
//!     .iter()
//!     .map(CountryDetails::from_raw)
//!     .collect();
//!
//! let issuer = TokenIssuer::from_config(&config)?;
//! let token = issuer.issue(&User::new(1, "traveler"))?;
//! # let _ = (details, token);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, BackendError>` for every fallible backend operation
//! - `ConfigError` in `shared::config` for configuration loading

/// Shared configuration
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
