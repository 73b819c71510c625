//! Countries Module
//!
//! Fetches country data from the external countries REST service and
//! flattens it for persistence.
//!
//! # Module Structure
//!
//! ```text
//! countries/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - HTTP client: exact lookup, full listing, prefix search
//! └── details.rs  - Raw record -> CountryDetails normalization
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use globetrotter::backend::countries::{CountriesClient, CountryDetails};
//! use globetrotter::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let client = CountriesClient::new(&config);
//!
//! let canada = client.get_country("canada").await?;
//! let details = CountryDetails::from_raw(&canada);
//! assert_eq!(details.common_name.as_deref(), Some("Canada"));
//! # Ok(())
//! # }
//! ```

/// HTTP client for the countries service
pub mod client;

/// Raw record normalization
pub mod details;

pub use client::CountriesClient;
pub use details::{prepare_country_details, CountryDetails, RawCountry};
