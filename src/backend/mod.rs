//! Backend Module
//!
//! Server-side core consumed by the route/controller layer.
//!
//! # Overview
//!
//! - **`countries`** - client for the external countries REST service and
//!   normalization of its records for storage
//! - **`auth`** - session token issuing
//! - **`error`** - error type shared by both
//!
//! Both components are stateless. Each countries operation performs at most
//! one outbound request and suspends only on it; concurrent calls share
//! nothing but the underlying `reqwest::Client` connection pool.
//!
//! This module is only compiled when the `ssr` feature is enabled.

/// Country data client and normalization
pub mod countries;

/// Session tokens and user record
pub mod auth;

/// Backend error types
pub mod error;

pub use auth::{Claims, TokenIssuer, User};
pub use countries::{CountriesClient, CountryDetails, RawCountry};
pub use error::{BackendError, BackendResult, ErrorKind};
