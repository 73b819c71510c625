//! Backend Error Module
//!
//! Error types shared by the countries client and the token issuer.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! └── types.rs      - Error type definitions and constructors
//! ```

pub mod types;

pub use types::{BackendError, ErrorKind, TransportCause};

/// Result alias used throughout the backend
pub type BackendResult<T> = Result<T, BackendError>;
