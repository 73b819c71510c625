/**
 * Backend Error Types
 *
 * This module defines the error type returned by the countries client and
 * the token issuer.
 *
 * # Error Categories
 *
 * - `InvalidArgument` - a required string was blank; raised before any I/O
 * - `NotFound` - an exact-match lookup found no qualifying country
 * - `Transport` - the outbound HTTP call did not complete successfully
 * - `Config` - missing or malformed configuration (e.g. signing secret)
 * - `Token` - JWT encoding or decoding failed
 *
 * The core has no notion of HTTP status codes. Callers that expose these
 * errors over HTTP map on `BackendError::kind()`.
 */

use thiserror::Error;
use crate::shared::ConfigError;

/// Boxed underlying cause of a transport failure
pub type TransportCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use globetrotter::backend::error::BackendError;
///
/// let err = BackendError::invalid_argument("name", "Country name is required.");
/// assert_eq!(err.to_string(), "Country name is required.");
///
/// let err = BackendError::not_found("Atlantis");
/// assert_eq!(err.to_string(), "No exact match found for \"Atlantis\".");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A required argument was blank or whitespace-only
    #[error("{message}")]
    InvalidArgument {
        /// The argument that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// No candidate matched an exact-name lookup
    #[error("No exact match found for \"{name}\".")]
    NotFound {
        /// The name that was looked up
        name: String,
    },

    /// The outbound request failed (network, non-2xx status, bad body)
    ///
    /// `context` names the operation and its input, e.g.
    /// `Failed to fetch all countries`.
    #[error("{context}: {source}")]
    Transport {
        /// Operation and input that triggered the failure
        context: String,
        /// Underlying cause
        #[source]
        source: TransportCause,
    },

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JWT encoding or decoding error
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Coarse classification of a `BackendError`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Transport,
    Config,
    Token,
}

impl BackendError {
    /// Create a new invalid-argument error
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new not-found error for an exact-name lookup
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Wrap an underlying transport failure with the operation that hit it
    pub fn transport(context: impl Into<String>, source: impl Into<TransportCause>) -> Self {
        Self::Transport {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Config(_) => ErrorKind::Config,
            Self::Token(_) => ErrorKind::Token,
        }
    }
}
