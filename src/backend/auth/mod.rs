//! Authentication Module
//!
//! Issues signed session tokens for users.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User record
//! └── sessions.rs     - JWT token issuing and verification
//! ```
//!
//! # Security
//!
//! - Tokens are HS256 JWTs signed with the configured `SECRET_KEY`
//! - Only `user_id` and `username` are placed in the payload
//! - No expiration is set here; session lifetime is the verifier's call

/// User record
pub mod users;

/// JWT token generation and validation
pub mod sessions;

pub use sessions::{Claims, TokenIssuer};
pub use users::User;
