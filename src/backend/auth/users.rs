/**
 * User Model
 *
 * The user record as the signup flow and the database produce it. Only
 * `user_id` and `username` are ever placed into a session token.
 */

use serde::{Deserialize, Serialize};

/// User struct representing a registered user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Database identifier
    pub user_id: i64,
    /// Unique login name
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    /// Create a user with only the fields a token needs
    pub fn new(user_id: i64, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            ..Self::default()
        }
    }
}
