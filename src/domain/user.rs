//! User domain entity.

use serde::{Deserialize, Serialize};

/// In-memory user record
///
/// Identifiers are assigned sequentially at creation time and stay dense
/// (`1..=N`) because records are never deleted. Usernames are not required
/// to be unique; constraints are left to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Derived credential, never the raw secret.
    #[serde(skip_serializing)]
    pub credential: String,
    pub email: String,
}

impl User {
    /// Create a new user record.
    pub fn new(
        id: i64,
        username: impl Into<String>,
        credential: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            credential: credential.into(),
            email: email.into(),
        }
    }
}
