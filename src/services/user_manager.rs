//! User manager service - in-memory user record container.
//!
//! The improved half of the container fixture pair: derived credentials,
//! strict comparisons, explicit not-found signaling. Its intentionally
//! unsafe counterpart lives in `src/bin/user_manager_before.rs`.

use crate::domain::{Credential, User};

/// Append-only, in-memory user container.
///
/// Scoped to one instance; records are never mutated or deleted, so
/// identifiers stay dense (`1..=N` in creation order). Not synchronized -
/// single-threaded demo use only.
#[derive(Debug, Default)]
pub struct UserManager {
    users: Vec<User>,
}

impl UserManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new user and return the created record.
    ///
    /// The identifier is the current sequence length plus one. No
    /// uniqueness check and no input validation - constraints are left to
    /// the caller.
    pub fn create_user(
        &mut self,
        username: impl Into<String>,
        password: &str,
        email: impl Into<String>,
    ) -> User {
        let credential = Credential::derive(password).into_string();
        let user = User::new(self.users.len() as i64 + 1, username, credential, email);

        tracing::debug!(id = user.id, username = %user.username, "User created");
        self.users.push(user.clone());
        user
    }

    /// Check a username/password pair against the stored records.
    ///
    /// Looks up the first record whose username matches exactly
    /// (case-sensitive), then compares derived credentials with strict
    /// equality. No rate limiting, no timing-safe comparison, no session
    /// issuance.
    pub fn authenticate_user(&self, username: &str, password: &str) -> bool {
        let user = match self.users.iter().find(|u| u.username == username) {
            Some(user) => user,
            None => return false,
        };

        let authenticated = Credential::from_derived(user.credential.clone()).matches(password);
        tracing::debug!(username = %username, authenticated, "Authentication attempt");
        authenticated
    }

    /// Look up a user by identifier with a linear search.
    ///
    /// `None` is the explicit not-found signal. Zero and negative
    /// identifiers never match since assignment starts at 1.
    pub fn find_user_by_id(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True if no users have been created yet.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
