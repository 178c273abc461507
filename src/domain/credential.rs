//! Credential value object - placeholder one-way transform.
//!
//! Stands in for a real cryptographic hash so that fixture runs stay
//! deterministic and inspectable. Promotion to real code would swap the
//! transform for a vetted salted KDF (argon2 or similar) behind the same
//! interface.

use crate::config::DERIVED_CREDENTIAL_PREFIX;

/// Derived credential that checks a submitted secret against a stored
/// derived value without exposing the secret itself.
///
/// Value object - immutable, compared by value with strict equality.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    derived: String,
}

// Don't expose the derived value in debug output
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("derived", &"[REDACTED]")
            .finish()
    }
}

impl Credential {
    /// Derive a credential from a plain-text secret.
    ///
    /// Placeholder transform: prepends a fixed prefix to the secret. This
    /// is intentionally deterministic and reversible - it is a stand-in for
    /// a real hash, not a security measure.
    pub fn derive(plain_text: &str) -> Self {
        Self {
            derived: format!("{}{}", DERIVED_CREDENTIAL_PREFIX, plain_text),
        }
    }

    /// Rebuild a credential from an already-derived value.
    pub fn from_derived(derived: impl Into<String>) -> Self {
        Self {
            derived: derived.into(),
        }
    }

    /// Check a submitted secret against this credential.
    pub fn matches(&self, plain_text: &str) -> bool {
        Self::derive(plain_text) == *self
    }

    /// Get the derived string for storage.
    pub fn as_str(&self) -> &str {
        &self.derived
    }

    /// Consume and return the derived string.
    pub fn into_string(self) -> String {
        self.derived
    }
}

impl From<Credential> for String {
    fn from(credential: Credential) -> Self {
        credential.derived
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_and_match() {
        let credential = Credential::derive("hunter2");

        assert!(credential.matches("hunter2"));
        assert!(!credential.matches("hunter3"));
    }

    #[test]
    fn test_derivation_is_deterministic() {
        // Unlike a salted hash, the placeholder transform must yield the
        // same derived value on every run.
        assert_eq!(
            Credential::derive("secret").as_str(),
            Credential::derive("secret").as_str()
        );
    }

    #[test]
    fn test_from_derived_round_trip() {
        let stored: String = Credential::derive("letmein").into();

        let restored = Credential::from_derived(stored);
        assert!(restored.matches("letmein"));
        assert!(!restored.matches("LETMEIN"));
    }

    #[test]
    fn test_derived_value_differs_from_secret() {
        let credential = Credential::derive("plain");
        assert_ne!(credential.as_str(), "plain");
    }

    #[test]
    fn test_debug_output_redacts_derived_value() {
        let credential = Credential::derive("hunter2");
        let debug = format!("{:?}", credential);

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));
    }
}
