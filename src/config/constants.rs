//! Fixture-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Credentials
// =============================================================================

/// Prefix prepended by the placeholder credential transform.
///
/// Deliberately not a real hash: fixture runs must produce deterministic,
/// readable derived values. Promotion to real code would replace the
/// transform with a vetted salted KDF.
pub const DERIVED_CREDENTIAL_PREFIX: &str = "hashed_";

// =============================================================================
// Delayed-task demonstration
// =============================================================================

/// Number of delayed tasks scheduled by the closure-in-loop fixtures
pub const DELAYED_TASK_COUNT: usize = 10;

/// Delay before each scheduled task reports, in milliseconds
pub const DELAYED_TASK_DELAY_MS: u64 = 100;

// =============================================================================
// Record processing
// =============================================================================

/// Required field: display name
pub const FIELD_NAME: &str = "name";

/// Required field: age
pub const FIELD_AGE: &str = "age";

/// Flag set on successfully processed records
pub const FIELD_PROCESSED: &str = "processed";

/// Capture-time timestamp added to processed records
pub const FIELD_TIMESTAMP: &str = "timestamp";
