//! Record processing service - validation and timestamping.
//!
//! The typed-script fixture's core: a single-shot validation that either
//! returns an augmented shallow copy of the record or fails with a
//! descriptive error.

use chrono::Utc;
use serde_json::{json, Value};

use crate::config::{FIELD_AGE, FIELD_NAME, FIELD_PROCESSED, FIELD_TIMESTAMP};
use crate::errors::{AppError, AppResult};

/// Validate a loosely-typed user record and stamp it as processed.
///
/// Requires `name` and `age` to be present and non-null. On success returns
/// a shallow copy of the record with `processed: true` and a capture-time
/// timestamp in milliseconds added; all original fields are left intact.
///
/// # Errors
/// Returns a validation error when either required field is absent (a
/// non-object record can carry neither). Single shot - no retries, no
/// partial success.
pub fn process_user(record: &Value) -> AppResult<Value> {
    if !has_field(record, FIELD_NAME) || !has_field(record, FIELD_AGE) {
        return Err(AppError::validation("Invalid user data"));
    }

    tracing::info!(name = %record[FIELD_NAME], "Processing user");

    let mut processed = record.clone();
    processed[FIELD_PROCESSED] = json!(true);
    processed[FIELD_TIMESTAMP] = json!(Utc::now().timestamp_millis());
    Ok(processed)
}

/// A field counts as present when it exists and is not `null`.
fn has_field(record: &Value, field: &str) -> bool {
    record.get(field).map_or(false, |value| !value.is_null())
}
