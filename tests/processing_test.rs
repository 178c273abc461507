//! Record processing fixture tests.
//!
//! Covers the single-shot validation contract: augmentation on success,
//! descriptive errors on missing fields, no partial output.

use chrono::Utc;
use serde_json::json;

use hook_fixtures::errors::AppError;
use hook_fixtures::services::process_user;

// =============================================================================
// Successful processing
// =============================================================================

#[test]
fn test_valid_record_is_stamped() {
    let record = json!({ "name": "John Doe", "age": 30, "email": "john@example.com" });

    let processed = process_user(&record).expect("record should validate");

    assert_eq!(processed["processed"], json!(true));
    assert!(processed["timestamp"].is_i64());
    assert_eq!(processed["name"], json!("John Doe"));
    assert_eq!(processed["age"], json!(30));
    assert_eq!(processed["email"], json!("john@example.com"));
}

#[test]
fn test_input_record_is_left_untouched() {
    let record = json!({ "name": "Ada", "age": 36 });

    let _ = process_user(&record).expect("record should validate");

    assert!(record.get("processed").is_none());
    assert!(record.get("timestamp").is_none());
}

#[test]
fn test_timestamp_is_capture_time_in_millis() {
    let before = Utc::now().timestamp_millis();
    let processed = process_user(&json!({ "name": "Ada", "age": 36 })).unwrap();
    let after = Utc::now().timestamp_millis();

    let stamp = processed["timestamp"].as_i64().unwrap();
    assert!(stamp >= before && stamp <= after);
}

#[test]
fn test_minimal_record_needs_only_name_and_age() {
    let processed = process_user(&json!({ "name": "Ada", "age": 36 })).unwrap();

    assert_eq!(processed["processed"], json!(true));
}

// =============================================================================
// Validation failures
// =============================================================================

#[test]
fn test_missing_name_fails() {
    let err = process_user(&json!({ "age": 30 })).unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(err.to_string(), "Invalid user data");
}

#[test]
fn test_missing_age_fails() {
    let err = process_user(&json!({ "name": "John Doe" })).unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn test_null_required_field_fails() {
    let err = process_user(&json!({ "name": null, "age": 30 })).unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn test_non_object_record_fails() {
    assert!(process_user(&json!("just a string")).is_err());
    assert!(process_user(&json!(null)).is_err());
    assert!(process_user(&json!([{ "name": "Ada", "age": 36 }])).is_err());
}
