//! Hook testing fixture - repaired counterpart of `style_pitfalls_before`.
//!
//! Every issue planted in the before variant is fixed here: one binding per
//! name, strict typed comparisons, no dynamic command execution, no leftover
//! debug macros, structured logging instead of raw prints, and delayed tasks
//! that each capture their own loop index.

use std::time::Duration;

use hook_fixtures::config::{DELAYED_TASK_COUNT, DELAYED_TASK_DELAY_MS};
use hook_fixtures::jobs::delayed_indices;
use hook_fixtures::logging;

#[tokio::main]
async fn main() {
    logging::init();

    let initial = 5;
    let updated = 10;
    let offset = 20;

    tracing::info!(is_target = matches_target(updated), "Checked target value");
    tracing::info!(sum = add(initial, offset), "Summed demo values");

    // Each task owns its index; none of them observe a shared final value.
    let delay = Duration::from_millis(DELAYED_TASK_DELAY_MS);
    match delayed_indices(DELAYED_TASK_COUNT, delay).await {
        Ok(observed) => {
            for index in observed {
                tracing::info!(index, "Delayed task observed its own index");
            }
        }
        Err(e) => {
            tracing::error!("Delayed task run failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Strict integer comparison - no float coercion involved.
fn matches_target(value: i64) -> bool {
    value == 5
}

/// Named function instead of a single-use closure binding.
fn add(a: i64, b: i64) -> i64 {
    a + b
}
