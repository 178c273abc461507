//! Delayed-task fixture helper.
//!
//! The repaired form of the closure-in-loop pitfall: each scheduled task
//! owns its loop index instead of reading a binding shared across
//! iterations.

use std::time::Duration;

use crate::errors::{AppError, AppResult};

/// Schedule `count` delayed tasks, each capturing its own loop index, and
/// wait for all of them.
///
/// Every task sleeps for `delay` and then reports the index it observed;
/// observations come back in spawn order. With per-iteration capture the
/// result is exactly `0..count` - the broken shared-counter variant in
/// `src/bin/style_pitfalls_before.rs` sees the final value instead.
pub async fn delayed_indices(count: usize, delay: Duration) -> AppResult<Vec<usize>> {
    let handles: Vec<_> = (0..count)
        .map(|i| {
            // `move` hands each task its own copy of `i`
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                tracing::debug!(index = i, "Delayed task fired");
                i
            })
        })
        .collect();

    let results = futures::future::join_all(handles).await;
    results
        .into_iter()
        .map(|joined| joined.map_err(|e| AppError::internal(format!("Delayed task failed: {}", e))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_each_task_observes_its_own_index() {
        let observed = delayed_indices(10, Duration::from_millis(10))
            .await
            .unwrap();

        assert_eq!(observed, (0..10).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_zero_tasks_yield_no_observations() {
        let observed = delayed_indices(0, Duration::from_millis(1)).await.unwrap();
        assert!(observed.is_empty());
    }
}
