//! Hook testing fixture - improved user container walkthrough.
//!
//! Drives the library `UserManager`: derived credentials, strict
//! comparisons, and explicit not-found signaling. Compare with the planted
//! issues in `user_manager_before.rs`.

use hook_fixtures::logging;
use hook_fixtures::UserManager;

fn main() {
    logging::init();

    let mut manager = UserManager::new();

    let alice = manager.create_user("alice", "wonderland", "alice@example.com");
    let bob = manager.create_user("bob", "builder", "bob@example.com");
    let carol = manager.create_user("carol", "christmas", "carol@example.com");
    tracing::info!(
        count = manager.len(),
        first = alice.id,
        last = carol.id,
        "Created demo users"
    );

    let own_password = manager.authenticate_user("bob", "builder");
    let wrong_password = manager.authenticate_user("bob", "wrench");
    let wrong_case = manager.authenticate_user("Bob", "builder");
    tracing::info!(own_password, wrong_password, wrong_case, "Authentication checks");

    match manager.find_user_by_id(bob.id) {
        Some(found) => tracing::info!(id = found.id, username = %found.username, "Lookup hit"),
        None => tracing::warn!(id = bob.id, "Lookup missed"),
    }

    if manager.find_user_by_id(99).is_none() {
        tracing::info!(id = 99, "Absent identifier correctly reported as not found");
    }
}
