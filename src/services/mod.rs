//! Application services layer - the improved fixture behaviors.
//!
//! The library deliberately exposes only the repaired half of each fixture
//! pair; the intentionally-flawed counterparts are self-contained binaries
//! under `src/bin/` so hook tooling finds every planted issue in one file.

mod processing;
mod user_manager;

pub use processing::process_user;
pub use user_manager::UserManager;
