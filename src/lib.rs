//! Hook Fixtures - paired before/after demos for editor and CI hook pipelines
//!
//! This crate contains small fixture programs that exercise lint, format,
//! and static-analysis hooks. The `*_before` binaries intentionally contain
//! the issues the hooks are expected to flag; the `*_after` binaries and the
//! library modules show the repaired form of each pattern.
//!
//! # Layout
//!
//! - **config**: fixture constants
//! - **domain**: user record and placeholder credential value object
//! - **services**: in-memory user manager, record processing
//! - **jobs**: delayed-task helper (per-iteration capture)
//! - **errors**: centralized error handling
//! - **logging**: tracing setup shared by the binaries
//!
//! # Running the fixtures
//!
//! ```bash
//! cargo run --bin style_pitfalls_before
//! cargo run --bin style_pitfalls_after
//! cargo run --bin process_user
//! cargo run --bin user_manager_before
//! cargo run --bin user_manager_after
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod jobs;
pub mod logging;
pub mod services;

// Re-export commonly used types at crate root
pub use domain::{Credential, User};
pub use errors::{AppError, AppResult};
pub use services::{process_user, UserManager};
