//! Domain layer - Core fixture entities
//!
//! Contains the user record and the placeholder credential value object,
//! independent of how the fixture binaries drive them.

pub mod credential;
pub mod user;

pub use credential::Credential;
pub use user::User;
