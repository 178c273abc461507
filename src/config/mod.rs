//! Fixture configuration module
//!
//! The fixtures consume no environment variables; configuration is a set of
//! compile-time constants.

mod constants;

pub use constants::*;
