//! Background-work fixtures.
//!
//! Holds the delayed-task helper used by the repaired style fixture.

pub mod delayed;

pub use delayed::delayed_indices;
