//! screening-core
//!
//! Pure domain types for the cognitive screening workflow. No I/O — this is
//! the shared vocabulary of instrument identifiers, answer shapes, answer
//! storage and the scoring service wire format.

pub mod error;
pub mod models;
