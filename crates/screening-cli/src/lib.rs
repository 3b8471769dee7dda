//! screening-cli library root.
//!
//! Re-exports internal modules so that integration tests can exercise them
//! directly without going through the console loop.

pub mod commands;
pub mod config;
pub mod render;
