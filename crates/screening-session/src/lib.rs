//! screening-session
//!
//! The assessment workflow: instrument selection, question navigation,
//! completion gating and the single-flight scoring request.

pub mod assessment;
pub mod client;
pub mod error;
pub mod navigator;
pub mod progress;
pub mod requester;
pub mod shared;
