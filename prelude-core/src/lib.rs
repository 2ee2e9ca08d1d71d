//! # prelude-core
//!
//! Foundation crate for the Prelude Detect SDK.
//! Defines the detect data model, errors, config, and defaults.
//! Contains no network code; `prelude-sdk` builds on top of it.

pub mod config;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::PreludeConfig;
pub use errors::{PreludeError, PreludeResult};
pub use models::{
    AccountActivity, ActivityCounts, EnableTest, EndpointRegistration, Observation, Probe,
    QueueEntry, RunCode, Stats,
};
