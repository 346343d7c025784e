//! # rival-core
//!
//! Foundation crate for the rival competitive-analysis agent.
//! Defines all types, traits, errors, config, and intent classification.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod intent;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RivalConfig;
pub use errors::{RivalError, RivalResult};
pub use intent::Intent;
pub use models::{CompetitorRecord, HistoryEntry, Passage};
