//! # rival-agent
//!
//! Orchestrates one reasoning cycle per query: classify intent, decompose
//! into sub-goals, retrieve context, assemble the prompt, generate the
//! answer, record it in the bounded history.

mod agent;
mod history;
pub mod prompt;

pub use agent::Agent;
pub use history::HistoryBuffer;
