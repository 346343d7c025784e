//! # rival-generation
//!
//! Produces the final answer text. A configured language model is consulted
//! when a credential is available; every failure path converts to a
//! deterministic reduction of the prompt, so callers always get a non-empty
//! answer and never see an error.

mod cohere;
mod engine;
pub mod fallback;

pub use cohere::CohereGenerator;
pub use engine::GenerationEngine;
