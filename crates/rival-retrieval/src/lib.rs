//! # rival-retrieval
//!
//! Given a query, returns a ranked list of scored passages with source
//! attribution. Two strategies, chosen once at engine construction:
//!
//! - **Indexed**: embed every competitor document, search an in-memory
//!   cosine index, optionally rerank the candidates.
//! - **Fallback**: lexical scoring over per-record text blobs, no external
//!   services at all.

pub mod engine;
pub mod index;
pub mod lexical;
pub mod providers;

pub use engine::RetrievalEngine;
