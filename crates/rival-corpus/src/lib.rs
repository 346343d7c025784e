//! # rival-corpus
//!
//! Loads the competitors dataset into memory once at startup and exposes it
//! as a read-only sequence of [`rival_core::models::CompetitorRecord`].

mod store;

pub use store::CorpusStore;
