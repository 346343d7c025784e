//! External retrieval collaborators.

mod cohere;

pub use cohere::{CohereEmbedder, CohereReranker};
