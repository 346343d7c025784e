use crate::errors::RivalResult;
use crate::models::Passage;

/// Retrieval over the competitor corpus.
pub trait IRetriever: Send + Sync {
    /// Return at most top-k passages for the query, sorted descending by
    /// score (stable for ties).
    fn retrieve(&self, query: &str) -> RivalResult<Vec<Passage>>;
}
