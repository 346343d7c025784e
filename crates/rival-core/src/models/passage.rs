use serde::{Deserialize, Serialize};

/// One scored unit of retrieved text with source attribution.
///
/// Produced fresh per query, never persisted. Callers receive passages
/// sorted descending by score and truncated to the configured top-k.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub text: String,
    /// Relevance score; higher is more relevant. The scale depends on the
    /// retrieval mode (cosine similarity, rerank relevance, or lexical count).
    pub score: f64,
    /// Competitor name the passage was built from.
    pub source: String,
}
