use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Passages returned per query.
    pub top_k: usize,
    /// Embedding model used in indexed mode.
    pub embed_model: String,
    /// Rerank model used in indexed mode.
    pub rerank_model: String,
    /// Whether indexed mode attempts best-effort reranking at all.
    pub rerank: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            embed_model: defaults::DEFAULT_EMBED_MODEL.to_string(),
            rerank_model: defaults::DEFAULT_RERANK_MODEL.to_string(),
            rerank: true,
        }
    }
}
