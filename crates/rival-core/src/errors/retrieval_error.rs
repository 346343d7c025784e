/// Retrieval subsystem errors.
///
/// None of these are fatal: setup failures downgrade the engine to its
/// lexical fallback mode, and call-time failures downgrade a single answer
/// to an empty context.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("embedding request failed: {reason}")]
    EmbeddingFailed { reason: String },

    #[error("rerank request failed: {reason}")]
    RerankFailed { reason: String },

    #[error("index build failed: {reason}")]
    IndexBuildFailed { reason: String },
}
