use crate::errors::RivalResult;

/// Embedding generation collaborator.
///
/// Implementations wrap an external service; the core never constructs or
/// tunes embedding internals.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed one document for indexing.
    fn embed_document(&self, text: &str) -> RivalResult<Vec<f32>>;

    /// Embed a batch of documents for indexing.
    fn embed_documents(&self, texts: &[String]) -> RivalResult<Vec<Vec<f32>>>;

    /// Embed a query for nearest-neighbor search.
    fn embed_query(&self, text: &str) -> RivalResult<Vec<f32>>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
