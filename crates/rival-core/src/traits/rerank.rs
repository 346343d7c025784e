use crate::errors::RivalResult;
use crate::models::Passage;

/// Optional cross-encoder style reranking collaborator.
///
/// Best-effort by contract: callers discard the error and keep the original
/// ordering when a rerank call fails.
pub trait IReranker: Send + Sync {
    /// Reorder candidates by a finer relevance score, best first.
    fn rerank(&self, query: &str, candidates: Vec<Passage>) -> RivalResult<Vec<Passage>>;

    /// Human-readable reranker name.
    fn name(&self) -> &str;
}
