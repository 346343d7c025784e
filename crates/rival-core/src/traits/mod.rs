//! Collaborator seams.
//!
//! External services (embedding, reranking, completion) and the retrieval
//! strategy are consumed only through these traits, so every engine can be
//! exercised with in-process mocks.

mod embedding;
mod generation;
mod rerank;
mod retrieval;

pub use embedding::IEmbeddingProvider;
pub use generation::IGenerator;
pub use rerank::IReranker;
pub use retrieval::IRetriever;
