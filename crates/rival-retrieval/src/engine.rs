//! RetrievalEngine: capability-checked strategy selection.
//!
//! The strategy (indexed vs lexical fallback) is probed once at construction
//! and stays fixed for the engine's lifetime, even if the embedding service
//! becomes reachable later. Construction never fails: every setup problem
//! logs a warning and degrades to the fallback.

use rival_core::config::RetrievalConfig;
use rival_core::errors::RivalResult;
use rival_core::models::Passage;
use rival_core::traits::{IEmbeddingProvider, IReranker, IRetriever};
use rival_corpus::CorpusStore;
use tracing::{info, warn};

use crate::index::VectorIndex;
use crate::lexical::LexicalRetriever;
use crate::providers::{CohereEmbedder, CohereReranker};

/// The strategy selected at construction.
enum RetrievalStrategy {
    Indexed(IndexedRetriever),
    Fallback(LexicalRetriever),
}

/// Retrieval over one loaded corpus. Read-only after construction, safe to
/// share across sequential queries.
pub struct RetrievalEngine {
    strategy: RetrievalStrategy,
}

/// Indexed strategy: embedding provider + vector index + optional reranker.
struct IndexedRetriever {
    provider: Box<dyn IEmbeddingProvider>,
    index: VectorIndex,
    reranker: Option<Box<dyn IReranker>>,
    top_k: usize,
}

impl RetrievalEngine {
    /// Probe capability and build the engine.
    ///
    /// Indexed mode requires a credential and a successful bulk embed of the
    /// corpus; anything else selects the lexical fallback.
    pub fn build(
        corpus: &CorpusStore,
        config: &RetrievalConfig,
        api_base: &str,
        api_key: Option<&str>,
    ) -> Self {
        match api_key {
            Some(key) => match Self::build_indexed(corpus, config, api_base, key) {
                Ok(engine) => engine,
                Err(e) => {
                    warn!(error = %e, "indexed setup failed, degrading to lexical fallback");
                    Self::fallback(corpus, config.top_k)
                }
            },
            None => {
                warn!("no API credential, retrieval running in lexical fallback mode");
                Self::fallback(corpus, config.top_k)
            }
        }
    }

    /// Assemble the indexed strategy from injected collaborators. Fails if
    /// the corpus cannot be embedded.
    pub fn with_indexed(
        provider: Box<dyn IEmbeddingProvider>,
        reranker: Option<Box<dyn IReranker>>,
        corpus: &CorpusStore,
        top_k: usize,
    ) -> RivalResult<Self> {
        let texts: Vec<String> = corpus.records().iter().map(|r| r.document_text()).collect();
        let sources = corpus.records().iter().map(|r| r.source_name().to_string());
        let embeddings = provider.embed_documents(&texts)?;
        let index = VectorIndex::new(texts.into_iter().zip(sources).collect(), embeddings)?;

        info!(
            provider = provider.name(),
            documents = index.len(),
            reranker = reranker.as_ref().map(|r| r.name()).unwrap_or("none"),
            top_k,
            "retrieval engine in indexed mode"
        );

        Ok(Self {
            strategy: RetrievalStrategy::Indexed(IndexedRetriever {
                provider,
                index,
                reranker,
                top_k,
            }),
        })
    }

    /// The lexical fallback strategy. Never fails.
    pub fn fallback(corpus: &CorpusStore, top_k: usize) -> Self {
        info!(records = corpus.len(), top_k, "retrieval engine in fallback mode");
        Self {
            strategy: RetrievalStrategy::Fallback(LexicalRetriever::new(corpus.records(), top_k)),
        }
    }

    fn build_indexed(
        corpus: &CorpusStore,
        config: &RetrievalConfig,
        api_base: &str,
        api_key: &str,
    ) -> RivalResult<Self> {
        let provider = CohereEmbedder::new(api_base, api_key, &config.embed_model)?;
        let reranker: Option<Box<dyn IReranker>> = if config.rerank {
            Some(Box::new(CohereReranker::new(
                api_base,
                api_key,
                &config.rerank_model,
            )?))
        } else {
            None
        };
        Self::with_indexed(Box::new(provider), reranker, corpus, config.top_k)
    }

    /// Which strategy is active, for logs and the startup banner.
    pub fn mode_name(&self) -> &'static str {
        match &self.strategy {
            RetrievalStrategy::Indexed(_) => "indexed",
            RetrievalStrategy::Fallback(_) => "fallback",
        }
    }
}

impl IRetriever for RetrievalEngine {
    fn retrieve(&self, query: &str) -> RivalResult<Vec<Passage>> {
        match &self.strategy {
            RetrievalStrategy::Indexed(indexed) => indexed.retrieve(query),
            RetrievalStrategy::Fallback(lexical) => Ok(lexical.retrieve(query)),
        }
    }
}

impl IndexedRetriever {
    fn retrieve(&self, query: &str) -> RivalResult<Vec<Passage>> {
        let query_embedding = self.provider.embed_query(query)?;
        let mut results = self.index.query(&query_embedding, self.top_k);

        if let Some(reranker) = &self.reranker {
            match reranker.rerank(query, results.clone()) {
                Ok(reranked) => results = reranked,
                // Best-effort: keep the similarity ordering.
                Err(e) => {
                    warn!(reranker = reranker.name(), error = %e, "rerank failed, keeping retriever order");
                }
            }
        }

        results.truncate(self.top_k);
        Ok(results)
    }
}
