//! Engine strategy behavior with in-process mock collaborators.

use rival_core::errors::{RetrievalError, RivalResult};
use rival_core::models::Passage;
use rival_core::traits::{IEmbeddingProvider, IReranker, IRetriever};
use rival_corpus::CorpusStore;
use rival_retrieval::RetrievalEngine;

/// Deterministic embedding mock: hashes terms into fixed buckets, so equal
/// inputs always produce equal vectors.
struct HashingProvider {
    dims: usize,
}

impl HashingProvider {
    fn vector(&self, text: &str) -> Vec<f32> {
        let mut v = vec![0.0f32; self.dims];
        for term in text.to_lowercase().split_whitespace() {
            let mut h: u64 = 0xcbf29ce484222325;
            for b in term.as_bytes() {
                h ^= u64::from(*b);
                h = h.wrapping_mul(0x100000001b3);
            }
            v[(h as usize) % self.dims] += 1.0;
        }
        v
    }
}

impl IEmbeddingProvider for HashingProvider {
    fn embed_document(&self, text: &str) -> RivalResult<Vec<f32>> {
        Ok(self.vector(text))
    }
    fn embed_documents(&self, texts: &[String]) -> RivalResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }
    fn embed_query(&self, text: &str) -> RivalResult<Vec<f32>> {
        Ok(self.vector(text))
    }
    fn name(&self) -> &str {
        "hashing-mock"
    }
}

/// A provider that fails every call.
struct FailingProvider;

impl IEmbeddingProvider for FailingProvider {
    fn embed_document(&self, _text: &str) -> RivalResult<Vec<f32>> {
        Err(RetrievalError::EmbeddingFailed {
            reason: "mock failure".to_string(),
        }
        .into())
    }
    fn embed_documents(&self, _texts: &[String]) -> RivalResult<Vec<Vec<f32>>> {
        Err(RetrievalError::EmbeddingFailed {
            reason: "mock failure".to_string(),
        }
        .into())
    }
    fn embed_query(&self, _text: &str) -> RivalResult<Vec<f32>> {
        Err(RetrievalError::EmbeddingFailed {
            reason: "mock failure".to_string(),
        }
        .into())
    }
    fn name(&self) -> &str {
        "failing-mock"
    }
}

/// Reranker that reverses the candidate order.
struct ReversingReranker;

impl IReranker for ReversingReranker {
    fn rerank(&self, _query: &str, mut candidates: Vec<Passage>) -> RivalResult<Vec<Passage>> {
        candidates.reverse();
        Ok(candidates)
    }
    fn name(&self) -> &str {
        "reversing-mock"
    }
}

/// Reranker that always fails.
struct FailingReranker;

impl IReranker for FailingReranker {
    fn rerank(&self, _query: &str, _candidates: Vec<Passage>) -> RivalResult<Vec<Passage>> {
        Err(RetrievalError::RerankFailed {
            reason: "mock failure".to_string(),
        }
        .into())
    }
    fn name(&self) -> &str {
        "failing-rerank-mock"
    }
}

const CSV: &str = "\
Competitor Name,Product Description,Marketing Strategy,Financial Summary
Acme,Cheap widgets for factories,Low price,Profitable
Globex,Luxury gadgets,Premium brand,Break-even
Initech,Workflow software,Enterprise sales,Growing
";

fn corpus() -> CorpusStore {
    CorpusStore::from_reader(CSV.as_bytes()).unwrap()
}

#[test]
fn indexed_mode_attributes_passages_to_competitors() {
    let engine =
        RetrievalEngine::with_indexed(Box::new(HashingProvider { dims: 64 }), None, &corpus(), 4)
            .unwrap();
    assert_eq!(engine.mode_name(), "indexed");

    let results = engine.retrieve("cheap widgets").unwrap();
    assert!(!results.is_empty());
    assert_eq!(results[0].source, "Acme");
    assert!(results[0].text.contains("Competitor Name: Acme"));
}

#[test]
fn indexed_retrieval_is_idempotent() {
    let engine =
        RetrievalEngine::with_indexed(Box::new(HashingProvider { dims: 64 }), None, &corpus(), 4)
            .unwrap();

    let first = engine.retrieve("premium luxury gadgets").unwrap();
    let second = engine.retrieve("premium luxury gadgets").unwrap();

    let scores = |r: &[Passage]| r.iter().map(|p| (p.source.clone(), p.score)).collect::<Vec<_>>();
    assert_eq!(scores(&first), scores(&second));
}

#[test]
fn indexed_results_are_sorted_and_bounded() {
    let engine =
        RetrievalEngine::with_indexed(Box::new(HashingProvider { dims: 64 }), None, &corpus(), 2)
            .unwrap();

    let results = engine.retrieve("widgets gadgets software").unwrap();
    assert!(results.len() <= 2);
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn failing_provider_fails_indexed_construction() {
    let result = RetrievalEngine::with_indexed(Box::new(FailingProvider), None, &corpus(), 4);
    assert!(result.is_err());
}

#[test]
fn reranker_reorders_candidates() {
    let plain =
        RetrievalEngine::with_indexed(Box::new(HashingProvider { dims: 64 }), None, &corpus(), 3)
            .unwrap();
    let reranked = RetrievalEngine::with_indexed(
        Box::new(HashingProvider { dims: 64 }),
        Some(Box::new(ReversingReranker)),
        &corpus(),
        3,
    )
    .unwrap();

    let base: Vec<String> = plain
        .retrieve("widgets")
        .unwrap()
        .into_iter()
        .map(|p| p.source)
        .collect();
    let flipped: Vec<String> = reranked
        .retrieve("widgets")
        .unwrap()
        .into_iter()
        .map(|p| p.source)
        .collect();

    let mut expected = base.clone();
    expected.reverse();
    assert_eq!(flipped, expected);
}

#[test]
fn rerank_failure_keeps_retriever_order() {
    let plain =
        RetrievalEngine::with_indexed(Box::new(HashingProvider { dims: 64 }), None, &corpus(), 3)
            .unwrap();
    let degraded = RetrievalEngine::with_indexed(
        Box::new(HashingProvider { dims: 64 }),
        Some(Box::new(FailingReranker)),
        &corpus(),
        3,
    )
    .unwrap();

    let base: Vec<String> = plain
        .retrieve("widgets")
        .unwrap()
        .into_iter()
        .map(|p| p.source)
        .collect();
    let kept: Vec<String> = degraded
        .retrieve("widgets")
        .unwrap()
        .into_iter()
        .map(|p| p.source)
        .collect();

    assert_eq!(kept, base);
}

#[test]
fn fallback_mode_never_errors() {
    let engine = RetrievalEngine::fallback(&corpus(), 4);
    assert_eq!(engine.mode_name(), "fallback");
    assert!(engine.retrieve("anything").is_ok());
}

#[test]
fn fallback_on_empty_corpus_returns_empty() {
    let empty = CorpusStore::from_reader("Competitor Name\n".as_bytes()).unwrap();
    let engine = RetrievalEngine::fallback(&empty, 4);
    assert!(engine.retrieve("widgets").unwrap().is_empty());
}

#[test]
fn build_without_credential_selects_fallback() {
    let config = rival_core::config::RetrievalConfig::default();
    let engine = RetrievalEngine::build(&corpus(), &config, "https://api.invalid/v1", None);
    assert_eq!(engine.mode_name(), "fallback");
}
