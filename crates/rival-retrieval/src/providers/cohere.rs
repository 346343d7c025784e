//! Cohere HTTP collaborators: embeddings and reranking.
//!
//! Blocking clients with a fixed request timeout; a timeout degrades exactly
//! like any other request failure. Payload structs cover only the fields this
//! crate consumes.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use rival_core::config::defaults;
use rival_core::errors::{RetrievalError, RivalResult};
use rival_core::models::Passage;
use rival_core::traits::{IEmbeddingProvider, IReranker};

/// Client for the `/embed` endpoint.
pub struct CohereEmbedder {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl CohereEmbedder {
    pub fn new(api_base: &str, api_key: &str, model: &str) -> RivalResult<Self> {
        Ok(Self {
            client: build_client().map_err(embedding_failed)?,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    fn embed(&self, texts: &[String], input_type: &str) -> RivalResult<Vec<Vec<f32>>> {
        #[derive(Deserialize)]
        struct EmbedResponse {
            embeddings: Vec<Vec<f32>>,
        }

        let body = json!({
            "model": self.model,
            "texts": texts,
            "input_type": input_type,
        });

        let response = self
            .client
            .post(format!("{}/embed", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(embedding_failed)?;

        let parsed: EmbedResponse = response.json().map_err(embedding_failed)?;
        if parsed.embeddings.len() != texts.len() {
            return Err(RetrievalError::EmbeddingFailed {
                reason: format!(
                    "expected {} embeddings, got {}",
                    texts.len(),
                    parsed.embeddings.len()
                ),
            }
            .into());
        }

        debug!(model = %self.model, texts = texts.len(), input_type, "embed request complete");
        Ok(parsed.embeddings)
    }
}

impl IEmbeddingProvider for CohereEmbedder {
    fn embed_document(&self, text: &str) -> RivalResult<Vec<f32>> {
        let mut embeddings = self.embed(&[text.to_string()], "search_document")?;
        embeddings.pop().ok_or_else(|| {
            RetrievalError::EmbeddingFailed {
                reason: "empty embedding batch".to_string(),
            }
            .into()
        })
    }

    fn embed_documents(&self, texts: &[String]) -> RivalResult<Vec<Vec<f32>>> {
        self.embed(texts, "search_document")
    }

    fn embed_query(&self, text: &str) -> RivalResult<Vec<f32>> {
        let mut embeddings = self.embed(&[text.to_string()], "search_query")?;
        embeddings.pop().ok_or_else(|| {
            RetrievalError::EmbeddingFailed {
                reason: "empty embedding batch".to_string(),
            }
            .into()
        })
    }

    fn name(&self) -> &str {
        &self.model
    }
}

/// Client for the `/rerank` endpoint. Best-effort collaborator: the engine
/// keeps the similarity ordering when a call fails.
pub struct CohereReranker {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl CohereReranker {
    pub fn new(api_base: &str, api_key: &str, model: &str) -> RivalResult<Self> {
        Ok(Self {
            client: build_client().map_err(rerank_failed)?,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }
}

impl IReranker for CohereReranker {
    fn rerank(&self, query: &str, candidates: Vec<Passage>) -> RivalResult<Vec<Passage>> {
        if candidates.is_empty() {
            return Ok(candidates);
        }

        #[derive(Deserialize)]
        struct RerankResult {
            index: usize,
            relevance_score: f64,
        }
        #[derive(Deserialize)]
        struct RerankResponse {
            results: Vec<RerankResult>,
        }

        let documents: Vec<&str> = candidates.iter().map(|p| p.text.as_str()).collect();
        let body = json!({
            "model": self.model,
            "query": query,
            "documents": documents,
            "top_n": candidates.len(),
        });

        let response = self
            .client
            .post(format!("{}/rerank", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(rerank_failed)?;

        let parsed: RerankResponse = response.json().map_err(rerank_failed)?;

        let mut reranked = Vec::with_capacity(parsed.results.len());
        for result in parsed.results {
            let candidate = candidates.get(result.index).cloned().ok_or_else(|| {
                RetrievalError::RerankFailed {
                    reason: format!("result index {} out of range", result.index),
                }
            })?;
            reranked.push(Passage {
                score: result.relevance_score,
                ..candidate
            });
        }

        debug!(model = %self.model, candidates = reranked.len(), "rerank request complete");
        Ok(reranked)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(defaults::DEFAULT_HTTP_TIMEOUT_SECS))
        .build()
}

fn embedding_failed(e: reqwest::Error) -> RetrievalError {
    RetrievalError::EmbeddingFailed {
        reason: e.to_string(),
    }
}

fn rerank_failed(e: reqwest::Error) -> RetrievalError {
    RetrievalError::RerankFailed {
        reason: e.to_string(),
    }
}
