//! In-memory cosine-similarity vector index.
//!
//! The corpus holds one document per competitor, so an exhaustive scan over
//! normalized vectors is the whole search. Vectors are L2-normalized once at
//! build time; a query then reduces to dot products.

use rival_core::errors::{RetrievalError, RivalError, RivalResult};
use rival_core::models::Passage;

/// One indexed document: rendered record text, its source, and its vector.
#[derive(Debug, Clone)]
struct IndexedDocument {
    text: String,
    source: String,
    embedding: Vec<f32>,
}

/// Flat in-memory index over competitor documents. Read-only after build.
#[derive(Debug, Default)]
pub struct VectorIndex {
    documents: Vec<IndexedDocument>,
}

impl VectorIndex {
    /// Build from parallel `(text, source)` and embedding lists.
    pub fn new(documents: Vec<(String, String)>, embeddings: Vec<Vec<f32>>) -> RivalResult<Self> {
        if documents.len() != embeddings.len() {
            return Err(RivalError::Retrieval(RetrievalError::IndexBuildFailed {
                reason: format!(
                    "{} documents but {} embeddings",
                    documents.len(),
                    embeddings.len()
                ),
            }));
        }

        let documents = documents
            .into_iter()
            .zip(embeddings)
            .map(|((text, source), embedding)| IndexedDocument {
                text,
                source,
                embedding: normalize(embedding),
            })
            .collect();

        Ok(Self { documents })
    }

    /// Top-k documents by cosine similarity, descending, stable for ties.
    pub fn query(&self, query_embedding: &[f32], top_k: usize) -> Vec<Passage> {
        let query = normalize(query_embedding.to_vec());

        let mut results: Vec<Passage> = self
            .documents
            .iter()
            .map(|doc| Passage {
                text: doc.text.clone(),
                score: dot(&doc.embedding, &query) as f64,
                source: doc.source.clone(),
            })
            .collect();

        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(top_k);
        results
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

fn normalize(mut v: Vec<f32>) -> Vec<f32> {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for x in &mut v {
            *x /= norm;
        }
    }
    v
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
