//! The reasoning loop: classify → decompose → retrieve → assemble →
//! generate → record. One pass per call; the only state carried across
//! calls is the history buffer.

use rival_core::config::RivalConfig;
use rival_core::intent::Intent;
use rival_core::models::HistoryEntry;
use rival_core::traits::IRetriever;
use rival_corpus::CorpusStore;
use rival_generation::GenerationEngine;
use rival_retrieval::RetrievalEngine;
use tracing::{debug, info, warn};

use crate::history::HistoryBuffer;
use crate::prompt;

/// A competitive-analysis agent bound to one loaded corpus.
///
/// Single-threaded and synchronous: each `reason_and_act` call runs to
/// completion before the next is accepted.
pub struct Agent {
    retriever: Box<dyn IRetriever>,
    generation: GenerationEngine,
    history: HistoryBuffer,
}

impl Agent {
    /// Assemble an agent from injected collaborators.
    pub fn new(
        retriever: Box<dyn IRetriever>,
        generation: GenerationEngine,
        max_history: usize,
    ) -> Self {
        Self {
            retriever,
            generation,
            history: HistoryBuffer::new(max_history),
        }
    }

    /// Wire the default collaborators for a corpus. The credential gates
    /// indexed retrieval and model-backed generation together; without it
    /// both run in their fallback modes.
    pub fn build(corpus: &CorpusStore, config: &RivalConfig, api_key: Option<&str>) -> Self {
        let retriever =
            RetrievalEngine::build(corpus, &config.retrieval, &config.api_base, api_key);
        let generation = GenerationEngine::build(&config.generation, &config.api_base, api_key);
        Self::new(Box::new(retriever), generation, config.history.max_entries)
    }

    /// Run one full reasoning cycle and return the answer.
    ///
    /// Never fails: retrieval errors degrade to an empty context, and the
    /// generation engine converts its own failures internally.
    pub fn reason_and_act(&mut self, query: &str) -> String {
        // Step 1: Classify intent and decompose into sub-goals.
        let intent = Intent::classify(query);
        let goals = intent.goal_plan();
        info!(%query, %intent, goals = ?goals, "reasoning cycle started");

        // Step 2: Retrieve context.
        let passages = match self.retriever.retrieve(query) {
            Ok(passages) => passages,
            Err(e) => {
                warn!(error = %e, "retrieval failed, answering without context");
                Vec::new()
            }
        };
        info!(retrieved = passages.len(), "retrieval complete");

        // Step 3: Assemble the prompt.
        let context = prompt::render_context(&passages);
        let full_prompt = prompt::build_prompt(intent, &goals, query, &context);

        // Step 4: Generate.
        let answer = self.generation.generate(&full_prompt);

        // Step 5: Record.
        self.history.append(HistoryEntry {
            query: query.to_string(),
            answer: answer.clone(),
        });
        debug!(answer_chars = answer.chars().count(), "reasoning cycle complete");

        answer
    }

    /// Recent (query, answer) pairs, most recent last.
    pub fn history(&self) -> Vec<&HistoryEntry> {
        self.history.recent().collect()
    }
}
