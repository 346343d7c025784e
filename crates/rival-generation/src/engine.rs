//! GenerationEngine: try the model, fall back deterministically.

use rival_core::config::GenerationConfig;
use rival_core::traits::IGenerator;
use tracing::{debug, warn};

use crate::cohere::CohereGenerator;
use crate::fallback;

/// Answer production for the reasoning loop.
///
/// Holds at most one generator; `None` means every answer comes from the
/// offline fallback. `generate` never returns an error to the caller.
pub struct GenerationEngine {
    generator: Option<Box<dyn IGenerator>>,
    max_tokens: usize,
    temperature: f64,
}

impl GenerationEngine {
    /// Wire the default generator when a credential is present; otherwise
    /// run offline. Construction never fails.
    pub fn build(config: &GenerationConfig, api_base: &str, api_key: Option<&str>) -> Self {
        let generator: Option<Box<dyn IGenerator>> = match api_key {
            Some(key) => match CohereGenerator::new(api_base, key, &config.model) {
                Ok(g) => Some(Box::new(g)),
                Err(e) => {
                    warn!(error = %e, "generator setup failed, answers use the offline fallback");
                    None
                }
            },
            None => {
                debug!("no API credential, answers use the offline fallback");
                None
            }
        };
        Self {
            generator,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Build around an injected generator. Used by tests and embedders.
    pub fn with_generator(generator: Box<dyn IGenerator>, config: &GenerationConfig) -> Self {
        Self {
            generator: Some(generator),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// An engine with no generator at all: answers are always the fallback.
    pub fn offline(config: &GenerationConfig) -> Self {
        Self {
            generator: None,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Produce an answer for the prompt.
    ///
    /// Any completion failure (or an all-whitespace completion) is logged
    /// and converted to the deterministic fallback text. Never errors.
    pub fn generate(&self, prompt: &str) -> String {
        if let Some(generator) = &self.generator {
            match generator.complete(prompt, self.max_tokens, self.temperature) {
                Ok(text) if !text.trim().is_empty() => return text.trim().to_string(),
                Ok(_) => {
                    warn!(generator = generator.name(), "blank completion, using fallback")
                }
                Err(e) => {
                    warn!(generator = generator.name(), error = %e, "completion failed, using fallback")
                }
            }
        }
        fallback::fallback_text(prompt)
    }

    /// Whether a model-backed generator is wired in.
    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }
}
