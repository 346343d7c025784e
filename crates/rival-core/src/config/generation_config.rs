use serde::{Deserialize, Serialize};

use super::defaults;

/// Generation subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Completion model name.
    pub model: String,
    /// Cap on generated tokens per answer.
    pub max_tokens: usize,
    /// Sampling temperature. Low but non-zero: determinism-leaning output
    /// without a guarantee of identical completions.
    pub temperature: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_GENERATE_MODEL.to_string(),
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
            temperature: defaults::DEFAULT_TEMPERATURE,
        }
    }
}
