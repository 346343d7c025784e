use crate::errors::RivalResult;

/// Language-model completion collaborator.
pub trait IGenerator: Send + Sync {
    /// Complete a prompt, bounded by `max_tokens`.
    fn complete(&self, prompt: &str, max_tokens: usize, temperature: f64) -> RivalResult<String>;

    /// Human-readable generator name.
    fn name(&self) -> &str;
}
