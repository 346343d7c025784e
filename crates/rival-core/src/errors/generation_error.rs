/// Generation subsystem errors. Non-fatal: the generation engine converts
/// every one of them into the deterministic offline fallback text.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("completion request failed: {reason}")]
    CompletionFailed { reason: String },

    #[error("completion response carried no generations")]
    EmptyResponse,
}
