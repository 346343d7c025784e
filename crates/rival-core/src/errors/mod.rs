//! Error taxonomy: per-subsystem enums aggregated into [`RivalError`].
//!
//! Only corpus and config errors are fatal, and only at startup. Retrieval
//! and generation errors are degradation signals: the caller logs them and
//! takes the fallback path instead of surfacing a hard failure.

mod config_error;
mod corpus_error;
mod generation_error;
mod retrieval_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use generation_error::GenerationError;
pub use retrieval_error::RetrievalError;

/// Aggregate error type for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum RivalError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Workspace-wide result alias.
pub type RivalResult<T> = Result<T, RivalError>;
