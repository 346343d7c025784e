//! Default values shared across config structs.

pub const DEFAULT_TOP_K: usize = 4;
pub const DEFAULT_MAX_HISTORY: usize = 5;
pub const DEFAULT_MAX_TOKENS: usize = 500;
pub const DEFAULT_TEMPERATURE: f64 = 0.3;

pub const DEFAULT_EMBED_MODEL: &str = "embed-english-v3.0";
pub const DEFAULT_RERANK_MODEL: &str = "rerank-english-v3.0";
pub const DEFAULT_GENERATE_MODEL: &str = "command-a-03-2025";

pub const DEFAULT_API_BASE: &str = "https://api.cohere.com/v1";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the gating credential.
pub const API_KEY_ENV: &str = "COHERE_API_KEY";
