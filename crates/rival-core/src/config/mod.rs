//! Workspace configuration.
//!
//! Serde structs with `#[serde(default)]` so a TOML override file may set
//! any subset of keys. Defaults live in the [`defaults`] module. The single
//! gating credential (`COHERE_API_KEY`) is read from the environment, never
//! from config files; its absence silently selects fallback behavior.

pub mod defaults;
mod generation_config;
mod history_config;
mod retrieval_config;

pub use generation_config::GenerationConfig;
pub use history_config::HistoryConfig;
pub use retrieval_config::RetrievalConfig;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration for the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RivalConfig {
    pub retrieval: RetrievalConfig,
    pub generation: GenerationConfig,
    pub history: HistoryConfig,
    /// API base URL shared by the embed, rerank, and generate clients.
    pub api_base: String,
}

impl Default for RivalConfig {
    fn default() -> Self {
        Self {
            retrieval: RetrievalConfig::default(),
            generation: GenerationConfig::default(),
            history: HistoryConfig::default(),
            api_base: defaults::DEFAULT_API_BASE.to_string(),
        }
    }
}

impl RivalConfig {
    /// Load from a TOML file; missing keys keep their defaults.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::Invalid {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// The gating credential from the environment.
    ///
    /// `None` (or an empty value) means every external collaborator runs in
    /// its fallback mode. Absence is never an error.
    pub fn api_key() -> Option<String> {
        std::env::var(defaults::API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}
