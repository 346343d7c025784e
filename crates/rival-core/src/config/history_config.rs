use serde::{Deserialize, Serialize};

use super::defaults;

/// History buffer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of (query, answer) pairs retained; oldest evicted on overflow.
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: defaults::DEFAULT_MAX_HISTORY,
        }
    }
}
