use serde::{Deserialize, Serialize};

/// One completed reasoning cycle, kept for user inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,
    pub answer: String,
}
