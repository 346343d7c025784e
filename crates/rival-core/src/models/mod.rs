//! Shared data models, one per file.

mod competitor_record;
mod history_entry;
mod passage;

pub use competitor_record::{
    CompetitorRecord, FIELD_DESCRIPTION, FIELD_FINANCIALS, FIELD_NAME, FIELD_STRATEGY,
};
pub use history_entry::HistoryEntry;
pub use passage::Passage;
