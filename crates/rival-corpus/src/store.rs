//! CSV-backed corpus store.
//!
//! Missing cells (short rows, empty values) normalize to empty strings so
//! downstream text assembly never branches on absent fields.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rival_core::errors::CorpusError;
use rival_core::models::CompetitorRecord;
use tracing::info;

/// In-memory, read-only store of competitor records.
///
/// One record per input row, in file order. Row position is the record's
/// identity; names are not required to be unique.
#[derive(Debug, Clone, Default)]
pub struct CorpusStore {
    records: Vec<CompetitorRecord>,
}

impl CorpusStore {
    /// Load a corpus from a CSV file. Fatal on unreadable or malformed input.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CorpusError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        let store = Self::from_reader(file).map_err(|e| match e {
            CorpusError::Malformed { reason, .. } => CorpusError::Malformed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })?;
        info!(path = %path.display(), records = store.len(), "corpus loaded");
        Ok(store)
    }

    /// Parse a corpus from any reader. Rows shorter than the header are
    /// padded with empty strings; rows longer than the header keep only the
    /// named columns.
    pub fn from_reader(reader: impl Read) -> Result<Self, CorpusError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(malformed)?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row.map_err(malformed)?;
            let fields = headers
                .iter()
                .enumerate()
                .map(|(i, header)| (header.clone(), row.get(i).unwrap_or("").to_string()))
                .collect();
            records.push(CompetitorRecord::new(fields));
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[CompetitorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn malformed(e: csv::Error) -> CorpusError {
    CorpusError::Malformed {
        path: "<reader>".to_string(),
        reason: e.to_string(),
    }
}
