/// Corpus loading errors. Fatal at startup; never produced after load.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("cannot read corpus at {path}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed corpus at {path}: {reason}")]
    Malformed { path: String, reason: String },
}
