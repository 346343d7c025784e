/// Configuration errors. Fatal at startup when an override file is given.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config at {path}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config at {path}: {reason}")]
    Invalid { path: String, reason: String },
}
