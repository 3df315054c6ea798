use std::path::PathBuf;

/// Errors surfaced by configuration loading and scene lookups.
///
/// Per-frame conditions (missing texture, unset spawn origin) are not errors:
/// they are logged and the frame carries on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown scene node {0}")]
    UnknownNode(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
