//! Errors raised by storage backends and the session store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backend is not reachable (e.g. `localStorage` disabled by the browser).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to serialize value: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A stored value exists but is not in the shape this application writes.
    #[error("stored value under `{key}` is malformed: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
