/// Error types shared across the newsletter workspace crates.
///
/// These errors represent failures in infrastructure components (file store,
/// serialization) that are common to multiple crates. Application-specific
/// errors should be defined in each crate and wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("store io error at {path}: {source}")]
    StoreIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
