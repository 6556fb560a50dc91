//! Theme storage error types

/// Errors from a [`ThemeStorage`](crate::layout::ThemeStorage) backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file holds something other than a JSON object of strings.
    #[error("storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// No platform configuration directory could be determined.
    #[error("no configuration directory available")]
    NoConfigDir,
}
