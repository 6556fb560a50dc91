//! File metadata for file and image fields

use serde::Deserialize;
use serde::Serialize;

/// Metadata of a file picked in a file or image field.
///
/// Only the attributes the validator inspects are carried; the file content
/// itself never enters form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// File name including its extension.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type reported by the picker (may be empty).
    pub mime: String,
}

impl FileInfo {
    /// Creates file metadata.
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Returns the extension with its leading dot, e.g. `.png`.
    ///
    /// A name without a dot yields the whole name prefixed with a dot.
    pub fn extension(&self) -> String {
        let last = self.name.rsplit('.').next().unwrap_or_default();
        format!(".{}", last)
    }
}
