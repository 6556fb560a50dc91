//! Declarative configuration error types

/// Errors raised while loading form, table or menu definitions.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The definition is not valid JSON or does not match the expected shape.
    #[error("Invalid {kind} definition: {source}")]
    Json {
        /// What was being loaded (e.g. "menu", "form").
        kind: &'static str,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Two fields share the same name.
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),
}

impl ConfigError {
    /// Creates a JSON error for the given definition kind.
    pub fn json(kind: &'static str, source: serde_json::Error) -> Self {
        Self::Json { kind, source }
    }
}
