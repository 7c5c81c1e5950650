/// Convenience result type used across moiretable.
pub type TableResult<T> = Result<T, TableError>;

/// Top-level error taxonomy used by the crate's fallible boundaries.
///
/// The pattern geometry itself is total; errors only come from surface allocation, configuration
/// loading and export.
#[derive(thiserror::Error, Debug)]
pub enum TableError {
    /// Invalid user-provided sizes or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by a drawing surface backend.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding or writing a rendered table.
    #[error("export error: {0}")]
    Export(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TableError {
    /// Build a [`TableError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TableError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TableError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`TableError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
