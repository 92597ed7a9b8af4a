/// Convenience result type used across charpack.
pub type CharpackResult<T> = Result<T, CharpackError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum CharpackError {
    /// A source file (charset, GIF, PETSCII export, config) could not be loaded.
    #[error("load error: {0}")]
    Load(String),

    /// Structurally invalid channel data or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while writing converted output.
    #[error("export error: {0}")]
    Export(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CharpackError {
    /// Build a [`CharpackError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`CharpackError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CharpackError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
