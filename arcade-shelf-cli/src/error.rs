use arcade_shelf_lib::CatalogError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalog operation failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// No game matches the given title or slug
    #[error("Game not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Logging could not be set up
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}

impl From<arcade_shelf_catalog::StorageError> for CliError {
    fn from(e: arcade_shelf_catalog::StorageError) -> Self {
        Self::Catalog(e.into())
    }
}
