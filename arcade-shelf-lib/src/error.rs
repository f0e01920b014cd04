use arcade_shelf_catalog::StorageError;
use thiserror::Error;

/// Errors that can occur while classifying, editing, or persisting a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A category slug that the definition table does not know.
    ///
    /// Raised for edits that name a target category; it means the caller
    /// holds a stale or corrupted table reference.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The definition table has no default category to fall back to
    #[error("Category table has no default category '{0}'")]
    NoDefaultCategory(String),

    /// A record is missing a field the catalog requires
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Reading or writing a catalog file failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CatalogError {
    pub fn unknown_category(slug: impl Into<String>) -> Self {
        Self::UnknownCategory(slug.into())
    }
}
