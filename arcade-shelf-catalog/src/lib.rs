//! Games catalog data model, category taxonomy, slugs, and file I/O.
//!
//! This crate holds the plain data the rest of the workspace works on. It
//! knows how to read and write the corpus and the category tables, but does
//! no classification or querying; see `arcade-shelf-lib` for that.

pub mod slug;
pub mod storage;
pub mod taxonomy;
pub mod types;

pub use slug::{humanize_slug, normalize_category, slug_to_title, title_to_slug, wrap_category};
pub use storage::{
    StorageError, backup_file, load_definitions, load_games, load_summaries, save_games,
    save_summaries,
};
pub use taxonomy::{
    ALL_CATEGORY, ALL_CATEGORY_NAME, CategoryTable, DEFAULT_CATEGORY, DefinitionError,
    FALLBACK_ICON, category_icon,
};
pub use types::*;
