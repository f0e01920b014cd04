//! Classification and query engine for the games catalog.
//!
//! [`Classifier`] assigns every record to one category of a
//! [`CategoryTable`](arcade_shelf_catalog::CategoryTable). [`Catalog`] indexes
//! a classified corpus for listing, search, detail lookups and
//! recommendations, and applies admin edits copy-on-write. [`pipeline`] ties
//! both to the files on disk.

pub mod classifier;
pub mod error;
pub mod index;
pub mod paginate;
pub mod pipeline;
pub mod settings;
pub mod summary;
pub mod util;

pub use classifier::{
    Assignment, ClassificationReport, ClassifiedCorpus, Classifier, Placement, score_definition,
};
pub use error::CatalogError;
pub use index::{Catalog, DEFAULT_SIMILAR_LIMIT};
pub use paginate::{ADMIN_PER_PAGE, PUBLIC_PER_PAGE, Page, paginate};
pub use pipeline::{RebuildReport, persist, rebuild};
pub use settings::{CatalogPaths, PathOverrides, Settings};
pub use summary::{CorpusStats, all_entry, summarize, summarize_corpus};
pub use util::{plural, thumbnail_path, validate_record};
