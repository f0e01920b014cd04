//! Corpus build pipeline: back up the corpus, reclassify it, and publish the
//! classified corpus plus `categories.json`.

use std::path::PathBuf;

use arcade_shelf_catalog::{
    CategoryTable, GameRecord, backup_file, load_games, save_games, save_summaries,
};

use crate::classifier::{ClassificationReport, Classifier};
use crate::error::CatalogError;
use crate::index::Catalog;
use crate::settings::{CatalogPaths, edit_backup_path};

/// Outcome of a [`rebuild`] run.
#[derive(Debug)]
pub struct RebuildReport {
    pub report: ClassificationReport,
    /// The classified corpus, as written (or as it would be written).
    pub games: Vec<GameRecord>,
    /// Where the original corpus was copied; `None` on a dry run.
    pub backup: Option<PathBuf>,
    pub dry_run: bool,
}

/// Reclassify the corpus at `paths.corpus` against `table`.
///
/// Order of effects: the corpus bytes are copied verbatim to `paths.backup`,
/// then the classified corpus replaces the original (tmp + rename), then
/// `paths.categories` is written. A dry run only reads and classifies.
pub fn rebuild(
    paths: &CatalogPaths,
    table: &CategoryTable,
    dry_run: bool,
) -> Result<RebuildReport, CatalogError> {
    let classifier = Classifier::new(table)?;
    let games = load_games(&paths.corpus)?;
    log::info!(
        "Classifying {} games from {}",
        games.len(),
        paths.corpus.display()
    );

    let classified = classifier.classify_corpus(&games);

    if dry_run {
        return Ok(RebuildReport {
            report: classified.report,
            games: classified.games,
            backup: None,
            dry_run,
        });
    }

    let bytes = backup_file(&paths.corpus, &paths.backup)?;
    log::debug!("Backed up {} bytes to {}", bytes, paths.backup.display());

    save_games(&paths.corpus, &classified.games)?;
    save_summaries(&paths.categories, &classified.report.summaries)?;
    log::info!(
        "Wrote {} and {}",
        paths.corpus.display(),
        paths.categories.display()
    );

    Ok(RebuildReport {
        report: classified.report,
        games: classified.games,
        backup: Some(paths.backup.clone()),
        dry_run,
    })
}

/// Write an edited catalog back to disk.
///
/// The corpus on disk is first copied to a timestamped edit backup (see
/// [`edit_backup_path`]); `paths.backup` is never touched here. Then the
/// corpus and the published category list are replaced. Returns the edit
/// backup path, or `None` when there was no corpus to back up.
pub fn persist(catalog: &Catalog, paths: &CatalogPaths) -> Result<Option<PathBuf>, CatalogError> {
    let backup = if paths.corpus.exists() {
        let backup = edit_backup_path(&paths.corpus);
        backup_file(&paths.corpus, &backup)?;
        Some(backup)
    } else {
        None
    };
    save_games(&paths.corpus, catalog.list_all())?;
    save_summaries(&paths.categories, catalog.published_summaries())?;
    log::debug!(
        "Persisted {} games to {}",
        catalog.len(),
        paths.corpus.display()
    );
    Ok(backup)
}
