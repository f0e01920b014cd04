//! Admin edits. Each one loads the corpus, builds the edited catalog, and
//! writes corpus and category list back (after a timestamped edit backup).

use std::collections::HashSet;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use arcade_shelf_catalog::GameRecord;
use arcade_shelf_lib::{Catalog, persist, plural, validate_record};

use super::CatalogContext;
use crate::CliError;
use crate::cli_types::RecordArgs;

/// Collect titles, warning about any the corpus does not contain.
fn known_titles(catalog: &Catalog, titles: Vec<String>) -> HashSet<String> {
    titles
        .into_iter()
        .filter(|title| {
            let known = catalog.get_by_title(title).is_some();
            if !known {
                log::warn!("No game titled {:?}; skipping", title);
            }
            known
        })
        .collect()
}

fn save(ctx: &CatalogContext, catalog: &Catalog) -> Result<(), CliError> {
    if let Some(backup) = persist(catalog, &ctx.paths)? {
        log::debug!("Previous corpus copied to {}", backup.display());
    }
    log::info!(
        "{} Saved {} to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        plural(catalog.len(), "game"),
        ctx.paths.corpus.display(),
    );
    Ok(())
}

pub(crate) fn run_recategorize(
    ctx: &CatalogContext,
    to: &str,
    titles: Vec<String>,
) -> Result<(), CliError> {
    let catalog = ctx.load_catalog_for_edit()?;
    let titles = known_titles(&catalog, titles);
    if titles.is_empty() {
        log::info!("Nothing to recategorize.");
        return Ok(());
    }

    let updated = catalog.recategorize(&titles, to)?;
    log::info!("Moved {} to '{}'", plural(titles.len(), "game"), to);
    save(ctx, &updated)
}

pub(crate) fn run_move_category(ctx: &CatalogContext, from: &str, to: &str) -> Result<(), CliError> {
    let catalog = ctx.load_catalog_for_edit()?;
    let moving = catalog.filter_by_category(from).len();
    if moving == 0 {
        log::info!("No games in '{}'.", from);
        return Ok(());
    }

    let updated = catalog.move_category(from, to)?;
    log::info!(
        "Moved {} from '{}' to '{}'",
        plural(moving, "game"),
        from,
        to
    );
    save(ctx, &updated)
}

pub(crate) fn run_remove(
    ctx: &CatalogContext,
    titles: Vec<String>,
    confirm: bool,
) -> Result<(), CliError> {
    if !confirm {
        log::warn!(
            "This will permanently delete {} from:\n  {}",
            plural(titles.len(), "game"),
            ctx.paths.corpus.display(),
        );
        log::info!("Re-run with --yes to proceed.");
        return Ok(());
    }

    let catalog = ctx.load_catalog_for_edit()?;
    let titles = known_titles(&catalog, titles);
    if titles.is_empty() {
        log::info!("Nothing to remove.");
        return Ok(());
    }

    let updated = catalog.remove(&titles);
    log::info!("Removed {}", plural(titles.len(), "game"));
    save(ctx, &updated)
}

pub(crate) fn run_add(ctx: &CatalogContext, args: RecordArgs) -> Result<(), CliError> {
    let mut record = GameRecord::new(args.title.trim())
        .with_category(args.category.trim())
        .with_urls(args.url.trim(), args.frame.trim());
    if let Some(thumbnail) = args.thumbnail {
        record = record.with_thumbnail(thumbnail);
    }
    if let Some(local) = args.local_thumbnail {
        record.local_thumbnail_ref = local;
    }
    validate_record(&record)?;

    let catalog = ctx.load_catalog_for_edit()?;
    let replacing = catalog.get_by_title(&record.title).is_some();
    let title = record.title.clone();
    let updated = catalog.upsert(record)?;

    log::info!(
        "{} {:?}",
        if replacing { "Updated" } else { "Added" },
        title
    );
    save(ctx, &updated)
}
