use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use arcade_shelf_lib::{plural, rebuild};

use super::CatalogContext;
use crate::CliError;

/// Reclassify the corpus and publish the category list.
pub(crate) fn run_classify(ctx: &CatalogContext, dry_run: bool) -> Result<(), CliError> {
    let table = ctx.classification_table();
    let result = rebuild(&ctx.paths, &table, dry_run)?;
    let report = &result.report;

    log::info!(
        "{}",
        "Classification Report".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Corpus: {}", ctx.paths.corpus.display());
    crate::log_blank();

    let originals: Vec<&str> = report
        .original_categories
        .iter()
        .map(String::as_str)
        .collect();
    log::info!(
        "  Original categories ({}): {}",
        originals.len(),
        originals.join(", "),
    );
    log::info!("  By keyword score: {:>6}", report.scored);
    log::info!("  By legacy token:  {:>6}", report.legacy);
    log::info!("  By default:       {:>6}", report.defaulted);
    crate::log_blank();

    for summary in &report.summaries {
        log::info!(
            "  {} {:<28} {:>6}",
            summary.icon,
            summary.display_name,
            summary.count,
        );
    }
    crate::log_blank();

    if result.dry_run {
        log::info!(
            "{} Dry run: {} classified, nothing written.",
            "\u{2139}".if_supports_color(Stdout, |t| t.cyan()),
            plural(report.total(), "game"),
        );
        return Ok(());
    }

    if let Some(backup) = &result.backup {
        log::info!("  Backup:     {}", backup.display());
    }
    log::info!(
        "{} Wrote {} across {} to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        plural(result.games.len(), "game"),
        plural(report.summaries.len(), "category"),
        ctx.paths.categories.display(),
    );

    Ok(())
}
