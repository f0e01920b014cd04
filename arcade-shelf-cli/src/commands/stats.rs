use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use arcade_shelf_lib::CorpusStats;

use super::CatalogContext;

pub(crate) fn run_stats(ctx: &CatalogContext) {
    let catalog = ctx.load_catalog();
    let stats = CorpusStats::collect(catalog.list_all(), catalog.published_summaries());

    log::info!(
        "{}",
        "Corpus Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Corpus: {}", ctx.paths.corpus.display());
    crate::log_blank();
    log::info!("  Games:             {:>8}", stats.total);
    log::info!("  Categories:        {:>8}", stats.categories);
    log::info!("  With controls:     {:>8}", stats.with_controls);
    log::info!("  With how-to-play:  {:>8}", stats.with_how_to_play);
    log::info!("  With tips:         {:>8}", stats.with_tips);
    log::info!("  With developer:    {:>8}", stats.with_developer);
    log::info!("  Local thumbnails:  {:>8}", stats.local_thumbnails);
    crate::log_blank();

    if stats.reconciles() {
        log::info!(
            "{} Category counts add up to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            stats.total,
        );
    } else {
        log::warn!(
            "{} Category counts add up to {} of {} games; run 'arcade-shelf classify'",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            stats.summarized,
            stats.total,
        );
    }
}
