use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::CatalogContext;

pub(crate) fn run_categories(ctx: &CatalogContext) {
    let catalog = ctx.load_catalog();

    log::info!("{}", "Categories".if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();

    for summary in catalog.category_summaries() {
        log::info!(
            "  {} {:<28} {:<20} {:>6}",
            summary.icon,
            summary.display_name,
            summary
                .slug
                .if_supports_color(Stdout, |t| t.dimmed())
                .to_string(),
            summary.count,
        );
    }
}
