use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use arcade_shelf_catalog::title_to_slug;
use arcade_shelf_lib::{paginate, plural};

use super::{CatalogContext, truncate_str};
use crate::cli_types::ListingArgs;

const TITLE_WIDTH: usize = 40;

pub(crate) fn run_list(ctx: &CatalogContext, args: ListingArgs) {
    let catalog = ctx.load_catalog();
    let query = args.search.as_deref().unwrap_or("");
    let results = catalog.browse(&args.category, query);

    let listing = &ctx.settings.listing;
    let per_page = args.per_page.unwrap_or(if args.admin {
        listing.admin_per_page
    } else {
        listing.per_page
    });
    let page = paginate(&results, args.page, per_page);

    let heading = if query.trim().is_empty() {
        format!("Category: {}", args.category)
    } else {
        format!("Search: \"{}\"", query.trim())
    };
    log::info!(
        "{} ({})",
        heading.if_supports_color(Stdout, |t| t.bold()),
        plural(page.total_items, "game"),
    );
    crate::log_blank();

    if page.items.is_empty() {
        log::info!("  No games found.");
        return;
    }

    for game in page.items {
        log::info!(
            "  {:<width$} {} {}",
            truncate_str(&game.title, TITLE_WIDTH),
            game.category_icon,
            game.category_name
                .if_supports_color(Stdout, |t| t.cyan())
                .to_string(),
            width = TITLE_WIDTH,
        );
        if args.admin {
            log::info!(
                "    {}  {}",
                title_to_slug(&game.title).if_supports_color(Stdout, |t| t.dimmed()),
                game.source_url,
            );
        }
    }

    crate::log_blank();
    let mut nav = format!("  Page {} of {}", page.page, page.total_pages);
    if page.has_previous() {
        nav.push_str(&format!("  (previous: --page {})", page.page - 1));
    }
    if page.has_next() {
        nav.push_str(&format!("  (next: --page {})", page.page + 1));
    }
    log::info!("{}", nav);
}
