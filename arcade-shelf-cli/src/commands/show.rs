use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use arcade_shelf_catalog::{slug_to_title, title_to_slug};
use arcade_shelf_lib::thumbnail_path;

use super::CatalogContext;
use crate::CliError;

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Show a game's detail page by its URL slug.
pub(crate) fn run_show(ctx: &CatalogContext, slug: &str, similar: usize) -> Result<(), CliError> {
    let catalog = ctx.load_catalog();
    let Some(game) = catalog.get_by_title_slug(slug) else {
        return Err(CliError::not_found(format!(
            "no game with slug '{}' (\"{}\")",
            slug,
            slug_to_title(slug)
        )));
    };

    log::info!("{}", game.title.if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  Category:   {} {} ({})",
        game.category_icon,
        game.category_name,
        game.category_slug(),
    );
    log::info!("  Page:       {}", game.source_url);
    log::info!("  Embed:      {}", game.embed_url);
    log::info!("  Thumbnail:  {}", thumbnail_path(game));
    log::info!(
        "  Controls: {}  How to play: {}  Tips: {}  Developer: {}",
        yes_no(game.has_controls),
        yes_no(game.has_how_to_play),
        yes_no(game.has_tips),
        yes_no(game.has_developer),
    );

    let recommended = catalog.get_similar(game, similar);
    if recommended.is_empty() {
        return Ok(());
    }

    crate::log_blank();
    log::info!(
        "{}",
        "Similar games".if_supports_color(Stdout, |t| t.bold()),
    );
    for other in recommended {
        log::info!(
            "  {} {}  {}",
            other.category_icon,
            other.title,
            title_to_slug(&other.title).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}
