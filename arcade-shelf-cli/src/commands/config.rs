use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use arcade_shelf_lib::settings::{PathKey, load_settings_string, save_path_setting, settings_path};

use super::CatalogContext;
use crate::CliError;

/// Show the settings file and the paths every command will use.
pub(crate) fn run_config_show(ctx: &CatalogContext) {
    let path = settings_path();

    log::info!(
        "{}",
        "Arcade Shelf Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let paths = &ctx.paths;
    log::info!("  Corpus:      {}", paths.corpus.display());
    log::info!("  Categories:  {}", paths.categories.display());
    log::info!("  Backup:      {}", paths.backup.display());
    match &paths.definitions {
        Some(defs) => log::info!("  Definitions: {}", defs.display()),
        None => log::info!("  Definitions: (built-in)"),
    }
    log::info!(
        "  Page size:   {} public, {} admin",
        ctx.settings.listing.per_page,
        ctx.settings.listing.admin_per_page,
    );

    if let Some(contents) = load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("    {}", line);
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Save one default path, or clear it when `path` is `None`.
pub(crate) fn run_config_set(key: PathKey, path: Option<&Path>) -> Result<(), CliError> {
    save_path_setting(key, path)
        .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;

    match path {
        Some(p) => log::info!(
            "{} {} path set to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            key.key(),
            p.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "{} {} path cleared",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            key.key(),
        ),
    }
    Ok(())
}
