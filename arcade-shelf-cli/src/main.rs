//! arcade-shelf CLI
//!
//! Command-line interface for classifying, browsing and curating a games
//! catalog.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use arcade_shelf_lib::PathOverrides;

use cli_types::{Cli, Commands, ConfigAction};
use commands::CatalogContext;
pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(2);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn path_overrides(cli: &Cli) -> PathOverrides {
    let mut overrides = PathOverrides {
        corpus: cli.corpus.clone(),
        categories: cli.categories.clone(),
        ..Default::default()
    };
    if let Commands::Classify {
        definitions,
        backup,
        ..
    } = &cli.command
    {
        overrides.definitions = definitions.clone();
        overrides.backup = backup.clone();
    }
    overrides
}

fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = CatalogContext::new(path_overrides(&cli));

    match cli.command {
        Commands::Classify { dry_run, .. } => commands::classify::run_classify(&ctx, dry_run)?,
        Commands::Categories => commands::categories::run_categories(&ctx),
        Commands::List { listing } => commands::list::run_list(&ctx, listing),
        Commands::Show { slug, similar } => commands::show::run_show(&ctx, &slug, similar)?,
        Commands::Recategorize { to, titles } => {
            commands::edit::run_recategorize(&ctx, &to, titles)?
        }
        Commands::MoveCategory { from, to } => {
            commands::edit::run_move_category(&ctx, &from, &to)?
        }
        Commands::Remove { titles, yes } => commands::edit::run_remove(&ctx, titles, yes)?,
        Commands::Add { record } => commands::edit::run_add(&ctx, record)?,
        Commands::Stats => commands::stats::run_stats(&ctx),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&ctx),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Set { key, path, clear } => {
                let path = if clear { None } else { path };
                commands::config::run_config_set(key.into(), path.as_deref())?
            }
        },
    }

    Ok(())
}
