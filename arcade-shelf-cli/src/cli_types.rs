//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "arcade-shelf")]
#[command(about = "Classify, browse and curate a games catalog", long_about = None)]
pub(crate) struct Cli {
    /// Games corpus file (default: improved-game-data/games-summary.json)
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    /// Published category list (default: src/data/categories.json)
    #[arg(long, global = true)]
    pub categories: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Reclassify the corpus and publish categories.json
    Classify {
        /// Show the classification report without writing anything
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Category definitions: a JSON file or a directory of YAML files
        #[arg(long)]
        definitions: Option<PathBuf>,

        /// Where to copy the original corpus (default: <corpus>-backup.json)
        #[arg(long)]
        backup: Option<PathBuf>,
    },

    /// List categories with their game counts
    Categories,

    /// List games, by category or search query
    List {
        #[command(flatten)]
        listing: ListingArgs,
    },

    /// Show one game by its URL slug
    Show {
        /// Title slug, e.g. moto-x3m
        slug: String,

        /// Number of similar games to show
        #[arg(long, default_value_t = arcade_shelf_lib::DEFAULT_SIMILAR_LIMIT)]
        similar: usize,
    },

    /// Move games to another category
    Recategorize {
        /// Target category slug
        #[arg(long)]
        to: String,

        /// Exact game titles
        #[arg(required = true)]
        titles: Vec<String>,
    },

    /// Move every game in one category to another
    MoveCategory {
        /// Source category slug ("all" moves every game)
        from: String,

        /// Target category slug
        to: String,
    },

    /// Delete games from the corpus
    Remove {
        /// Exact game titles
        #[arg(required = true)]
        titles: Vec<String>,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Add a game, or replace the game with the same title
    Add {
        #[command(flatten)]
        record: RecordArgs,
    },

    /// Show corpus totals and check category counts
    Stats,

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments shared by the public and admin listings.
#[derive(Args, Clone)]
pub(crate) struct ListingArgs {
    /// Category slug ("all" for every game)
    #[arg(short, long, default_value = arcade_shelf_catalog::ALL_CATEGORY)]
    pub category: String,

    /// Search titles and categories instead of filtering by category
    #[arg(short, long)]
    pub search: Option<String>,

    /// 1-based page number
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Games per page (default from settings)
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Admin listing: smaller pages, source URLs shown
    #[arg(long)]
    pub admin: bool,
}

/// Fields of a game record entered on the command line.
#[derive(Args, Clone)]
pub(crate) struct RecordArgs {
    #[arg(long)]
    pub title: String,

    /// Page the game was scraped from
    #[arg(long)]
    pub url: String,

    /// Iframe source used to embed the game
    #[arg(long)]
    pub frame: String,

    /// Category slug
    #[arg(long)]
    pub category: String,

    /// Remote thumbnail URL
    #[arg(long)]
    pub thumbnail: Option<String>,

    /// Local thumbnail file name under improved-game-data/images/
    #[arg(long)]
    pub local_thumbnail: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the resolved catalog paths
    Show,

    /// Print the settings file path
    Path,

    /// Save (or clear) a default catalog path
    Set {
        /// Which path to set
        #[arg(value_enum)]
        key: PathSetting,

        /// File or directory to use by default
        #[arg(required_unless_present = "clear")]
        path: Option<PathBuf>,

        /// Remove the saved path
        #[arg(long, conflicts_with = "path")]
        clear: bool,
    },
}

/// Path entries that `config set` can change.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum PathSetting {
    Corpus,
    Categories,
    Backup,
    Definitions,
}

impl From<PathSetting> for arcade_shelf_lib::settings::PathKey {
    fn from(setting: PathSetting) -> Self {
        match setting {
            PathSetting::Corpus => Self::Corpus,
            PathSetting::Categories => Self::Categories,
            PathSetting::Backup => Self::Backup,
            PathSetting::Definitions => Self::Definitions,
        }
    }
}
