//! Shared settings: where the corpus and its derived files live, and listing
//! page sizes.
//!
//! The settings file is `~/.config/arcade-shelf/settings.toml`:
//!
//! ```toml
//! [paths]
//! corpus = "improved-game-data/games-summary.json"
//! categories = "src/data/categories.json"
//! definitions = "catalog/categories"
//! timestamp_backups = true
//!
//! [listing]
//! per_page = 36
//! admin_per_page = 20
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paginate::{ADMIN_PER_PAGE, PUBLIC_PER_PAGE};

/// Corpus location used when neither the CLI nor the settings name one.
pub const DEFAULT_CORPUS_PATH: &str = "improved-game-data/games-summary.json";

/// Published category list location used by default.
pub const DEFAULT_CATEGORIES_PATH: &str = "src/data/categories.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub paths: PathSettings,
    #[serde(default)]
    pub listing: ListingSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSettings {
    #[serde(default)]
    pub corpus: Option<PathBuf>,
    #[serde(default)]
    pub categories: Option<PathBuf>,
    #[serde(default)]
    pub backup: Option<PathBuf>,
    /// Category definitions file or directory; the built-in taxonomy if unset.
    #[serde(default)]
    pub definitions: Option<PathBuf>,
    /// Suffix backups with a timestamp instead of overwriting one backup file.
    #[serde(default)]
    pub timestamp_backups: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSettings {
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    #[serde(default = "default_admin_per_page")]
    pub admin_per_page: usize,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            per_page: PUBLIC_PER_PAGE,
            admin_per_page: ADMIN_PER_PAGE,
        }
    }
}

fn default_per_page() -> usize {
    PUBLIC_PER_PAGE
}

fn default_admin_per_page() -> usize {
    ADMIN_PER_PAGE
}

/// Canonical path to the settings file: `~/.config/arcade-shelf/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("arcade-shelf").join("settings.toml")
}

impl Settings {
    /// Load settings from the canonical path. A missing or unreadable file
    /// gives the defaults.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed settings file {}: {}", path.display(), e);
            Self::default()
        })
    }
}

/// File locations for one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub corpus: PathBuf,
    pub categories: PathBuf,
    pub backup: PathBuf,
    pub definitions: Option<PathBuf>,
}

/// Path overrides given on the command line.
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub corpus: Option<PathBuf>,
    pub categories: Option<PathBuf>,
    pub backup: Option<PathBuf>,
    pub definitions: Option<PathBuf>,
}

impl CatalogPaths {
    /// Resolve each path with the priority chain:
    ///
    /// 1. CLI override
    /// 2. `settings.toml`
    /// 3. Built-in default
    pub fn resolve(overrides: PathOverrides, settings: &Settings) -> Self {
        let paths = &settings.paths;
        let corpus = overrides
            .corpus
            .or_else(|| paths.corpus.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS_PATH));
        let categories = overrides
            .categories
            .or_else(|| paths.categories.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATEGORIES_PATH));
        let backup = overrides
            .backup
            .or_else(|| paths.backup.clone())
            .unwrap_or_else(|| default_backup_path(&corpus, paths.timestamp_backups));
        let definitions = overrides.definitions.or_else(|| paths.definitions.clone());

        Self {
            corpus,
            categories,
            backup,
            definitions,
        }
    }
}

/// Backup path next to the corpus: `games-summary.json` →
/// `games-summary-backup.json`, or `games-summary-backup-20250101T120000.json`
/// when timestamped.
pub fn default_backup_path(corpus: &Path, timestamped: bool) -> PathBuf {
    let stem = corpus
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "games".to_string());
    let name = if timestamped {
        let stamp = chrono::Local::now().format("%Y%m%dT%H%M%S");
        format!("{stem}-backup-{stamp}.json")
    } else {
        format!("{stem}-backup.json")
    };
    corpus.with_file_name(name)
}

/// Backup path for an admin edit: `games-summary-edit-backup-20250101T120000.json`.
///
/// Kept apart from the classification backup so edits never overwrite the
/// snapshot taken before the corpus was classified.
pub fn edit_backup_path(corpus: &Path) -> PathBuf {
    let stem = corpus
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "games".to_string());
    let stamp = chrono::Local::now().format("%Y%m%dT%H%M%S");
    corpus.with_file_name(format!("{stem}-edit-backup-{stamp}.json"))
}

/// A path entry under `[paths]` in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKey {
    Corpus,
    Categories,
    Backup,
    Definitions,
}

impl PathKey {
    pub fn key(self) -> &'static str {
        match self {
            Self::Corpus => "corpus",
            Self::Categories => "categories",
            Self::Backup => "backup",
            Self::Definitions => "definitions",
        }
    }
}

/// Save (or clear) one `[paths]` entry in `settings.toml`.
pub fn save_path_setting(key: PathKey, path: Option<&Path>) -> io::Result<()> {
    save_path_setting_to(&settings_path(), key, path)
}

/// Like [`save_path_setting`], against an explicit settings file.
///
/// Edits the parsed `toml::Value` in place, so keys this version does not
/// know about survive the rewrite. An unparseable file is replaced.
pub fn save_path_setting_to(
    settings: &Path,
    key: PathKey,
    path: Option<&Path>,
) -> io::Result<()> {
    let mut doc =
        read_settings_doc(settings).unwrap_or_else(|| toml::Value::Table(Default::default()));
    set_path_key(&mut doc, key, path)?;

    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)
}

fn set_path_key(doc: &mut toml::Value, key: PathKey, path: Option<&Path>) -> io::Result<()> {
    let root = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let paths = root
        .entry("paths")
        .or_insert_with(|| toml::Value::Table(Default::default()))
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[paths] is not a table"))?;

    match path {
        Some(p) => {
            paths.insert(
                key.key().to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            paths.remove(key.key());
        }
    }
    Ok(())
}

fn read_settings_doc(path: &Path) -> Option<toml::Value> {
    std::fs::read_to_string(path).ok()?.parse().ok()
}

/// The settings file re-rendered as TOML, for display. `None` when the file
/// is missing or does not parse.
pub fn load_settings_string() -> Option<String> {
    toml::to_string_pretty(&read_settings_doc(&settings_path())?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_defaults() {
        let paths = CatalogPaths::resolve(PathOverrides::default(), &Settings::default());
        assert_eq!(paths.corpus, PathBuf::from(DEFAULT_CORPUS_PATH));
        assert_eq!(paths.categories, PathBuf::from(DEFAULT_CATEGORIES_PATH));
        assert_eq!(
            paths.backup,
            PathBuf::from("improved-game-data/games-summary-backup.json")
        );
        assert_eq!(paths.definitions, None);
    }

    #[test]
    fn test_resolve_priority() {
        let mut settings = Settings::default();
        settings.paths.corpus = Some(PathBuf::from("from-settings.json"));
        settings.paths.categories = Some(PathBuf::from("cats.json"));

        let overrides = PathOverrides {
            corpus: Some(PathBuf::from("data/from-cli.json")),
            ..Default::default()
        };
        let paths = CatalogPaths::resolve(overrides, &settings);
        assert_eq!(paths.corpus, PathBuf::from("data/from-cli.json"));
        assert_eq!(paths.categories, PathBuf::from("cats.json"));
        assert_eq!(paths.backup, PathBuf::from("data/from-cli-backup.json"));
    }

    #[test]
    fn test_timestamped_backup_name() {
        let path = default_backup_path(Path::new("data/games.json"), true);
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("games-backup-"));
        assert!(name.ends_with(".json"));
        assert_eq!(name.len(), "games-backup-".len() + 15 + ".json".len());
    }

    #[test]
    fn test_load_from_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(
            &path,
            "[paths]\ncorpus = \"games.json\"\ntimestamp_backups = true\n\n[listing]\nper_page = 24\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.paths.corpus, Some(PathBuf::from("games.json")));
        assert!(settings.paths.timestamp_backups);
        assert_eq!(settings.listing.per_page, 24);
        assert_eq!(settings.listing.admin_per_page, ADMIN_PER_PAGE);
    }

    #[test]
    fn test_load_missing_or_malformed_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(Settings::load_from(&tmp.path().join("nope.toml")), Settings::default());

        let path = tmp.path().join("bad.toml");
        std::fs::write(&path, "[paths\ncorpus = ").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_save_path_setting_preserves_other_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config").join("settings.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[listing]\nper_page = 12\n\n[extra]\nkeep = true\n").unwrap();

        save_path_setting_to(&path, PathKey::Corpus, Some(Path::new("games.json"))).unwrap();
        save_path_setting_to(&path, PathKey::Definitions, Some(Path::new("catalog/categories")))
            .unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.paths.corpus, Some(PathBuf::from("games.json")));
        assert_eq!(
            settings.paths.definitions,
            Some(PathBuf::from("catalog/categories"))
        );
        assert_eq!(settings.listing.per_page, 12);
        assert!(std::fs::read_to_string(&path).unwrap().contains("keep = true"));

        save_path_setting_to(&path, PathKey::Corpus, None).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.paths.corpus, None);
        assert!(settings.paths.definitions.is_some());
    }

    #[test]
    fn test_save_path_setting_creates_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("new").join("settings.toml");

        save_path_setting_to(&path, PathKey::Categories, Some(Path::new("cats.json"))).unwrap();
        assert_eq!(
            Settings::load_from(&path).paths.categories,
            Some(PathBuf::from("cats.json"))
        );
        assert!(!path.with_extension("toml.tmp").exists());
    }
}
