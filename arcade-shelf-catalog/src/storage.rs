//! File I/O for the games corpus, category definitions, and the published
//! category list.
//!
//! The corpus and `categories.json` are JSON arrays. Category definitions may
//! come from a single JSON file (a bare array of definitions, or an object
//! with `definitions` and `legacy` keys) or from a directory of YAML files:
//!
//! ```text
//! categories/
//!   action.yaml
//!   adventure.yaml
//!   ...
//!   legacy.yaml      # optional old-token → slug mapping
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::taxonomy::{CategoryTable, DefinitionError};
use crate::types::{CategoryDefinition, CategorySummary, GameRecord, LegacyMapping};

/// File name of the optional legacy mapping inside a definitions directory.
pub const LEGACY_MAPPING_FILE: &str = "legacy.yaml";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("I/O error writing {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Invalid category definitions in {path}: {source}")]
    Definitions {
        path: String,
        source: DefinitionError,
    },
}

/// Load the games corpus from a JSON array file.
pub fn load_games(path: &Path) -> Result<Vec<GameRecord>, StorageError> {
    load_json(path)
}

/// Write the games corpus as pretty JSON, replacing the file atomically.
pub fn save_games(path: &Path, games: &[GameRecord]) -> Result<(), StorageError> {
    save_json(path, games)
}

/// Load a published category list (`categories.json`).
pub fn load_summaries(path: &Path) -> Result<Vec<CategorySummary>, StorageError> {
    load_json(path)
}

/// Publish the category list (`categories.json`).
pub fn save_summaries(path: &Path, summaries: &[CategorySummary]) -> Result<(), StorageError> {
    save_json(path, summaries)
}

/// Copy `source` to `dest` byte for byte. Returns the number of bytes copied.
pub fn backup_file(source: &Path, dest: &Path) -> Result<u64, StorageError> {
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }
    std::fs::copy(source, dest).map_err(|e| StorageError::Io {
        path: source.display().to_string(),
        source: e,
    })
}

/// Shapes accepted for a JSON definitions file.
#[derive(Deserialize)]
#[serde(untagged)]
enum DefinitionsFile {
    Table {
        definitions: Vec<CategoryDefinition>,
        #[serde(default)]
        legacy: LegacyMapping,
    },
    List(Vec<CategoryDefinition>),
}

/// Load and validate a category table.
///
/// A file is read as JSON; a directory is read as one YAML definition per
/// file, sorted by file name, with the legacy mapping taken from
/// `legacy.yaml` when present. Tables loaded without a mapping get an empty
/// one, so unmatched records go straight to the default category.
pub fn load_definitions(path: &Path) -> Result<CategoryTable, StorageError> {
    let (definitions, legacy) = if path.is_dir() {
        let definitions = load_yaml_dir::<CategoryDefinition>(path)?;
        let legacy_path = path.join(LEGACY_MAPPING_FILE);
        let legacy = if legacy_path.exists() {
            load_yaml::<LegacyMapping>(&legacy_path)?
        } else {
            LegacyMapping::new()
        };
        (definitions, legacy)
    } else {
        match load_json::<DefinitionsFile>(path)? {
            DefinitionsFile::Table {
                definitions,
                legacy,
            } => (definitions, legacy),
            DefinitionsFile::List(definitions) => (definitions, LegacyMapping::new()),
        }
    };

    CategoryTable::new(definitions, legacy).map_err(|e| StorageError::Definitions {
        path: path.display().to_string(),
        source: e,
    })
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let contents = std::fs::read_to_string(path).map_err(|e| StorageError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&contents).map_err(|e| StorageError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

/// Serialize with two-space indentation and swap the file into place.
fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    let serialized = serde_json::to_string_pretty(value).map_err(|e| StorageError::Json {
        path: path.display().to_string(),
        source: e,
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
        }
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, serialized).map_err(|e| write_error(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| write_error(path, e))?;
    Ok(())
}

fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let contents = std::fs::read_to_string(path).map_err(|e| StorageError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_yml::from_str(&contents).map_err(|e| StorageError::Yaml {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load every `.yaml`/`.yml` file in `dir` (except the legacy mapping) as one `T`.
fn load_yaml_dir<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>, StorageError> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| StorageError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .filter(|e| e.file_name() != LEGACY_MAPPING_FILE)
        .collect();
    entries.sort_by_key(|e| e.file_name());

    entries.iter().map(|entry| load_yaml(&entry.path())).collect()
}

fn write_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Write {
        path: path.display().to_string(),
        source,
    }
}
