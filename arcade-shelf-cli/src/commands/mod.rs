pub(crate) mod categories;
pub(crate) mod classify;
pub(crate) mod config;
pub(crate) mod edit;
pub(crate) mod list;
pub(crate) mod show;
pub(crate) mod stats;

use std::sync::Arc;

use arcade_shelf_catalog::{CategoryTable, load_definitions, load_games};
use arcade_shelf_lib::{Catalog, CatalogPaths, PathOverrides, Settings};

use crate::CliError;

/// Settings and resolved file locations shared by every command.
pub(crate) struct CatalogContext {
    pub settings: Settings,
    pub paths: CatalogPaths,
}

impl CatalogContext {
    pub(crate) fn new(overrides: PathOverrides) -> Self {
        let settings = Settings::load();
        let paths = CatalogPaths::resolve(overrides, &settings);
        log::debug!("Corpus: {}", paths.corpus.display());
        Self { settings, paths }
    }

    /// The table to classify and edit against. Definitions that fail to
    /// load fall back to the built-in taxonomy.
    pub(crate) fn classification_table(&self) -> CategoryTable {
        match &self.paths.definitions {
            None => CategoryTable::builtin(),
            Some(path) => load_definitions(path).unwrap_or_else(|e| {
                log::warn!("{}; using the built-in categories", e);
                CategoryTable::builtin()
            }),
        }
    }

    /// Catalog for read-only commands. Never fails; a missing corpus shows
    /// up as an empty catalog.
    pub(crate) fn load_catalog(&self) -> Catalog {
        Catalog::load(&self.paths.corpus, self.paths.definitions.as_deref())
    }

    /// Catalog for commands that write the corpus back. Unlike
    /// [`load_catalog`](Self::load_catalog), an unreadable corpus is an
    /// error here, so it is never overwritten with an empty one.
    pub(crate) fn load_catalog_for_edit(&self) -> Result<Catalog, CliError> {
        let games = load_games(&self.paths.corpus)?;
        Ok(Catalog::new(games, Arc::new(self.classification_table())))
    }
}

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Slope", 10), "Slope");
        assert_eq!(truncate_str("Papa's Pizzeria", 10), "Papa's ...");
        assert_eq!(truncate_str("Pokémon Quest", 8), "Pokém...");
        assert_eq!(truncate_str("Slope", 2), "Sl");
    }
}
