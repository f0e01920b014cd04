//! In-memory catalog index over one immutable corpus snapshot.
//!
//! A [`Catalog`] is a cheap-to-clone handle: the records, lookup maps, and
//! category summaries live behind an `Arc`. Read queries borrow from the
//! snapshot. Admin edits (`recategorize`, `move_category`, `remove`,
//! `upsert`) never touch it; they build a new snapshot and return a new
//! handle, which the host swaps in.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use arcade_shelf_catalog::{
    ALL_CATEGORY, CategoryDefinition, CategorySummary, CategoryTable, GameRecord, load_definitions,
    load_games, normalize_category, title_to_slug,
};

use crate::error::CatalogError;
use crate::summary::{all_entry, summarize, summarize_corpus};

/// Default number of similar games shown on a detail page.
pub const DEFAULT_SIMILAR_LIMIT: usize = 6;

#[derive(Debug)]
struct Snapshot {
    games: Vec<GameRecord>,
    by_title: HashMap<String, usize>,
    by_slug: HashMap<String, usize>,
    summaries: Vec<CategorySummary>,
}

impl Snapshot {
    fn build(games: Vec<GameRecord>, table: &CategoryTable) -> Self {
        let mut by_title = HashMap::with_capacity(games.len());
        let mut by_slug = HashMap::with_capacity(games.len());

        for (i, game) in games.iter().enumerate() {
            if by_title.contains_key(&game.title) {
                log::warn!("Duplicate title in corpus: {:?}", game.title);
            } else {
                by_title.insert(game.title.clone(), i);
            }
            by_slug.entry(title_to_slug(&game.title)).or_insert(i);
        }

        let summaries = if table.is_empty() {
            summarize_corpus(&games)
        } else {
            summarize(table, &games)
        };

        Self {
            games,
            by_title,
            by_slug,
            summaries,
        }
    }
}

/// Handle to a classified corpus and the category table it was built with.
#[derive(Debug, Clone)]
pub struct Catalog {
    snapshot: Arc<Snapshot>,
    table: Arc<CategoryTable>,
}

impl Catalog {
    /// Index `games` against `table`.
    pub fn new(games: Vec<GameRecord>, table: Arc<CategoryTable>) -> Self {
        let snapshot = Arc::new(Snapshot::build(games, &table));
        Self { snapshot, table }
    }

    /// Load a catalog from disk, degrading instead of failing.
    ///
    /// A missing or malformed corpus gives an empty catalog. Definitions that
    /// fail to load or validate give an empty table, so summaries are derived
    /// from the corpus alone. `definitions: None` uses the built-in taxonomy.
    pub fn load(corpus: &Path, definitions: Option<&Path>) -> Self {
        let games = load_games(corpus).unwrap_or_else(|e| {
            log::warn!("Could not load games corpus: {}", e);
            Vec::new()
        });

        let table = match definitions {
            None => CategoryTable::builtin(),
            Some(path) => load_definitions(path).unwrap_or_else(|e| {
                log::warn!("Could not load category definitions: {}", e);
                CategoryTable::empty()
            }),
        };

        log::debug!(
            "Loaded {} games and {} categories",
            games.len(),
            table.len()
        );
        Self::new(games, Arc::new(table))
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.snapshot.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.games.is_empty()
    }

    /// The whole corpus in import order.
    pub fn list_all(&self) -> &[GameRecord] {
        &self.snapshot.games
    }

    /// Records in category `slug`; `"all"` returns everything.
    ///
    /// Compares whole normalized tokens (case-insensitively), so `games`
    /// never matches `io-games`.
    pub fn filter_by_category(&self, slug: &str) -> Vec<&GameRecord> {
        let wanted = normalize_category(slug);
        if wanted.eq_ignore_ascii_case(ALL_CATEGORY) {
            return self.snapshot.games.iter().collect();
        }
        self.snapshot
            .games
            .iter()
            .filter(|g| g.category_slug().eq_ignore_ascii_case(wanted))
            .collect()
    }

    /// Case-insensitive substring search over title, category token, and
    /// category name. An empty query returns everything.
    pub fn search(&self, query: &str) -> Vec<&GameRecord> {
        let query = query.to_lowercase();
        self.snapshot
            .games
            .iter()
            .filter(|g| {
                g.title.to_lowercase().contains(&query)
                    || g.category.to_lowercase().contains(&query)
                    || g.category_name.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// What a listing page shows: search results for a non-blank query,
    /// otherwise the selected category. Clearing the query goes back to the
    /// category, not to the full catalog.
    pub fn browse(&self, category: &str, query: &str) -> Vec<&GameRecord> {
        let query = query.trim();
        if query.is_empty() {
            self.filter_by_category(category)
        } else {
            self.search(query)
        }
    }

    /// Exact title lookup.
    pub fn get_by_title(&self, title: &str) -> Option<&GameRecord> {
        self.snapshot
            .by_title
            .get(title)
            .map(|&i| &self.snapshot.games[i])
    }

    /// Look up a record by the URL slug of its title.
    ///
    /// Titles that collapse to the same slug resolve to the first one in
    /// corpus order.
    pub fn get_by_title_slug(&self, slug: &str) -> Option<&GameRecord> {
        self.snapshot
            .by_slug
            .get(&slug.to_lowercase())
            .map(|&i| &self.snapshot.games[i])
    }

    /// Up to `limit` games to recommend next to `record`.
    ///
    /// Same-category games come first, in corpus order; if there are too
    /// few, the rest of the corpus pads the list in order. The source record
    /// is never included and nothing repeats.
    pub fn get_similar(&self, record: &GameRecord, limit: usize) -> Vec<&GameRecord> {
        let title = record.title.as_str();
        let category = record.category_slug();
        let games = &self.snapshot.games;

        let mut picked: Vec<usize> = games
            .iter()
            .enumerate()
            .filter(|(_, g)| g.title != title && g.category_slug() == category)
            .map(|(i, _)| i)
            .take(limit)
            .collect();

        if picked.len() < limit {
            let already: HashSet<usize> = picked.iter().copied().collect();
            let padding: Vec<usize> = games
                .iter()
                .enumerate()
                .filter(|(i, g)| g.title != title && !already.contains(i))
                .map(|(i, _)| i)
                .take(limit - picked.len())
                .collect();
            picked.extend(padding);
        }

        picked.into_iter().map(|i| &games[i]).collect()
    }

    /// Non-empty categories, largest first, without the synthetic entry.
    pub fn published_summaries(&self) -> &[CategorySummary] {
        &self.snapshot.summaries
    }

    /// The display list: the synthetic "All Games" entry followed by
    /// [`published_summaries`](Self::published_summaries).
    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        let mut out = Vec::with_capacity(self.snapshot.summaries.len() + 1);
        out.push(all_entry(self.len()));
        out.extend(self.snapshot.summaries.iter().cloned());
        out
    }

    // ── Copy-on-write edits ────────────────────────────────────────────────

    fn definition(&self, slug: &str) -> Result<&CategoryDefinition, CatalogError> {
        let slug = normalize_category(slug);
        self.table.get(slug).ok_or_else(|| {
            log::error!("Edit targets unknown category '{}'", slug);
            CatalogError::unknown_category(slug)
        })
    }

    fn with_games(&self, games: Vec<GameRecord>) -> Self {
        Self::new(games, Arc::clone(&self.table))
    }

    /// Move the named records to category `new_slug`.
    ///
    /// Returns a new catalog; titles not in the corpus are ignored. Fails
    /// only when `new_slug` is not in the definition table.
    pub fn recategorize(
        &self,
        titles: &HashSet<String>,
        new_slug: &str,
    ) -> Result<Self, CatalogError> {
        let definition = self.definition(new_slug)?;
        let games = self
            .snapshot
            .games
            .iter()
            .map(|g| {
                let mut g = g.clone();
                if titles.contains(&g.title) {
                    g.assign_category(definition);
                }
                g
            })
            .collect();
        Ok(self.with_games(games))
    }

    /// Move every record in category `from_slug` to `to_slug`.
    pub fn move_category(&self, from_slug: &str, to_slug: &str) -> Result<Self, CatalogError> {
        let titles: HashSet<String> = self
            .filter_by_category(normalize_category(from_slug))
            .into_iter()
            .map(|g| g.title.clone())
            .collect();
        self.recategorize(&titles, to_slug)
    }

    /// Drop the named records.
    pub fn remove(&self, titles: &HashSet<String>) -> Self {
        let games = self
            .snapshot
            .games
            .iter()
            .filter(|g| !titles.contains(&g.title))
            .cloned()
            .collect();
        self.with_games(games)
    }

    /// Add `record`, or replace the record with the same title in place.
    ///
    /// The record's category is normalized and its display fields are
    /// re-synced from the definition table.
    pub fn upsert(&self, mut record: GameRecord) -> Result<Self, CatalogError> {
        if record.title.trim().is_empty() {
            return Err(CatalogError::MissingField("title"));
        }
        let definition = self.definition(record.category_slug())?;
        record.assign_category(definition);

        let mut games = self.snapshot.games.clone();
        match self.snapshot.by_title.get(&record.title) {
            Some(&i) => games[i] = record,
            None => games.push(record),
        }
        Ok(self.with_games(games))
    }
}

#[cfg(test)]
#[path = "tests/index_tests.rs"]
mod tests;
