//! Keyword-weighted category assignment.
//!
//! Every record is scored against every category definition: each keyword
//! found in the lower-cased title adds [`KEYWORD_WEIGHT`], and a record whose
//! current category already equals the definition's slug gets
//! [`CURRENT_CATEGORY_BONUS`]. The highest score wins, earlier definitions win
//! ties, and a best score under [`SCORE_THRESHOLD`] falls back to the legacy
//! mapping and then to the default category.

use std::collections::BTreeSet;
use std::fmt;

use arcade_shelf_catalog::{
    CategoryDefinition, CategorySummary, CategoryTable, DEFAULT_CATEGORY, GameRecord,
};

use crate::error::CatalogError;
use crate::summary::summarize;

/// Points per keyword found in a title.
pub const KEYWORD_WEIGHT: u32 = 2;

/// Points for a definition whose slug equals the record's current category.
pub const CURRENT_CATEGORY_BONUS: u32 = 5;

/// Minimum best score for a keyword/bonus placement to stick.
pub const SCORE_THRESHOLD: u32 = 2;

/// How a record ended up in its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The winning definition scored at least the threshold.
    Scored(u32),
    /// The current category token resolved through the legacy mapping.
    Legacy,
    /// Nothing matched; the default category was used.
    Default,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scored(score) => write!(f, "score {score}"),
            Self::Legacy => f.write_str("legacy mapping"),
            Self::Default => f.write_str("default"),
        }
    }
}

/// The category chosen for one record.
#[derive(Debug, Clone, Copy)]
pub struct Assignment<'t> {
    pub definition: &'t CategoryDefinition,
    pub placement: Placement,
}

/// Result of classifying a whole corpus.
#[derive(Debug, Clone)]
pub struct ClassifiedCorpus {
    /// The reclassified records, in input order.
    pub games: Vec<GameRecord>,
    pub report: ClassificationReport,
}

/// Statistics about a classification run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationReport {
    /// Distinct normalized category tokens found before classification.
    pub original_categories: BTreeSet<String>,
    pub scored: usize,
    pub legacy: usize,
    pub defaulted: usize,
    /// Published category list: non-empty categories, largest first.
    pub summaries: Vec<CategorySummary>,
}

impl ClassificationReport {
    pub fn total(&self) -> usize {
        self.scored + self.legacy + self.defaulted
    }
}

/// Assigns categories using a definition table.
pub struct Classifier<'t> {
    table: &'t CategoryTable,
    default: &'t CategoryDefinition,
}

impl<'t> Classifier<'t> {
    /// Fails if the table has no default category to fall back to.
    pub fn new(table: &'t CategoryTable) -> Result<Self, CatalogError> {
        let default = table
            .default_category()
            .ok_or_else(|| CatalogError::NoDefaultCategory(DEFAULT_CATEGORY.to_string()))?;
        Ok(Self { table, default })
    }

    pub fn table(&self) -> &'t CategoryTable {
        self.table
    }

    /// Pick the category for a single record.
    ///
    /// Records with an empty title score zero everywhere except for the
    /// current-category bonus, so they land on their current category,
    /// the legacy mapping, or the default.
    pub fn classify(&self, record: &GameRecord) -> Assignment<'t> {
        let title = record.title.to_lowercase();
        let current = record.category_slug();

        let mut best: Option<(&'t CategoryDefinition, u32)> = None;
        for definition in self.table.definitions() {
            let score = score_definition(definition, &title, current);
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((definition, score));
            }
        }

        match best {
            Some((definition, score)) if score >= SCORE_THRESHOLD => Assignment {
                definition,
                placement: Placement::Scored(score),
            },
            _ => self.fallback(current),
        }
    }

    fn fallback(&self, current: &str) -> Assignment<'t> {
        let mapped = self
            .table
            .legacy()
            .resolve(current)
            .and_then(|slug| self.table.get(slug));

        match mapped {
            Some(definition) => Assignment {
                definition,
                placement: Placement::Legacy,
            },
            None => Assignment {
                definition: self.default,
                placement: Placement::Default,
            },
        }
    }

    /// Classify every record, leaving `games` untouched.
    ///
    /// Each output record is a copy of its input with `category`,
    /// `categoryName` and `categoryIcon` rewritten; all other fields,
    /// including unknown ones, pass through.
    pub fn classify_corpus(&self, games: &[GameRecord]) -> ClassifiedCorpus {
        let mut report = ClassificationReport::default();
        let mut classified = Vec::with_capacity(games.len());

        for game in games {
            report
                .original_categories
                .insert(game.category_slug().to_string());

            let assignment = self.classify(game);
            match assignment.placement {
                Placement::Scored(_) => report.scored += 1,
                Placement::Legacy => report.legacy += 1,
                Placement::Default => report.defaulted += 1,
            }
            log::debug!(
                "{:?}: {} -> {} ({})",
                game.title,
                game.category_slug(),
                assignment.definition.slug,
                assignment.placement,
            );

            let mut updated = game.clone();
            updated.assign_category(assignment.definition);
            classified.push(updated);
        }

        report.summaries = summarize(self.table, &classified);

        ClassifiedCorpus {
            games: classified,
            report,
        }
    }
}

/// Score one definition against a lower-cased title and the record's
/// normalized current category.
///
/// Keywords are counted once per entry in the keyword list; a list that
/// repeats a keyword counts it repeatedly.
pub fn score_definition(definition: &CategoryDefinition, title_lower: &str, current: &str) -> u32 {
    let hits = definition
        .keywords
        .iter()
        .filter(|keyword| title_lower.contains(keyword.to_lowercase().as_str()))
        .count() as u32;

    let bonus = if current == definition.slug {
        CURRENT_CATEGORY_BONUS
    } else {
        0
    };

    hits * KEYWORD_WEIGHT + bonus
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
