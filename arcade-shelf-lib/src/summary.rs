//! Category summaries: per-category counts derived from a corpus.

use std::collections::HashMap;

use arcade_shelf_catalog::{
    ALL_CATEGORY, ALL_CATEGORY_NAME, CategorySummary, CategoryTable, FALLBACK_ICON, GameRecord,
    category_icon, humanize_slug,
};

/// Count records per normalized category slug.
pub fn category_counts(games: &[GameRecord]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for game in games {
        *counts.entry(game.category_slug()).or_insert(0) += 1;
    }
    counts
}

/// Build the published category list for `games`.
///
/// One entry per table definition with at least one record, sorted by count
/// descending. Equal counts keep table order.
pub fn summarize(table: &CategoryTable, games: &[GameRecord]) -> Vec<CategorySummary> {
    let counts = category_counts(games);

    let mut summaries: Vec<_> = table
        .definitions()
        .iter()
        .filter_map(|def| {
            let count = counts.get(def.slug.as_str()).copied().unwrap_or(0);
            (count > 0).then(|| CategorySummary::from_definition(def, count))
        })
        .collect();

    // stable: ties stay in table order
    summaries.sort_by(|a, b| b.count.cmp(&a.count));
    summaries
}

/// Build a category list straight from the corpus, for when no definition
/// table is available.
///
/// Names are humanized slugs and icons come from [`category_icon`]. Equal
/// counts keep first-appearance order.
pub fn summarize_corpus(games: &[GameRecord]) -> Vec<CategorySummary> {
    let mut summaries: Vec<CategorySummary> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for game in games {
        let slug = game.category_slug();
        match positions.get(slug) {
            Some(&i) => summaries[i].count += 1,
            None => {
                positions.insert(slug, summaries.len());
                summaries.push(CategorySummary {
                    slug: slug.to_string(),
                    display_name: humanize_slug(slug),
                    icon: category_icon(slug).to_string(),
                    count: 1,
                });
            }
        }
    }

    summaries.sort_by(|a, b| b.count.cmp(&a.count));
    summaries
}

/// Corpus-wide totals shown by `arcade-shelf stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub total: usize,
    pub categories: usize,
    /// Sum of the published summary counts; equals `total` when every
    /// record sits in a defined category.
    pub summarized: usize,
    pub with_controls: usize,
    pub with_how_to_play: usize,
    pub with_tips: usize,
    pub with_developer: usize,
    pub local_thumbnails: usize,
}

impl CorpusStats {
    pub fn collect(games: &[GameRecord], summaries: &[CategorySummary]) -> Self {
        let count = |f: fn(&GameRecord) -> bool| games.iter().filter(|g| f(g)).count();
        Self {
            total: games.len(),
            categories: summaries.len(),
            summarized: summaries.iter().map(|s| s.count).sum(),
            with_controls: count(|g| g.has_controls),
            with_how_to_play: count(|g| g.has_how_to_play),
            with_tips: count(|g| g.has_tips),
            with_developer: count(|g| g.has_developer),
            local_thumbnails: count(|g| !g.local_thumbnail_ref.is_empty()),
        }
    }

    pub fn reconciles(&self) -> bool {
        self.summarized == self.total
    }
}

/// The synthetic "All Games" entry.
pub fn all_entry(total: usize) -> CategorySummary {
    CategorySummary {
        slug: ALL_CATEGORY.to_string(),
        display_name: ALL_CATEGORY_NAME.to_string(),
        icon: FALLBACK_ICON.to_string(),
        count: total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_shelf_catalog::CategoryDefinition;
    use arcade_shelf_catalog::LegacyMapping;

    fn game(title: &str, category: &str) -> GameRecord {
        GameRecord::new(title).with_category(category)
    }

    fn small_table() -> CategoryTable {
        CategoryTable::new(
            vec![
                CategoryDefinition::new("racing", "Racing Games", "🏎️", &["race"]),
                CategoryDefinition::new("puzzle", "Puzzle Games", "🧩", &["puzzle"]),
                CategoryDefinition::new("casual", "Casual Games", "🎪", &[]),
            ],
            LegacyMapping::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_summarize_sorted_by_count() {
        let games = vec![
            game("A", "casual"),
            game("B", "puzzle"),
            game("C", "casual"),
            game("D", "casual"),
            game("E", "puzzle"),
        ];
        let summaries = summarize(&small_table(), &games);
        let slugs: Vec<_> = summaries.iter().map(|s| (s.slug.as_str(), s.count)).collect();
        assert_eq!(slugs, vec![("casual", 3), ("puzzle", 2)]);
        assert_eq!(summaries[1].display_name, "Puzzle Games");
    }

    #[test]
    fn test_summarize_ties_keep_table_order() {
        let games = vec![game("A", "casual"), game("B", "puzzle"), game("C", "racing")];
        let summaries = summarize(&small_table(), &games);
        let slugs: Vec<_> = summaries.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["racing", "puzzle", "casual"]);
    }

    #[test]
    fn test_summarize_omits_empty_categories() {
        let summaries = summarize(&small_table(), &[game("A", "racing")]);
        assert_eq!(summaries.len(), 1);
        assert!(summarize(&small_table(), &[]).is_empty());
    }

    #[test]
    fn test_summarize_corpus() {
        let games = vec![
            game("A", "/t/new-games/"),
            game("B", "io-games"),
            game("C", "io-games"),
            game("D", "mystery"),
        ];
        let summaries = summarize_corpus(&games);
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].slug, "io-games");
        assert_eq!(summaries[0].display_name, "Io games");
        assert_eq!(summaries[0].icon, "🌐");
        assert_eq!(summaries[1].slug, "new-games");
        assert_eq!(summaries[1].icon, "🆕");
        assert_eq!(summaries[2].icon, FALLBACK_ICON);
    }

    #[test]
    fn test_corpus_stats() {
        let mut with_flags = game("A", "casual");
        with_flags.has_controls = true;
        with_flags.has_tips = true;
        with_flags.local_thumbnail_ref = "a.jpg".into();
        let games = vec![with_flags, game("B", "puzzle"), game("C", "mystery")];

        let summaries = summarize(&small_table(), &games);
        let stats = CorpusStats::collect(&games, &summaries);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.categories, 2);
        assert_eq!(stats.with_controls, 1);
        assert_eq!(stats.with_tips, 1);
        assert_eq!(stats.with_how_to_play, 0);
        assert_eq!(stats.local_thumbnails, 1);
        // "mystery" is not in the table
        assert!(!stats.reconciles());
    }

    #[test]
    fn test_all_entry() {
        let all = all_entry(42);
        assert_eq!(all.slug, "all");
        assert_eq!(all.display_name, "All Games");
        assert_eq!(all.count, 42);
    }
}
