//! The category definition table: built-in taxonomy, legacy token mapping,
//! and load-time validation for tables read from disk.

use std::collections::HashSet;

use thiserror::Error;

use crate::types::{CategoryDefinition, LegacyMapping};

/// Category every unmatched record falls back to.
pub const DEFAULT_CATEGORY: &str = "casual";

/// Synthetic slug meaning "no category filter".
pub const ALL_CATEGORY: &str = "all";
pub const ALL_CATEGORY_NAME: &str = "All Games";

/// Icon used when a slug has no known icon.
pub const FALLBACK_ICON: &str = "🎮";

/// Built-in taxonomy, in table order. Order matters: it breaks scoring ties.
#[rustfmt::skip]
const BUILTIN_DEFINITIONS: &[(&str, &str, &str, &[&str])] = &[
    ("action", "Action Games", "⚔️", &["action", "fight", "battle", "warrior", "combat", "shooter", "gun", "survival"]),
    ("adventure", "Adventure Games", "🗺️", &["adventure", "quest", "explore", "journey", "mission", "world"]),
    ("platformer", "Platformer Games", "🏃", &["platform", "jump", "runner", "run", "parkour", "dash", "escape"]),
    ("shooting", "Shooting Games", "🔫", &["shoot", "gun", "sniper", "fps", "shooter", "zombie", "battle royale", "pubg", "fortnite"]),
    ("battle-royale", "Battle Royale Games", "🏆", &["battle royale", "royale", "pubg", "fortnite", "arena", "survivor"]),
    ("fighting", "Fighting Games", "👊", &["fight", "fighting", "combat", "versus", "duel", "warrior", "wrestle", "boxing"]),
    ("strategy", "Strategy Games", "🧠", &["strategy", "tower", "defense", "kingdom", "empire", "war", "build", "tactic"]),
    ("simulation", "Simulation Games", "🎯", &["simulation", "simulator", "life", "city", "farm", "build", "manage", "tycoon"]),
    ("idle", "Idle & Clicker Games", "👆", &["idle", "clicker", "click", "tap", "tycoon", "incremental", "empire", "business"]),
    ("puzzle", "Puzzle Games", "🧩", &["puzzle", "match", "block", "logic", "brain", "solve", "riddle", "maze", "tetris"]),
    ("word", "Word & Trivia Games", "📝", &["word", "trivia", "quiz", "spell", "crossword", "hangman", "scrabble"]),
    ("board", "Board Games", "🎲", &["board", "chess", "checkers", "card", "solitaire", "mahjong", "dice", "domino"]),
    ("racing", "Racing Games", "🏎️", &["race", "racing", "car", "drift", "speed", "track", "drive", "driver", "moto", "bike"]),
    ("sports", "Sports Games", "⚽", &["sport", "soccer", "football", "basketball", "baseball", "golf", "tennis", "pool", "billiard"]),
    ("fishing", "Fishing & Hunting Games", "🎣", &["fish", "fishing", "hunt", "hunting", "catch", "deer", "animal"]),
    ("io-games", "IO Games", "🌐", &["io", ".io", "multiplayer", "online", "arena", "battle", "pvp"]),
    ("multiplayer", "Multiplayer Games", "👥", &["multiplayer", "online", "2 player", "2-player", "coop", "cooperative", "versus"]),
    ("casual", "Casual Games", "🎪", &["casual", "simple", "easy", "fun", "relax", "quick", "mini"]),
    ("kids", "Kids Games", "👶", &["kids", "child", "children", "baby", "cute", "family", "educational", "learn"]),
    ("drawing", "Drawing & Coloring Games", "🎨", &["draw", "drawing", "paint", "color", "coloring", "art", "creative"]),
    ("vehicle-simulator", "Vehicle Simulators", "🚗", &["car", "drive", "driving", "vehicle", "simulator", "truck", "bus", "parking", "flight", "pilot", "plane", "helicopter"]),
    ("job-simulator", "Job Simulators", "👨‍💼", &["doctor", "hospital", "cook", "chef", "restaurant", "farm", "farmer", "police", "fire", "fireman", "job", "work", "career"]),
    ("horror", "Horror Games", "👻", &["horror", "scary", "zombie", "survival", "escape", "night", "dark", "ghost", "monster", "granny", "evil"]),
    ("survival", "Survival Games", "🏕️", &["survival", "survive", "craft", "build", "mine", "sandbox", "open world"]),
    ("fashion", "Fashion & Dress Up Games", "👗", &["fashion", "dress", "makeup", "beauty", "salon", "princess", "hair", "style", "design", "clothes"]),
    ("classic", "Classic Games", "🕹️", &["classic", "retro", "arcade", "vintage", "old", "pacman", "tetris", "snake", "space", "invader"]),
    ("music", "Music & Rhythm Games", "🎵", &["music", "rhythm", "dance", "sing", "song", "beat", "piano", "guitar", "drum", "fnf", "friday night"]),
];

/// Tokens from the first scrape and where they land in the taxonomy.
const BUILTIN_LEGACY: &[(&str, Option<&str>)] = &[
    ("action", Some("action")),
    ("adventure", Some("adventure")),
    ("puzzle", Some("puzzle")),
    ("racing", Some("racing")),
    ("sports", Some("sports")),
    ("shooting", Some("shooting")),
    ("strategy", Some("strategy")),
    ("arcade", Some("classic")),
    ("multiplayer", Some("multiplayer")),
    ("io-games", Some("io-games")),
    ("car", Some("vehicle-simulator")),
    ("running", Some("platformer")),
    ("2-player", Some("multiplayer")),
    ("3d", None),
    ("html5", None),
    ("new-games", None),
];

/// Icons for slugs that show up in old corpora but are not taxonomy entries.
const EXTRA_ICONS: &[(&str, &str)] = &[("arcade", "🕹️"), ("new-games", "🆕"), ("popular", "🔥")];

/// Problems found while validating a category table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("Category #{0} has an empty slug")]
    EmptySlug(usize),

    #[error("Category '{slug}' has an empty keyword at position {index}")]
    EmptyKeyword { slug: String, index: usize },

    #[error("Duplicate category slug: {0}")]
    DuplicateSlug(String),

    #[error("Default category '{0}' is not defined")]
    MissingDefault(String),

    #[error("Legacy token '{from}' maps to unknown category '{to}'")]
    UnknownMappingTarget { from: String, to: String },
}

/// Ordered category definitions plus the legacy mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    definitions: Vec<CategoryDefinition>,
    legacy: LegacyMapping,
    default_index: Option<usize>,
}

impl CategoryTable {
    /// Build a validated table.
    ///
    /// Rejects empty or duplicate slugs, blank keywords, a table without the
    /// default category, and legacy entries pointing at undefined slugs.
    pub fn new(
        definitions: Vec<CategoryDefinition>,
        legacy: LegacyMapping,
    ) -> Result<Self, DefinitionError> {
        let mut seen = HashSet::with_capacity(definitions.len());
        for (i, def) in definitions.iter().enumerate() {
            if def.slug.trim().is_empty() {
                return Err(DefinitionError::EmptySlug(i));
            }
            if !seen.insert(def.slug.as_str()) {
                return Err(DefinitionError::DuplicateSlug(def.slug.clone()));
            }
            // an empty keyword is a substring of every title
            if let Some(index) = def.keywords.iter().position(|k| k.trim().is_empty()) {
                return Err(DefinitionError::EmptyKeyword {
                    slug: def.slug.clone(),
                    index,
                });
            }
        }

        for (from, to) in legacy.iter() {
            if let Some(to) = to {
                if !seen.contains(to) {
                    return Err(DefinitionError::UnknownMappingTarget {
                        from: from.to_string(),
                        to: to.to_string(),
                    });
                }
            }
        }

        let default_index = definitions
            .iter()
            .position(|d| d.slug == DEFAULT_CATEGORY)
            .ok_or_else(|| DefinitionError::MissingDefault(DEFAULT_CATEGORY.to_string()))?;

        Ok(Self {
            definitions,
            legacy,
            default_index: Some(default_index),
        })
    }

    /// The taxonomy shipped with the crate.
    pub fn builtin() -> Self {
        let definitions: Vec<_> = BUILTIN_DEFINITIONS
            .iter()
            .map(|(slug, name, icon, keywords)| CategoryDefinition::new(slug, name, icon, keywords))
            .collect();
        let default_index = definitions.iter().position(|d| d.slug == DEFAULT_CATEGORY);

        Self {
            definitions,
            legacy: builtin_legacy_mapping(),
            default_index,
        }
    }

    /// A table with no categories. Classification is impossible against it;
    /// display code falls back to summaries derived from the corpus.
    pub fn empty() -> Self {
        Self {
            definitions: Vec::new(),
            legacy: LegacyMapping::new(),
            default_index: None,
        }
    }

    pub fn definitions(&self) -> &[CategoryDefinition] {
        &self.definitions
    }

    pub fn legacy(&self) -> &LegacyMapping {
        &self.legacy
    }

    pub fn get(&self, slug: &str) -> Option<&CategoryDefinition> {
        self.definitions.iter().find(|d| d.slug == slug)
    }

    /// Table position of `slug`, used for stable tie-breaking.
    pub fn position(&self, slug: &str) -> Option<usize> {
        self.definitions.iter().position(|d| d.slug == slug)
    }

    pub fn default_category(&self) -> Option<&CategoryDefinition> {
        self.default_index.map(|i| &self.definitions[i])
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The legacy token mapping shipped with the crate.
pub fn builtin_legacy_mapping() -> LegacyMapping {
    let mut mapping = LegacyMapping::new();
    for (from, to) in BUILTIN_LEGACY {
        mapping.insert(*from, *to);
    }
    mapping
}

/// Icon for a category slug, falling back to [`FALLBACK_ICON`].
pub fn category_icon(slug: &str) -> &'static str {
    let slug = slug.to_lowercase();
    BUILTIN_DEFINITIONS
        .iter()
        .find(|(s, ..)| *s == slug)
        .map(|(_, _, icon, _)| *icon)
        .or_else(|| {
            EXTRA_ICONS
                .iter()
                .find(|(s, _)| *s == slug)
                .map(|(_, icon)| *icon)
        })
        .unwrap_or(FALLBACK_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let builtin = CategoryTable::builtin();
        let rebuilt = CategoryTable::new(
            builtin.definitions().to_vec(),
            builtin.legacy().clone(),
        );
        assert_eq!(rebuilt.as_ref(), Ok(&builtin));
        assert_eq!(builtin.len(), 27);
        assert_eq!(
            builtin.default_category().map(|d| d.slug.as_str()),
            Some(DEFAULT_CATEGORY)
        );
    }

    #[test]
    fn test_builtin_order() {
        let table = CategoryTable::builtin();
        assert_eq!(table.position("action"), Some(0));
        assert_eq!(table.position("music"), Some(26));
        assert_eq!(table.position("arcade"), None);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let defs = vec![
            CategoryDefinition::new("casual", "Casual", "🎪", &[]),
            CategoryDefinition::new("casual", "Casual Again", "🎪", &[]),
        ];
        assert_eq!(
            CategoryTable::new(defs, LegacyMapping::new()),
            Err(DefinitionError::DuplicateSlug("casual".into()))
        );
    }

    #[test]
    fn test_empty_slug_rejected() {
        let defs = vec![
            CategoryDefinition::new("casual", "Casual", "🎪", &[]),
            CategoryDefinition::new(" ", "Blank", "?", &[]),
        ];
        assert_eq!(
            CategoryTable::new(defs, LegacyMapping::new()),
            Err(DefinitionError::EmptySlug(1))
        );
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let defs = vec![
            CategoryDefinition::new("racing", "Racing", "🏎️", &["race", "  "]),
            CategoryDefinition::new("casual", "Casual", "🎪", &[""]),
        ];
        assert_eq!(
            CategoryTable::new(defs, LegacyMapping::new()),
            Err(DefinitionError::EmptyKeyword {
                slug: "racing".into(),
                index: 1,
            })
        );
    }

    #[test]
    fn test_missing_default_rejected() {
        let defs = vec![CategoryDefinition::new("action", "Action", "⚔️", &["fight"])];
        assert_eq!(
            CategoryTable::new(defs, LegacyMapping::new()),
            Err(DefinitionError::MissingDefault("casual".into()))
        );
    }

    #[test]
    fn test_unknown_mapping_target_rejected() {
        let defs = vec![CategoryDefinition::new("casual", "Casual", "🎪", &[])];
        let mut legacy = LegacyMapping::new();
        legacy.insert("car", Some("vehicle-simulator"));
        legacy.insert("html5", None);
        assert_eq!(
            CategoryTable::new(defs, legacy),
            Err(DefinitionError::UnknownMappingTarget {
                from: "car".into(),
                to: "vehicle-simulator".into(),
            })
        );
    }

    #[test]
    fn test_legacy_resolve() {
        let legacy = builtin_legacy_mapping();
        assert_eq!(legacy.resolve("car"), Some("vehicle-simulator"));
        assert_eq!(legacy.resolve("arcade"), Some("classic"));
        assert_eq!(legacy.resolve("html5"), None);
        assert!(legacy.contains("html5"));
        assert_eq!(legacy.resolve("xyz123"), None);
        assert!(!legacy.contains("xyz123"));
    }

    #[test]
    fn test_category_icon() {
        assert_eq!(category_icon("action"), "⚔️");
        assert_eq!(category_icon("IO-GAMES"), "🌐");
        assert_eq!(category_icon("arcade"), "🕹️");
        assert_eq!(category_icon("popular"), "🔥");
        assert_eq!(category_icon("mystery"), FALLBACK_ICON);
    }

    #[test]
    fn test_empty_table() {
        let table = CategoryTable::empty();
        assert!(table.is_empty());
        assert!(table.default_category().is_none());
    }
}
