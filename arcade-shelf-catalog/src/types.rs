//! Data model types for the games catalog.
//!
//! These types mirror the on-disk JSON corpus (`games-summary.json`), the
//! category definition files, and the published `categories.json` list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::slug::{normalize_category, wrap_category};

// ── Game ────────────────────────────────────────────────────────────────────

/// One game in the corpus. `title` is the primary key everywhere.
///
/// Keys this crate does not know about are kept in `extra` and written back
/// unchanged, so newer scraper output survives a classify/save cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    #[serde(default)]
    pub title: String,
    /// Page the game was scraped from.
    #[serde(rename = "url", default)]
    pub source_url: String,
    /// Wrapped category token, e.g. `/action/`.
    #[serde(default)]
    pub category: String,
    /// Iframe source used to embed the game.
    #[serde(rename = "gameFrame", default)]
    pub embed_url: String,
    /// Remote thumbnail URL.
    #[serde(rename = "thumbnail", default)]
    pub thumbnail_ref: String,
    /// Local thumbnail file name; overrides `thumbnail_ref` when non-empty.
    #[serde(rename = "localThumbnail", default)]
    pub local_thumbnail_ref: String,
    #[serde(default)]
    pub has_controls: bool,
    #[serde(default)]
    pub has_how_to_play: bool,
    #[serde(default)]
    pub has_tips: bool,
    #[serde(default)]
    pub has_developer: bool,
    #[serde(default)]
    pub similar_games_count: u32,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub category_icon: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GameRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the raw category token. The slug is wrapped as `/slug/` unless it
    /// already carries slashes or is empty.
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = if category.is_empty() || category.starts_with('/') {
            category.to_string()
        } else {
            wrap_category(category)
        };
        self
    }

    pub fn with_urls(mut self, source_url: impl Into<String>, embed_url: impl Into<String>) -> Self {
        self.source_url = source_url.into();
        self.embed_url = embed_url.into();
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail_ref = thumbnail.into();
        self
    }

    /// The category token with structural slashes and the legacy `t/` prefix removed.
    pub fn category_slug(&self) -> &str {
        normalize_category(&self.category)
    }

    /// Point this record at `definition`, keeping the display fields in sync.
    pub fn assign_category(&mut self, definition: &CategoryDefinition) {
        self.category = wrap_category(&definition.slug);
        self.category_name = definition.display_name.clone();
        self.category_icon = definition.icon.clone();
    }
}

// ── Category definitions ────────────────────────────────────────────────────

/// A category in the taxonomy, with the keywords used to score titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryDefinition {
    pub slug: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub icon: String,
    /// Matched case-insensitively as substrings of a title.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CategoryDefinition {
    pub fn new(slug: &str, display_name: &str, icon: &str, keywords: &[&str]) -> Self {
        Self {
            slug: slug.to_string(),
            display_name: display_name.to_string(),
            icon: icon.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Translation of category tokens from the pre-taxonomy scrape.
///
/// A `None` target marks a token that was never a real genre (`html5`,
/// `new-games`, ...); such records fall through to the default category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegacyMapping {
    entries: BTreeMap<String, Option<String>>,
}

impl LegacyMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, old_slug: impl Into<String>, new_slug: Option<&str>) {
        self.entries
            .insert(old_slug.into(), new_slug.map(str::to_string));
    }

    /// Resolve an old token. Returns `None` both for unknown tokens and for
    /// tokens mapped to nothing.
    pub fn resolve(&self, old_slug: &str) -> Option<&str> {
        self.entries.get(old_slug)?.as_deref()
    }

    pub fn contains(&self, old_slug: &str) -> bool {
        self.entries.contains_key(old_slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Summaries ───────────────────────────────────────────────────────────────

/// A category with its live game count, as published in `categories.json`.
///
/// Always derived from a corpus; never edited by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub slug: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub icon: String,
    pub count: usize,
}

impl CategorySummary {
    pub fn from_definition(definition: &CategoryDefinition, count: usize) -> Self {
        Self {
            slug: definition.slug.clone(),
            display_name: definition.display_name.clone(),
            icon: definition.icon.clone(),
            count,
        }
    }
}
