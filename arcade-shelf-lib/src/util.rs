use std::borrow::Cow;

use arcade_shelf_catalog::GameRecord;

use crate::error::CatalogError;

/// Public path under which local thumbnails are served.
pub const LOCAL_THUMBNAIL_PREFIX: &str = "/improved-game-data/images/";

/// Image path to render for a game.
///
/// Uses the local thumbnail when the record has one (file name
/// percent-encoded, since scraped titles carry quotes and spaces), otherwise
/// the remote thumbnail URL.
pub fn thumbnail_path(game: &GameRecord) -> Cow<'_, str> {
    if game.local_thumbnail_ref.is_empty() {
        Cow::Borrowed(&game.thumbnail_ref)
    } else {
        Cow::Owned(format!(
            "{}{}",
            LOCAL_THUMBNAIL_PREFIX,
            urlencoding::encode(&game.local_thumbnail_ref)
        ))
    }
}

/// Check the fields an admin form must fill before a record is saved.
pub fn validate_record(game: &GameRecord) -> Result<(), CatalogError> {
    let required = [
        ("title", &game.title),
        ("url", &game.source_url),
        ("category", &game.category),
        ("gameFrame", &game.embed_url),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(CatalogError::MissingField(name));
        }
    }
    Ok(())
}

/// Pluralize a count for log lines: `1 game`, `3 games`, `2 categories`.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        return format!("{count} {noun}");
    }
    match noun.strip_suffix('y') {
        Some(stem) if !stem.ends_with(&['a', 'e', 'o', 'u'][..]) => format!("{count} {stem}ies"),
        _ => format!("{count} {noun}s"),
    }
}

#[cfg(test)]
#[path = "tests/util_tests.rs"]
mod tests;
