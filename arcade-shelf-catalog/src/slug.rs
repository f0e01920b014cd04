//! Slug helpers for titles and category tokens.

/// Prefix carried by category tokens from the first scrape (`/t/action/`).
pub const LEGACY_CATEGORY_PREFIX: &str = "t/";

/// Strip the structural slashes and the legacy `t/` prefix from a category token.
///
/// Only one leading and one trailing slash are removed, so `/action/`,
/// `action/` and `/t/action/` all normalize to `action`.
pub fn normalize_category(raw: &str) -> &str {
    let token = raw.strip_prefix('/').unwrap_or(raw);
    let token = token.strip_suffix('/').unwrap_or(token);
    token.strip_prefix(LEGACY_CATEGORY_PREFIX).unwrap_or(token)
}

/// Wrap a slug in its canonical stored form: `/slug/`.
pub fn wrap_category(slug: &str) -> String {
    format!("/{slug}/")
}

/// Convert a game title into its URL slug.
///
/// Lower-cases the title, drops everything outside `[a-z0-9]` and whitespace,
/// then joins the remaining words with single hyphens. Distinct titles can
/// collapse onto the same slug (`"Snake!"` and `"Snake?"`); lookups resolve
/// such collisions to the first title in corpus order.
///
/// ```
/// use arcade_shelf_catalog::slug::title_to_slug;
///
/// assert_eq!(title_to_slug("Moto X3M: Pool Party"), "moto-x3m-pool-party");
/// assert_eq!(title_to_slug("  Slope  2 "), "slope-2");
/// ```
pub fn title_to_slug(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    let joined = kept.split_whitespace().collect::<Vec<_>>().join("-");
    joined.trim_matches('-').to_string()
}

/// Best-effort display title from a slug: hyphens become spaces and every
/// word starts upper-case.
pub fn slug_to_title(slug: &str) -> String {
    let mut out = String::with_capacity(slug.len());
    let mut prev_is_word = false;

    for ch in slug.chars() {
        let ch = if ch == '-' { ' ' } else { ch };
        let is_word = ch.is_alphanumeric() || ch == '_';
        if is_word && !prev_is_word {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_word = is_word;
    }

    out
}

/// Display name for a category slug that has no definition: first letter
/// upper-cased, hyphens turned into spaces (`io-games` → `Io games`).
pub fn humanize_slug(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => {
            let rest: String = chars.as_str().replace('-', " ");
            format!("{}{}", first.to_uppercase(), rest)
        }
        None => String::new(),
    }
}
