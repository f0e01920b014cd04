//! Page slicing for listings.

/// Games per page on the public listing.
pub const PUBLIC_PER_PAGE: usize = 36;

/// Games per page on the admin listing.
pub const ADMIN_PER_PAGE: usize = 20;

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number actually shown (after clamping).
    pub page: usize,
    /// Always at least 1, even for an empty listing.
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice `items` into page `page` (1-based) of `per_page` items.
///
/// Out-of-range pages are clamped to the first or last page. A `per_page`
/// of zero is treated as one.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);

    let start = ((page - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());

    Page {
        items: &items[start..end],
        page,
        total_pages,
        total_items: items.len(),
    }
}
