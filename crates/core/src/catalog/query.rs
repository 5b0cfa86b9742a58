//! Listing query policy: page clamping, sort-key whitelist, page math.
//!
//! Listing input is unauthenticated and attacker-controllable, so every
//! value is normalized here before it reaches SQL: page numbers and sizes
//! are clamped into fixed bounds and the sort key is resolved against a
//! closed whitelist. The execution order (filter, count, sort, page,
//! project) is fixed; the repository layer must not reorder it, because
//! doing so changes `total_records`/`total_pages` semantics and page
//! contents.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Pagination bounds
// ---------------------------------------------------------------------------

/// Page size applied when the request omits one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size; larger requests are capped, not rejected.
pub const MAX_PAGE_SIZE: i64 = 50;

/// First page number; non-positive requests are floored to this.
pub const MIN_PAGE_NUMBER: i64 = 1;

// ---------------------------------------------------------------------------
// Page window
// ---------------------------------------------------------------------------

/// A clamped page window. Construct via [`PageQuery::clamped`] so the
/// bounds above always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    page_number: i64,
    page_size: i64,
}

impl PageQuery {
    /// Normalize raw request values into a valid window.
    ///
    /// Missing or non-positive page numbers become 1; the page size is
    /// clamped into `[1, MAX_PAGE_SIZE]` and defaults to
    /// [`DEFAULT_PAGE_SIZE`] when absent.
    pub fn clamped(page_number: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page_number: page_number.unwrap_or(MIN_PAGE_NUMBER).max(MIN_PAGE_NUMBER),
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn page_number(self) -> i64 {
        self.page_number
    }

    pub fn page_size(self) -> i64 {
        self.page_size
    }

    /// Rows to skip: `(page_number - 1) * page_size`.
    pub fn offset(self) -> i64 {
        (self.page_number - 1) * self.page_size
    }

    /// Rows to take; alias of the page size for use as a SQL LIMIT.
    pub fn limit(self) -> i64 {
        self.page_size
    }
}

// ---------------------------------------------------------------------------
// Sort whitelist
// ---------------------------------------------------------------------------

/// Sortable movie attributes.
///
/// The variants map to column names below; anything outside the whitelist
/// falls back to [`MovieSortKey::Title`] so repeated calls with the same
/// inputs always page deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovieSortKey {
    #[default]
    Title,
    ReleaseDate,
    Rating,
    Created,
}

impl MovieSortKey {
    /// Resolve a raw request value against the whitelist.
    ///
    /// Matching is case-insensitive; unrecognized, empty, or absent values
    /// fall back to `Title`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("title") => Self::Title,
            Some("release_date") | Some("releasedate") => Self::ReleaseDate,
            Some("rating") => Self::Rating,
            Some("created") | Some("created_at") => Self::Created,
            _ => Self::Title,
        }
    }

    /// The movie column this key sorts by.
    ///
    /// Returning a fixed string from a closed enum is what keeps
    /// user-supplied sort keys out of SQL.
    pub fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::ReleaseDate => "release_date",
            Self::Rating => "rating",
            Self::Created => "created_at",
        }
    }
}

// ---------------------------------------------------------------------------
// Page envelope
// ---------------------------------------------------------------------------

/// A bounded slice of a filtered-and-sorted result set plus total-count
/// metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_records: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Assemble the envelope from a fetched window and the filtered count.
    pub fn new(data: Vec<T>, query: PageQuery, total_records: i64) -> Self {
        Self {
            data,
            page_number: query.page_number(),
            page_size: query.page_size(),
            total_records,
            total_pages: total_pages(total_records, query.page_size()),
        }
    }
}

/// `ceil(total_records / page_size)`; zero records means zero pages.
pub fn total_pages(total_records: i64, page_size: i64) -> i64 {
    if total_records <= 0 {
        return 0;
    }
    (total_records + page_size - 1) / page_size
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- PageQuery::clamped --

    #[test]
    fn defaults_apply_when_values_missing() {
        let q = PageQuery::clamped(None, None);
        assert_eq!(q.page_number(), 1);
        assert_eq!(q.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn non_positive_page_number_behaves_like_first_page() {
        assert_eq!(PageQuery::clamped(Some(0), None), PageQuery::clamped(Some(1), None));
        assert_eq!(PageQuery::clamped(Some(-5), None), PageQuery::clamped(Some(1), None));
    }

    #[test]
    fn oversized_page_size_is_capped() {
        assert_eq!(
            PageQuery::clamped(None, Some(500)),
            PageQuery::clamped(None, Some(MAX_PAGE_SIZE))
        );
    }

    #[test]
    fn undersized_page_size_is_floored() {
        assert_eq!(PageQuery::clamped(None, Some(0)), PageQuery::clamped(None, Some(1)));
        assert_eq!(PageQuery::clamped(None, Some(-1)), PageQuery::clamped(None, Some(1)));
    }

    #[test]
    fn offset_skips_previous_pages() {
        let q = PageQuery::clamped(Some(3), Some(10));
        assert_eq!(q.offset(), 20);
        assert_eq!(q.limit(), 10);
    }

    #[test]
    fn first_page_has_zero_offset() {
        assert_eq!(PageQuery::clamped(Some(1), Some(25)).offset(), 0);
    }

    // -- MovieSortKey --

    #[test]
    fn sort_key_parses_whitelisted_values() {
        assert_eq!(MovieSortKey::parse(Some("title")), MovieSortKey::Title);
        assert_eq!(MovieSortKey::parse(Some("release_date")), MovieSortKey::ReleaseDate);
        assert_eq!(MovieSortKey::parse(Some("rating")), MovieSortKey::Rating);
        assert_eq!(MovieSortKey::parse(Some("created")), MovieSortKey::Created);
    }

    #[test]
    fn sort_key_is_case_insensitive() {
        assert_eq!(MovieSortKey::parse(Some("Title")), MovieSortKey::Title);
        assert_eq!(MovieSortKey::parse(Some("RELEASEDATE")), MovieSortKey::ReleaseDate);
    }

    #[test]
    fn unrecognized_sort_key_falls_back_to_title() {
        assert_eq!(MovieSortKey::parse(Some("director")), MovieSortKey::Title);
        assert_eq!(MovieSortKey::parse(Some("id; DROP TABLE movies")), MovieSortKey::Title);
        assert_eq!(MovieSortKey::parse(Some("")), MovieSortKey::Title);
        assert_eq!(MovieSortKey::parse(None), MovieSortKey::Title);
    }

    #[test]
    fn sort_key_columns() {
        assert_eq!(MovieSortKey::Title.column(), "title");
        assert_eq!(MovieSortKey::ReleaseDate.column(), "release_date");
        assert_eq!(MovieSortKey::Rating.column(), "rating");
        assert_eq!(MovieSortKey::Created.column(), "created_at");
    }

    // -- total_pages --

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(21, 10), 3);
        assert_eq!(total_pages(1, 50), 1);
    }

    #[test]
    fn zero_records_means_zero_pages() {
        assert_eq!(total_pages(0, 10), 0);
    }

    // -- Page envelope --

    #[test]
    fn page_envelope_carries_count_metadata() {
        let q = PageQuery::clamped(Some(2), Some(10));
        let page = Page::new(vec![1, 2, 3], q, 23);
        assert_eq!(page.page_number, 2);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_records, 23);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.data.len(), 3);
    }

    #[test]
    fn empty_page_beyond_last_keeps_totals() {
        let q = PageQuery::clamped(Some(9), Some(10));
        let page: Page<i64> = Page::new(Vec::new(), q, 20);
        assert!(page.data.is_empty());
        assert_eq!(page.total_records, 20);
        assert_eq!(page.total_pages, 2);
    }
}
