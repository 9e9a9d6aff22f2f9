//! Display-ready book models.
//!
//! This module defines the two immutable values the shelf screen renders:
//! [`BookSummary`] rows for the paginated list and [`BookDetail`] for the
//! expanded overlay. Both are produced by the domain use cases from raw
//! catalog payloads and never mutated afterwards.

/// One row of the "want to read" list.
///
/// Created by [`ListBooksUseCase`](crate::domain::ListBooksUseCase) for each
/// reading-log entry of a page. The `key` is the opaque catalog identifier
/// (e.g. `/works/OL45883W`) used to request detail when the row is selected.
///
/// # Fields
///
/// - `title`: work title, passed through verbatim
/// - `key`: stable catalog identifier for the detail lookup
/// - `author_names`: author names joined with `", "` in source order
/// - `cover_url`: derived medium-size cover image URL (not stored by the API)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummary {
    pub title: String,
    pub key: String,
    pub author_names: String,
    pub cover_url: String,
}

/// Expanded detail for a single work, shown in the overlay panel.
///
/// Created by [`GetBookDetailUseCase`](crate::domain::GetBookDetailUseCase).
/// Every field defaults to an empty string or empty list when the source
/// record omits it; consumers never see an absent field. Replaced wholesale
/// on each successful detail fetch and cleared when the overlay is dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub title: String,
    pub first_publish_date: String,
    /// Latest catalog revision number, stringified for display.
    pub latest_revision: String,
    pub description: String,
    pub subject_places: Vec<String>,
}
