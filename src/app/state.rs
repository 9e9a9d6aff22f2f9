//! Shelf screen state: the single source of truth for the list, the detail
//! overlay, and the pagination footer.
//!
//! # Architecture
//!
//! [`ShelfState`] is one aggregate rather than a bag of independent
//! reactive fields, so the cross-field invariants (loading vs. error
//! exclusivity, monotonic `can_load_more`, page advancement) are enforced in
//! one place, the event handler, and every published snapshot is internally
//! consistent.
//!
//! # Render dimensions
//!
//! Three orthogonal axes derive from one snapshot:
//!
//! - **Primary list**: loading (`is_loading`), failed (`error` carries the
//!   [`ShelfError::Books`] variant, `books` empty), or loaded (`books`
//!   non-empty)
//! - **Detail overlay**: hidden, loading, loaded, or failed, driven by
//!   `sheet_visible`, `is_loading_detail`, `detail`, and the
//!   [`ShelfError::Detail`] variant
//! - **Pagination footer**: in progress (`is_loading_more`) or failed
//!   (`pagination_error`), never disturbing the already-loaded list

use crate::domain::{BookDetail, BookSummary, FetchError};
use thiserror::Error;

/// Error slot of the shelf screen.
///
/// Exactly one variant is ever populated: a list failure and a detail
/// failure never coexist, and routing one kind never clobbers the other
/// slot's semantics. Pagination failures live separately in
/// [`ShelfState::pagination_error`] as a plain footer message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShelfError {
    /// The initial or retried list load failed; replaces the list view.
    #[error("{0}")]
    Books(FetchError),

    /// A detail fetch failed; shown inside the still-open overlay.
    #[error("{0}")]
    Detail(FetchError),
}

/// Central screen state container.
///
/// Owned and mutated exclusively by the coordinator task; consumers observe
/// cloned snapshots through the watch channel and never mutate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfState {
    /// Loaded summaries, in catalog order.
    ///
    /// Append-only across pages; replaced wholesale by an initial load or
    /// retry. New pages land strictly after existing items.
    pub books: Vec<BookSummary>,

    /// Detail for the currently selected work, if one has loaded.
    ///
    /// Replaced wholesale on each successful detail fetch, cleared on
    /// dismiss so re-opening always starts from a clean loading state.
    pub detail: Option<BookDetail>,

    /// Initial (or retried) page-1 load in flight.
    pub is_loading: bool,

    /// Detail fetch in flight for the open overlay.
    pub is_loading_detail: bool,

    /// The active list-or-detail error, if any.
    pub error: Option<ShelfError>,

    /// Whether the detail overlay is open.
    pub sheet_visible: bool,

    /// Pagination fetch in flight; guards against duplicate load-more
    /// requests.
    pub is_loading_more: bool,

    /// Footer error message from the last failed pagination attempt.
    pub pagination_error: Option<String>,

    /// Last successfully loaded page, 1-based.
    ///
    /// Only advances after a non-empty page fetch succeeds, so a failed or
    /// empty attempt leaves the next retry targeting the same page.
    pub current_page: u32,

    /// Whether another page may exist.
    ///
    /// Becomes false once a page returns zero items and stays false until
    /// the next full reset (initial load or retry).
    pub can_load_more: bool,

    /// Whether `Initialise` has already fired; it runs at most once per
    /// coordinator lifetime.
    pub initialised: bool,

    /// Identity of the most recent detail request.
    ///
    /// Advanced by every `BookClicked` and `DismissDetail`, so a detail
    /// response carrying an older token is recognized as stale and dropped.
    pub detail_token: u64,
}

impl Default for ShelfState {
    fn default() -> Self {
        Self {
            books: vec![],
            detail: None,
            is_loading: false,
            is_loading_detail: false,
            error: None,
            sheet_visible: false,
            is_loading_more: false,
            pagination_error: None,
            current_page: 1,
            can_load_more: true,
            initialised: false,
            detail_token: 0,
        }
    }
}

impl ShelfState {
    /// Marks the start of a fresh page-1 load, re-arming the page counter.
    pub(crate) fn begin_initial_load(&mut self) {
        self.is_loading = true;
        self.current_page = 1;
    }

    /// Whether a load-more attempt must be ignored right now.
    ///
    /// True while another pagination request is in flight, after the list
    /// end was reached, or while the initial load is still running.
    #[must_use]
    pub fn load_more_blocked(&self) -> bool {
        self.is_loading_more || !self.can_load_more || self.is_loading
    }
}
