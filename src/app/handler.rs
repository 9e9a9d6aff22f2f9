//! Event handling and state transition logic.
//!
//! This is the shelf screen's state machine. Intents from the consuming
//! layer and completions from spawned fetches arrive as [`Event`]s; the
//! handler pattern-matches, mutates [`ShelfState`], and returns the effects
//! to start next.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//!
//! ```text
//! Intents → Events → handle_event → State mutation → Effects → Fetch tasks
//!               ↑                                        ↓
//!               └────────── Fetch completions ───────────┘
//! ```
//!
//! Guards run synchronously here, before any effect is emitted, which makes
//! them the concurrency control: an in-flight pagination request cannot be
//! duplicated because the guarded transition never produces a second
//! [`Effect::FetchPage`]. Response ordering never needs repair downstream.
//!
//! Failures arrive pre-classified; this layer only routes them into the
//! correct slot (list, detail, or footer) and never lets one bleed into
//! another.

use crate::app::effects::Effect;
use crate::app::state::{ShelfError, ShelfState};
use crate::domain::{BookDetail, BookSummary, FetchError};

/// The page every initial load and retry targets.
pub(crate) const FIRST_PAGE: u32 = 1;

/// User-facing intents, produced by the consuming layer and consumed exactly
/// once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Kicks off the page-1 load. Fires at most once per coordinator
    /// lifetime; later sends are no-ops.
    Initialise,

    /// Clears the failed list view and re-runs the initial load from
    /// page 1, re-arming the page counter.
    TryAgain,

    /// Opens the detail overlay and fetches detail for the given catalog
    /// key.
    BookClicked { key: String },

    /// Closes the detail overlay and clears the stored detail.
    DismissDetail,

    /// Requests the next page. Ignored while the initial load or another
    /// pagination request is in flight, or once the list end was reached.
    LoadMore,

    /// Clears the footer error and re-attempts the same next page.
    RetryPagination,
}

/// Everything the state machine reacts to: intents plus fetch completions
/// marshalled back from spawned tasks.
#[derive(Debug)]
pub enum Event {
    /// An intent from the consuming layer.
    Intent(Intent),

    /// Completion of an initial-load or retry fetch; the result replaces
    /// the list.
    ShelfLoaded {
        outcome: Result<Vec<BookSummary>, FetchError>,
    },

    /// Completion of a pagination fetch for `page`; a non-empty result
    /// appends.
    MoreLoaded {
        page: u32,
        outcome: Result<Vec<BookSummary>, FetchError>,
    },

    /// Completion of a detail fetch. Applied only if `token` still matches
    /// the state's current detail request.
    DetailLoaded {
        token: u64,
        outcome: Result<BookDetail, FetchError>,
    },
}

impl Event {
    /// Short label for trace spans.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Intent(Intent::Initialise) => "intent.initialise",
            Self::Intent(Intent::TryAgain) => "intent.try_again",
            Self::Intent(Intent::BookClicked { .. }) => "intent.book_clicked",
            Self::Intent(Intent::DismissDetail) => "intent.dismiss_detail",
            Self::Intent(Intent::LoadMore) => "intent.load_more",
            Self::Intent(Intent::RetryPagination) => "intent.retry_pagination",
            Self::ShelfLoaded { .. } => "shelf_loaded",
            Self::MoreLoaded { .. } => "more_loaded",
            Self::DetailLoaded { .. } => "detail_loaded",
        }
    }
}

/// Processes one event, mutates the state, and returns the effects to start.
///
/// The returned flag is true when the state changed and a new snapshot
/// should be published; guarded no-ops (a blocked `LoadMore`, a repeated
/// `Initialise`, a stale detail completion) change nothing and publish
/// nothing.
pub fn handle_event(state: &mut ShelfState, event: Event) -> (bool, Vec<Effect>) {
    let _span = tracing::debug_span!("handle_event", event = event.kind()).entered();

    match event {
        Event::Intent(intent) => handle_intent(state, intent),

        Event::ShelfLoaded { outcome } => {
            state.is_loading = false;
            match outcome {
                Ok(books) => {
                    tracing::debug!(count = books.len(), "shelf loaded");
                    state.can_load_more = !books.is_empty();
                    state.books = books;
                    state.error = None;
                }
                Err(error) => {
                    tracing::debug!(error = %error, "shelf load failed");
                    state.error = Some(ShelfError::Books(error));
                }
            }
            (true, vec![])
        }

        Event::MoreLoaded { page, outcome } => {
            match outcome {
                Ok(books) if books.is_empty() => {
                    tracing::debug!(page, "list end reached");
                    state.can_load_more = false;
                }
                Ok(mut books) => {
                    tracing::debug!(page, count = books.len(), "page appended");
                    state.books.append(&mut books);
                    state.current_page = page;
                }
                Err(error) => {
                    tracing::debug!(page, error = %error, "pagination failed");
                    state.pagination_error = Some(error.to_string());
                }
            }
            state.is_loading_more = false;
            (true, vec![])
        }

        Event::DetailLoaded { token, outcome } => {
            if token != state.detail_token {
                tracing::debug!(
                    token,
                    current = state.detail_token,
                    "dropping stale detail response"
                );
                return (false, vec![]);
            }

            state.is_loading_detail = false;
            match outcome {
                Ok(detail) => {
                    state.detail = Some(detail);
                    if matches!(state.error, Some(ShelfError::Detail(_))) {
                        state.error = None;
                    }
                }
                Err(error) => {
                    tracing::debug!(error = %error, "detail load failed");
                    state.error = Some(ShelfError::Detail(error));
                }
            }
            (true, vec![])
        }
    }
}

fn handle_intent(state: &mut ShelfState, intent: Intent) -> (bool, Vec<Effect>) {
    match intent {
        Intent::Initialise => {
            if state.initialised {
                tracing::debug!("already initialised, ignoring");
                return (false, vec![]);
            }
            state.initialised = true;
            state.begin_initial_load();
            (true, vec![Effect::FetchFirstPage])
        }

        Intent::TryAgain => {
            state.books.clear();
            state.error = None;
            state.begin_initial_load();
            (true, vec![Effect::FetchFirstPage])
        }

        Intent::BookClicked { key } => {
            state.is_loading_detail = true;
            state.sheet_visible = true;
            state.detail_token += 1;
            (
                true,
                vec![Effect::FetchDetail {
                    key,
                    token: state.detail_token,
                }],
            )
        }

        Intent::DismissDetail => {
            state.sheet_visible = false;
            state.detail = None;
            state.is_loading_detail = false;
            // An in-flight fetch for the dismissed overlay is now stale; its
            // completion will carry an outdated token and be dropped.
            state.detail_token += 1;
            (true, vec![])
        }

        Intent::LoadMore => start_next_page(state),

        Intent::RetryPagination => {
            let cleared = state.pagination_error.take().is_some();
            let (started, effects) = start_next_page(state);
            (cleared || started, effects)
        }
    }
}

fn start_next_page(state: &mut ShelfState) -> (bool, Vec<Effect>) {
    if state.load_more_blocked() {
        tracing::debug!(
            in_flight = state.is_loading_more,
            can_load_more = state.can_load_more,
            initial_loading = state.is_loading,
            "load more ignored"
        );
        return (false, vec![]);
    }

    state.is_loading_more = true;
    state.pagination_error = None;
    let page = state.current_page + 1;
    (true, vec![Effect::FetchPage { page }])
}
