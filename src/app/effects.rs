//! Effects representing fetches to be started by the coordinator runtime.
//!
//! The event handler is pure: it mutates state and returns [`Effect`]
//! values, and the coordinator task turns each one into a spawned catalog
//! call. This keeps every transition unit-testable without a runtime, and
//! makes the guard checks (which decide whether an effect is emitted at all)
//! the single concurrency control point.

/// A fetch to start after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch page 1 for an initial load or retry; the result replaces the
    /// list.
    FetchFirstPage,

    /// Fetch a further page; the result appends to the list.
    FetchPage { page: u32 },

    /// Fetch detail for one work.
    ///
    /// `token` identifies this request so the response can be dropped if the
    /// overlay was dismissed (or another book selected) in the meantime.
    FetchDetail { key: String, token: u64 },
}
