//! Fetch error taxonomy and the raw-failure classifier.
//!
//! Every failure surfaced by the catalog client is routed through
//! [`classify`] exactly once, in the use case that issued the request. The
//! coordinator above only ever sees a [`FetchError`] and routes it into the
//! correct state slot; it never re-classifies.

use crate::catalog::CatalogError;
use thiserror::Error;

/// Classified outcome of a failed catalog request.
///
/// The four kinds mirror what the screen can usefully distinguish: offline,
/// caller bug, catalog outage, and everything else. Display strings are the
/// user-facing messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Connectivity-layer failure: the request never reached the catalog.
    #[error("Network connection failed")]
    NoConnection,

    /// The catalog rejected the request (HTTP 4xx).
    #[error("Client error: {0}")]
    Client(u16),

    /// The catalog failed to serve the request (HTTP 5xx).
    #[error("Server error: {0}")]
    Server(u16),

    /// Anything else, including statuses outside 400-599 and payloads that
    /// failed to decode.
    #[error("{0}")]
    Unknown(String),
}

/// Maps a raw catalog failure into exactly one [`FetchError`] kind.
///
/// Inspection order: connectivity failures first, then HTTP statuses
/// bucketed by range, then everything else. Total over its input; a status
/// outside both ranges (e.g. a stray 3xx) lands in `Unknown`.
///
/// # Examples
///
/// ```
/// use wantshelf::catalog::CatalogError;
/// use wantshelf::domain::{classify, FetchError};
///
/// assert_eq!(
///     classify(CatalogError::Connect("dns failure".into())),
///     FetchError::NoConnection,
/// );
/// assert_eq!(classify(CatalogError::Status(404)), FetchError::Client(404));
/// ```
#[must_use]
pub fn classify(error: CatalogError) -> FetchError {
    match error {
        CatalogError::Connect(_) => FetchError::NoConnection,
        CatalogError::Status(code) if (400..=499).contains(&code) => FetchError::Client(code),
        CatalogError::Status(code) if (500..=599).contains(&code) => FetchError::Server(code),
        CatalogError::Status(code) => FetchError::Unknown(format!("Unexpected error: {code}")),
        CatalogError::Decode(message) | CatalogError::Unexpected(message) => {
            if message.is_empty() {
                FetchError::Unknown("Unknown error occurred".to_string())
            } else {
                FetchError::Unknown(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_failures_classify_as_no_connection() {
        let classified = classify(CatalogError::Connect("connection refused".to_string()));
        assert_eq!(classified, FetchError::NoConnection);
        assert_eq!(classified.to_string(), "Network connection failed");
    }

    #[test]
    fn http_4xx_classifies_as_client_error() {
        assert_eq!(classify(CatalogError::Status(400)), FetchError::Client(400));
        assert_eq!(classify(CatalogError::Status(404)), FetchError::Client(404));
        assert_eq!(classify(CatalogError::Status(499)), FetchError::Client(499));
        assert_eq!(
            classify(CatalogError::Status(404)).to_string(),
            "Client error: 404"
        );
    }

    #[test]
    fn http_5xx_classifies_as_server_error() {
        assert_eq!(classify(CatalogError::Status(500)), FetchError::Server(500));
        assert_eq!(classify(CatalogError::Status(503)), FetchError::Server(503));
        assert_eq!(
            classify(CatalogError::Status(503)).to_string(),
            "Server error: 503"
        );
    }

    #[test]
    fn statuses_outside_both_ranges_classify_as_unknown() {
        assert_eq!(
            classify(CatalogError::Status(301)),
            FetchError::Unknown("Unexpected error: 301".to_string())
        );
        assert_eq!(
            classify(CatalogError::Status(600)),
            FetchError::Unknown("Unexpected error: 600".to_string())
        );
    }

    #[test]
    fn decode_failures_carry_their_message() {
        assert_eq!(
            classify(CatalogError::Decode("missing field `title`".to_string())),
            FetchError::Unknown("missing field `title`".to_string())
        );
    }

    #[test]
    fn empty_messages_fall_back_to_a_default() {
        assert_eq!(
            classify(CatalogError::Unexpected(String::new())),
            FetchError::Unknown("Unknown error occurred".to_string())
        );
    }
}
