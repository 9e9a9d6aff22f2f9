//! Wantshelf: an OpenLibrary "want to read" shelf browser engine.
//!
//! Wantshelf drives a single book-list screen: it loads a user's "want to
//! read" reading log page by page, and fetches expanded detail for a
//! selected work into an overlay. The consuming layer sends intents and
//! renders state snapshots; everything between (pagination bookkeeping,
//! duplicate-request debouncing, independent list/detail/footer error
//! channels) lives here.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Console shim (main.rs)                             │  ← Demo driver
//! └─────────────────────────────────────────────────────┘
//!          │ intents                    ↑ state snapshots
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling (pure transitions)                │
//! │  - Effect execution (spawned fetches)               │
//! │  - Watch-channel state stream                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - BookSummary / BookDetail models                  │
//! │  - List and detail fetch use cases                  │
//! │  - Failure classifier                               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog Layer (catalog/)                           │
//! │  - Catalog trait (the backend seam)                 │
//! │  - reqwest HTTP client, wire models                 │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: coordinator, state container, event/effect model
//! - [`domain`]: display-ready models, use cases, error classifier
//! - [`catalog`]: backend seam, wire models, HTTP implementation
//! - [`observability`]: tracing setup
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use wantshelf::app::{Intent, ShelfCoordinator};
//! use wantshelf::catalog::HttpCatalog;
//! use wantshelf::domain::{GetBookDetailUseCase, ListBooksUseCase};
//! use wantshelf::Config;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let catalog = Arc::new(HttpCatalog::new(&config)?);
//!
//! let coordinator = ShelfCoordinator::new(
//!     ListBooksUseCase::new(catalog.clone()),
//!     GetBookDetailUseCase::new(catalog),
//! );
//!
//! let mut states = coordinator.subscribe();
//! coordinator.dispatch(Intent::Initialise);
//!
//! while states.changed().await.is_ok() {
//!     let snapshot = states.borrow().clone();
//!     println!("{} books loaded", snapshot.books.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod observability;

pub use app::{Effect, Event, Intent, ShelfCoordinator, ShelfError, ShelfState};
pub use domain::{BookDetail, BookSummary, FetchError};

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Failure to load a [`Config`] from a TOML file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Engine configuration.
///
/// Every field has a sensible default, so `Config::default()` talks to the
/// live OpenLibrary API. A TOML file can override any subset:
///
/// ```toml
/// base_url = "https://openlibrary.org"
/// request_timeout_secs = 10
/// trace_level = "wantshelf=debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the catalog API.
    pub base_url: String,

    /// Per-request timeout for the HTTP client, in seconds.
    pub request_timeout_secs: u64,

    /// Tracing filter directive. `None` falls back to `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://openlibrary.org".to_string(),
            request_timeout_secs: 30,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file, filling omitted fields with
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_targets_openlibrary() {
        let config = Config::default();

        assert_eq!(config.base_url, "https://openlibrary.org");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn from_file_overrides_a_subset_of_fields() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "request_timeout_secs = 5").expect("write");
        writeln!(file, "trace_level = \"debug\"").expect("write");

        let config = Config::from_file(file.path()).expect("config should parse");

        assert_eq!(config.base_url, "https://openlibrary.org");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.trace_level, Some("debug".to_string()));
    }

    #[test]
    fn from_file_reports_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "request_timeout_secs = \"not a number\"").expect("write");

        let result = Config::from_file(file.path());

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
