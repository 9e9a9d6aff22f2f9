//! Catalog client abstraction.
//!
//! This module defines the [`Catalog`] trait that abstracts over the book
//! catalog backend. The domain use cases depend only on this seam, so the
//! HTTP implementation can be swapped for a scripted fake in tests without
//! touching business logic.
//!
//! # Design Philosophy
//!
//! The trait is minimal: exactly the two operations the screen needs, not a
//! generic catalog API. Implementations return raw wire payloads; mapping
//! into display-ready models is the use cases' job.

use crate::catalog::models::{ReadingLogPage, WorkRecord};
use async_trait::async_trait;
use thiserror::Error;

/// Raw failure of a catalog request, before classification.
///
/// Implementations translate their transport's native errors into these
/// variants so nothing backend-specific crosses the seam. The domain layer
/// buckets them into user-facing kinds via
/// [`classify`](crate::domain::classify).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The request never reached the catalog (DNS, refused, timeout).
    #[error("connection failed: {0}")]
    Connect(String),

    /// The catalog answered with a non-success HTTP status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The response body could not be decoded as the expected payload.
    #[error("malformed payload: {0}")]
    Decode(String),

    /// Any other transport failure.
    #[error("{0}")]
    Unexpected(String),
}

/// Abstraction over the book catalog backend.
///
/// # Implementations
///
/// - [`HttpCatalog`](crate::catalog::HttpCatalog): reqwest-backed client
///   against the OpenLibrary API (default)
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetches one page of the user's "want to read" reading log.
    ///
    /// Pages are 1-based. A page past the end of the list is a valid success
    /// with zero entries, not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request or decoding fails.
    async fn fetch_want_to_read(&self, page: u32) -> Result<ReadingLogPage, CatalogError>;

    /// Fetches the full record for one work by its catalog key.
    ///
    /// The key arrives exactly as the reading log lists it, leading slash
    /// included (e.g. `/works/OL45883W`).
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request or decoding fails.
    async fn fetch_work(&self, key: &str) -> Result<WorkRecord, CatalogError>;
}

#[cfg(test)]
mockall::mock! {
    /// Mock [`Catalog`] for unit-testing the use cases without a backend.
    pub Catalog {}

    #[async_trait]
    impl Catalog for Catalog {
        async fn fetch_want_to_read(&self, page: u32) -> Result<ReadingLogPage, CatalogError>;
        async fn fetch_work(&self, key: &str) -> Result<WorkRecord, CatalogError>;
    }
}
