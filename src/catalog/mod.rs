//! Catalog backend layer: the client seam and its wire models.
//!
//! # Modules
//!
//! - [`client`]: the [`Catalog`] trait and raw [`CatalogError`] type
//! - [`http`]: reqwest-backed OpenLibrary implementation
//! - [`models`]: JSON payload structs exactly as the API serves them

pub mod client;
pub mod http;
pub mod models;

pub use client::{Catalog, CatalogError};
pub use http::HttpCatalog;
pub use models::{Description, ReadingLogEntry, ReadingLogPage, ReadingLogWork, WorkRecord};

#[cfg(test)]
pub(crate) use client::MockCatalog;
