//! HTTP catalog client backed by reqwest.

use crate::catalog::models::{ReadingLogPage, WorkRecord};
use crate::catalog::{Catalog, CatalogError};
use crate::Config;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Path of the hosted "want to read" reading log, relative to the base URL.
const WANT_TO_READ_PATH: &str = "/people/mekBot/books/want-to-read.json";

/// Catalog client for the OpenLibrary HTTP API.
///
/// Holds a single pooled [`reqwest::Client`] with the configured request
/// timeout. Timeouts are this layer's responsibility; the state machine
/// above defines none of its own.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    /// Builds a client from the configured base URL and request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| CatalogError::Unexpected(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn want_to_read_url(&self, page: u32) -> String {
        format!("{}{WANT_TO_READ_PATH}?page={page}", self.base_url)
    }

    fn work_url(&self, key: &str) -> String {
        // Keys already carry their leading slash, e.g. "/works/OL45883W".
        format!("{}{key}.json", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, CatalogError> {
        tracing::debug!(url = %url, "catalog request");

        let response = self.client.get(&url).send().await.map_err(map_transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "catalog request rejected");
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(map_transport)?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn fetch_want_to_read(&self, page: u32) -> Result<ReadingLogPage, CatalogError> {
        self.get_json(self.want_to_read_url(page)).await
    }

    async fn fetch_work(&self, key: &str) -> Result<WorkRecord, CatalogError> {
        self.get_json(self.work_url(key)).await
    }
}

fn map_transport(error: reqwest::Error) -> CatalogError {
    if error.is_connect() || error.is_timeout() {
        CatalogError::Connect(error.to_string())
    } else {
        CatalogError::Unexpected(error.to_string())
    }
}
