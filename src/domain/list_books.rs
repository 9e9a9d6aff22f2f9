//! Use case for fetching one page of the "want to read" list.

use crate::catalog::Catalog;
use crate::domain::error::{classify, FetchError};
use crate::domain::BookSummary;
use std::sync::Arc;

/// Base URL for cover images; the catalog stores only the cover id.
pub const COVER_IMAGE_BASE: &str = "https://covers.openlibrary.org/b/id/";

/// Fixed medium-size suffix for list covers.
pub const MEDIUM_SIZE_SUFFIX: &str = "-M.jpg";

/// Fetches a reading-log page and maps it into display-ready summaries.
///
/// Titles and keys pass through verbatim; author names are joined with
/// `", "` in source order; the cover URL is derived from the cover id. An
/// empty page is a valid success. Failures are classified before surfacing,
/// so callers only ever see a [`FetchError`].
#[derive(Clone)]
pub struct ListBooksUseCase {
    catalog: Arc<dyn Catalog>,
}

impl ListBooksUseCase {
    #[must_use]
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Fetches page `page` (1-based) of the list.
    ///
    /// # Errors
    ///
    /// Returns the classified [`FetchError`] if the catalog call fails.
    pub async fn execute(&self, page: u32) -> Result<Vec<BookSummary>, FetchError> {
        let result = self
            .catalog
            .fetch_want_to_read(page)
            .await
            .map_err(classify)?;

        Ok(result
            .entries
            .into_iter()
            .map(|entry| {
                let work = entry.work;
                BookSummary {
                    title: work.title,
                    key: work.key,
                    author_names: work.author_names.join(", "),
                    cover_url: format!("{COVER_IMAGE_BASE}{}{MEDIUM_SIZE_SUFFIX}", work.cover_id),
                }
            })
            .collect())
    }
}
