//! Use case for fetching the expanded detail of one work.

use crate::catalog::{Catalog, Description};
use crate::domain::error::{classify, FetchError};
use crate::domain::BookDetail;
use std::sync::Arc;

/// Fetches a work record and maps it into a [`BookDetail`].
///
/// The wire record is all-optional; every absent field becomes `""` (or an
/// empty list), so the overlay never renders a missing value. The
/// description's two wire shapes are collapsed to plain text.
#[derive(Clone)]
pub struct GetBookDetailUseCase {
    catalog: Arc<dyn Catalog>,
}

impl GetBookDetailUseCase {
    #[must_use]
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Fetches detail for the work identified by `key`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`FetchError`] if the catalog call fails.
    pub async fn execute(&self, key: &str) -> Result<BookDetail, FetchError> {
        let work = self.catalog.fetch_work(key).await.map_err(classify)?;

        Ok(BookDetail {
            title: work.title.unwrap_or_default(),
            first_publish_date: work.first_publish_date.unwrap_or_default(),
            latest_revision: work
                .latest_revision
                .map(|revision| revision.to_string())
                .unwrap_or_default(),
            description: work
                .description
                .map(Description::into_text)
                .unwrap_or_default(),
            subject_places: work.subject_places.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, MockCatalog, WorkRecord};
    use mockall::predicate::eq;

    fn empty_record() -> WorkRecord {
        WorkRecord {
            title: None,
            subject_places: None,
            first_publish_date: None,
            subject: None,
            description: None,
            latest_revision: None,
        }
    }

    #[tokio::test]
    async fn maps_a_full_record() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_fetch_work()
            .with(eq("/works/OL45883W"))
            .return_once(|_| {
                Ok(WorkRecord {
                    title: Some("The Wonderful Wizard of Oz".to_string()),
                    subject_places: Some(vec!["Kansas".to_string(), "Oz".to_string()]),
                    first_publish_date: Some("1900".to_string()),
                    subject: Some(vec!["Fantasy".to_string()]),
                    description: Some(Description::Text("A cyclone strikes.".to_string())),
                    latest_revision: Some(42),
                })
            });
        let use_case = GetBookDetailUseCase::new(Arc::new(catalog));

        let detail = use_case
            .execute("/works/OL45883W")
            .await
            .expect("record should map");

        assert_eq!(
            detail,
            BookDetail {
                title: "The Wonderful Wizard of Oz".to_string(),
                first_publish_date: "1900".to_string(),
                latest_revision: "42".to_string(),
                description: "A cyclone strikes.".to_string(),
                subject_places: vec!["Kansas".to_string(), "Oz".to_string()],
            }
        );
    }

    #[tokio::test]
    async fn absent_fields_default_to_empty() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_fetch_work()
            .return_once(|_| Ok(empty_record()));
        let use_case = GetBookDetailUseCase::new(Arc::new(catalog));

        let detail = use_case
            .execute("/works/OL1W")
            .await
            .expect("record should map");

        assert_eq!(detail, BookDetail {
            title: String::new(),
            first_publish_date: String::new(),
            latest_revision: String::new(),
            description: String::new(),
            subject_places: vec![],
        });
    }

    #[tokio::test]
    async fn wrapped_description_collapses_to_its_value() {
        let mut catalog = MockCatalog::new();
        catalog.expect_fetch_work().return_once(|_| {
            Ok(WorkRecord {
                description: Some(Description::Wrapped {
                    value: Some("Wrapped text".to_string()),
                }),
                ..empty_record()
            })
        });
        let use_case = GetBookDetailUseCase::new(Arc::new(catalog));

        let detail = use_case.execute("/works/OL1W").await.expect("should map");

        assert_eq!(detail.description, "Wrapped text");
    }

    #[tokio::test]
    async fn failures_surface_classified() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_fetch_work()
            .return_once(|_| Err(CatalogError::Status(503)));
        let use_case = GetBookDetailUseCase::new(Arc::new(catalog));

        let error = use_case
            .execute("/works/OL1W")
            .await
            .expect_err("call should fail");

        assert_eq!(error, FetchError::Server(503));
    }
}
