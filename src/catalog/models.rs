//! Wire models for OpenLibrary payloads.
//!
//! These structs mirror the JSON the catalog actually sends, quirks
//! included: snake_case and camelCase field names mixed in one payload,
//! cover ids that arrive as either strings or numbers, and a description
//! that is sometimes a plain string and sometimes a `{type, value}` object.
//! Normalization into display-ready models happens in the domain layer.

use serde::{Deserialize, Deserializer};

/// One page of a user's "want to read" reading log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReadingLogPage {
    pub page: u32,
    #[serde(rename = "numFound")]
    pub num_found: u32,
    #[serde(rename = "reading_log_entries")]
    pub entries: Vec<ReadingLogEntry>,
}

/// A single reading-log entry wrapping the listed work.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReadingLogEntry {
    pub work: ReadingLogWork,
}

/// The work fields the reading log carries per entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReadingLogWork {
    pub title: String,
    pub key: String,
    #[serde(rename = "author_names", default)]
    pub author_names: Vec<String>,
    #[serde(rename = "cover_id", deserialize_with = "string_or_number")]
    pub cover_id: String,
}

/// Full work record, fetched per key for the detail overlay.
///
/// Every field is optional on the wire; defaulting to `""`/`[]` is the
/// detail use case's responsibility, not the wire model's.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "subject_places", default)]
    pub subject_places: Option<Vec<String>>,
    #[serde(rename = "first_publish_date", default)]
    pub first_publish_date: Option<String>,
    #[serde(default)]
    pub subject: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(rename = "latest_revision", default)]
    pub latest_revision: Option<i64>,
}

/// A work description as the catalog serves it: either bare text or a
/// `{type, value}` wrapper object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Wrapped {
        #[serde(default)]
        value: Option<String>,
    },
}

impl Description {
    /// Collapses both wire shapes into plain text.
    ///
    /// A wrapper object without a `value` field collapses to `""`, matching
    /// an absent description.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Wrapped { value } => value.unwrap_or_default(),
        }
    }
}

/// Accepts a JSON string or number and yields it as a string.
///
/// The reading-log contract types `cover_id` as a string, but the live API
/// serves a bare number.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_log_page_decodes_renamed_fields() {
        let page: ReadingLogPage = serde_json::from_str(
            r#"{
                "page": 1,
                "numFound": 2,
                "reading_log_entries": [
                    {
                        "work": {
                            "title": "Book One",
                            "key": "/works/OL123W",
                            "author_names": ["Author One", "Author Two"],
                            "cover_id": "12345"
                        }
                    }
                ]
            }"#,
        )
        .expect("page should decode");

        assert_eq!(page.num_found, 2);
        assert_eq!(page.entries.len(), 1);
        let work = &page.entries[0].work;
        assert_eq!(work.key, "/works/OL123W");
        assert_eq!(work.author_names, vec!["Author One", "Author Two"]);
        assert_eq!(work.cover_id, "12345");
    }

    #[test]
    fn cover_id_accepts_a_bare_number() {
        let work: ReadingLogWork = serde_json::from_str(
            r#"{"title": "T", "key": "/works/OL1W", "author_names": [], "cover_id": 67890}"#,
        )
        .expect("work should decode");

        assert_eq!(work.cover_id, "67890");
    }

    #[test]
    fn work_record_decodes_with_every_field_absent() {
        let record: WorkRecord = serde_json::from_str("{}").expect("empty record should decode");

        assert_eq!(record.title, None);
        assert_eq!(record.subject_places, None);
        assert_eq!(record.first_publish_date, None);
        assert_eq!(record.description, None);
        assert_eq!(record.latest_revision, None);
    }

    #[test]
    fn description_decodes_as_plain_text() {
        let record: WorkRecord =
            serde_json::from_str(r#"{"description": "A plain description"}"#)
                .expect("record should decode");

        assert_eq!(
            record.description.map(Description::into_text),
            Some("A plain description".to_string())
        );
    }

    #[test]
    fn description_decodes_as_typed_wrapper() {
        let record: WorkRecord = serde_json::from_str(
            r#"{"description": {"type": "/type/text", "value": "Wrapped text"}}"#,
        )
        .expect("record should decode");

        assert_eq!(
            record.description.map(Description::into_text),
            Some("Wrapped text".to_string())
        );
    }

    #[test]
    fn wrapper_without_value_collapses_to_empty() {
        let record: WorkRecord =
            serde_json::from_str(r#"{"description": {"type": "/type/text"}}"#)
                .expect("record should decode");

        assert_eq!(
            record.description.map(Description::into_text),
            Some(String::new())
        );
    }
}
