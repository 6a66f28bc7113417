//! Ingest record entity representing one accepted batch of links.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single scraped link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub platform: String,
    #[serde(rename = "dateISO")]
    pub date_iso: Option<String>,
    pub url: String,
    pub text: Option<String>,
}

impl Item {
    /// Creates a new item.
    pub fn new(
        platform: impl Into<String>,
        date_iso: Option<String>,
        url: impl Into<String>,
        text: Option<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            date_iso,
            url: url.into(),
            text,
        }
    }
}

/// Input data for a batch that has been normalized but not yet stored.
///
/// The receive timestamp is assigned by the store on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIngest {
    pub source: String,
    pub page: String,
    pub platform: String,
    pub start_date: String,
    pub end_date: String,
    pub items: Vec<Item>,
    pub client: Option<String>,
}

impl NewIngest {
    /// Number of items in the batch.
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

/// A stored batch of links.
///
/// `count` is never stored: it is always derived from `items`, so the two
/// cannot drift apart. Serialization emits it alongside the other fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestRecord {
    pub received_at: DateTime<Utc>,
    pub source: String,
    pub page: String,
    pub platform: String,
    pub start_date: String,
    pub end_date: String,
    pub items: Vec<Item>,
    pub client: Option<String>,
}

impl IngestRecord {
    /// Stamps a normalized batch with its receive time.
    pub fn from_new(new: NewIngest, received_at: DateTime<Utc>) -> Self {
        Self {
            received_at,
            source: new.source,
            page: new.page,
            platform: new.platform,
            start_date: new.start_date,
            end_date: new.end_date,
            items: new.items,
            client: new.client,
        }
    }

    /// Number of items in the batch.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Receive time formatted as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn received_at_display(&self) -> String {
        self.received_at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl Serialize for IngestRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("IngestRecord", 9)?;
        state.serialize_field("received_at", &self.received_at)?;
        state.serialize_field("source", &self.source)?;
        state.serialize_field("page", &self.page)?;
        state.serialize_field("platform", &self.platform)?;
        state.serialize_field("startDate", &self.start_date)?;
        state.serialize_field("endDate", &self.end_date)?;
        state.serialize_field("count", &self.count())?;
        state.serialize_field("items", &self.items)?;
        state.serialize_field("client", &self.client)?;
        state.end()
    }
}
