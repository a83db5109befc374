use crate::error::Error;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A journal entry as seen by the streak engine.
///
/// Serialized the way the document store exports it:
/// `{ "id": "...", "createdAt": "2025-09-21T08:00:00Z" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub created_at: DateTime<FixedOffset>,
}

impl Entry {
    pub fn new(id: impl Into<String>, created_at: DateTime<FixedOffset>) -> Self {
        Self {
            id: id.into(),
            created_at,
        }
    }

    /// Builds an entry from an RFC 3339 timestamp, failing on anything else.
    pub fn parse(id: impl Into<String>, created_at: &str) -> Result<Self, Error> {
        let created_at =
            DateTime::parse_from_rfc3339(created_at).map_err(|e| Error::InvalidTimestamp {
                input: created_at.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(id, created_at))
    }
}
