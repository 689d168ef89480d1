//! Diary entry record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of id characters shown in listings
pub const SHORT_ID_LEN: usize = 8;

/// A single diary record.
///
/// `id` and `created_at` are fixed at creation. Every field is required when
/// decoding; the aliases accept the unversioned layout older journals used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(alias = "uuid")]
    pub id: String,
    pub title: String,
    #[serde(alias = "contents")]
    pub body: String,
    #[serde(alias = "date")]
    pub created_at: DateTime<Utc>,
    #[serde(alias = "isStar")]
    pub starred: bool,
}

impl Entry {
    /// Create a new unstarred entry with a freshly generated id
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, body, created_at)
    }

    /// Create an unstarred entry with a caller-chosen id
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Entry {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            created_at,
            starred: false,
        }
    }

    /// Leading characters of the id, for display
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(SHORT_ID_LEN) {
            Some((end, _)) => &self.id[..end],
            None => &self.id,
        }
    }
}
