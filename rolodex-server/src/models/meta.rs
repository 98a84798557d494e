//! Identifier and lifecycle timestamps shared by every record

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Server-assigned identity and timestamps.
///
/// `deleted_at` is the soft-delete marker; live rows have `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, FromRow)]
pub struct RecordMeta {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "DeletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl RecordMeta {
    /// Whether the record has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
