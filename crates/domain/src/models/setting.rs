//! Key/value setting domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A site setting keyed by a globally unique `key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Setting {
    pub id: i64,
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
