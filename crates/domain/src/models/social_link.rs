//! Social-media link domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A link to the studio's profile on a social platform.
///
/// Links are never removed; deactivation clears `is_active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SocialLink {
    pub id: i64,
    pub platform: String,
    pub url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
