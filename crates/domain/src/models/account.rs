//! Administrative account domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An administrative account able to sign in to the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// bcrypt hash, or an Argon2 PHC string from older rows. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub last_login: Option<DateTime<Utc>>,
    /// Inactive accounts are invisible to lookup by username
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Account row to insert. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
