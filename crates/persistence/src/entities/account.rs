//! Administrative account entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the admins table.
#[derive(Debug, Clone, FromRow)]
pub struct AccountEntity {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub last_login: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<AccountEntity> for domain::models::Account {
    fn from(entity: AccountEntity) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            last_login: entity.last_login,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }
}
