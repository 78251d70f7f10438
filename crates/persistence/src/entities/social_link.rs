//! Social-media link entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the social_media table.
#[derive(Debug, Clone, FromRow)]
pub struct SocialLinkEntity {
    pub id: i64,
    pub platform: String,
    pub url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SocialLinkEntity> for domain::models::SocialLink {
    fn from(entity: SocialLinkEntity) -> Self {
        Self {
            id: entity.id,
            platform: entity.platform,
            url: entity.url,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
