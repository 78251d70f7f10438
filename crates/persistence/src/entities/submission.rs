//! Contact submission entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{ServiceKind, SubmissionStatus};
use sqlx::FromRow;
use std::str::FromStr;

/// Database row mapping for the contacts table.
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SubmissionEntity> for domain::models::Submission {
    fn from(entity: SubmissionEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            // CHECK constraints keep both columns inside their enumerations
            service: ServiceKind::from_str(&entity.service).unwrap_or(ServiceKind::Consultation),
            message: entity.message,
            ip_address: entity.ip_address,
            user_agent: entity.user_agent,
            status: SubmissionStatus::from_str(&entity.status).unwrap_or_default(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
