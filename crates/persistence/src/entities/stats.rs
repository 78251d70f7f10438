//! Aggregate row mappings for contact statistics.

use sqlx::FromRow;

/// One row of the per-service grouping query.
#[derive(Debug, Clone, FromRow)]
pub struct ServiceCountEntity {
    pub service: String,
    pub total: i64,
}

impl From<ServiceCountEntity> for domain::models::ServiceCount {
    fn from(entity: ServiceCountEntity) -> Self {
        Self {
            service: entity.service,
            count: entity.total,
        }
    }
}
