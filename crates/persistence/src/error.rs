//! Error taxonomy for the data-access layer.
//!
//! Driver errors from either backend are normalized here before reaching a
//! caller. Not-found is never an error: it is an empty sequence, `None`, or a
//! zero affected count.

use shared::password::PasswordError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`crate::store::DataStore`] operations and provisioning.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Schema creation or seeding failed while the backend was being prepared.
    #[error("Provisioning failed during {stage}: {source}")]
    Provisioning {
        stage: &'static str,
        #[source]
        source: Box<StoreError>,
    },

    /// A plain insert hit a unique constraint.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Connection, pool, disk, or other driver-level failure.
    #[error("Database error: {0}")]
    Io(#[source] sqlx::Error),

    #[error("Failed to create data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No seed account exists and none can be created without a password.
    #[error(
        "No admin account exists for {username} and no password is configured; \
         set CONTACT__ADMIN__PASSWORD or enable admin.log_generated_password"
    )]
    MissingAdminPassword { username: String },

    #[error("Password hashing error: {0}")]
    Password(#[from] PasswordError),
}

impl StoreError {
    /// Wraps an error raised while provisioning the named stage.
    pub fn provisioning(stage: &'static str, source: StoreError) -> Self {
        StoreError::Provisioning {
            stage,
            source: Box::new(source),
        }
    }

    /// Whether retrying the same call later could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            StoreError::Io(err) => matches!(
                err,
                sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::WorkerCrashed
            ),
            StoreError::Provisioning { source, .. } => source.is_transient(),
            _ => false,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::Conflict(db_err.message().to_string())
            }
            other => StoreError::Io(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_transient() {
        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StoreError::Io(_)));
        assert!(err.is_transient());
    }

    #[test]
    fn test_row_not_found_is_not_transient() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(!err.is_transient());
    }

    #[test]
    fn test_provisioning_wraps_source() {
        let err = StoreError::provisioning("schema", StoreError::from(sqlx::Error::PoolTimedOut));
        assert!(err.to_string().contains("schema"));
        assert!(err.is_transient());
    }

    #[test]
    fn test_missing_admin_password_names_the_setting() {
        let err = StoreError::MissingAdminPassword {
            username: "admin".to_string(),
        };
        assert!(err.to_string().contains("CONTACT__ADMIN__PASSWORD"));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_conflict_is_not_transient() {
        let err = StoreError::Conflict("duplicate key".to_string());
        assert!(!err.is_transient());
        assert_eq!(err.to_string(), "Conflict: duplicate key");
    }
}
