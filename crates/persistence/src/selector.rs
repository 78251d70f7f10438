//! Startup backend selection and provisioning.

use std::sync::Arc;
use tracing::info;

use crate::db::DatabaseConfig;
use crate::error::StoreError;
use crate::postgres::PostgresStore;
use crate::seed::{seed_defaults, AdminSeedConfig, SeedReport};
use crate::sqlite::SqliteStore;
use crate::store::{Backend, DataStore};

/// A provisioned backend plus what seeding inserted on this start.
pub struct SelectedBackend {
    pub backend: Backend,
    pub seed: SeedReport,
}

/// Chooses the backend from configuration, then provisions and seeds it.
///
/// A configured connection URL selects PostgreSQL; otherwise the embedded
/// SQLite file is opened (and its directory created). Any failure here is
/// fatal to startup, whichever backend was chosen.
pub async fn select_backend(
    database: &DatabaseConfig,
    admin: &AdminSeedConfig,
) -> Result<SelectedBackend, StoreError> {
    let backend: Backend = match database.connection_url() {
        Some(url) => Arc::new(PostgresStore::connect(url, database).await?),
        None => Arc::new(SqliteStore::open(database).await?),
    };
    info!(backend = %backend.dialect(), "Storage backend selected");

    let seed = provision(backend.as_ref(), admin).await?;
    Ok(SelectedBackend { backend, seed })
}

/// Creates the schema and seeds defaults on an already connected store.
pub async fn provision(
    store: &dyn DataStore,
    admin: &AdminSeedConfig,
) -> Result<SeedReport, StoreError> {
    store
        .ensure_schema()
        .await
        .map_err(|e| StoreError::provisioning("schema", e))?;

    let report = seed_defaults(store, admin)
        .await
        .map_err(|e| StoreError::provisioning("seed", e))?;

    info!(
        backend = %store.dialect(),
        admin_created = report.admin_created,
        social_links_created = report.social_links_created,
        "Storage provisioned"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_url_selects_sqlite() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            url: Some(String::new()),
            data_dir: dir.path().join("nested"),
            ..Default::default()
        };

        let selected = tokio_test::assert_ok!(
            select_backend(&config, &AdminSeedConfig::with_password("s3cret-seed")).await
        );
        assert_eq!(selected.backend.dialect().name(), "sqlite");
        assert!(selected.seed.admin_created);
        assert!(config.sqlite_path().exists());
    }

    #[tokio::test]
    async fn test_provision_failure_is_wrapped() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.close().await;

        let err = provision(&store, &AdminSeedConfig::with_password("s3cret-seed"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Provisioning {
                stage: "schema",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_missing_admin_password_fails_seed_stage() {
        let store = SqliteStore::in_memory().await.unwrap();

        let err = provision(&store, &AdminSeedConfig::default())
            .await
            .unwrap_err();
        match err {
            StoreError::Provisioning { stage, source } => {
                assert_eq!(stage, "seed");
                assert!(matches!(*source, StoreError::MissingAdminPassword { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
