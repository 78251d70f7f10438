//! Common test utilities for integration tests.
//!
//! SQLite stores live in a fresh temporary directory per test. PostgreSQL
//! stores are only available when `TEST_DATABASE_URL` is set.

#![allow(dead_code)]

use domain::models::{NewSubmission, ServiceKind};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use persistence::{DataStore, DatabaseConfig, PostgresStore, SqliteStore};
use tempfile::TempDir;

/// Database configuration pointing at a file inside `dir`.
pub fn sqlite_config(dir: &TempDir) -> DatabaseConfig {
    DatabaseConfig {
        data_dir: dir.path().join("data"),
        ..Default::default()
    }
}

/// A provisioned (but unseeded) SQLite store in a temporary directory.
///
/// Keep the returned directory alive for as long as the store is used.
pub async fn sqlite_store() -> (TempDir, SqliteStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = SqliteStore::open(&sqlite_config(&dir))
        .await
        .expect("Failed to open SQLite store");
    store.ensure_schema().await.expect("Failed to create schema");
    (dir, store)
}

/// A provisioned, emptied PostgreSQL store, or `None` when no test database
/// is configured.
pub async fn postgres_store() -> Option<PostgresStore> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let store = PostgresStore::connect(&url, &DatabaseConfig::default())
        .await
        .expect("Failed to connect to test database");
    store.ensure_schema().await.expect("Failed to create schema");
    sqlx::query("TRUNCATE contacts, admins, settings, social_media RESTART IDENTITY")
        .execute(store.pool())
        .await
        .expect("Failed to truncate tables");
    Some(store)
}

/// A realistic submission for `service`.
pub fn new_submission(service: ServiceKind) -> NewSubmission {
    NewSubmission {
        name: Name().fake(),
        email: SafeEmail().fake(),
        phone: Some("+1 (555) 010-2030".to_string()),
        service,
        message: "We would like a quote for a new storefront.".to_string(),
        ip_address: Some("198.51.100.23".to_string()),
        user_agent: Some("Mozilla/5.0 (X11; Linux x86_64)".to_string()),
    }
}

/// Creates one submission per entry of `services`, in order.
pub async fn create_many(store: &dyn DataStore, services: &[ServiceKind]) -> Vec<i64> {
    let mut ids = Vec::with_capacity(services.len());
    for service in services {
        let created = store
            .create_submission(new_submission(*service))
            .await
            .expect("Failed to create submission");
        ids.push(created.id);
    }
    ids
}
