//! Contact Desk process wiring.
//!
//! Loads configuration, selects and provisions the storage backend, and
//! hands the shared [`Backend`] to whatever serves requests.

pub mod config;
pub mod logging;

use persistence::{select_backend, Backend, SelectedBackend, StoreError};
use tracing::{info, warn};

use crate::config::Config;

/// Selects, provisions and seeds the configured backend.
///
/// Fails when the store cannot be opened or provisioned; the process should
/// not start without one.
pub async fn bootstrap(config: &Config) -> Result<Backend, StoreError> {
    let SelectedBackend { backend, seed } = select_backend(&config.database, &config.admin).await?;

    if seed.is_first_provisioning() {
        info!(
            admin_created = seed.admin_created,
            social_links_created = seed.social_links_created,
            "Fresh store provisioned"
        );
    }

    let stats = backend.contact_stats().await;
    info!(
        backend = %backend.dialect(),
        total = stats.total,
        new = stats.new,
        today = stats.today,
        this_week = stats.this_week,
        "Contact store ready"
    );

    Ok(backend)
}

/// Waits for Ctrl-C, then closes the backend's pool.
pub async fn run_until_shutdown(backend: Backend) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }

    info!("Shutdown signal received, closing storage");
    backend.close().await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::SubmissionFilter;

    fn file_config(dir: &tempfile::TempDir, admin: &[(&str, &str)]) -> Config {
        let data_dir = dir.path().join("store");
        let mut overrides = vec![("database.data_dir", data_dir.to_str().unwrap())];
        overrides.extend_from_slice(admin);
        Config::load_for_test(&overrides).expect("Failed to load config")
    }

    #[tokio::test]
    async fn test_bootstrap_provisions_embedded_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = file_config(&dir, &[("admin.password", "first-boot")]);

        let backend = tokio_test::assert_ok!(bootstrap(&config).await);
        assert_eq!(backend.dialect().name(), "sqlite");
        assert!(backend
            .get_account_by_username("admin")
            .await
            .unwrap()
            .is_some());
        assert_eq!(backend.list_active_social_links().await.unwrap().len(), 4);
        backend.close().await;
    }

    #[tokio::test]
    async fn test_second_bootstrap_keeps_existing_rows() {
        let dir = tempfile::tempdir().unwrap();

        let first = bootstrap(&file_config(&dir, &[("admin.password", "first-boot")]))
            .await
            .unwrap();
        first.close().await;

        // The password is only needed until the admin account exists
        let second = bootstrap(&file_config(&dir, &[])).await.unwrap();
        assert_eq!(second.list_active_social_links().await.unwrap().len(), 4);
        assert_eq!(
            second
                .count_submissions(&SubmissionFilter::default())
                .await
                .unwrap(),
            0
        );
        second.close().await;
    }

    #[tokio::test]
    async fn test_bootstrap_without_admin_password_fails() {
        let dir = tempfile::tempdir().unwrap();

        let err = bootstrap(&file_config(&dir, &[]))
            .await
            .err()
            .expect("bootstrap should fail without an admin password");
        assert!(err.to_string().contains("seed"));
    }

    #[tokio::test]
    async fn test_bootstrap_with_generated_password_opt_in() {
        let dir = tempfile::tempdir().unwrap();
        let config = file_config(&dir, &[("admin.log_generated_password", "true")]);

        let backend = bootstrap(&config).await.unwrap();
        let admin = backend
            .get_account_by_username("admin")
            .await
            .unwrap()
            .unwrap();
        assert!(admin.password_hash.starts_with("$2b$12$"));
        backend.close().await;
    }

    #[tokio::test]
    async fn test_unreachable_postgres_fails_bootstrap() {
        let config = Config::load_for_test(&[
            ("database.url", "postgres://nobody@127.0.0.1:1/contact"),
            ("database.connect_timeout_secs", "1"),
        ])
        .expect("Failed to load config");

        assert!(bootstrap(&config).await.is_err());
    }
}
