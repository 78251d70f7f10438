//! Database connection pool management.

use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{PgPool, SqlitePool};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::StoreError;

/// Database configuration.
///
/// A non-empty `url` selects PostgreSQL; otherwise the embedded SQLite file
/// at `data_dir/file_name` is used.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_file_name() -> String {
    "contact_desk.db".to_string()
}
fn default_max_connections() -> u32 {
    10
}
fn default_min_connections() -> u32 {
    1
}
fn default_connect_timeout() -> u64 {
    5
}
fn default_idle_timeout() -> u64 {
    600
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            data_dir: default_data_dir(),
            file_name: default_file_name(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// The PostgreSQL connection string, if one is configured.
    ///
    /// Blank values count as absent.
    pub fn connection_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Location of the embedded database file.
    pub fn sqlite_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

/// Creates a PostgreSQL connection pool with the given configuration.
pub async fn create_pg_pool(url: &str, config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect(url)
        .await
}

/// Opens (or creates) the SQLite file named by `config`, creating its
/// directory first.
pub async fn create_sqlite_pool(config: &DatabaseConfig) -> Result<SqlitePool, StoreError> {
    std::fs::create_dir_all(&config.data_dir).map_err(|source| StoreError::DataDir {
        path: config.data_dir.clone(),
        source,
    })?;

    let options = SqliteConnectOptions::new()
        .filename(config.sqlite_path())
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(config.connect_timeout_secs));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Creates a private in-memory SQLite database.
///
/// The pool holds exactly one connection that is never recycled; the
/// database lives as long as that connection.
pub async fn create_sqlite_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_url_means_embedded() {
        let mut config = DatabaseConfig::default();
        assert_eq!(config.connection_url(), None);

        config.url = Some("   ".to_string());
        assert_eq!(config.connection_url(), None);

        config.url = Some(" postgres://localhost/contacts ".to_string());
        assert_eq!(config.connection_url(), Some("postgres://localhost/contacts"));
    }

    #[test]
    fn test_sqlite_path_joins_dir_and_file() {
        let config = DatabaseConfig {
            data_dir: PathBuf::from("/var/lib/contact-desk"),
            file_name: "store.db".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.sqlite_path(),
            PathBuf::from("/var/lib/contact-desk/store.db")
        );
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: DatabaseConfig = serde_json::from_str(r#"{"url": null}"#).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.file_name, "contact_desk.db");
        assert_eq!(config.max_connections, 10);
    }

    #[tokio::test]
    async fn test_memory_pool_is_usable() {
        let pool = create_sqlite_memory_pool().await.unwrap();
        let (one,): (i64,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(one, 1);
    }
}
