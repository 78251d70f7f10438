//! Persistence layer for Contact Desk.
//!
//! This crate contains:
//! - The backend-neutral [`DataStore`] contract
//! - SQLite and PostgreSQL drivers with dialect rendering
//! - Schema provisioning, seeding and backend selection
//! - Entity definitions (database row mappings)

pub mod db;
pub mod dialect;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod postgres;
pub mod query;
pub mod schema;
pub mod seed;
pub mod selector;
pub mod sqlite;
pub mod statements;
pub mod stats;
pub mod store;

pub use db::DatabaseConfig;
pub use error::StoreError;
pub use postgres::PostgresStore;
pub use seed::{seed_defaults, AdminSeedConfig, SeedReport};
pub use selector::{provision, select_backend, SelectedBackend};
pub use sqlite::SqliteStore;
pub use store::{Backend, DataStore};
