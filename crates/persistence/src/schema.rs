//! Table definitions for both dialects.
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so provisioning an
//! existing store leaves it untouched. Column types differ per dialect but
//! decode into the same entities.

use crate::dialect::Dialect;

const SQLITE_SCHEMA: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS contacts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT,
        service TEXT NOT NULL
            CHECK (service IN ('app-development', 'theme-customization', 'store-setup', 'consultation')),
        message TEXT NOT NULL,
        ip_address TEXT,
        user_agent TEXT,
        status TEXT NOT NULL DEFAULT 'new'
            CHECK (status IN ('new', 'in_progress', 'resolved', 'spam')),
        created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f+00:00', 'now')),
        updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f+00:00', 'now'))
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS admins (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE NOT NULL,
        password_hash TEXT NOT NULL,
        email TEXT UNIQUE NOT NULL,
        last_login TEXT,
        created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f+00:00', 'now')),
        is_active BOOLEAN NOT NULL DEFAULT 1
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS settings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        key TEXT UNIQUE NOT NULL,
        value TEXT NOT NULL,
        description TEXT,
        created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f+00:00', 'now')),
        updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f+00:00', 'now'))
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS social_media (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        platform TEXT UNIQUE NOT NULL,
        url TEXT NOT NULL,
        is_active BOOLEAN NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f+00:00', 'now')),
        updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f+00:00', 'now'))
    )
    "#,
];

const POSTGRES_SCHEMA: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS contacts (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        phone VARCHAR(50),
        service VARCHAR(100) NOT NULL
            CHECK (service IN ('app-development', 'theme-customization', 'store-setup', 'consultation')),
        message TEXT NOT NULL,
        ip_address TEXT,
        user_agent TEXT,
        status VARCHAR(20) NOT NULL DEFAULT 'new'
            CHECK (status IN ('new', 'in_progress', 'resolved', 'spam')),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS admins (
        id BIGSERIAL PRIMARY KEY,
        username VARCHAR(50) UNIQUE NOT NULL,
        password_hash VARCHAR(255) NOT NULL,
        email VARCHAR(255) UNIQUE NOT NULL,
        last_login TIMESTAMPTZ,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        is_active BOOLEAN NOT NULL DEFAULT TRUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS settings (
        id BIGSERIAL PRIMARY KEY,
        key VARCHAR(100) UNIQUE NOT NULL,
        value TEXT NOT NULL,
        description TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS social_media (
        id BIGSERIAL PRIMARY KEY,
        platform VARCHAR(50) UNIQUE NOT NULL,
        url TEXT NOT NULL,
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

/// Names of the provisioned tables, in creation order.
pub const TABLES: [&str; 4] = ["contacts", "admins", "settings", "social_media"];

/// Columns written by account inserts.
pub const ACCOUNT_COLUMNS: [&str; 5] = ["username", "email", "password_hash", "is_active", "created_at"];

/// Columns written by setting upserts.
pub const SETTING_COLUMNS: [&str; 5] = ["key", "value", "description", "created_at", "updated_at"];

/// Columns written by social-link inserts and upserts.
pub const SOCIAL_LINK_COLUMNS: [&str; 5] =
    ["platform", "url", "is_active", "created_at", "updated_at"];

/// `CREATE TABLE IF NOT EXISTS` statements for `dialect`, in creation order.
pub fn statements(dialect: Dialect) -> &'static [&'static str] {
    match dialect {
        Dialect::Sqlite => &SQLITE_SCHEMA,
        Dialect::Postgres => &POSTGRES_SCHEMA,
    }
}
