//! Fixed single-row statements shared by both drivers.
//!
//! Placeholders and boolean literals come from [`Dialect`], so each driver
//! binds values in the order documented on the function and nothing else.

use crate::dialect::Dialect;
use crate::query::{SUBMISSIONS_TABLE, SUBMISSION_COLUMNS};

const ACCOUNT_SELECT: &str =
    "SELECT id, username, email, password_hash, last_login, is_active, created_at FROM admins";

/// Per-service totals, largest first, ties broken by first appearance.
pub const COUNT_BY_SERVICE: &str = "SELECT service, COUNT(*) AS total FROM contacts \
                                    GROUP BY service ORDER BY total DESC, MIN(id) ASC";

/// Binds: `id`.
pub fn select_submission_by_id(dialect: Dialect) -> String {
    format!(
        "SELECT {} FROM {} WHERE id = {}",
        SUBMISSION_COLUMNS,
        SUBMISSIONS_TABLE,
        dialect.placeholder(1)
    )
}

/// Binds: `status`, `updated_at`, `id`.
pub fn update_submission_status(dialect: Dialect) -> String {
    format!(
        "UPDATE {} SET status = {}, updated_at = {} WHERE id = {}",
        SUBMISSIONS_TABLE,
        dialect.placeholder(1),
        dialect.placeholder(2),
        dialect.placeholder(3)
    )
}

/// Binds: `id`.
pub fn delete_submission(dialect: Dialect) -> String {
    format!(
        "DELETE FROM {} WHERE id = {}",
        SUBMISSIONS_TABLE,
        dialect.placeholder(1)
    )
}

/// Active accounts only. Binds: `username`.
pub fn select_active_account(dialect: Dialect) -> String {
    format!(
        "{} WHERE username = {} AND is_active = {}",
        ACCOUNT_SELECT,
        dialect.placeholder(1),
        dialect.bool_literal(true)
    )
}

/// Any account holding either key, active or not. Binds: `username`, `email`.
pub fn account_exists(dialect: Dialect) -> String {
    format!(
        "SELECT COUNT(*) FROM admins WHERE username = {} OR email = {}",
        dialect.placeholder(1),
        dialect.placeholder(2)
    )
}

/// Binds: `last_login`, `id`.
pub fn touch_last_login(dialect: Dialect) -> String {
    format!(
        "UPDATE admins SET last_login = {} WHERE id = {}",
        dialect.placeholder(1),
        dialect.placeholder(2)
    )
}

/// Binds: `key`.
pub fn select_setting(dialect: Dialect) -> String {
    format!(
        "SELECT id, key, value, description, created_at, updated_at FROM settings WHERE key = {}",
        dialect.placeholder(1)
    )
}

pub fn select_active_social_links(dialect: Dialect) -> String {
    format!(
        "SELECT id, platform, url, is_active, created_at, updated_at FROM social_media \
         WHERE is_active = {} ORDER BY platform",
        dialect.bool_literal(true)
    )
}

/// Binds: `updated_at`, `platform`.
pub fn deactivate_social_link(dialect: Dialect) -> String {
    format!(
        "UPDATE social_media SET is_active = {}, updated_at = {} WHERE platform = {}",
        dialect.bool_literal(false),
        dialect.placeholder(1),
        dialect.placeholder(2)
    )
}
