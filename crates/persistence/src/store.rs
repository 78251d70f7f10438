//! The backend-neutral data-access contract.
//!
//! Route handlers and other collaborators depend only on [`DataStore`] (and
//! the shared [`Backend`] handle). Which engine answers a call is decided
//! once at startup by [`crate::selector::select_backend`].

use async_trait::async_trait;
use domain::models::{
    Account, ContactStats, NewAccount, NewSubmission, ServiceCount, Setting, SocialLink,
    Submission, SubmissionFilter, SubmissionStatus,
};
use std::sync::Arc;

use crate::dialect::Dialect;
use crate::error::StoreError;
use crate::stats;

/// Shared handle to the backend chosen at startup.
pub type Backend = Arc<dyn DataStore>;

/// Record lifecycle, retrieval, aggregation and upsert operations.
///
/// Every operation is a single statement round-trip. Write operations return
/// the affected row count so that "nothing matched" (0) is distinguishable
/// from a failure (`Err`).
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Dialect of the engine behind this store.
    fn dialect(&self) -> Dialect;

    /// Creates the four tables if they do not exist.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    // =========================================================================
    // Submissions
    // =========================================================================

    /// Inserts a submission and echoes the supplied fields with the generated
    /// identifier and timestamps.
    async fn create_submission(&self, input: NewSubmission) -> Result<Submission, StoreError>;

    /// Lists submissions matching `filter`, newest first.
    async fn list_submissions(
        &self,
        filter: &SubmissionFilter,
    ) -> Result<Vec<Submission>, StoreError>;

    /// Counts submissions matching `filter`. Limit and offset are ignored.
    async fn count_submissions(&self, filter: &SubmissionFilter) -> Result<i64, StoreError>;

    /// Submission counts grouped by service, largest first.
    async fn count_by_service(&self) -> Result<Vec<ServiceCount>, StoreError>;

    async fn get_submission(&self, id: i64) -> Result<Option<Submission>, StoreError>;

    /// Sets `status` and refreshes `updated_at`.
    async fn update_status(&self, id: i64, status: SubmissionStatus) -> Result<u64, StoreError>;

    async fn delete_submission(&self, id: i64) -> Result<u64, StoreError>;

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Finds an active account by username. Inactive accounts are not returned.
    async fn get_account_by_username(&self, username: &str)
        -> Result<Option<Account>, StoreError>;

    /// Whether any account, active or not, holds `username` or `email`.
    async fn account_exists(&self, username: &str, email: &str) -> Result<bool, StoreError>;

    /// Inserts the account unless its username or email is already taken.
    async fn insert_account_if_absent(&self, account: &NewAccount) -> Result<u64, StoreError>;

    /// Sets `last_login` to the current instant.
    async fn touch_last_login(&self, id: i64) -> Result<u64, StoreError>;

    // =========================================================================
    // Settings
    // =========================================================================

    async fn get_setting(&self, key: &str) -> Result<Option<Setting>, StoreError>;

    /// Inserts or fully replaces the setting stored under `key`.
    async fn upsert_setting(
        &self,
        key: &str,
        value: &str,
        description: Option<&str>,
    ) -> Result<u64, StoreError>;

    // =========================================================================
    // Social links
    // =========================================================================

    /// Active links ordered by platform.
    async fn list_active_social_links(&self) -> Result<Vec<SocialLink>, StoreError>;

    /// Inserts or fully replaces the link for `platform`.
    async fn upsert_social_link(
        &self,
        platform: &str,
        url: &str,
        is_active: bool,
    ) -> Result<u64, StoreError>;

    /// Inserts the link unless `platform` already exists.
    async fn insert_social_link_if_absent(
        &self,
        platform: &str,
        url: &str,
        is_active: bool,
    ) -> Result<u64, StoreError>;

    /// Clears `is_active`; the row is kept.
    async fn deactivate_social_link(&self, platform: &str) -> Result<u64, StoreError>;

    /// Closes the connection pool. Later calls fail with a pool-closed error.
    async fn close(&self);

    /// Summary statistics over all submissions.
    ///
    /// Never fails as a whole; see [`stats::contact_stats`].
    async fn contact_stats(&self) -> ContactStats {
        stats::contact_stats(self).await
    }
}
