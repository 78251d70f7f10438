//! Contact statistics aggregation.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use domain::models::{ContactStats, SubmissionFilter, SubmissionStatus};
use tracing::warn;

use crate::error::StoreError;
use crate::store::DataStore;

/// Computes the statistics bundle with five independent queries.
///
/// A failing query is logged and its field falls back to zero (or an empty
/// list); the remaining fields are still reported.
pub async fn contact_stats<S>(store: &S) -> ContactStats
where
    S: DataStore + ?Sized,
{
    let now = Utc::now();
    let all_filter = SubmissionFilter::default();
    let new_filter = SubmissionFilter::with_status(SubmissionStatus::New);
    let today_filter = SubmissionFilter::since(start_of_day(&Local::now()));
    let week_filter = SubmissionFilter::since(now - Duration::days(7));

    let (total, new, today, this_week, by_service) = tokio::join!(
        store.count_submissions(&all_filter),
        store.count_submissions(&new_filter),
        store.count_submissions(&today_filter),
        store.count_submissions(&week_filter),
        store.count_by_service(),
    );

    let dialect = store.dialect();
    ContactStats {
        total: or_default(dialect.name(), "total", total),
        new: or_default(dialect.name(), "new", new),
        today: or_default(dialect.name(), "today", today),
        this_week: or_default(dialect.name(), "this_week", this_week),
        by_service: or_default(dialect.name(), "by_service", by_service),
    }
}

fn or_default<T: Default>(backend: &str, field: &str, result: Result<T, StoreError>) -> T {
    result.unwrap_or_else(|e| {
        warn!(backend = %backend, field = %field, error = %e, "Contact stats query failed");
        T::default()
    })
}

/// Midnight at the start of `now`'s calendar day in its own time zone, as UTC.
pub(crate) fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let midnight = now.date_naive().and_time(chrono::NaiveTime::MIN);
    match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(local) => local.with_timezone(&Utc),
        // Midnight skipped by a DST jump; fall back to the naive UTC reading
        None => Utc.from_utc_datetime(&midnight),
    }
}
