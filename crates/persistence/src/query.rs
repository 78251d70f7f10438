//! Filtered submission queries.
//!
//! Every filter value is bound as a parameter; only column names, operators
//! and placeholders are ever written into the statement text.

use domain::models::SubmissionFilter;

use crate::dialect::{BindValue, Dialect, Params};

pub const SUBMISSIONS_TABLE: &str = "contacts";

pub const SUBMISSION_COLUMNS: &str = "id, name, email, phone, service, message, ip_address, \
                                      user_agent, status, created_at, updated_at";

/// Columns written when a submission is created.
pub const SUBMISSION_INSERT_COLUMNS: [&str; 10] = [
    "name",
    "email",
    "phone",
    "service",
    "message",
    "ip_address",
    "user_agent",
    "status",
    "created_at",
    "updated_at",
];

/// A statement together with the values to bind, in placeholder order.
#[derive(Debug, Clone)]
pub struct RenderedQuery {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

/// Renders `SELECT` for the filtered, newest-first submission listing.
pub fn select_submissions(dialect: Dialect, filter: &SubmissionFilter) -> RenderedQuery {
    let mut params = Params::new(dialect);
    let mut sql = format!("SELECT {} FROM {}", SUBMISSION_COLUMNS, SUBMISSIONS_TABLE);

    push_conditions(&mut sql, &mut params, dialect, filter);
    sql.push_str(" ORDER BY created_at DESC, id DESC");

    let limit = filter
        .limit
        .map(|limit| params.push(BindValue::Integer(i64::from(limit))));
    let offset = filter
        .offset
        .map(|offset| params.push(BindValue::Integer(i64::from(offset))));

    match (limit, offset, dialect) {
        (Some(limit), Some(offset), _) => {
            sql.push_str(&format!(" LIMIT {} OFFSET {}", limit, offset));
        }
        (Some(limit), None, _) => sql.push_str(&format!(" LIMIT {}", limit)),
        // SQLite only accepts OFFSET after a LIMIT; -1 means no limit.
        (None, Some(offset), Dialect::Sqlite) => {
            sql.push_str(&format!(" LIMIT -1 OFFSET {}", offset));
        }
        (None, Some(offset), Dialect::Postgres) => {
            sql.push_str(&format!(" OFFSET {}", offset));
        }
        (None, None, _) => {}
    }

    RenderedQuery {
        sql,
        binds: params.into_values(),
    }
}

/// Renders `COUNT(*)` over the same predicates. Limit and offset are ignored.
pub fn count_submissions(dialect: Dialect, filter: &SubmissionFilter) -> RenderedQuery {
    let mut params = Params::new(dialect);
    let mut sql = format!("SELECT COUNT(*) FROM {}", SUBMISSIONS_TABLE);

    push_conditions(&mut sql, &mut params, dialect, filter);

    RenderedQuery {
        sql,
        binds: params.into_values(),
    }
}

fn push_conditions(
    sql: &mut String,
    params: &mut Params,
    dialect: Dialect,
    filter: &SubmissionFilter,
) {
    let mut conditions = Vec::new();

    if let Some(status) = filter.status {
        let placeholder = params.push(BindValue::Text(status.as_str().to_string()));
        conditions.push(format!("status = {}", placeholder));
    }

    if let Some(service) = filter.service {
        let placeholder = params.push(BindValue::Text(service.as_str().to_string()));
        conditions.push(format!("service = {}", placeholder));
    }

    if let Some(from_date) = filter.from_date {
        let placeholder = params.push(BindValue::Timestamp(from_date));
        conditions.push(format!("created_at >= {}", placeholder));
    }

    if let Some(to_date) = filter.to_date {
        let placeholder = params.push(BindValue::Timestamp(to_date));
        conditions.push(format!("created_at <= {}", placeholder));
    }

    if let Some(term) = filter.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        let pattern = format!("%{}%", escape_like(term));
        let operator = dialect.like_operator();
        let matches = ["name", "email", "message"]
            .iter()
            .map(|column| {
                let placeholder = params.push(BindValue::Text(pattern.clone()));
                format!("{} {} {} ESCAPE '\\'", column, operator, placeholder)
            })
            .collect::<Vec<_>>()
            .join(" OR ");
        conditions.push(format!("({})", matches));
    }

    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
}

/// Escapes `LIKE` wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use domain::models::{ServiceKind, SubmissionStatus};

    const BASE: &str = "SELECT id, name, email, phone, service, message, ip_address, \
                        user_agent, status, created_at, updated_at FROM contacts";

    #[test]
    fn test_unconstrained_select() {
        let query = select_submissions(Dialect::Sqlite, &SubmissionFilter::default());
        assert_eq!(
            query.sql,
            format!("{} ORDER BY created_at DESC, id DESC", BASE)
        );
        assert!(query.binds.is_empty());
    }

    #[test]
    fn test_status_filter_binds_value() {
        let filter = SubmissionFilter::with_status(SubmissionStatus::InProgress);

        let sqlite = select_submissions(Dialect::Sqlite, &filter);
        assert_eq!(
            sqlite.sql,
            format!("{} WHERE status = ? ORDER BY created_at DESC, id DESC", BASE)
        );
        assert_eq!(sqlite.binds, vec![BindValue::Text("in_progress".into())]);

        let postgres = select_submissions(Dialect::Postgres, &filter);
        assert_eq!(
            postgres.sql,
            format!("{} WHERE status = $1 ORDER BY created_at DESC, id DESC", BASE)
        );
    }

    #[test]
    fn test_all_filters_numbered_in_order() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap();
        let filter = SubmissionFilter {
            status: Some(SubmissionStatus::New),
            service: Some(ServiceKind::Consultation),
            from_date: Some(from),
            to_date: Some(to),
            search: None,
            limit: Some(10),
            offset: Some(20),
        };

        let query = select_submissions(Dialect::Postgres, &filter);
        assert_eq!(
            query.sql,
            format!(
                "{} WHERE status = $1 AND service = $2 AND created_at >= $3 AND created_at <= $4 \
                 ORDER BY created_at DESC, id DESC LIMIT $5 OFFSET $6",
                BASE
            )
        );
        assert_eq!(
            query.binds,
            vec![
                BindValue::Text("new".into()),
                BindValue::Text("consultation".into()),
                BindValue::Timestamp(from),
                BindValue::Timestamp(to),
                BindValue::Integer(10),
                BindValue::Integer(20),
            ]
        );
    }

    #[test]
    fn test_limit_applied_after_ordering() {
        let filter = SubmissionFilter {
            limit: Some(5),
            ..Default::default()
        };
        let query = select_submissions(Dialect::Sqlite, &filter);
        assert!(query.sql.ends_with("ORDER BY created_at DESC, id DESC LIMIT ?"));
        assert_eq!(query.binds, vec![BindValue::Integer(5)]);
    }

    #[test]
    fn test_offset_without_limit_per_dialect() {
        let filter = SubmissionFilter {
            offset: Some(15),
            ..Default::default()
        };
        let sqlite = select_submissions(Dialect::Sqlite, &filter);
        assert!(sqlite.sql.ends_with("LIMIT -1 OFFSET ?"));

        let postgres = select_submissions(Dialect::Postgres, &filter);
        assert!(postgres.sql.ends_with("id DESC OFFSET $1"));
    }

    #[test]
    fn test_search_binds_escaped_pattern_three_times() {
        let filter = SubmissionFilter {
            search: Some(" 50%_off ".to_string()),
            ..Default::default()
        };

        let postgres = select_submissions(Dialect::Postgres, &filter);
        assert!(postgres.sql.contains(
            "WHERE (name ILIKE $1 ESCAPE '\\' OR email ILIKE $2 ESCAPE '\\' OR message ILIKE $3 ESCAPE '\\')"
        ));
        assert_eq!(postgres.binds.len(), 3);
        assert_eq!(postgres.binds[0], BindValue::Text("%50\\%\\_off%".into()));

        let sqlite = select_submissions(Dialect::Sqlite, &filter);
        assert!(sqlite.sql.contains("name LIKE ? ESCAPE '\\'"));
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let filter = SubmissionFilter {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        let query = select_submissions(Dialect::Sqlite, &filter);
        assert!(!query.sql.contains("WHERE"));
        assert!(query.binds.is_empty());
    }

    #[test]
    fn test_hostile_values_never_reach_sql_text() {
        let filter = SubmissionFilter {
            search: Some("'; DROP TABLE contacts; --".to_string()),
            ..Default::default()
        };
        let query = select_submissions(Dialect::Sqlite, &filter);
        assert!(!query.sql.contains("DROP TABLE"));
    }

    #[test]
    fn test_count_ignores_limit_and_offset() {
        let filter = SubmissionFilter {
            service: Some(ServiceKind::AppDevelopment),
            limit: Some(3),
            offset: Some(1),
            ..Default::default()
        };
        let query = count_submissions(Dialect::Postgres, &filter);
        assert_eq!(
            query.sql,
            "SELECT COUNT(*) FROM contacts WHERE service = $1"
        );
        assert_eq!(query.binds, vec![BindValue::Text("app-development".into())]);
    }
}
