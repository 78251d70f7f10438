//! PostgreSQL implementation of [`DataStore`].

use async_trait::async_trait;
use chrono::Utc;
use domain::models::{
    Account, NewAccount, NewSubmission, ServiceCount, Setting, SocialLink, Submission,
    SubmissionFilter, SubmissionStatus,
};
use sqlx::postgres::PgArguments;
use sqlx::query::{Query, QueryAs};
use sqlx::{PgPool, Postgres};
use tracing::{debug, info};

use crate::db::{create_pg_pool, DatabaseConfig};
use crate::dialect::{BindValue, Dialect};
use crate::entities::{
    AccountEntity, ServiceCountEntity, SettingEntity, SocialLinkEntity, SubmissionEntity,
};
use crate::error::StoreError;
use crate::metrics::QueryTimer;
use crate::query::{self, SUBMISSIONS_TABLE, SUBMISSION_INSERT_COLUMNS};
use crate::schema::{self, ACCOUNT_COLUMNS, SETTING_COLUMNS, SOCIAL_LINK_COLUMNS};
use crate::statements;
use crate::store::DataStore;

const DIALECT: Dialect = Dialect::Postgres;

/// Store backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to `url` using the pool limits in `config`.
    pub async fn connect(url: &str, config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = create_pg_pool(url, config).await?;
        info!(
            max_connections = config.max_connections,
            "Connected to PostgreSQL"
        );
        Ok(Self::new(pool))
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn bind_all<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    binds: Vec<BindValue>,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for value in binds {
        query = match value {
            BindValue::Text(text) => query.bind(text),
            BindValue::Integer(number) => query.bind(number),
            BindValue::Timestamp(at) => query.bind(at),
        };
    }
    query
}

fn bind_social_link<'q>(
    query: Query<'q, Postgres, PgArguments>,
    platform: &'q str,
    url: &'q str,
    is_active: bool,
) -> Query<'q, Postgres, PgArguments> {
    let now = Utc::now();
    query.bind(platform).bind(url).bind(is_active).bind(now).bind(now)
}

#[async_trait]
impl DataStore for PostgresStore {
    fn dialect(&self) -> Dialect {
        DIALECT
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        for (statement, table) in schema::statements(DIALECT).iter().zip(schema::TABLES) {
            sqlx::query(statement).execute(&self.pool).await?;
            debug!(table = table, "Ensured table");
        }
        Ok(())
    }

    async fn create_submission(&self, input: NewSubmission) -> Result<Submission, StoreError> {
        let timer = QueryTimer::new(DIALECT, "create_submission");
        let now = Utc::now();
        let sql = format!(
            "{} RETURNING id",
            DIALECT.insert(SUBMISSIONS_TABLE, &SUBMISSION_INSERT_COLUMNS)
        );
        let result = sqlx::query_as::<_, (i64,)>(&sql)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.service.as_str())
            .bind(&input.message)
            .bind(&input.ip_address)
            .bind(&input.user_agent)
            .bind(SubmissionStatus::New.as_str())
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await;
        timer.record();

        let (id,) = result?;
        Ok(input.into_submission(id, now))
    }

    async fn list_submissions(
        &self,
        filter: &SubmissionFilter,
    ) -> Result<Vec<Submission>, StoreError> {
        let timer = QueryTimer::new(DIALECT, "list_submissions");
        let rendered = query::select_submissions(DIALECT, filter);
        let result = bind_all(
            sqlx::query_as::<_, SubmissionEntity>(&rendered.sql),
            rendered.binds,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(result?.into_iter().map(Into::into).collect())
    }

    async fn count_submissions(&self, filter: &SubmissionFilter) -> Result<i64, StoreError> {
        let timer = QueryTimer::new(DIALECT, "count_submissions");
        let rendered = query::count_submissions(DIALECT, filter);
        let result = bind_all(sqlx::query_as::<_, (i64,)>(&rendered.sql), rendered.binds)
            .fetch_one(&self.pool)
            .await;
        timer.record();
        Ok(result?.0)
    }

    async fn count_by_service(&self) -> Result<Vec<ServiceCount>, StoreError> {
        let timer = QueryTimer::new(DIALECT, "count_by_service");
        let result = sqlx::query_as::<_, ServiceCountEntity>(statements::COUNT_BY_SERVICE)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        Ok(result?.into_iter().map(Into::into).collect())
    }

    async fn get_submission(&self, id: i64) -> Result<Option<Submission>, StoreError> {
        let timer = QueryTimer::new(DIALECT, "get_submission");
        let sql = statements::select_submission_by_id(DIALECT);
        let result = sqlx::query_as::<_, SubmissionEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        Ok(result?.map(Into::into))
    }

    async fn update_status(&self, id: i64, status: SubmissionStatus) -> Result<u64, StoreError> {
        let timer = QueryTimer::new(DIALECT, "update_status");
        let sql = statements::update_submission_status(DIALECT);
        let result = sqlx::query(&sql)
            .bind(status.as_str())
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }

    async fn delete_submission(&self, id: i64) -> Result<u64, StoreError> {
        let timer = QueryTimer::new(DIALECT, "delete_submission");
        let sql = statements::delete_submission(DIALECT);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await;
        timer.record();
        Ok(result?.rows_affected())
    }

    async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, StoreError> {
        let timer = QueryTimer::new(DIALECT, "get_account_by_username");
        let sql = statements::select_active_account(DIALECT);
        let result = sqlx::query_as::<_, AccountEntity>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        Ok(result?.map(Into::into))
    }

    async fn account_exists(&self, username: &str, email: &str) -> Result<bool, StoreError> {
        let timer = QueryTimer::new(DIALECT, "account_exists");
        let sql = statements::account_exists(DIALECT);
        let result = sqlx::query_as::<_, (i64,)>(&sql)
            .bind(username)
            .bind(email)
            .fetch_one(&self.pool)
            .await;
        timer.record();
        Ok(result?.0 > 0)
    }

    async fn insert_account_if_absent(&self, account: &NewAccount) -> Result<u64, StoreError> {
        let timer = QueryTimer::new(DIALECT, "insert_account_if_absent");
        let sql = DIALECT.insert_if_absent("admins", &ACCOUNT_COLUMNS);
        let result = sqlx::query(&sql)
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(true)
            .bind(Utc::now())
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }

    async fn touch_last_login(&self, id: i64) -> Result<u64, StoreError> {
        let timer = QueryTimer::new(DIALECT, "touch_last_login");
        let sql = statements::touch_last_login(DIALECT);
        let result = sqlx::query(&sql)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }

    async fn get_setting(&self, key: &str) -> Result<Option<Setting>, StoreError> {
        let timer = QueryTimer::new(DIALECT, "get_setting");
        let sql = statements::select_setting(DIALECT);
        let result = sqlx::query_as::<_, SettingEntity>(&sql)
            .bind(key)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        Ok(result?.map(Into::into))
    }

    async fn upsert_setting(
        &self,
        key: &str,
        value: &str,
        description: Option<&str>,
    ) -> Result<u64, StoreError> {
        let timer = QueryTimer::new(DIALECT, "upsert_setting");
        let now = Utc::now();
        let sql = DIALECT.upsert("settings", "key", &SETTING_COLUMNS);
        let result = sqlx::query(&sql)
            .bind(key)
            .bind(value)
            .bind(description)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }

    async fn list_active_social_links(&self) -> Result<Vec<SocialLink>, StoreError> {
        let timer = QueryTimer::new(DIALECT, "list_active_social_links");
        let sql = statements::select_active_social_links(DIALECT);
        let result = sqlx::query_as::<_, SocialLinkEntity>(&sql)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        Ok(result?.into_iter().map(Into::into).collect())
    }

    async fn upsert_social_link(
        &self,
        platform: &str,
        url: &str,
        is_active: bool,
    ) -> Result<u64, StoreError> {
        let timer = QueryTimer::new(DIALECT, "upsert_social_link");
        let sql = DIALECT.upsert("social_media", "platform", &SOCIAL_LINK_COLUMNS);
        let result = bind_social_link(sqlx::query(&sql), platform, url, is_active)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }

    async fn insert_social_link_if_absent(
        &self,
        platform: &str,
        url: &str,
        is_active: bool,
    ) -> Result<u64, StoreError> {
        let timer = QueryTimer::new(DIALECT, "insert_social_link_if_absent");
        let sql = DIALECT.insert_if_absent("social_media", &SOCIAL_LINK_COLUMNS);
        let result = bind_social_link(sqlx::query(&sql), platform, url, is_active)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }

    async fn deactivate_social_link(&self, platform: &str) -> Result<u64, StoreError> {
        let timer = QueryTimer::new(DIALECT, "deactivate_social_link");
        let sql = statements::deactivate_social_link(DIALECT);
        let result = sqlx::query(&sql)
            .bind(Utc::now())
            .bind(platform)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL connection pool closed");
    }
}
