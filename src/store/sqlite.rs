use super::{LIST_LIMIT, StatusStore};
use crate::{
    libs::db_sqlite::sqlite_init,
    models::status_check::{StatusCheck, StatusCheckCreate, decode_timestamp, encode_timestamp},
};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Debug, Clone, sqlx::FromRow)]
struct StatusCheckRow {
    id: String,
    client_name: String,
    status: String,
    timestamp: String,
}

impl TryFrom<StatusCheckRow> for StatusCheck {
    type Error = anyhow::Error;

    fn try_from(row: StatusCheckRow) -> anyhow::Result<Self> {
        Ok(StatusCheck {
            timestamp: decode_timestamp(&row.timestamp)?,
            id: row.id,
            client_name: row.client_name,
            status: row.status,
        })
    }
}

/// Database store. Rows of every namespace share one table, each store only
/// reads and writes its own namespace.
#[derive(Debug, Clone)]
pub struct SqliteStatusStore {
    pool: SqlitePool,
    namespace: String,
}

impl SqliteStatusStore {
    pub async fn connect(url: &str, namespace: &str) -> anyhow::Result<Self> {
        let pool = sqlite_init(url).await?;
        Ok(Self::with_pool(pool, namespace))
    }

    pub fn with_pool(pool: SqlitePool, namespace: &str) -> Self {
        SqliteStatusStore { pool, namespace: namespace.to_string() }
    }
}

#[async_trait]
impl StatusStore for SqliteStatusStore {
    async fn create(&self, input: StatusCheckCreate) -> anyhow::Result<StatusCheck> {
        let check = StatusCheck::new(input);
        sqlx::query("INSERT INTO status_checks (namespace, id, client_name, status, timestamp) VALUES (?, ?, ?, ?, ?)")
            .bind(&self.namespace)
            .bind(&check.id)
            .bind(&check.client_name)
            .bind(&check.status)
            .bind(encode_timestamp(&check.timestamp))
            .execute(&self.pool)
            .await?;
        Ok(check)
    }

    async fn list(&self) -> anyhow::Result<Vec<StatusCheck>> {
        let rows = sqlx::query_as::<_, StatusCheckRow>(
            "SELECT id, client_name, status, timestamp FROM status_checks WHERE namespace = ? ORDER BY seq ASC LIMIT ?",
        )
        .bind(&self.namespace)
        .bind(LIST_LIMIT as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(StatusCheck::try_from).collect()
    }

    async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<StatusCheck>> {
        let row = sqlx::query_as::<_, StatusCheckRow>(
            "SELECT id, client_name, status, timestamp FROM status_checks WHERE namespace = ? AND id = ?",
        )
        .bind(&self.namespace)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(StatusCheck::try_from).transpose()
    }

    fn backend(&self) -> &'static str {
        "database"
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
