use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{str::FromStr, time::Duration};

const INIT_SQL: &str = include_str!("../../init.sql");
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn sqlite_init(url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .acquire_timeout(CONNECT_TIMEOUT)
        .connect_with(options)
        .await?;

    sqlx::raw_sql(INIT_SQL).execute(&pool).await?;
    Ok(pool)
}
