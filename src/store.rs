//! SQLite-backed rate table.
//!
//! Every function takes the connection it runs on; request handlers acquire
//! one from the pool and it goes back to the pool when dropped.

use std::str::FromStr;

use log::debug;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Acquire, SqliteConnection};

use crate::error::AppResult;
use crate::exchange_rate::ExchangeRate;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS exchange_rates (
    date TEXT PRIMARY KEY NOT NULL,
    rate REAL NOT NULL
)";

const CREATE_RATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS ix_exchange_rates_rate ON exchange_rates (rate)";

/// Opens (creating if missing) the database at `url` and makes sure the schema exists.
pub async fn connect(url: &str, max_connections: u32) -> AppResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;

    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query(CREATE_TABLE).execute(pool).await?;
    sqlx::query(CREATE_RATE_INDEX).execute(pool).await?;

    Ok(())
}

/// Deletes every row. Runs in autocommit mode, so the delete is committed on return.
pub async fn clear(conn: &mut SqliteConnection) -> AppResult<u64> {
    let result = sqlx::query("DELETE FROM exchange_rates")
        .execute(&mut *conn)
        .await?;
    debug!("Cleared {} exchange rates", result.rows_affected());

    Ok(result.rows_affected())
}

/// Inserts all `rates` and commits once at the end.
pub async fn insert_all(conn: &mut SqliteConnection, rates: &[ExchangeRate]) -> AppResult<()> {
    let mut tx = conn.begin().await?;

    for rate in rates {
        sqlx::query("INSERT INTO exchange_rates (date, rate) VALUES (?, ?)")
            .bind(rate.date)
            .bind(rate.rate)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    Ok(())
}

/// Every stored row in the order SQLite yields them.
pub async fn all(conn: &mut SqliteConnection) -> AppResult<Vec<ExchangeRate>> {
    let rates = sqlx::query_as::<_, ExchangeRate>("SELECT date, rate FROM exchange_rates")
        .fetch_all(&mut *conn)
        .await?;

    Ok(rates)
}
