use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use sqlx::SqliteConnection;

use crate::error::AppResult;
use crate::exchange_rate::ExchangeRate;
use crate::period::Period;
use crate::store;
use crate::upstream::RatesClient;

pub const STORED_MESSAGE: &str = "Data fetched and stored";

#[derive(Debug, Serialize, PartialEq)]
pub struct Ack {
    pub message: &'static str,
}

/// Replaces the stored rates with the upstream series for `period`, counted back from `today`.
///
/// The store is only touched once the whole payload has been converted. The
/// delete and the inserts are committed separately.
pub async fn fetch_and_store(
    conn: &mut SqliteConnection,
    client: &RatesClient,
    period: &str,
    today: NaiveDate,
) -> AppResult<Ack> {
    let period: Period = period.parse()?;
    let window = period.window(today)?;
    info!(
        "Fetching {} rates for {} ({}..{})",
        client.target_currency(),
        period.label(),
        window.start,
        window.end
    );

    let series = client.fetch_time_series(window).await?;
    let rates = series.into_records(client.target_currency())?;

    store::clear(conn).await?;
    store::insert_all(conn, &rates).await?;
    info!("Stored {} exchange rates", rates.len());

    Ok(Ack {
        message: STORED_MESSAGE,
    })
}

pub async fn list_rates(conn: &mut SqliteConnection) -> AppResult<Vec<ExchangeRate>> {
    store::all(conn).await
}
