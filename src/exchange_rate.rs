use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// One stored day: the price of one unit of the base currency in the target currency.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ExchangeRate {
    pub date: NaiveDate,
    pub rate: f64,
}
