use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::exchange_rate::ExchangeRate;

/// Body of the upstream time-series endpoint.
///
/// `rates` maps an ISO date to the quotes for that day, keyed by currency code.
#[derive(Debug, Deserialize, PartialEq)]
pub struct TimeSeries {
    pub rates: BTreeMap<String, BTreeMap<String, f64>>,
}

impl TimeSeries {
    pub fn from_json(text: &str) -> AppResult<Self> {
        serde_json::from_str(text).map_err(|err| AppError::DataFormat(err.to_string()))
    }

    /// Extracts the `currency` quote of every day, ordered by date.
    ///
    /// Fails on the first unparseable date, missing quote or day that appears
    /// twice once parsed, so callers never see a partial conversion.
    pub fn into_records(self, currency: &str) -> AppResult<Vec<ExchangeRate>> {
        let mut by_date = BTreeMap::new();

        for (date, quotes) in self.rates {
            let parsed = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|err| AppError::DataFormat(format!("bad date '{date}': {err}")))?;
            let rate = quotes.get(currency).copied().ok_or_else(|| {
                AppError::DataFormat(format!("no {currency} quote for {date}"))
            })?;

            if by_date.insert(parsed, rate).is_some() {
                return Err(AppError::DataFormat(format!("{parsed} appears more than once")));
            }
        }

        Ok(by_date
            .into_iter()
            .map(|(date, rate)| ExchangeRate { date, rate })
            .collect())
    }
}
