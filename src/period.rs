use std::str::FromStr;

use chrono::{Days, NaiveDate};

use crate::error::AppError;

/// Lookback window selected by the `period` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    OneMonth,
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn days(self) -> u64 {
        match self {
            Period::OneMonth => 30,
            Period::ThreeMonths => 90,
            Period::SixMonths => 180,
            Period::TwelveMonths => 365,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::OneMonth => "1m",
            Period::ThreeMonths => "3m",
            Period::SixMonths => "6m",
            Period::TwelveMonths => "12m",
        }
    }

    /// Window ending at `today` (inclusive) and starting `days()` before it.
    pub fn window(self, today: NaiveDate) -> anyhow::Result<DateWindow> {
        let start = today
            .checked_sub_days(Days::new(self.days()))
            .ok_or(anyhow::anyhow!("Can't get start date for {}", today))?;

        Ok(DateWindow { start, end: today })
    }
}

impl FromStr for Period {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Period::OneMonth),
            "3m" => Ok(Period::ThreeMonths),
            "6m" => Ok(Period::SixMonths),
            "12m" => Ok(Period::TwelveMonths),
            _ => Err(AppError::InvalidPeriod),
        }
    }
}
