use log::{debug, warn};
use reqwest::Client;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::period::DateWindow;
use crate::time_series::TimeSeries;

/// Client for the time-series endpoint of the public rates API.
#[derive(Debug, Clone)]
pub struct RatesClient {
    http: Client,
    base_url: String,
    target_currency: String,
    base_currency: Option<String>,
}

impl RatesClient {
    pub fn new(base_url: impl Into<String>, target_currency: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            target_currency: target_currency.into(),
            base_currency: None,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.api_base_url.clone(), cfg.target_currency.clone())
            .with_base_currency(cfg.base_currency.clone())
    }

    pub fn with_base_currency(mut self, base_currency: Option<String>) -> Self {
        self.base_currency = base_currency;
        self
    }

    pub fn target_currency(&self) -> &str {
        &self.target_currency
    }

    pub async fn fetch_time_series(&self, window: DateWindow) -> AppResult<TimeSeries> {
        let url = self.url(window);
        let text = self.load_json(&url).await?;

        TimeSeries::from_json(&text)
    }

    async fn load_json(&self, url: &str) -> AppResult<String> {
        debug!("GET {}", url);
        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            warn!("Rates API answered {} for {}", resp.status(), url);
            return Err(AppError::Upstream {
                status: resp.status().as_u16(),
            });
        }

        let text = resp.text().await?;

        Ok(text)
    }

    fn url(&self, window: DateWindow) -> String {
        let mut url = format!(
            "{}/{}..{}?to={}",
            self.base_url,
            window.start.format("%Y-%m-%d"),
            window.end.format("%Y-%m-%d"),
            self.target_currency
        );
        if let Some(base) = &self.base_currency {
            url.push_str("&from=");
            url.push_str(base);
        }

        url
    }
}
