use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::external::provider::{MarketDataProvider, UpstreamError};
use crate::models::{
    ConversionResult, CurrencyBase, ExchangeRates, GoldData, NewsArticle, SilverData,
    StockHistory, StocksSummary, TimeRange,
};
use crate::services;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Live provider backed by exchangerate.host for rates and conversions.
///
/// Only the currency operations hit the network; gold, silver, stocks and
/// news remain synthetic. Any upstream failure degrades to the synthetic
/// tables so the dashboard never goes blank over a flaky rate feed.
pub struct LiveRatesProvider {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    base: String,
    rates: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct ConvertResponse {
    result: f64,
    info: ConvertInfo,
}

#[derive(Debug, Deserialize)]
struct ConvertInfo {
    rate: f64,
}

impl LiveRatesProvider {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_rates(&self, base: &str) -> Result<ExchangeRates, UpstreamError> {
        let resp = self
            .client
            .get(format!("{}/latest", self.base_url))
            .query(&[("base", base)])
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(UpstreamError::BadResponse(format!(
                "status {} from rate provider",
                resp.status()
            )));
        }

        let body: LatestResponse = resp
            .json()
            .await
            .map_err(|e| UpstreamError::Parse(e.to_string()))?;

        Ok(ExchangeRates {
            base: body.base,
            rates: body.rates,
            last_updated: Utc::now(),
        })
    }

    async fn fetch_conversion(
        &self,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Result<ConversionResult, UpstreamError> {
        let resp = self
            .client
            .get(format!("{}/convert", self.base_url))
            .query(&[
                ("from", from),
                ("to", to),
                ("amount", &amount.to_string()),
            ])
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(UpstreamError::BadResponse(format!(
                "status {} from rate provider",
                resp.status()
            )));
        }

        let body: ConvertResponse = resp
            .json()
            .await
            .map_err(|e| UpstreamError::Parse(e.to_string()))?;

        Ok(ConversionResult {
            amount,
            from: from.to_string(),
            to: to.to_string(),
            result: body.result,
            rate: body.info.rate,
            last_updated: Utc::now(),
        })
    }
}

#[async_trait]
impl MarketDataProvider for LiveRatesProvider {
    async fn gold(&self, base: CurrencyBase, range: TimeRange) -> Result<GoldData, AppError> {
        services::metals::gold(&mut rand::rng(), base, range)
    }

    async fn silver(&self, base: CurrencyBase, range: TimeRange) -> Result<SilverData, AppError> {
        services::metals::silver(&mut rand::rng(), base, range)
    }

    async fn stocks_summary(&self) -> Result<StocksSummary, AppError> {
        services::stocks::summary(&mut rand::rng())
    }

    async fn stock_history(
        &self,
        symbol: &str,
        range: TimeRange,
    ) -> Result<StockHistory, AppError> {
        services::stocks::history(&mut rand::rng(), symbol, range)
    }

    async fn rates(
        &self,
        base: &str,
        _symbols: Option<&[String]>,
    ) -> Result<ExchangeRates, AppError> {
        match self.fetch_rates(base).await {
            Ok(rates) => {
                info!("Fetched live rates for base {}", base);
                Ok(rates)
            }
            Err(e) => {
                warn!(
                    "Rate provider unavailable ({}), serving synthetic rates for {}",
                    e, base
                );
                Ok(services::rates::exchange_rates(base))
            }
        }
    }

    async fn convert(
        &self,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Result<ConversionResult, AppError> {
        match self.fetch_conversion(amount, from, to).await {
            Ok(conversion) => Ok(conversion),
            Err(e) => {
                warn!(
                    "Rate provider unavailable ({}), serving synthetic conversion {} -> {}",
                    e, from, to
                );
                Ok(services::rates::convert(amount, from, to))
            }
        }
    }

    async fn news(&self) -> Result<Vec<NewsArticle>, AppError> {
        Ok(services::news::headlines())
    }
}
