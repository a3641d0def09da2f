use async_trait::async_trait;
use thiserror::Error;

use crate::errors::AppError;
use crate::models::{
    ConversionResult, CurrencyBase, ExchangeRates, GoldData, NewsArticle, SilverData,
    StockHistory, StocksSummary, TimeRange,
};

/// Failure of an outward call to a third-party data provider. Callers decide
/// whether to surface it or degrade to synthetic data.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<UpstreamError> for AppError {
    fn from(value: UpstreamError) -> Self {
        AppError::Upstream(value.to_string())
    }
}

/// Source of every dashboard payload. The mock implementation synthesizes
/// all of it; a live implementation may replace individual operations.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn gold(&self, base: CurrencyBase, range: TimeRange) -> Result<GoldData, AppError>;

    async fn silver(&self, base: CurrencyBase, range: TimeRange) -> Result<SilverData, AppError>;

    async fn stocks_summary(&self) -> Result<StocksSummary, AppError>;

    async fn stock_history(&self, symbol: &str, range: TimeRange)
        -> Result<StockHistory, AppError>;

    async fn rates(&self, base: &str, symbols: Option<&[String]>)
        -> Result<ExchangeRates, AppError>;

    async fn convert(&self, amount: f64, from: &str, to: &str)
        -> Result<ConversionResult, AppError>;

    async fn news(&self) -> Result<Vec<NewsArticle>, AppError>;
}
