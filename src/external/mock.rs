use async_trait::async_trait;

use crate::errors::AppError;
use crate::external::provider::MarketDataProvider;
use crate::models::{
    ConversionResult, CurrencyBase, ExchangeRates, GoldData, NewsArticle, SilverData,
    StockHistory, StocksSummary, TimeRange,
};
use crate::services;

/// Fully synthetic provider. Every call draws a fresh random walk from the
/// thread-local RNG; nothing is shared across requests.
pub struct MockProvider;

#[async_trait]
impl MarketDataProvider for MockProvider {
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
        Ok(services::rates::exchange_rates(base))
    }

    async fn convert(
        &self,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Result<ConversionResult, AppError> {
        Ok(services::rates::convert(amount, from, to))
    }

    async fn news(&self) -> Result<Vec<NewsArticle>, AppError> {
        Ok(services::news::headlines())
    }
}
