mod metals;
mod news;
mod rates;
mod series;
mod stocks;

pub use metals::{
    GoldData, GoldEntry, GoldHeadline, Karat, SilverData, SilverEntry, SilverHeadline, SilverUnit,
};
pub use news::{NewsArticle, NewsCategory};
pub use rates::{ConversionResult, ExchangeRates};
pub use series::{CurrencyBase, TimeRange, TimeSeriesPoint};
pub use stocks::{StockHistory, StockRow, StocksSummary};
