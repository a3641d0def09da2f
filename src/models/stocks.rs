use chrono::{DateTime, Utc};
use serde::Serialize;

use super::series::TimeSeriesPoint;

/// One row in the EGX summary table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRow {
    pub symbol: String,
    pub name: String,
    pub last: f64,
    pub change_pct: f64,
    pub volume: u64,
    pub sparkline: Vec<TimeSeriesPoint>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StocksSummary {
    pub default_symbol: String,
    pub series: Vec<TimeSeriesPoint>,
    pub table: Vec<StockRow>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StockHistory {
    pub series: Vec<TimeSeriesPoint>,
}
