use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Exchange-rate table for a base currency. `rates` maps counter-currency
/// code to the multiplier applied to one unit of `base`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRates {
    pub base: String,
    pub rates: HashMap<String, f64>,
    pub last_updated: DateTime<Utc>,
}

/// Derived conversion: `result = amount * rate`. Never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub result: f64,
    pub rate: f64,
    pub last_updated: DateTime<Utc>,
}
