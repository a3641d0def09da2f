use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::series::{CurrencyBase, TimeSeriesPoint};

/// Gold purity grade. Serialized the way the dashboard expects it: karats as
/// bare numbers, the troy ounce as the string `"ounce"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Karat {
    K18,
    K21,
    K24,
    Ounce,
}

impl Serialize for Karat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Karat::K18 => serializer.serialize_u8(18),
            Karat::K21 => serializer.serialize_u8(21),
            Karat::K24 => serializer.serialize_u8(24),
            Karat::Ounce => serializer.serialize_str("ounce"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldHeadline {
    pub karat: Karat,
    pub price: f64,
    pub change_pct: f64,
    pub currency: CurrencyBase,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldEntry {
    pub karat: Karat,
    pub price: f64,
    pub change_pct: f64,
    pub series_mini: Vec<TimeSeriesPoint>,
}

/// Full gold snapshot: headline quote, main chart series, and the secondary
/// karat/ounce cards with their sparklines.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldData {
    pub headline: GoldHeadline,
    pub series: Vec<TimeSeriesPoint>,
    pub others: Vec<GoldEntry>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SilverUnit {
    Gram,
    Ounce,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SilverHeadline {
    pub unit: SilverUnit,
    pub price: f64,
    pub change_pct: f64,
    pub currency: CurrencyBase,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SilverEntry {
    pub unit: SilverUnit,
    pub price: f64,
    pub change_pct: f64,
    pub series_mini: Vec<TimeSeriesPoint>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SilverData {
    pub headline: SilverHeadline,
    pub series: Vec<TimeSeriesPoint>,
    pub others: Vec<SilverEntry>,
    pub last_updated: DateTime<Utc>,
}
