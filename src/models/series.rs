use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A single sample in a synthetic price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
}

/// Display horizon for a series. Controls both the sampling interval and the
/// number of points callers request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "1D")]
    Day,
    #[serde(rename = "1W")]
    Week,
    #[serde(rename = "1M")]
    Month,
    #[serde(rename = "1Y")]
    Year,
}

impl TimeRange {
    /// Spacing between consecutive samples.
    ///
    /// 1W and 1M share a daily interval; they differ only in point count.
    pub fn interval(self) -> Duration {
        match self {
            TimeRange::Day => Duration::hours(1),
            TimeRange::Week | TimeRange::Month => Duration::days(1),
            TimeRange::Year => Duration::weeks(1),
        }
    }

    /// Number of samples a main chart shows for this horizon.
    pub fn points(self) -> usize {
        match self {
            TimeRange::Day => 24,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Year => 52,
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRange::Day => write!(f, "1D"),
            TimeRange::Week => write!(f, "1W"),
            TimeRange::Month => write!(f, "1M"),
            TimeRange::Year => write!(f, "1Y"),
        }
    }
}

/// Quote currency for gold/silver snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrencyBase {
    #[default]
    EGP,
    USD,
}

impl std::fmt::Display for CurrencyBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurrencyBase::EGP => write!(f, "EGP"),
            CurrencyBase::USD => write!(f, "USD"),
        }
    }
}
