use chrono::Utc;
use rand::Rng;

use crate::errors::AppError;
use crate::models::{StockHistory, StockRow, StocksSummary, TimeRange};
use crate::services::series;

struct Listing {
    symbol: &'static str,
    name: &'static str,
    base_price: f64,
}

/// Fixed EGX universe served by the mock provider.
const EGX_LISTINGS: [Listing; 5] = [
    Listing {
        symbol: "COMI",
        name: "Commercial International Bank",
        base_price: 85.50,
    },
    Listing {
        symbol: "FWRY",
        name: "Fawry for Banking Technology",
        base_price: 12.30,
    },
    Listing {
        symbol: "SWDY",
        name: "El Sewedy Electric Company",
        base_price: 28.75,
    },
    Listing {
        symbol: "EGTS",
        name: "Egyptian Transport Services",
        base_price: 15.60,
    },
    Listing {
        symbol: "ABUK",
        name: "Abu Kir Fertilizers Company",
        base_price: 42.20,
    },
];

pub const DEFAULT_SYMBOL: &str = "COMI";

const SPARKLINE_POINTS: usize = 10;
const SPARKLINE_VOLATILITY: f64 = 0.02;
const MAIN_SERIES_VOLATILITY: f64 = 0.025;

/// Daily change bound per row, in percent.
const MAX_ABS_CHANGE_PCT: f64 = 3.0;

const VOLUME_FLOOR: u64 = 100_000;
const VOLUME_CEILING: u64 = 5_100_000;

fn find_listing(symbol: &str) -> Option<&'static Listing> {
    EGX_LISTINGS.iter().find(|l| l.symbol == symbol)
}

/// Build the EGX summary: a main series for the default symbol plus a table
/// row per listing.
///
/// Per row, `change_pct` is drawn uniformly in [-3, +3] and `last` is derived
/// from it; the sparkline walks from the listing's base price, so it is a
/// trend illustration rather than a view of `last`.
pub fn summary<R: Rng>(rng: &mut R) -> Result<StocksSummary, AppError> {
    let default_listing = find_listing(DEFAULT_SYMBOL)
        .ok_or_else(|| AppError::Internal("default symbol missing from listings".to_string()))?;

    let series = series::generate(
        rng,
        default_listing.base_price,
        TimeRange::Day.points(),
        MAIN_SERIES_VOLATILITY,
        TimeRange::Day,
    )?;

    let table = EGX_LISTINGS
        .iter()
        .map(|listing| {
            let change_pct = (rng.random::<f64>() - 0.5) * 2.0 * MAX_ABS_CHANGE_PCT;
            let last = listing.base_price * (1.0 + change_pct / 100.0);
            let sparkline = series::generate(
                rng,
                listing.base_price,
                SPARKLINE_POINTS,
                SPARKLINE_VOLATILITY,
                TimeRange::Day,
            )?;

            Ok(StockRow {
                symbol: listing.symbol.to_string(),
                name: listing.name.to_string(),
                last,
                change_pct,
                volume: rng.random_range(VOLUME_FLOOR..VOLUME_CEILING),
                sparkline,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(StocksSummary {
        default_symbol: DEFAULT_SYMBOL.to_string(),
        series,
        table,
        last_updated: Utc::now(),
    })
}

/// Price history for one symbol.
///
/// Backed by the row sparkline, which only ever holds ten samples; horizons
/// implying more points are truncated to what is available.
pub fn history<R: Rng>(
    rng: &mut R,
    symbol: &str,
    range: TimeRange,
) -> Result<StockHistory, AppError> {
    let listing = find_listing(symbol)
        .ok_or_else(|| AppError::NotFound(format!("unknown stock symbol {symbol}")))?;

    let mut sparkline = series::generate(
        rng,
        listing.base_price,
        SPARKLINE_POINTS,
        SPARKLINE_VOLATILITY,
        TimeRange::Day,
    )?;
    sparkline.truncate(range.points());

    Ok(StockHistory { series: sparkline })
}
