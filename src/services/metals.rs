use chrono::Utc;
use rand::Rng;

use crate::errors::AppError;
use crate::models::{
    CurrencyBase, GoldData, GoldEntry, GoldHeadline, Karat, SilverData, SilverEntry,
    SilverHeadline, SilverUnit, TimeRange,
};
use crate::services::series;

/// Points in the secondary-card mini series.
const MINI_POINTS: usize = 10;

const GOLD_MAIN_VOLATILITY: f64 = 0.015;
const SILVER_VOLATILITY: f64 = 0.02;

/// Reference gold price per karat and quote currency (EGP per gram, USD per
/// gram, ounce priced as a whole).
fn gold_baseline(karat: Karat, base: CurrencyBase) -> f64 {
    match (karat, base) {
        (Karat::K21, CurrencyBase::EGP) => 1862.35,
        (Karat::K21, CurrencyBase::USD) => 60.12,
        (Karat::K24, CurrencyBase::EGP) => 2335.60,
        (Karat::K24, CurrencyBase::USD) => 75.42,
        (Karat::K18, CurrencyBase::EGP) => 1550.00,
        (Karat::K18, CurrencyBase::USD) => 50.08,
        (Karat::Ounce, CurrencyBase::EGP) => 2000.00,
        (Karat::Ounce, CurrencyBase::USD) => 64.52,
    }
}

fn silver_baseline(unit: SilverUnit, base: CurrencyBase) -> f64 {
    match (unit, base) {
        (SilverUnit::Gram, CurrencyBase::EGP) => 45.20,
        (SilverUnit::Gram, CurrencyBase::USD) => 1.46,
        (SilverUnit::Ounce, CurrencyBase::EGP) => 1405.60,
        (SilverUnit::Ounce, CurrencyBase::USD) => 45.38,
    }
}

/// Build a gold snapshot: 21K headline with a full series, plus 24K/18K/ounce
/// cards with mini series. Headline and card `change_pct` are derived from
/// their generated series so the chart and the figure always agree.
pub fn gold<R: Rng>(
    rng: &mut R,
    base: CurrencyBase,
    range: TimeRange,
) -> Result<GoldData, AppError> {
    let headline_price = gold_baseline(Karat::K21, base);
    let series = series::generate(
        rng,
        headline_price,
        range.points(),
        GOLD_MAIN_VOLATILITY,
        range,
    )?;

    let others = [
        (Karat::K24, 0.01),
        (Karat::K18, 0.01),
        (Karat::Ounce, 0.02),
    ]
    .into_iter()
    .map(|(karat, volatility)| {
        let price = gold_baseline(karat, base);
        let series_mini = series::generate(rng, price, MINI_POINTS, volatility, TimeRange::Day)?;
        Ok(GoldEntry {
            karat,
            price,
            change_pct: series::percent_change(&series_mini),
            series_mini,
        })
    })
    .collect::<Result<Vec<_>, AppError>>()?;

    Ok(GoldData {
        headline: GoldHeadline {
            karat: Karat::K21,
            price: headline_price,
            change_pct: series::percent_change(&series),
            currency: base,
        },
        series,
        others,
        last_updated: Utc::now(),
    })
}

/// Build a silver snapshot: per-gram headline plus a per-ounce card.
pub fn silver<R: Rng>(
    rng: &mut R,
    base: CurrencyBase,
    range: TimeRange,
) -> Result<SilverData, AppError> {
    let headline_price = silver_baseline(SilverUnit::Gram, base);
    let series = series::generate(
        rng,
        headline_price,
        range.points(),
        SILVER_VOLATILITY,
        range,
    )?;

    let ounce_price = silver_baseline(SilverUnit::Ounce, base);
    let series_mini =
        series::generate(rng, ounce_price, MINI_POINTS, SILVER_VOLATILITY, TimeRange::Day)?;

    Ok(SilverData {
        headline: SilverHeadline {
            unit: SilverUnit::Gram,
            price: headline_price,
            change_pct: series::percent_change(&series),
            currency: base,
        },
        series,
        others: vec![SilverEntry {
            unit: SilverUnit::Ounce,
            price: ounce_price,
            change_pct: series::percent_change(&series_mini),
            series_mini,
        }],
        last_updated: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gold_series_length_tracks_range() {
        let mut rng = rand::rng();
        let day = gold(&mut rng, CurrencyBase::EGP, TimeRange::Day).unwrap();
        assert_eq!(day.series.len(), 24);

        let year = gold(&mut rng, CurrencyBase::USD, TimeRange::Year).unwrap();
        assert_eq!(year.series.len(), 52);
    }

    #[test]
    fn test_gold_headline_is_21k_baseline() {
        let mut rng = rand::rng();
        let egp = gold(&mut rng, CurrencyBase::EGP, TimeRange::Day).unwrap();
        assert_eq!(egp.headline.karat, Karat::K21);
        assert_eq!(egp.headline.price, 1862.35);
        assert_eq!(egp.headline.currency, CurrencyBase::EGP);

        let usd = gold(&mut rng, CurrencyBase::USD, TimeRange::Day).unwrap();
        assert_eq!(usd.headline.price, 60.12);
    }

    #[test]
    fn test_gold_others_cards() {
        let mut rng = rand::rng();
        let data = gold(&mut rng, CurrencyBase::EGP, TimeRange::Week).unwrap();
        let karats: Vec<Karat> = data.others.iter().map(|o| o.karat).collect();
        assert_eq!(karats, vec![Karat::K24, Karat::K18, Karat::Ounce]);
        for other in &data.others {
            assert_eq!(other.series_mini.len(), MINI_POINTS);
        }
    }

    #[test]
    fn test_gold_change_pct_matches_series() {
        let mut rng = rand::rng();
        let data = gold(&mut rng, CurrencyBase::EGP, TimeRange::Month).unwrap();
        let expected = series::percent_change(&data.series);
        assert!((data.headline.change_pct - expected).abs() < 1e-9);
    }

    #[test]
    fn test_silver_shape() {
        let mut rng = rand::rng();
        let data = silver(&mut rng, CurrencyBase::EGP, TimeRange::Day).unwrap();
        assert_eq!(data.headline.unit, SilverUnit::Gram);
        assert_eq!(data.headline.price, 45.20);
        assert_eq!(data.series.len(), 24);
        assert_eq!(data.others.len(), 1);
        assert_eq!(data.others[0].unit, SilverUnit::Ounce);
        assert_eq!(data.others[0].price, 1405.60);
        assert_eq!(data.others[0].series_mini.len(), MINI_POINTS);
    }
}
