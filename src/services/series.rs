use chrono::Utc;
use rand::Rng;

use crate::errors::AppError;
use crate::models::{TimeRange, TimeSeriesPoint};

/// Traded volume per sample, uniform in [100_000, 1_100_000).
const VOLUME_FLOOR: u64 = 100_000;
const VOLUME_CEILING: u64 = 1_100_000;

/// Generate a bounded random-walk price series.
///
/// The walk starts at `base_price` and perturbs the running price at each
/// step by a uniform draw in `[-0.5, 0.5) * volatility * price`, clamped at
/// zero. Samples are emitted oldest first, the newest carrying the current
/// wall-clock time, spaced by `range.interval()`.
///
/// The RNG is injected so callers can seed it for reproducible output.
pub fn generate<R: Rng>(
    rng: &mut R,
    base_price: f64,
    points: usize,
    volatility: f64,
    range: TimeRange,
) -> Result<Vec<TimeSeriesPoint>, AppError> {
    if !base_price.is_finite() || base_price <= 0.0 {
        return Err(AppError::Validation(format!(
            "base price must be positive, got {base_price}"
        )));
    }
    if points == 0 {
        return Err(AppError::Validation(
            "point count must be positive".to_string(),
        ));
    }

    let now = Utc::now();
    let interval = range.interval();
    let mut current = base_price;
    let mut series = Vec::with_capacity(points);

    for steps_back in (0..points).rev() {
        let step = (rng.random::<f64>() - 0.5) * volatility * current;
        current = (current + step).max(0.0);

        series.push(TimeSeriesPoint {
            timestamp: now - interval * steps_back as i32,
            price: current,
            volume: Some(rng.random_range(VOLUME_FLOOR..VOLUME_CEILING)),
        });
    }

    Ok(series)
}

/// Percent change from the first to the last sample of a series.
pub fn percent_change(series: &[TimeSeriesPoint]) -> f64 {
    match (series.first(), series.last()) {
        (Some(first), Some(last)) if first.price > 0.0 => {
            (last.price - first.price) / first.price * 100.0
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_exact_point_count_and_ordering() {
        let mut rng = rand::rng();
        for range in [TimeRange::Day, TimeRange::Week, TimeRange::Month, TimeRange::Year] {
            let series = generate(&mut rng, 85.5, range.points(), 0.02, range).unwrap();
            assert_eq!(series.len(), range.points());

            for pair in series.windows(2) {
                assert!(
                    pair[0].timestamp < pair[1].timestamp,
                    "timestamps must be strictly increasing"
                );
                assert_eq!(pair[1].timestamp - pair[0].timestamp, range.interval());
            }
        }
    }

    #[test]
    fn test_prices_never_negative() {
        // High volatility drives the walk toward the zero clamp.
        let mut rng = StdRng::seed_from_u64(7);
        let series = generate(&mut rng, 0.01, 500, 0.1, TimeRange::Day).unwrap();
        assert!(series.iter().all(|p| p.price >= 0.0));
    }

    #[test]
    fn test_volume_within_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = generate(&mut rng, 100.0, 50, 0.02, TimeRange::Week).unwrap();
        for point in &series {
            let volume = point.volume.expect("volume is always populated");
            assert!((100_000..1_100_000).contains(&volume));
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);

        let a = generate(&mut first, 1862.35, 24, 0.015, TimeRange::Day).unwrap();
        let b = generate(&mut second, 1862.35, 24, 0.015, TimeRange::Day).unwrap();

        let prices_a: Vec<f64> = a.iter().map(|p| p.price).collect();
        let prices_b: Vec<f64> = b.iter().map(|p| p.price).collect();
        assert_eq!(prices_a, prices_b);

        let volumes_a: Vec<Option<u64>> = a.iter().map(|p| p.volume).collect();
        let volumes_b: Vec<Option<u64>> = b.iter().map(|p| p.volume).collect();
        assert_eq!(volumes_a, volumes_b);
    }

    #[test]
    fn test_rejects_non_positive_base_price() {
        let mut rng = rand::rng();
        assert!(matches!(
            generate(&mut rng, 0.0, 10, 0.02, TimeRange::Day),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            generate(&mut rng, -5.0, 10, 0.02, TimeRange::Day),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            generate(&mut rng, f64::NAN, 10, 0.02, TimeRange::Day),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_zero_points() {
        let mut rng = rand::rng();
        assert!(matches!(
            generate(&mut rng, 100.0, 0, 0.02, TimeRange::Day),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_percent_change() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut series = generate(&mut rng, 100.0, 10, 0.0, TimeRange::Day).unwrap();
        // Zero volatility keeps the walk flat.
        assert!(percent_change(&series).abs() < 1e-9);

        series.last_mut().unwrap().price = series[0].price * 1.05;
        assert!((percent_change(&series) - 5.0).abs() < 1e-9);

        assert_eq!(percent_change(&[]), 0.0);
    }
}
