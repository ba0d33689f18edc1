// ============================================================================
// MetricsDeriver : métriques du jour et performance sur la période
// ============================================================================
// Deux contrats indépendants :
// - latest_metrics() lit la série COMPLÈTE (les chiffres du jour)
// - windowed_change() lit la série FILTRÉE (la période sélectionnée)
//
// Division par zéro : le pourcentage vaut 0, jamais NaN ni Infinity.
// ============================================================================

use crate::models::{KeyMetrics, PricePoint, PriceChange};

/// Pourcentage de `change` par rapport à `base`, ou 0 si `base == 0`
pub fn percent_change(change: f64, base: f64) -> f64 {
    if base == 0.0 {
        0.0
    } else {
        change / base * 100.0
    }
}

/// OHLCV du dernier point chronologique, None si la série est vide
///
/// CONCEPT RUST : Option chaining
/// - .last() retourne Option<&PricePoint>
/// - .map() transforme le point en KeyMetrics sans unwrap
pub fn latest_metrics(series: &[PricePoint]) -> Option<KeyMetrics> {
    series.last().map(|p| KeyMetrics {
        open: p.open,
        high: p.high,
        low: p.low,
        volume: p.volume,
    })
}

/// Variation entre la première et la dernière clôture de la période
///
/// Il faut au moins deux points : avec moins, la variation n'est pas définie
/// pour cette période et on retourne None.
pub fn windowed_change(filtered: &[PricePoint]) -> Option<PriceChange> {
    if filtered.len() < 2 {
        return None;
    }

    let first = filtered.first()?.close;
    let last = filtered.last()?.close;
    let change = last - first;

    Some(PriceChange {
        change,
        percentage: percent_change(change, first),
        is_positive: change >= 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn point(day: i64, open: f64, close: f64, volume: u64) -> PricePoint {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap() + Duration::days(day);
        PricePoint::new(date, open, open.max(close) + 1.0, open.min(close) - 1.0, close, volume)
    }

    #[test]
    fn test_latest_metrics_uses_last_point() {
        let series = vec![point(0, 10.0, 11.0, 100), point(1, 11.0, 12.0, 250)];
        let metrics = latest_metrics(&series).unwrap();
        assert_eq!(metrics.open, 11.0);
        assert_eq!(metrics.high, 13.0);
        assert_eq!(metrics.low, 10.0);
        assert_eq!(metrics.volume, 250);
    }

    #[test]
    fn test_latest_metrics_empty() {
        assert!(latest_metrics(&[]).is_none());
    }

    #[test]
    fn test_windowed_change_up() {
        let series = vec![point(0, 100.0, 100.0, 1), point(1, 100.0, 110.0, 1)];
        let change = windowed_change(&series).unwrap();
        assert_eq!(change.change, 10.0);
        assert!((change.percentage - 10.0).abs() < 1e-9);
        assert!(change.is_positive);
    }

    #[test]
    fn test_windowed_change_down() {
        let series = vec![
            point(0, 200.0, 200.0, 1),
            point(1, 200.0, 190.0, 1),
            point(2, 190.0, 150.0, 1),
        ];
        let change = windowed_change(&series).unwrap();
        assert_eq!(change.change, -50.0);
        assert!((change.percentage + 25.0).abs() < 1e-9);
        assert!(!change.is_positive);
    }

    #[test]
    fn test_windowed_change_flat_is_positive() {
        let series = vec![point(0, 5.0, 5.0, 1), point(1, 5.0, 5.0, 1)];
        let change = windowed_change(&series).unwrap();
        assert_eq!(change.change, 0.0);
        assert_eq!(change.percentage, 0.0);
        assert!(change.is_positive);
    }

    #[test]
    fn test_windowed_change_needs_two_points() {
        assert!(windowed_change(&[]).is_none());
        assert!(windowed_change(&[point(0, 1.0, 2.0, 1)]).is_none());
    }

    #[test]
    fn test_windowed_change_zero_first_close() {
        let series = vec![point(0, 0.0, 0.0, 1), point(1, 0.0, 12.0, 1)];
        let change = windowed_change(&series).unwrap();
        assert_eq!(change.change, 12.0);
        assert_eq!(change.percentage, 0.0);
        assert!(change.percentage.is_finite());
    }

    #[test]
    fn test_nan_close_is_propagated() {
        let series = vec![point(0, 1.0, 1.0, 1), point(1, 1.0, f64::NAN, 1)];
        let change = windowed_change(&series).unwrap();
        assert!(change.change.is_nan());
        assert!(change.percentage.is_nan());
        assert!(!change.is_positive);
    }

    #[test]
    fn test_percent_change_zero_base() {
        assert_eq!(percent_change(5.0, 0.0), 0.0);
        assert_eq!(percent_change(-5.0, 0.0), 0.0);
        assert!((percent_change(5.0, 50.0) - 10.0).abs() < 1e-12);
    }
}
