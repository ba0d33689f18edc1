// ============================================================================
// TimeWindowFilter : restreint une série à une période glissante
// ============================================================================
// La série d'entrée DOIT déjà être triée par date croissante : le filtre ne
// trie pas. sort_by_date() est fourni pour les appelants dont les données
// arrivent dans le désordre.
//
// CONCEPT RUST : partition_point
// - Recherche binaire sur une slice triée
// - Retourne le premier index où le prédicat devient faux
// ============================================================================

use chrono::{DateTime, Utc};
use tracing::{trace, warn};

use crate::models::{PricePoint, TimeWindow};

/// Restreint la série aux points dont la date est dans [now - période, now]
///
/// Pour des données qui ne sont pas dans le futur, le résultat est le plus
/// long suffixe contigu de la série avec `date >= cutoff`. Les points datés
/// après `now` (décalage d'horloge) sont exclus ; si `now` précède toutes les
/// données, le résultat est vide.
///
/// Ne modifie jamais l'entrée : retourne une nouvelle série.
pub fn filter_window(
    series: &[PricePoint],
    window: TimeWindow,
    now: DateTime<Utc>,
) -> Vec<PricePoint> {
    if series.is_empty() {
        return Vec::new();
    }

    if !is_sorted_by_date(series) {
        warn!(
            points = series.len(),
            "Price series is not sorted by date, window result is unspecified"
        );
    }

    let cutoff = now - window.duration();
    let start = series.partition_point(|p| p.date < cutoff);
    let end = series.partition_point(|p| p.date <= now);

    trace!(
        window = %window,
        %cutoff,
        start,
        end,
        total = series.len(),
        "Filtered price series"
    );

    if start >= end {
        return Vec::new();
    }
    series[start..end].to_vec()
}

/// Trie une série par date croissante (tri stable, idempotent)
///
/// Retourne une copie : l'entrée n'est pas modifiée.
pub fn sort_by_date(series: &[PricePoint]) -> Vec<PricePoint> {
    let mut sorted = series.to_vec();
    sorted.sort_by_key(|p| p.date);
    sorted
}

/// Vérifie que la série est triée par date (non décroissante)
pub fn is_sorted_by_date(series: &[PricePoint]) -> bool {
    series.windows(2).all(|w| w[0].date <= w[1].date)
}

// ============================================================================
// Tests unitaires
// ============================================================================
