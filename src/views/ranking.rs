// ============================================================================
// RankingEngine : top gainers / top losers
// ============================================================================
// Trie une COPIE des cotations par percent_change décroissant :
// - gainers = les `cap` premiers
// - losers  = les `cap` derniers, inversés (le plus négatif en tête)
//
// Si la collection est plus petite que le cap, les deux listes se
// recouvrent : c'est accepté (on prend les extrêmes de ce qui existe).
// ============================================================================

use std::cmp::Ordering;

use tracing::debug;

use crate::models::{MoverKind, Movers, Quote, RankedList};

/// Nombre de cotations par liste sur la carte "Top Movers"
pub const DEFAULT_MOVERS_CAP: usize = 5;

/// Classe les cotations en gainers et losers
///
/// Tri stable : à percent_change égal, l'ordre d'entrée est conservé.
/// Déterministe : même entrée, même sortie.
pub fn rank(quotes: &[Quote], cap_each: usize) -> Movers {
    // CONCEPT RUST : Vec::sort_by est un tri stable
    // - On trie des références : pas de clone avant la sélection
    let mut sorted: Vec<&Quote> = quotes.iter().collect();
    sorted.sort_by(|a, b| descending(a.percent_change, b.percent_change));

    let gainers: Vec<Quote> = sorted.iter().take(cap_each).map(|q| (*q).clone()).collect();
    let losers: Vec<Quote> = sorted
        .iter()
        .rev()
        .take(cap_each)
        .map(|q| (*q).clone())
        .collect();

    debug!(
        quotes = quotes.len(),
        cap = cap_each,
        gainers = gainers.len(),
        losers = losers.len(),
        "Ranked top movers"
    );

    Movers {
        gainers: RankedList {
            kind: MoverKind::Gainers,
            quotes: gainers,
        },
        losers: RankedList {
            kind: MoverKind::Losers,
            quotes: losers,
        },
    }
}

/// Ordre décroissant total sur les pourcentages
///
/// Les valeurs égales (y compris 0.0 et -0.0) restent Equal pour garder le
/// tri stable ; un NaN est classé après tous les nombres (en queue des
/// gainers, donc en tête des losers).
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(symbol: &str, percent: f64) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            company_name: format!("{} Ltd", symbol),
            current_price: 100.0 + percent,
            previous_close: 100.0,
            change: percent,
            percent_change: percent,
        }
    }

    #[test]
    fn test_empty_input() {
        let movers = rank(&[], DEFAULT_MOVERS_CAP);
        assert!(movers.gainers.is_empty());
        assert!(movers.losers.is_empty());
    }

    #[test]
    fn test_gainers_and_losers_order() {
        let quotes: Vec<Quote> = [3.0, -1.0, 7.5, 0.0, -4.2, 1.1, 2.0, -0.5]
            .iter()
            .enumerate()
            .map(|(i, p)| quote(&format!("S{}", i), *p))
            .collect();

        let movers = rank(&quotes, 5);
        let gainers: Vec<f64> = movers.gainers.quotes.iter().map(|q| q.percent_change).collect();
        let losers: Vec<f64> = movers.losers.quotes.iter().map(|q| q.percent_change).collect();

        assert_eq!(gainers, vec![7.5, 3.0, 2.0, 1.1, 0.0]);
        assert_eq!(losers, vec![-4.2, -1.0, -0.5, 0.0, 1.1]);
        assert_eq!(movers.gainers.kind, MoverKind::Gainers);
        assert_eq!(movers.losers.kind, MoverKind::Losers);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let quotes = vec![quote("A", 5.0), quote("B", 5.0), quote("C", -3.0)];
        let movers = rank(&quotes, 5);
        assert_eq!(movers.gainers.symbols(), vec!["A", "B", "C"]);
        // Les losers sont la fin du tri inversée : B passe avant A
        assert_eq!(movers.losers.symbols(), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_small_collections_overlap() {
        let quotes = vec![quote("X", 1.0), quote("Y", -1.0)];
        let movers = rank(&quotes, 5);
        assert_eq!(movers.gainers.len(), 2);
        assert_eq!(movers.losers.len(), 2);
        assert_eq!(movers.gainers.symbols(), vec!["X", "Y"]);
        assert_eq!(movers.losers.symbols(), vec!["Y", "X"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let quotes = vec![quote("A", -1.0), quote("B", 2.0)];
        let before = quotes.clone();
        let _ = rank(&quotes, 1);
        assert_eq!(quotes, before);
    }

    #[test]
    fn test_deterministic() {
        let quotes: Vec<Quote> = (0..20).map(|i| quote(&format!("Q{}", i), (i % 4) as f64)).collect();
        assert_eq!(rank(&quotes, 5), rank(&quotes, 5));
    }

    #[test]
    fn test_nan_is_ranked_last() {
        let quotes = vec![quote("N", f64::NAN), quote("A", 1.0), quote("B", -1.0)];
        let movers = rank(&quotes, 1);
        assert_eq!(movers.gainers.symbols(), vec!["A"]);
        assert_eq!(movers.losers.symbols(), vec!["N"]);
    }

    #[test]
    fn test_signed_zero_ties_are_stable() {
        let quotes = vec![quote("P", 0.0), quote("M", -0.0)];
        let movers = rank(&quotes, 2);
        assert_eq!(movers.gainers.symbols(), vec!["P", "M"]);
    }
}
