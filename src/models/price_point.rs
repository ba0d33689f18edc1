// ============================================================================
// Structure : PricePoint (Open, High, Low, Close, Volume)
// ============================================================================
// Représente une journée de cotation (OHLCV) d'une série de prix
//
// CONCEPTS RUST :
// 1. DateTime<Utc> : type de chrono pour dates avec timezone UTC
// 2. f64 : floating point 64 bits pour les prix
// 3. u64 : unsigned 64 bits pour le volume (toujours positif)
//
// INVARIANT : une série est triée par date croissante, un point par jour
// de cotation, sans date dupliquée. Le tri est la responsabilité de
// l'appelant (voir views::window::sort_by_date).
// ============================================================================

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Période glissante affichée sur le graphique (sélecteur 1W / 1M / 6M / 1Y)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeWindow {
    /// 7 jours
    #[serde(rename = "1W")]
    OneWeek,
    /// 30 jours
    #[serde(rename = "1M")]
    OneMonth,
    /// 180 jours
    #[serde(rename = "6M")]
    SixMonths,
    /// 365 jours
    #[serde(rename = "1Y")]
    OneYear,
}

impl TimeWindow {
    /// Retourne le nombre de jours correspondant
    pub fn to_days(&self) -> i64 {
        match self {
            TimeWindow::OneWeek => 7,
            TimeWindow::OneMonth => 30,
            TimeWindow::SixMonths => 180,
            TimeWindow::OneYear => 365,
        }
    }

    /// Durée chrono de la période (jours calendaires, pas jours de cotation)
    pub fn duration(&self) -> Duration {
        Duration::days(self.to_days())
    }

    /// Retourne le label pour l'affichage
    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::OneWeek => "1W",
            TimeWindow::OneMonth => "1M",
            TimeWindow::SixMonths => "6M",
            TimeWindow::OneYear => "1Y",
        }
    }

    /// Toutes les périodes, dans l'ordre du sélecteur
    pub fn all() -> [TimeWindow; 4] {
        [
            TimeWindow::OneWeek,
            TimeWindow::OneMonth,
            TimeWindow::SixMonths,
            TimeWindow::OneYear,
        ]
    }

    /// Période suivante (cycle)
    pub fn next(&self) -> TimeWindow {
        match self {
            TimeWindow::OneWeek => TimeWindow::OneMonth,
            TimeWindow::OneMonth => TimeWindow::SixMonths,
            TimeWindow::SixMonths => TimeWindow::OneYear,
            TimeWindow::OneYear => TimeWindow::OneWeek, // Boucle
        }
    }

    /// Période précédente (cycle)
    pub fn previous(&self) -> TimeWindow {
        match self {
            TimeWindow::OneWeek => TimeWindow::OneYear, // Boucle
            TimeWindow::OneMonth => TimeWindow::OneWeek,
            TimeWindow::SixMonths => TimeWindow::OneMonth,
            TimeWindow::OneYear => TimeWindow::SixMonths,
        }
    }
}

impl Default for TimeWindow {
    /// Période par défaut : 1 mois
    fn default() -> Self {
        TimeWindow::OneMonth
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parsing depuis un label ("1w", "1M", "6m", "1Y"), insensible à la casse
///
/// CONCEPT RUST : trait FromStr
/// - Permet d'écrire "1M".parse::<TimeWindow>()
/// - Utilisé par clap pour l'argument --window
impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeWindow::all()
            .into_iter()
            .find(|w| w.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("période inconnue '{}' (attendu : 1W, 1M, 6M, 1Y)", s))
    }
}

/// Une journée de cotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Date de la journée (minuit UTC pour les données journalières)
    pub date: DateTime<Utc>,

    /// Prix d'ouverture (Open)
    pub open: f64,

    /// Prix le plus haut (High)
    pub high: f64,

    /// Prix le plus bas (Low)
    pub low: f64,

    /// Prix de clôture (Close)
    pub close: f64,

    /// Volume échangé
    pub volume: u64,
}

impl PricePoint {
    /// Constructeur : crée un nouveau point OHLCV
    pub fn new(
        date: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Vérifie que tous les prix sont des nombres finis
    pub fn has_finite_prices(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|v| v.is_finite())
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_to_days() {
        assert_eq!(TimeWindow::OneWeek.to_days(), 7);
        assert_eq!(TimeWindow::OneMonth.to_days(), 30);
        assert_eq!(TimeWindow::SixMonths.to_days(), 180);
        assert_eq!(TimeWindow::OneYear.to_days(), 365);
        assert_eq!(TimeWindow::OneWeek.duration(), Duration::days(7));
    }

    #[test]
    fn test_window_parse_labels() {
        assert_eq!("1w".parse::<TimeWindow>(), Ok(TimeWindow::OneWeek));
        assert_eq!("6M".parse::<TimeWindow>(), Ok(TimeWindow::SixMonths));
        assert_eq!(" 1Y ".parse::<TimeWindow>(), Ok(TimeWindow::OneYear));
        assert!("2Y".parse::<TimeWindow>().is_err());
    }

    #[test]
    fn test_window_cycle() {
        assert_eq!(TimeWindow::OneWeek.next(), TimeWindow::OneMonth);
        assert_eq!(TimeWindow::OneYear.next(), TimeWindow::OneWeek); // Boucle
        assert_eq!(TimeWindow::OneWeek.previous(), TimeWindow::OneYear);
        for w in TimeWindow::all() {
            assert_eq!(w.next().previous(), w);
        }
    }

    #[test]
    fn test_window_serde_uses_labels() {
        let json = serde_json::to_string(&TimeWindow::SixMonths).unwrap();
        assert_eq!(json, "\"6M\"");
        let parsed: TimeWindow = serde_json::from_str("\"1W\"").unwrap();
        assert_eq!(parsed, TimeWindow::OneWeek);
    }

    #[test]
    fn test_finite_prices() {
        let ok = PricePoint::new(Utc::now(), 1.0, 2.0, 0.5, 1.5, 10);
        assert!(ok.has_finite_prices());

        let bad = PricePoint::new(Utc::now(), 1.0, f64::NAN, 0.5, 1.5, 10);
        assert!(!bad.has_finite_prices());
    }
}
