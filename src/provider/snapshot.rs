// ============================================================================
// Snapshot du fournisseur de données
// ============================================================================
// Le client de marché (hors de ce crate) résout les erreurs réseau et
// dépose un snapshot JSON ; on le charge ici et on le convertit en modèles.
//
// C'est la frontière de validation : dates malformées, prix non finis,
// volumes négatifs et dates dupliquées sont REJETÉS ici. Les vues, elles,
// ne rejettent jamais rien.
//
// Format :
// {
//   "quotes":       [ { "symbol", "companyName", "currentPrice", "previousClose",
//                       "Change", "PercentChange" } ],
//   "daily_prices": { "TCS.NS": [ { "Date", "Open", "High", "Low", "Close", "Volume" } ] },
//   "sentiment":    [ { "id", "source", "score", "rating", "last_updated", "created_at" } ]
// }
// ============================================================================

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::models::{MarketSentiment, PricePoint, Quote};
use crate::views::window::{is_sorted_by_date, sort_by_date};

// ============================================================================
// Structures brutes : noms de champs exacts du fournisseur
// ============================================================================
// CONCEPT RUST : #[serde(rename = "...")]
// - Le fournisseur mélange camelCase ("companyName") et PascalCase ("Change")
// - On mappe chaque champ vers un nom Rust snake_case
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    quotes: Vec<RawQuote>,
    #[serde(default)]
    daily_prices: BTreeMap<String, Vec<RawDailyPrice>>,
    #[serde(default)]
    sentiment: Vec<MarketSentiment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuote {
    symbol: String,
    company_name: String,
    current_price: f64,
    previous_close: f64,
    #[serde(rename = "Change")]
    change: Option<f64>,
    #[serde(rename = "PercentChange")]
    percent_change: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawDailyPrice {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

/// Données prêtes pour les vues
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Cotations courantes, dans l'ordre du fournisseur
    pub quotes: Vec<Quote>,

    /// Séries journalières par symbole, triées par date croissante
    pub daily_prices: BTreeMap<String, Vec<PricePoint>>,

    /// Scores de sentiment (enregistrements opaques)
    pub sentiment: Vec<MarketSentiment>,
}

impl Snapshot {
    /// Série journalière d'un symbole (vide si inconnue)
    pub fn series(&self, symbol: &str) -> &[PricePoint] {
        self.daily_prices
            .get(symbol)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Recherche une cotation par symbole (insensible à la casse)
    pub fn quote(&self, symbol: &str) -> Option<&Quote> {
        self.quotes
            .iter()
            .find(|q| q.symbol.eq_ignore_ascii_case(symbol))
    }
}

// ============================================================================
// Fonctions publiques
// ============================================================================

/// Charge un snapshot depuis un fichier JSON
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    debug!("Reading snapshot file");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Échec de la lecture du snapshot {}", path.display()))?;

    let snapshot = parse_snapshot(&content)
        .with_context(|| format!("Snapshot invalide : {}", path.display()))?;

    info!(
        quotes = snapshot.quotes.len(),
        series = snapshot.daily_prices.len(),
        sentiment = snapshot.sentiment.len(),
        "Snapshot loaded"
    );
    Ok(snapshot)
}

/// Parse et valide un snapshot JSON
pub fn parse_snapshot(content: &str) -> Result<Snapshot> {
    let raw: RawSnapshot =
        serde_json::from_str(content).context("Échec du parsing JSON du snapshot")?;

    let quotes = raw
        .quotes
        .into_iter()
        .map(convert_quote)
        .collect::<Result<Vec<_>>>()?;

    let mut daily_prices = BTreeMap::new();
    for (symbol, rows) in raw.daily_prices {
        let series = convert_series(&symbol, rows)
            .with_context(|| format!("Série de prix invalide pour {}", symbol))?;
        daily_prices.insert(symbol, series);
    }

    for record in &raw.sentiment {
        if !record.score.is_finite() {
            anyhow::bail!(
                "Score de sentiment non fini pour la source '{}'",
                record.source
            );
        }
    }

    Ok(Snapshot {
        quotes,
        daily_prices,
        sentiment: raw.sentiment,
    })
}

/// Parse une date du fournisseur : RFC 3339 ou "YYYY-MM-DD" (minuit UTC)
pub fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Date invalide : '{}'", value))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .context("Minuit invalide pour cette date")?;
    Ok(midnight.and_utc())
}

// ============================================================================
// Conversion brut -> modèles
// ============================================================================

fn convert_quote(raw: RawQuote) -> Result<Quote> {
    if !(raw.current_price.is_finite() && raw.previous_close.is_finite()) {
        anyhow::bail!("Prix non fini pour la cotation {}", raw.symbol);
    }

    // Le fournisseur envoie déjà Change / PercentChange : on garde ses
    // valeurs (ce sont celles affichées), sinon on les dérive.
    let mut quote = Quote::new(
        raw.symbol,
        raw.company_name,
        raw.current_price,
        raw.previous_close,
    );
    if let Some(change) = raw.change {
        if !change.is_finite() {
            anyhow::bail!("Change non fini pour la cotation {}", quote.symbol);
        }
        quote.change = change;
    }
    if let Some(percent) = raw.percent_change {
        if !percent.is_finite() {
            anyhow::bail!("PercentChange non fini pour la cotation {}", quote.symbol);
        }
        quote.percent_change = percent;
    }

    if !matches_prices(&quote) {
        warn!(
            symbol = %quote.symbol,
            change = quote.change,
            percent_change = quote.percent_change,
            current = quote.current_price,
            previous = quote.previous_close,
            "Provider change does not match prices, keeping provider values"
        );
    }
    Ok(quote)
}

/// Écart toléré entre les valeurs du fournisseur et celles dérivées des prix
/// (le fournisseur arrondit à 2 décimales)
const PROVIDER_TOLERANCE: f64 = 0.01;

/// Vérifie change = current - previous et le pourcentage associé
fn matches_prices(quote: &Quote) -> bool {
    let derived = Quote::new(
        quote.symbol.clone(),
        quote.company_name.clone(),
        quote.current_price,
        quote.previous_close,
    );
    (quote.change - derived.change).abs() <= PROVIDER_TOLERANCE
        && (quote.percent_change - derived.percent_change).abs() <= PROVIDER_TOLERANCE
}

fn convert_series(symbol: &str, rows: Vec<RawDailyPrice>) -> Result<Vec<PricePoint>> {
    let mut series = Vec::with_capacity(rows.len());

    for row in rows {
        let date = parse_date(&row.date)?;

        if !(row.volume.is_finite() && row.volume >= 0.0) {
            anyhow::bail!("Volume invalide le {} : {}", row.date, row.volume);
        }

        let point = PricePoint::new(
            date,
            row.open,
            row.high,
            row.low,
            row.close,
            row.volume.round() as u64,
        );
        if !point.has_finite_prices() {
            anyhow::bail!("Prix non fini le {}", row.date);
        }
        series.push(point);
    }

    if !is_sorted_by_date(&series) {
        warn!(symbol, points = series.len(), "Daily prices not sorted, sorting by date");
        series = sort_by_date(&series);
    }

    // Un point par jour de bourse : "2024-01-01" et "2024-01-01T09:15:00Z" sont le même jour
    if let Some(pair) = series
        .windows(2)
        .find(|w| w[0].date.date_naive() == w[1].date.date_naive())
    {
        anyhow::bail!("Date dupliquée : {}", pair[0].date.date_naive());
    }

    debug!(symbol, points = series.len(), "Converted daily price series");
    Ok(series)
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "quotes": [
            { "symbol": "TCS.NS", "companyName": "Tata Consultancy Services",
              "currentPrice": 3850.5, "previousClose": 3800.0,
              "Change": 50.5, "PercentChange": 1.33 },
            { "symbol": "INFY.NS", "companyName": "Infosys",
              "currentPrice": 1500.0, "previousClose": 1520.0 }
        ],
        "daily_prices": {
            "TCS.NS": [
                { "Date": "2024-01-03", "Open": 3700, "High": 3760, "Low": 3690, "Close": 3750, "Volume": 1200 },
                { "Date": "2024-01-02", "Open": 3650, "High": 3710, "Low": 3640, "Close": 3700, "Volume": 1000 },
                { "Date": "2024-01-04T00:00:00Z", "Open": 3750, "High": 3860, "Low": 3740, "Close": 3850.5, "Volume": 1500.4 }
            ]
        },
        "sentiment": [
            { "id": 1, "source": "CNN Fear & Greed", "score": 62, "rating": "Greed",
              "last_updated": "2024-01-04", "created_at": "2024-01-04T08:00:00Z" }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let snapshot = parse_snapshot(SAMPLE).unwrap();

        assert_eq!(snapshot.quotes.len(), 2);
        let tcs = snapshot.quote("tcs.ns").unwrap();
        assert_eq!(tcs.company_name, "Tata Consultancy Services");
        assert_eq!(tcs.percent_change, 1.33);

        // Change / PercentChange absents : dérivés des prix
        let infy = snapshot.quote("INFY.NS").unwrap();
        assert_eq!(infy.change, -20.0);
        assert!((infy.percent_change + 20.0 / 1520.0 * 100.0).abs() < 1e-9);

        assert_eq!(snapshot.sentiment[0].score, 62.0);
        assert_eq!(snapshot.sentiment[0].rating, "Greed");
    }

    #[test]
    fn test_series_sorted_on_load() {
        let snapshot = parse_snapshot(SAMPLE).unwrap();
        let series = snapshot.series("TCS.NS");

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].date, Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
        assert_eq!(series[2].close, 3850.5);
        assert_eq!(series[2].volume, 1500);
        assert!(snapshot.series("UNKNOWN").is_empty());
    }

    #[test]
    fn test_parse_date_formats() {
        let plain = parse_date("2024-02-29").unwrap();
        assert_eq!(plain, Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());

        let offset = parse_date("2024-02-29T05:30:00+05:30").unwrap();
        assert_eq!(offset, plain);

        assert!(parse_date("29/02/2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_rejects_malformed_date() {
        let json = r#"{ "daily_prices": { "X": [
            { "Date": "not a date", "Open": 1, "High": 1, "Low": 1, "Close": 1, "Volume": 1 }
        ] } }"#;
        let err = parse_snapshot(json).unwrap_err();
        assert!(format!("{:#}", err).contains("not a date"));
    }

    #[test]
    fn test_rejects_negative_volume() {
        let json = r#"{ "daily_prices": { "X": [
            { "Date": "2024-01-01", "Open": 1, "High": 1, "Low": 1, "Close": 1, "Volume": -5 }
        ] } }"#;
        assert!(parse_snapshot(json).is_err());
    }

    #[test]
    fn test_rejects_duplicate_dates() {
        let json = r#"{ "daily_prices": { "X": [
            { "Date": "2024-01-01", "Open": 1, "High": 1, "Low": 1, "Close": 1, "Volume": 1 },
            { "Date": "2024-01-01", "Open": 2, "High": 2, "Low": 2, "Close": 2, "Volume": 1 }
        ] } }"#;
        let err = parse_snapshot(json).unwrap_err();
        assert!(format!("{:#}", err).contains("dupliquée"));
    }

    #[test]
    fn test_rejects_same_day_in_mixed_formats() {
        let json = r#"{ "daily_prices": { "X": [
            { "Date": "2024-01-01", "Open": 1, "High": 1, "Low": 1, "Close": 1, "Volume": 1 },
            { "Date": "2024-01-01T09:15:00Z", "Open": 2, "High": 2, "Low": 2, "Close": 2, "Volume": 1 }
        ] } }"#;
        let err = parse_snapshot(json).unwrap_err();
        assert!(format!("{:#}", err).contains("2024-01-01"));
    }

    #[test]
    fn test_provider_change_consistency() {
        let snapshot = parse_snapshot(SAMPLE).unwrap();
        // 1.33 arrondi de 1.3289... : dans la tolérance
        assert!(matches_prices(snapshot.quote("TCS.NS").unwrap()));

        let mut quote = Quote::new("X.NS".into(), "X".into(), 110.0, 100.0);
        assert!(matches_prices(&quote));
        quote.change = 25.0;
        assert!(!matches_prices(&quote));

        // Incohérent mais conservé : seul un warn! est émis
        let json = r#"{ "quotes": [
            { "symbol": "X.NS", "companyName": "X", "currentPrice": 110, "previousClose": 100,
              "Change": 25, "PercentChange": 25 }
        ] }"#;
        let snapshot = parse_snapshot(json).unwrap();
        assert_eq!(snapshot.quotes[0].change, 25.0);
    }

    #[test]
    fn test_empty_document() {
        let snapshot = parse_snapshot("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn test_load_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let snapshot = load_snapshot(file.path()).unwrap();
        assert_eq!(snapshot.quotes.len(), 2);
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(load_snapshot(file.path()).is_err());
    }
}
