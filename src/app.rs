// ============================================================================
// Structure : Dashboard
// ============================================================================
// État de vue du dashboard : c'est l'APPELANT des vues pures.
//
// - Garde les collections chargées (cotations, série du symbole sélectionné)
//   avec un numéro de version incrémenté à chaque nouvelle donnée
// - Garde les paramètres de vue (recherche, page, période)
// - Applique les règles côté appelant : une nouvelle recherche remet la
//   page à 1, la navigation reste dans [1, total_pages]
// - Mémorise les vues dérivées par (version, paramètres)
//
// PATTERN : "Application State"
// - Le rendu lit les vues depuis Dashboard
// - Toutes les modifications passent par les méthodes de Dashboard
// ============================================================================

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::ViewConfig;
use crate::models::{
    GaugeArc, GaugePoint, GaugeTick, KeyMetrics, Movers, PaginatedView, PriceChange, PricePoint,
    Quote, TimeWindow,
};
use crate::views::{self, Memo};

/// Clé de la table : (version des cotations, recherche, page, taille)
type TableKey = (u64, String, usize, usize);

/// Clé des movers : (version des cotations, cap)
type MoversKey = (u64, usize);

/// Clé de la série filtrée : (version de la série, période, now)
type WindowKey = (u64, TimeWindow, DateTime<Utc>);

/// État de vue du dashboard
pub struct Dashboard {
    /// Paramètres (taille de page, cap, géométrie de jauge)
    pub config: ViewConfig,

    /// Cotations courantes
    quotes: Vec<Quote>,
    quotes_version: u64,

    /// Série journalière du symbole sélectionné, triée par date
    series: Vec<PricePoint>,
    series_version: u64,

    /// Texte de recherche de la table
    pub query: String,

    /// Page courante de la table (1-indexée)
    pub page: usize,

    /// Période sélectionnée pour le graphique
    pub window: TimeWindow,

    movers_memo: Memo<MoversKey, Movers>,
    table_memo: Memo<TableKey, PaginatedView>,
    window_memo: Memo<WindowKey, Vec<PricePoint>>,
}

impl Dashboard {
    /// Crée un dashboard vide
    pub fn new(config: ViewConfig) -> Self {
        let window = config.default_window;
        Self {
            config,
            quotes: Vec::new(),
            quotes_version: 0,
            series: Vec::new(),
            series_version: 0,
            query: String::new(),
            page: 1,
            window,
            movers_memo: Memo::new(),
            table_memo: Memo::new(),
            window_memo: Memo::new(),
        }
    }

    // ========================================================================
    // Données
    // ========================================================================

    /// Remplace les cotations (nouvelles données du fournisseur)
    pub fn set_quotes(&mut self, quotes: Vec<Quote>) {
        self.quotes = quotes;
        self.quotes_version += 1;
        debug!(quotes = self.quotes.len(), version = self.quotes_version, "Quotes updated");
    }

    /// Remplace la série du symbole sélectionné
    ///
    /// La série est triée ici : le filtre de période exige une entrée triée.
    pub fn set_series(&mut self, series: &[PricePoint]) {
        self.series = views::sort_by_date(series);
        self.series_version += 1;
        debug!(points = self.series.len(), version = self.series_version, "Series updated");
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn series(&self) -> &[PricePoint] {
        &self.series
    }

    // ========================================================================
    // Recherche et pagination
    // ========================================================================

    /// Change la recherche ; un changement effectif remet la page à 1
    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
            self.page = 1;
            debug!(query, "Search changed, page reset to 1");
        }
    }

    /// Va à une page, bornée à [1, total_pages]
    pub fn go_to_page(&mut self, page: usize) {
        let total = self.table().total_pages;
        self.page = page.clamp(1, total.max(1));
    }

    /// Page suivante (reste sur la dernière)
    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    /// Page précédente (reste sur la première)
    ///
    /// CONCEPT RUST : saturating_sub évite le panic en dessous de 0
    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    /// Page courante de la table des cotations
    pub fn table(&mut self) -> &PaginatedView {
        let key = (
            self.quotes_version,
            self.query.clone(),
            self.page,
            self.config.page_size,
        );
        // Emprunts disjoints : la closure lit quotes/query pendant que le memo est modifié
        let quotes = &self.quotes;
        let query = &self.query;
        let (page, page_size) = (self.page, self.config.page_size);
        self.table_memo
            .get_or_compute(key, || views::paginate(quotes, query, page, page_size))
    }

    // ========================================================================
    // Classement
    // ========================================================================

    /// Top gainers / losers des cotations courantes
    pub fn movers(&mut self) -> &Movers {
        let quotes = &self.quotes;
        let cap = self.config.movers_cap;
        self.movers_memo
            .get_or_compute((self.quotes_version, cap), || views::rank(quotes, cap))
    }

    // ========================================================================
    // Période et métriques
    // ========================================================================

    pub fn select_window(&mut self, window: TimeWindow) {
        self.window = window;
    }

    pub fn next_window(&mut self) {
        self.window = self.window.next();
    }

    pub fn previous_window(&mut self) {
        self.window = self.window.previous();
    }

    /// Série restreinte à la période sélectionnée
    pub fn windowed_series(&mut self, now: DateTime<Utc>) -> &[PricePoint] {
        let series = &self.series;
        let window = self.window;
        self.window_memo
            .get_or_compute((self.series_version, window, now), || {
                views::filter_window(series, window, now)
            })
    }

    /// Chiffres du jour : dernier point de la série COMPLÈTE
    pub fn key_metrics(&self) -> Option<KeyMetrics> {
        views::latest_metrics(&self.series)
    }

    /// Performance sur la période sélectionnée
    pub fn price_change(&mut self, now: DateTime<Utc>) -> Option<PriceChange> {
        views::windowed_change(self.windowed_series(now))
    }

    // ========================================================================
    // Jauge de sentiment
    // ========================================================================

    pub fn gauge(&self, score: f64) -> GaugePoint {
        views::map_score(score, &self.config.gauge)
    }

    pub fn gauge_arcs(&self) -> Vec<GaugeArc> {
        views::section_arcs(&self.config.gauge)
    }

    pub fn gauge_ticks(&self) -> Vec<GaugeTick> {
        views::ticks(&self.config.gauge)
    }

    /// Statistiques des caches (hits, misses) : movers, table, période
    pub fn memo_stats(&self) -> [(u64, u64); 3] {
        [
            (self.movers_memo.hits(), self.movers_memo.misses()),
            (self.table_memo.hits(), self.table_memo.misses()),
            (self.window_memo.hits(), self.window_memo.misses()),
        ]
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
