// ============================================================================
// Module : views
// ============================================================================
// Pipeline de vues : fonctions pures et sans état qui transforment les
// collections brutes (cotations, séries de prix) en vues bornées, filtrées,
// classées et paginées pour le rendu.
//
// Aucune fonction ne fait d'I/O, ne lit l'horloge ni ne garde d'état :
// "now", la page et la recherche sont des paramètres explicites.
// ============================================================================

pub mod gauge;      // GaugeMapper : score -> position sur la jauge
pub mod memo;       // Cache à une entrée pour l'appelant
pub mod metrics;    // MetricsDeriver : métriques du jour / variation sur la période
pub mod pagination; // SearchPaginator : recherche + pages
pub mod ranking;    // RankingEngine : top gainers / losers
pub mod window;     // TimeWindowFilter : période glissante

// Re-exports des fonctions principales
pub use gauge::{map_score, needle_angle, section_arcs, ticks};
pub use memo::Memo;
pub use metrics::{latest_metrics, windowed_change};
pub use pagination::{page_window, paginate, search};
pub use ranking::rank;
pub use window::{filter_window, sort_by_date};
