// ============================================================================
// Module : models
// ============================================================================
// Structures de données : enregistrements immuables échangés entre le
// fournisseur de données, les vues et le rendu
// ============================================================================

pub mod price_point; // Séries OHLCV et périodes
pub mod quote;       // Cotations courantes
pub mod sentiment;   // Score de sentiment et géométrie de jauge
pub mod view;        // Modèles de vue (pages, classements, métriques)

// Re-export des structures principales pour simplifier les imports
// Au lieu de : use lazymarket::models::quote::Quote;
// On peut faire : use lazymarket::models::Quote;
pub use price_point::{PricePoint, TimeWindow};
pub use quote::Quote;
pub use sentiment::{
    GaugeArc, GaugeGeometry, GaugePoint, GaugeSection, GaugeTick, MarketSentiment, Rating,
    SentimentScore,
};
pub use view::{KeyMetrics, MoverKind, Movers, PaginatedView, PriceChange, RankedList};
