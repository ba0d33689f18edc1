// ============================================================================
// Modèles de vue
// ============================================================================
// Enregistrements immuables produits par les vues et remis au rendu.
// Aucun ne contient de callback : uniquement des données.
// ============================================================================

use serde::Serialize;

use crate::models::Quote;

/// Instantané OHLCV de la dernière journée ("today's numbers")
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyMetrics {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
}

/// Performance sur la période sélectionnée
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceChange {
    /// close(dernier) - close(premier)
    pub change: f64,

    /// change / close(premier) * 100, ou 0 si close(premier) == 0
    pub percentage: f64,

    /// change >= 0 (zéro compte comme positif)
    pub is_positive: bool,
}

/// Côté d'un classement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoverKind {
    Gainers,
    Losers,
}

impl MoverKind {
    pub fn title(&self) -> &'static str {
        match self {
            MoverKind::Gainers => "Gainers",
            MoverKind::Losers => "Losers",
        }
    }
}

/// Liste classée, bornée par le cap du classement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedList {
    pub kind: MoverKind,
    pub quotes: Vec<Quote>,
}

impl RankedList {
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Symboles dans l'ordre du classement
    pub fn symbols(&self) -> Vec<&str> {
        self.quotes.iter().map(|q| q.symbol.as_str()).collect()
    }
}

/// Top gainers / top losers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movers {
    pub gainers: RankedList,
    pub losers: RankedList,
}

/// Une page de la table des cotations, avec ses boutons de navigation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedView {
    /// Cotations de la page courante
    pub items: Vec<Quote>,

    /// Page courante (1-indexée)
    pub page: usize,

    pub page_size: usize,

    /// ceil(résultats / page_size) ; 0 si la recherche ne trouve rien
    pub total_pages: usize,

    /// Nombre de cotations après filtrage
    pub total_items: usize,

    /// Numéros de page affichés (jusqu'à 5, consécutifs)
    pub page_window: Vec<usize>,
}

impl PaginatedView {
    /// Le bouton "Previous" est actif
    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }

    /// Le bouton "Next" est actif
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Les contrôles sont masqués quand il n'y a qu'une page
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }
}
