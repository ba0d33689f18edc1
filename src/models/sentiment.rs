// ============================================================================
// Sentiment de marché : score, bandes qualitatives et géométrie de la jauge
// ============================================================================
// Le score (0-100) est produit par le backend ; on ne fait que le projeter
// sur une jauge semi-circulaire et lui associer une bande (Fear / Greed).
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bande qualitative d'un score de sentiment (bornes supérieures inclusives)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// score <= 25
    ExtremeFear,
    /// score <= 44
    Fear,
    /// score <= 55
    Neutral,
    /// score <= 75
    Greed,
    /// au-delà
    ExtremeGreed,
}

impl Rating {
    /// Bande correspondant au score
    ///
    /// Un score NaN ne satisfait aucune borne et tombe dans la dernière bande.
    pub fn from_score(score: f64) -> Rating {
        if score <= 25.0 {
            Rating::ExtremeFear
        } else if score <= 44.0 {
            Rating::Fear
        } else if score <= 55.0 {
            Rating::Neutral
        } else if score <= 75.0 {
            Rating::Greed
        } else {
            Rating::ExtremeGreed
        }
    }

    /// Libellé affiché sous le score
    pub fn label(&self) -> &'static str {
        match self {
            Rating::ExtremeFear => "Extreme Fear",
            Rating::Fear => "Fear",
            Rating::Neutral => "Neutral",
            Rating::Greed => "Greed",
            Rating::ExtremeGreed => "Extreme Greed",
        }
    }

    /// Couleur fixe de la bande (hex CSS)
    pub fn color(&self) -> &'static str {
        match self {
            Rating::ExtremeFear => "#ef4444",
            Rating::Fear => "#f97316",
            Rating::Neutral => "#eab308",
            Rating::Greed => "#10b981",
            Rating::ExtremeGreed => "#16a34a",
        }
    }

    /// Toutes les bandes, de la peur à l'avidité
    pub fn all() -> [Rating; 5] {
        [
            Rating::ExtremeFear,
            Rating::Fear,
            Rating::Neutral,
            Rating::Greed,
            Rating::ExtremeGreed,
        ]
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score borné dans [0, 100] avec sa bande
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScore {
    pub value: f64,
    pub rating: Rating,
}

impl SentimentScore {
    pub fn color(&self) -> &'static str {
        self.rating.color()
    }
}

/// Géométrie de la jauge (coordonnées SVG)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeGeometry {
    /// Rayon de l'arc
    pub radius: f64,

    /// Centre (cx, cy) du demi-cercle
    pub center: (f64, f64),

    /// Décalage des graduations à l'extérieur de l'arc
    pub tick_offset: f64,
}

impl Default for GaugeGeometry {
    /// Géométrie de la carte "Market Sentiment" (viewBox 320x160)
    fn default() -> Self {
        Self {
            radius: 100.0,
            center: (160.0, 140.0),
            tick_offset: 22.0,
        }
    }
}

/// Position d'un score sur l'arc, avec sa bande
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugePoint {
    pub x: f64,
    pub y: f64,
    /// Angle de l'arc en degrés (-180 à gauche, 0 à droite)
    pub angle_deg: f64,
    pub rating: Rating,
    pub color: &'static str,
}

/// Section colorée de la jauge, entre deux scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeSection {
    pub rating: Rating,
    pub start: f64,
    pub end: f64,
}

/// Section projetée sur l'arc : points de départ et d'arrivée
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeArc {
    pub section: GaugeSection,
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// Graduation (0, 25, 50, 75, 100) placée à l'extérieur de l'arc
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeTick {
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Enregistrement "market sentiment" produit par le backend
///
/// Opaque pour le cœur : seul `score` est interprété, `rating` est conservé
/// tel que le backend l'a calculé.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSentiment {
    pub id: i64,
    pub source: String,
    pub score: f64,
    pub rating: String,
    pub last_updated: String,
    pub created_at: String,
}
