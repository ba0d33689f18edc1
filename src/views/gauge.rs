// ============================================================================
// GaugeMapper : projection d'un score de sentiment sur une jauge
// ============================================================================
// Deux conventions d'angle coexistent et doivent rester distinctes :
// - angle d'ARC    = score/100 * 180 - 180  (0 -> -180° à gauche, 100 -> 0° à droite)
// - angle d'AIGUILLE = score/100 * 180 - 90 (rotation autour du centre,
//   aiguille dessinée verticale au repos)
//
// Les scores hors de [0, 100] sont ramenés dans l'intervalle (avec un warn).
// ============================================================================

use tracing::warn;

use crate::models::{
    GaugeArc, GaugeGeometry, GaugePoint, GaugeSection, GaugeTick, Rating, SentimentScore,
};

/// Graduations affichées autour de l'arc
pub const TICKS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

/// Ramène le score dans [0, 100] ; NaN est laissé tel quel
pub fn clamp_score(score: f64) -> f64 {
    let clamped = score.clamp(0.0, 100.0);
    if clamped != score && !score.is_nan() {
        warn!(score, clamped, "Sentiment score out of range, clamped");
    }
    clamped
}

/// Angle de l'arc en degrés pour un score
pub fn arc_angle(score: f64) -> f64 {
    (score / 100.0) * 180.0 - 180.0
}

/// Angle de rotation de l'aiguille en degrés
pub fn needle_angle(score: f64) -> f64 {
    (clamp_score(score) / 100.0) * 180.0 - 90.0
}

/// Coordonnées cartésiennes d'un score sur un arc de rayon donné
pub fn point_on_arc(score: f64, radius: f64, center: (f64, f64)) -> (f64, f64) {
    let angle = arc_angle(score).to_radians();
    (
        center.0 + radius * angle.cos(),
        center.1 + radius * angle.sin(),
    )
}

/// Score borné + sa bande
pub fn sentiment_score(score: f64) -> SentimentScore {
    let value = clamp_score(score);
    SentimentScore {
        value,
        rating: Rating::from_score(value),
    }
}

/// Position du score sur la jauge, avec sa bande et sa couleur
pub fn map_score(score: f64, geometry: &GaugeGeometry) -> GaugePoint {
    let score = sentiment_score(score);
    let (x, y) = point_on_arc(score.value, geometry.radius, geometry.center);

    GaugePoint {
        x,
        y,
        angle_deg: arc_angle(score.value),
        rating: score.rating,
        color: score.color(),
    }
}

/// Les cinq sections colorées de la jauge
///
/// Les sections sont séparées par un demi-point (25 / 25.5, 44 / 44.5...)
/// pour laisser un espace visible entre deux couleurs.
pub fn sections() -> [GaugeSection; 5] {
    const BOUNDS: [(f64, f64); 5] = [(0.0, 25.0), (25.5, 44.0), (44.5, 55.0), (55.5, 75.0), (75.5, 100.0)];
    let ratings = Rating::all();
    std::array::from_fn(|i| GaugeSection {
        rating: ratings[i],
        start: BOUNDS[i].0,
        end: BOUNDS[i].1,
    })
}

/// Sections projetées sur l'arc
pub fn section_arcs(geometry: &GaugeGeometry) -> Vec<GaugeArc> {
    sections()
        .into_iter()
        .map(|section| GaugeArc {
            section,
            from: point_on_arc(section.start, geometry.radius, geometry.center),
            to: point_on_arc(section.end, geometry.radius, geometry.center),
        })
        .collect()
}

/// Graduations placées à `radius + tick_offset`
pub fn ticks(geometry: &GaugeGeometry) -> Vec<GaugeTick> {
    let radius = geometry.radius + geometry.tick_offset;
    TICKS
        .iter()
        .map(|&value| {
            let (x, y) = point_on_arc(value, radius, geometry.center);
            GaugeTick { value, x, y }
        })
        .collect()
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_documented_scores() {
        let geometry = GaugeGeometry::default();

        let low = map_score(0.0, &geometry);
        assert_eq!(low.rating, Rating::ExtremeFear);
        assert_eq!(low.rating.label(), "Extreme Fear");
        assert!(close(low.angle_deg, -180.0));
        assert!(close(low.x, 60.0));
        assert!(close(low.y, 140.0));

        let mid = map_score(50.0, &geometry);
        assert_eq!(mid.rating.label(), "Neutral");
        assert!(close(mid.angle_deg, -90.0));
        assert!(close(mid.x, 160.0));
        assert!(close(mid.y, 40.0));

        let high = map_score(100.0, &geometry);
        assert_eq!(high.rating.label(), "Extreme Greed");
        assert!(close(high.angle_deg, 0.0));
        assert!(close(high.x, 260.0));
        assert!(close(high.y, 140.0));
        assert_eq!(high.color, "#16a34a");
    }

    #[test]
    fn test_needle_angle() {
        assert!(close(needle_angle(0.0), -90.0));
        assert!(close(needle_angle(50.0), 0.0));
        assert!(close(needle_angle(100.0), 90.0));
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let geometry = GaugeGeometry::default();
        assert_eq!(map_score(-20.0, &geometry), map_score(0.0, &geometry));
        assert_eq!(map_score(140.0, &geometry), map_score(100.0, &geometry));
        assert!(close(needle_angle(250.0), 90.0));
    }

    #[test]
    fn test_nan_score_is_propagated() {
        let point = map_score(f64::NAN, &GaugeGeometry::default());
        assert!(point.x.is_nan());
        assert!(point.angle_deg.is_nan());
    }

    #[test]
    fn test_section_arcs_follow_bands() {
        let geometry = GaugeGeometry::default();
        let arcs = section_arcs(&geometry);
        assert_eq!(arcs.len(), 5);
        assert_eq!(arcs[0].section.rating, Rating::ExtremeFear);
        assert!(close(arcs[0].from.0, 60.0));
        assert!(close(arcs[4].to.0, 260.0));

        for arc in &arcs {
            assert_eq!(Rating::from_score(arc.section.end), arc.section.rating);
        }
    }

    #[test]
    fn test_ticks_outside_arc() {
        let geometry = GaugeGeometry::default();
        let ticks = ticks(&geometry);
        assert_eq!(ticks.len(), 5);
        assert!(close(ticks[0].x, 160.0 - 122.0));
        assert!(close(ticks[2].y, 140.0 - 122.0));
    }
}
