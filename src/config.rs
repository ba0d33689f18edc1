// ============================================================================
// Configuration des vues
// ============================================================================
// Taille des pages, cap du classement, géométrie de la jauge, période par
// défaut. Chargée depuis un fichier JSON optionnel ; chaque champ absent
// prend sa valeur par défaut.
//
// Exemple :
// { "page_size": 10, "gauge": { "radius": 120 }, "default_window": "6M" }
// ============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::models::{GaugeGeometry, TimeWindow};
use crate::views::pagination::DEFAULT_PAGE_SIZE;
use crate::views::ranking::DEFAULT_MOVERS_CAP;

/// Paramètres des vues du dashboard
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Lignes par page de la table des cotations
    pub page_size: usize,

    /// Nombre de cotations par liste "Top Movers"
    pub movers_cap: usize,

    /// Géométrie de la jauge de sentiment
    pub gauge: GaugeGeometry,

    /// Période sélectionnée au démarrage
    pub default_window: TimeWindow,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            movers_cap: DEFAULT_MOVERS_CAP,
            gauge: GaugeGeometry::default(),
            default_window: TimeWindow::default(),
        }
    }
}

impl ViewConfig {
    /// Charge la configuration, ou les valeurs par défaut si pas de fichier
    pub fn load(path: Option<&Path>) -> Result<ViewConfig> {
        let Some(path) = path else {
            debug!("No config file given, using defaults");
            return Ok(ViewConfig::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Échec de la lecture de la configuration {}", path.display()))?;
        let config = ViewConfig::from_json(&content)
            .with_context(|| format!("Configuration invalide : {}", path.display()))?;

        info!(path = %path.display(), ?config, "Configuration loaded");
        Ok(config)
    }

    /// Parse et valide une configuration JSON
    pub fn from_json(content: &str) -> Result<ViewConfig> {
        let config: ViewConfig =
            serde_json::from_str(content).context("Échec du parsing JSON de la configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Rejette les valeurs qui rendraient les vues dégénérées
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("page_size doit être supérieur à 0");
        }
        if self.movers_cap == 0 {
            anyhow::bail!("movers_cap doit être supérieur à 0");
        }
        if !(self.gauge.radius.is_finite() && self.gauge.radius > 0.0) {
            anyhow::bail!("gauge.radius doit être un nombre positif (reçu {})", self.gauge.radius);
        }
        let (cx, cy) = self.gauge.center;
        if !(cx.is_finite() && cy.is_finite() && self.gauge.tick_offset.is_finite()) {
            anyhow::bail!("gauge.center et gauge.tick_offset doivent être finis");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.movers_cap, 5);
        assert_eq!(config.gauge.radius, 100.0);
        assert_eq!(config.gauge.center, (160.0, 140.0));
        assert_eq!(config.default_window, TimeWindow::OneMonth);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            ViewConfig::from_json(r#"{ "page_size": 10, "gauge": { "radius": 120 }, "default_window": "6M" }"#)
                .unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.movers_cap, 5);
        assert_eq!(config.gauge.radius, 120.0);
        assert_eq!(config.gauge.center, (160.0, 140.0));
        assert_eq!(config.default_window, TimeWindow::SixMonths);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(ViewConfig::from_json(r#"{ "page_size": 0 }"#).is_err());
        assert!(ViewConfig::from_json(r#"{ "movers_cap": 0 }"#).is_err());
        assert!(ViewConfig::from_json(r#"{ "gauge": { "radius": -1 } }"#).is_err());
        assert!(ViewConfig::from_json(r#"{ "default_window": "2Y" }"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "movers_cap": 3 }}"#).unwrap();

        let config = ViewConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.movers_cap, 3);

        assert_eq!(ViewConfig::load(None).unwrap(), ViewConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let result = ViewConfig::load(Some(Path::new("/nonexistent/lazymarket.json")));
        assert!(result.is_err());
    }
}
