// ============================================================================
// Module : ui
// ============================================================================
// Rendu texte des modèles de vue (le rendu graphique est hors de ce crate)
// ============================================================================

pub mod format; // Formatage des prix et pourcentages
pub mod report; // Lignes du rapport dashboard

// Re-exports pour simplifier les imports
pub use format::{format_change, format_percent_change, format_price};
pub use report::{gauge_line, metrics_lines, movers_lines, table_lines};
