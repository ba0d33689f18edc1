// ============================================================================
// Module : provider
// ============================================================================
// Frontière avec le client de données de marché : chargement et validation
// des snapshots (cotations, séries journalières, sentiment)
// ============================================================================

pub mod snapshot; // Snapshot JSON du fournisseur

// Re-export des fonctions principales
pub use snapshot::{load_snapshot, parse_snapshot, Snapshot};
