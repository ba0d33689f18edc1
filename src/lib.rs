// ============================================================================
// LazyMarket - Library
// ============================================================================
// Pipeline de vues pour un dashboard de recherche boursière : période
// glissante, métriques, top movers, recherche paginée, jauge de sentiment.
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod app;      // État de vue du dashboard (appelant des vues)
pub mod config;   // Configuration des vues
pub mod models;   // Structures de données
pub mod provider; // Snapshots du fournisseur de données
pub mod ui;       // Rendu texte
pub mod views;    // Fonctions pures du pipeline
