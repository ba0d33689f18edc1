// ============================================================================
// Memo : cache à une entrée pour les vues dérivées
// ============================================================================
// Les vues sont pures : les recalculer à chaque rafraîchissement est correct
// mais coûteux (tri O(n log n), filtres O(n)). Memo garde le dernier
// résultat et ne recalcule que si la clé change.
//
// La clé doit identifier l'entrée (version des données) ET les paramètres.
// ============================================================================

use tracing::trace;

/// Cache à une entrée : (clé, valeur) du dernier calcul
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
    hits: u64,
    misses: u64,
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            slot: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Retourne la valeur mémorisée pour `key`, ou la calcule avec `compute`
    ///
    /// CONCEPT RUST : FnOnce
    /// - La closure n'est appelée qu'en cas de miss
    /// - Elle peut emprunter d'autres champs de l'appelant
    pub fn get_or_compute<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce() -> V,
    {
        let hit = matches!(&self.slot, Some((cached, _)) if *cached == key);
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
            trace!(misses = self.misses, "Memo miss, recomputing view");
            self.slot = None;
        }
        &self.slot.get_or_insert_with(|| (key, compute())).1
    }

    /// Oublie la valeur mémorisée
    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl<K: PartialEq, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
