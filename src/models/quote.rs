// ============================================================================
// Structure : Quote
// ============================================================================
// Cotation courante d'une action, telle que fournie par le client de données
//
// INVARIANT :
// - change == current_price - previous_close (à la tolérance flottante près)
// - percent_change == change / previous_close * 100, ou 0 si previous_close == 0
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::views::metrics::percent_change;

/// Suffixe des actions cotées au NSE (ex: "TCS.NS")
const EXCHANGE_SUFFIX: &str = ".NS";

/// Cotation courante d'un symbole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Symbole (ex: "TCS.NS")
    pub symbol: String,

    /// Nom de la société (ex: "Tata Consultancy Services")
    pub company_name: String,

    /// Dernier prix
    pub current_price: f64,

    /// Clôture de la veille
    pub previous_close: f64,

    /// Variation absolue depuis la veille
    pub change: f64,

    /// Variation en pourcentage depuis la veille
    pub percent_change: f64,
}

impl Quote {
    /// Constructeur : dérive change et percent_change depuis les deux prix
    ///
    /// CONCEPT RUST : Ownership
    /// - Les paramètres String sont "moved" dans la fonction
    /// - La Quote devient propriétaire de ces Strings
    pub fn new(
        symbol: String,
        company_name: String,
        current_price: f64,
        previous_close: f64,
    ) -> Self {
        let change = current_price - previous_close;
        Self {
            symbol,
            company_name,
            current_price,
            previous_close,
            change,
            percent_change: percent_change(change, previous_close),
        }
    }

    /// Hausse ou stable (zéro compte comme positif pour les couleurs)
    pub fn is_positive(&self) -> bool {
        self.change >= 0.0
    }

    /// Symbole sans le suffixe de place ".NS" (insensible à la casse)
    pub fn display_symbol(&self) -> &str {
        let len = self.symbol.len();
        let suffix_len = EXCHANGE_SUFFIX.len();
        if len >= suffix_len
            && self.symbol.is_char_boundary(len - suffix_len)
            && self.symbol[len - suffix_len..].eq_ignore_ascii_case(EXCHANGE_SUFFIX)
        {
            &self.symbol[..len - suffix_len]
        } else {
            &self.symbol
        }
    }
}
