// ============================================================================
// SearchPaginator : recherche texte + découpage en pages
// ============================================================================
// Recherche : sous-chaîne insensible à la casse sur le nom OU le symbole
// (une recherche vide garde tout).
//
// Pagination : pages 1-indexées de `page_size` cotations.
// - total_pages = ceil(résultats / page_size), donc 0 si rien ne correspond
// - page 0 est traitée comme la page 1
// - une page au-delà de total_pages donne une page vide (pas d'erreur)
//
// CONTRAT APPELANT : un changement de recherche remet la page à 1.
// La fonction est pure et prend la page en paramètre ; c'est l'appelant
// (voir app::Dashboard::set_query) qui applique la règle.
// ============================================================================

use tracing::debug;

use crate::models::{PaginatedView, Quote};

/// Lignes par page dans la table des cotations
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Nombre maximum de boutons de page affichés
pub const PAGE_WINDOW_SPAN: usize = 5;

/// Vrai si la cotation correspond à la recherche (déjà en minuscules)
fn matches(quote: &Quote, needle: &str) -> bool {
    needle.is_empty()
        || quote.company_name.to_lowercase().contains(needle)
        || quote.symbol.to_lowercase().contains(needle)
}

/// Filtre les cotations par recherche texte, en conservant l'ordre
pub fn search<'a>(quotes: &'a [Quote], query: &str) -> Vec<&'a Quote> {
    let needle = query.to_lowercase();
    quotes.iter().filter(|q| matches(q, &needle)).collect()
}

/// Nombre de pages pour `count` résultats
///
/// Une taille de page nulle est traitée comme 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Filtre puis découpe la page demandée
pub fn paginate(quotes: &[Quote], query: &str, page: usize, page_size: usize) -> PaginatedView {
    let page_size = page_size.max(1);
    let page = page.max(1);

    let filtered = search(quotes, query);
    let total_items = filtered.len();
    let total_pages = total_pages(total_items, page_size);

    // CONCEPT RUST : skip/take au lieu d'indexer
    // - Pas de panic si la page dépasse la fin : l'itérateur est juste vide
    let items: Vec<Quote> = filtered
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .cloned()
        .collect();

    debug!(
        query,
        page,
        page_size,
        total_items,
        total_pages,
        items = items.len(),
        "Paginated quotes"
    );

    PaginatedView {
        items,
        page,
        page_size,
        total_pages,
        total_items,
        page_window: page_window(page, total_pages),
    }
}

/// Numéros de page affichés autour de la page courante
///
/// - total <= 5          : 1..=total
/// - page <= 3           : 1..=5
/// - page >= total - 2   : total-4..=total
/// - sinon               : page-2..=page+2
pub fn page_window(page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= PAGE_WINDOW_SPAN {
        return (1..=total_pages).collect();
    }
    if page <= 3 {
        return (1..=PAGE_WINDOW_SPAN).collect();
    }
    if page >= total_pages - 2 {
        return (total_pages - 4..=total_pages).collect();
    }
    (page - 2..=page + 2).collect()
}

// ============================================================================
// Tests unitaires
// ============================================================================
