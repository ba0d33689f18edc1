// ============================================================================
// Rapport texte du dashboard
// ============================================================================
// Transforme les modèles de vue en lignes de texte : carte "Top Movers",
// table paginée avec ses boutons, métriques du symbole, jauges de sentiment.
// Ne calcule rien : tout vient des vues.
// ============================================================================

use crate::models::{
    GaugePoint, KeyMetrics, MarketSentiment, PaginatedView, PriceChange, Quote, RankedList,
    TimeWindow,
};
use crate::ui::format::{arrow, format_change, format_percent_change, format_price, truncate};

/// Ligne d'une cotation : "TCS      Tata Consultancy…    ₹3,850.50  ▲ +50.50 (+1.33%)"
pub fn quote_line(quote: &Quote) -> String {
    format!(
        "{:<10} {:<20} {:>14}  {} {} ({})",
        quote.display_symbol(),
        truncate(&quote.company_name, 20),
        format!("₹{}", format_price(quote.current_price)),
        arrow(quote.is_positive()),
        format_change(quote.change),
        format_percent_change(quote.percent_change)
    )
}

/// Carte gainers ou losers
pub fn movers_lines(list: &RankedList) -> Vec<String> {
    let mut lines = vec![format!("== {} ==", list.kind.title())];
    if list.is_empty() {
        lines.push("  (no data)".to_string());
    }
    lines.extend(list.quotes.iter().map(|q| format!("  {}", quote_line(q))));
    lines
}

/// Boutons de pagination : "< Previous  1 [2] 3 4 5  Next >"
pub fn page_buttons(view: &PaginatedView) -> String {
    let numbers: Vec<String> = view
        .page_window
        .iter()
        .map(|&n| {
            if n == view.page {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect();

    let previous = if view.has_previous() { "< Previous" } else { "  Previous" };
    let next = if view.has_next() { "Next >" } else { "Next  " };
    format!("{}  {}  {}", previous, numbers.join(" "), next)
}

/// Table paginée
pub fn table_lines(view: &PaginatedView, query: &str) -> Vec<String> {
    let mut lines = vec![format!(
        "== Market Movers ({} results{}) ==",
        view.total_items,
        if query.is_empty() {
            String::new()
        } else {
            format!(" for '{}'", query)
        }
    )];

    if view.items.is_empty() {
        lines.push("  No stocks found.".to_string());
    }
    lines.extend(view.items.iter().map(|q| format!("  {}", quote_line(q))));

    if view.shows_controls() {
        lines.push(format!(
            "  {}   (page {} of {})",
            page_buttons(view),
            view.page,
            view.total_pages
        ));
    }
    lines
}

/// Métriques du symbole sélectionné
pub fn metrics_lines(
    symbol: &str,
    metrics: Option<KeyMetrics>,
    change: Option<PriceChange>,
    window: TimeWindow,
) -> Vec<String> {
    let mut lines = vec![format!("== {} ==", symbol)];

    match metrics {
        Some(m) => {
            lines.push(format!("  Open   {:>14}", format_price(m.open)));
            lines.push(format!("  High   {:>14}", format_price(m.high)));
            lines.push(format!("  Low    {:>14}", format_price(m.low)));
            lines.push(format!("  Volume {:>14}", m.volume));
        }
        None => lines.push("  No price data.".to_string()),
    }

    match change {
        Some(c) => lines.push(format!(
            "  {} {}₹{} {} ({})",
            arrow(c.is_positive),
            if c.is_positive { "+" } else { "-" },
            format_price(c.change.abs()),
            format_percent_change(c.percentage),
            window
        )),
        None => lines.push(format!("  Not enough data for {}", window)),
    }
    lines
}

/// Jauge de sentiment en une ligne
pub fn gauge_line(record: &MarketSentiment, point: &GaugePoint, needle: f64) -> String {
    format!(
        "  {:<24} {:>5.1}  {:<13} {}  needle {:+.1}°  (x={:.1}, y={:.1})  updated {}",
        truncate(&record.source, 24),
        record.score,
        point.rating.label(),
        point.color,
        needle,
        point.x,
        point.y,
        record.last_updated
    )
}
