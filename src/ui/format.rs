// ============================================================================
// Formatage des nombres pour l'affichage
// ============================================================================
// Prix au format indien (en-IN) : les trois derniers chiffres, puis des
// groupes de deux -> 1,23,456.78
// ============================================================================

/// Formate un prix avec deux décimales et le groupement indien
///
/// Les valeurs non finies sont affichées telles quelles ("NaN", "inf").
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return price.to_string();
    }

    let fixed = format!("{:.2}", price.abs());
    let (integer, decimals) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if price < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!("{}{}.{}", sign, group_indian(integer), decimals)
}

/// Groupement indien d'une chaîne de chiffres
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);

    // CONCEPT RUST : itérer par paires depuis la droite
    // - On groupe la tête par 2 en partant de la fin, puis on remet dans l'ordre
    let head_chars: Vec<char> = head.chars().collect();
    let mut groups: Vec<String> = head_chars
        .rchunks(2)
        .map(|chunk| chunk.iter().collect())
        .collect();
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

/// Variation signée : "+12.30" / "-4.00"
pub fn format_change(change: f64) -> String {
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{}{}", sign, format_price(change))
}

/// Pourcentage signé : "+1.23%" / "-0.50%"
pub fn format_percent_change(percent: f64) -> String {
    let sign = if percent >= 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, percent)
}

/// Flèche de tendance
pub fn arrow(is_positive: bool) -> &'static str {
    if is_positive {
        "▲"
    } else {
        "▼"
    }
}

/// Tronque un nom à `max` caractères avec une ellipse
pub fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let truncated: String = name.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
