// ============================================================================
// LazyMarket - Dashboard texte
// ============================================================================
// Charge un snapshot du fournisseur de données (JSON), passe les données dans
// le pipeline de vues et affiche : top movers, table paginée, métriques du
// symbole sélectionné, jauges de sentiment.
//
// Usage :
//   lazymarket --snapshot data.json --query tcs --page 2 --window 6M --symbol TCS.NS
//
// Logs :
//   tail -f ./logs/lazymarket.log
//   RUST_LOG=lazymarket=trace lazymarket --snapshot data.json
// ============================================================================

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::{debug, error, info, warn};

use lazymarket::app::Dashboard;
use lazymarket::config::ViewConfig;
use lazymarket::models::TimeWindow;
use lazymarket::provider::{load_snapshot, snapshot::parse_date, Snapshot};
use lazymarket::ui::{gauge_line, metrics_lines, movers_lines, table_lines};
use lazymarket::views::needle_angle;

/// Arguments de la ligne de commande
#[derive(Debug, Parser)]
#[command(name = "lazymarket", version, about = "Market dashboard views from a provider snapshot")]
struct Args {
    /// Snapshot JSON du fournisseur (quotes, daily_prices, sentiment)
    #[arg(long)]
    snapshot: PathBuf,

    /// Fichier de configuration JSON (valeurs par défaut sinon)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Recherche dans la table (nom ou symbole)
    #[arg(long, default_value = "")]
    query: String,

    /// Page de la table (1-indexée)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Période du graphique : 1W, 1M, 6M, 1Y
    #[arg(long)]
    window: Option<TimeWindow>,

    /// Symbole dont on affiche les métriques (premier gainer sinon)
    #[arg(long)]
    symbol: Option<String>,

    /// Horloge injectée (RFC 3339 ou YYYY-MM-DD), maintenant sinon
    #[arg(long, value_parser = parse_now)]
    now: Option<DateTime<Utc>>,
}

fn parse_now(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    parse_date(value).map_err(|e| format!("{:#}", e))
}

// ============================================================================
// Initialisation du logging
// ============================================================================
// Les logs vont dans un fichier pour ne pas polluer le rapport sur stdout.
// Rotation quotidienne : ./logs/lazymarket.log.2024-01-15
// ============================================================================

/// Initialise le système de logging vers fichier
///
/// Le niveau se contrôle avec RUST_LOG (par défaut : debug pour lazymarket,
/// info pour les dépendances).
fn init_logging() -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = PathBuf::from("./logs");
    std::fs::create_dir_all(&log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir.clone(), "lazymarket.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lazymarket=debug,info".into()),
        )
        .try_init()
        .context("Échec de l'initialisation du subscriber tracing")?;

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

fn main() -> Result<()> {
    // Logging avant tout le reste ; un échec n'empêche pas le rapport
    init_logging().unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {:#}", e);
        eprintln!("   Continuing without logging...");
    });

    let args = Args::parse();
    info!(?args, "LazyMarket starting up");

    let result = run(&args);
    match &result {
        Ok(()) => info!("Report printed"),
        Err(e) => error!(error = ?e, "LazyMarket exited with error"),
    }
    result
}

/// Construit les vues et imprime le rapport
fn run(args: &Args) -> Result<()> {
    let config = ViewConfig::load(args.config.as_deref())?;
    let snapshot = load_snapshot(&args.snapshot)?;
    let now = args.now.unwrap_or_else(Utc::now);
    debug!(%now, "Using clock");

    let mut dashboard = Dashboard::new(config);
    dashboard.set_quotes(snapshot.quotes.clone());
    dashboard.set_query(&args.query);
    dashboard.go_to_page(args.page);
    if dashboard.page != args.page.max(1) {
        warn!(requested = args.page, page = dashboard.page, "Requested page out of range, clamped");
    }
    if let Some(window) = args.window {
        dashboard.select_window(window);
    }

    // Top movers
    let movers = dashboard.movers().clone();
    print_lines(movers_lines(&movers.gainers));
    print_lines(movers_lines(&movers.losers));
    println!();

    // Table paginée
    let table = dashboard.table().clone();
    print_lines(table_lines(&table, &dashboard.query));
    println!();

    // Métriques du symbole sélectionné
    let symbol = selected_symbol(args, &snapshot, &movers.gainers.quotes);
    if let Some(symbol) = symbol {
        dashboard.set_series(snapshot.series(&symbol));
        let metrics = dashboard.key_metrics();
        let change = dashboard.price_change(now);
        print_lines(metrics_lines(&symbol, metrics, change, dashboard.window));
        println!();
    }

    // Jauges de sentiment
    if !snapshot.sentiment.is_empty() {
        println!("== Market Sentiment ==");
        for record in &snapshot.sentiment {
            let point = dashboard.gauge(record.score);
            println!("{}", gauge_line(record, &point, needle_angle(record.score)));
        }
    }

    debug!(memo = ?dashboard.memo_stats(), "View cache statistics");
    Ok(())
}

/// Symbole demandé, sinon le premier gainer qui a une série
fn selected_symbol(
    args: &Args,
    snapshot: &Snapshot,
    gainers: &[lazymarket::models::Quote],
) -> Option<String> {
    if let Some(symbol) = &args.symbol {
        return Some(
            snapshot
                .quote(symbol)
                .map(|q| q.symbol.clone())
                .unwrap_or_else(|| symbol.clone()),
        );
    }
    gainers
        .iter()
        .find(|q| !snapshot.series(&q.symbol).is_empty())
        .map(|q| q.symbol.clone())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}
