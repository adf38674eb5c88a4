use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use meli_scraper::{MarketApi, Settings, export, fetcher, paginator};

/// Collects marketplace listings matching the given search terms into a
/// CSV file.
#[derive(Debug, Parser)]
#[command(name = "meli-scraper", version)]
struct Cli {
    /// Comma-separated search terms, e.g. "Cascos LS2, Cascos AGV"
    #[arg(long)]
    queries: String,

    /// Directory the CSV export is written into
    #[arg(long)]
    out_dir: PathBuf,

    /// Results per search page (overrides configuration)
    #[arg(long)]
    page_size: Option<usize>,

    /// Concurrent detail requests (overrides configuration)
    #[arg(long)]
    concurrency: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env first. Ignore errors (e.g., file not found).
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "meli_scraper=info".into()),
        )
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::new().context("failed to load configuration")?;
    if let Some(page_size) = cli.page_size {
        settings.page_size = page_size;
    }
    if let Some(concurrency) = cli.concurrency {
        settings.concurrency = concurrency;
    }

    let queries: Vec<String> = cli
        .queries
        .split(',')
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .collect();
    if queries.is_empty() {
        anyhow::bail!("no search terms given");
    }

    let api = MarketApi::new(settings.clone()).context("failed to build HTTP client")?;

    // Queries run sequentially, in caller order.
    let mut all_ids = Vec::new();
    for query in &queries {
        let ids = paginator::collect_item_ids(&api, query, settings.page_size).await;
        tracing::info!(query = %query, count = ids.len(), "products found");
        all_ids.extend(ids);
    }

    let records = fetcher::fetch_all(&api, &all_ids, settings.concurrency).await;
    if records.is_empty() {
        tracing::warn!("no product details were obtained, nothing to export");
        return Ok(());
    }

    let path = cli.out_dir.join(export::export_filename(&queries));
    let rows = export::write_csv(&path, &records)?;
    tracing::info!(rows, path = %path.display(), "export written");

    Ok(())
}
