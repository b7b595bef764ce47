use chrono::Local;
use clap::Parser;
use phone_price_crawler::{
    storage, traverse, BolScraper, CoolblueScraper, HttpFetcher, MobielScraper, SiteScraper,
};
use std::path::PathBuf;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

#[derive(Debug, Parser)]
#[command(about = "Scrape smartphone listings from Bol, Coolblue and Mobiel.nl")]
struct Args {
    /// Directory the per-site CSV files are written to
    #[arg(long, default_value = "scraped")]
    out_dir: PathBuf,

    /// Only run the named site (bol, coolblue, mobiel)
    #[arg(long)]
    site: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let args = Args::parse();
    let today = Local::now().date_naive();
    let fetcher = HttpFetcher::new()?;

    let sites: Vec<(&str, Box<dyn SiteScraper>)> = vec![
        ("bol", Box::new(BolScraper)),
        ("coolblue", Box::new(CoolblueScraper)),
        ("mobiel", Box::new(MobielScraper)),
    ];

    for (slug, site) in &sites {
        if let Some(only) = &args.site {
            if !only.eq_ignore_ascii_case(slug) {
                continue;
            }
        }
        let listings = traverse(site.as_ref(), &fetcher, today)?;
        let path = storage::write_csv(&args.out_dir, slug, today, &listings)?;
        info!("{}: {} listings -> {}", site.name(), listings.len(), path.display());
    }

    Ok(())
}
