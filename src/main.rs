mod config;
mod error;
mod export;
mod fetch;
mod filter;
mod listing;
mod parser;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::warn;
use url::Url;

use config::ScrapeConfig;

#[derive(Parser)]
#[command(name = "ibps_scraper", about = "Scrape IBPS job listings into a CSV file")]
struct Cli {
    /// Page URLs to scrape (default: the IBPS site)
    urls: Vec<String>,
    /// Output CSV path
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// HTTP timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
    /// User-Agent header sent with each request
    #[arg(long)]
    user_agent: Option<String>,
    /// Extra title keywords to exclude (repeatable)
    #[arg(long = "exclude")]
    exclude: Vec<String>,
}

impl Cli {
    fn into_config(self) -> ScrapeConfig {
        let mut cfg = ScrapeConfig::default();
        if !self.urls.is_empty() {
            cfg.urls = self.urls;
        }
        if let Some(output) = self.output {
            cfg.output = output;
        }
        if let Some(secs) = self.timeout {
            cfg.timeout = Duration::from_secs(secs);
        }
        if let Some(ua) = self.user_agent {
            cfg.user_agent = ua;
        }
        cfg.exclude_titles.extend(self.exclude);
        cfg
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cfg = Cli::parse().into_config();

    let mut candidates = Vec::new();
    let mut fetched = 0usize;

    println!("Trying {} URL(s)...", cfg.urls.len());
    for url in &cfg.urls {
        let base = match Url::parse(url) {
            Ok(base) => base,
            Err(e) => {
                warn!("skipping invalid URL {}: {}", url, e);
                continue;
            }
        };

        println!("Fetching job listings from {}...", url);
        let body = match fetch::fetch_page(&cfg, url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("fetch failed for {}: {}", url, e);
                println!("Error fetching {}: {}", url, e);
                continue;
            }
        };
        fetched += 1;

        let found = parser::parse_listings(&body, &base);
        println!("Found {} potential job listings on {}.", found.len(), url);
        candidates.extend(found);
    }

    if fetched == 0 {
        anyhow::bail!(
            "all {} URL(s) failed to fetch; check your internet connection and that the site is reachable",
            cfg.urls.len()
        );
    }

    let listings = filter::clean(candidates, &cfg.exclude_titles);

    if listings.is_empty() {
        println!("\nNo jobs found. This could mean:");
        println!("  1. The website structure has changed");
        println!("  2. There are currently no job listings");
        println!("  3. The page requires JavaScript to load content");
        println!("\nInspect the page HTML and update the selector keywords if the structure changed.");
        return Ok(());
    }

    export::write_csv(&cfg.output, &listings).with_context(|| {
        format!(
            "could not write output; check that {} is writable",
            cfg.output.display()
        )
    })?;

    println!("\nSuccessfully scraped {} job listings!", listings.len());
    println!("Results saved to: {}", cfg.output.display());

    println!("\nFirst few listings:");
    for l in listings.iter().take(5) {
        println!("  {} | {} | {} | {}", l.title, l.location, l.post_date, l.link);
    }
    Ok(())
}
