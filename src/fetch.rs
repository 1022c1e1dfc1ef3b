use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use tracing::{debug, warn};

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// GET a page with certificate verification, falling back to an
/// unverified retry when (and only when) verification itself fails.
/// The downgrade is never silent.
pub async fn fetch_page(cfg: &ScrapeConfig, url: &str) -> Result<String, ScrapeError> {
    match get(cfg, url, false).await {
        Ok(body) => Ok(body),
        Err(e) if e.is_certificate_error() => {
            warn!("certificate verification failed for {}: {}", url, e);
            warn!("retrying {} without certificate verification; the connection is not authenticated", url);
            get(cfg, url, true).await
        }
        Err(e) => Err(e),
    }
}

async fn get(cfg: &ScrapeConfig, url: &str, insecure: bool) -> Result<String, ScrapeError> {
    let client = reqwest::Client::builder()
        .timeout(cfg.timeout)
        .user_agent(&cfg.user_agent)
        .danger_accept_invalid_certs(insecure)
        .build()?;

    debug!("GET {} (verify_tls={})", url, !insecure);
    let response = client
        .get(url)
        .header(ACCEPT, ACCEPT_HTML)
        .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(response.text().await?)
}
