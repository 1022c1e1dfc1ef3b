pub mod fields;
pub mod strategies;

use scraper::Html;
use tracing::debug;
use url::Url;

use crate::listing::JobListing;

/// Two-pass pipeline per page: HTML → matched elements (strategy chain)
/// → raw candidate entries with approximate fields.
pub fn parse_listings(html: &str, page_url: &Url) -> Vec<JobListing> {
    let document = Html::parse_document(html);
    let matched = strategies::select_candidates(&document);

    let candidates: Vec<JobListing> = matched
        .into_iter()
        .filter_map(|el| fields::extract(el, page_url))
        .collect();

    debug!("{}: {} candidates extracted", page_url, candidates.len());
    candidates
}

// ── Tests ──
