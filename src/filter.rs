use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::Url;

use crate::listing::JobListing;

static WS_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize text fields, drop navigation noise and implausible links,
/// then dedup by (title, link) keeping first-seen order.
pub fn clean(candidates: Vec<JobListing>, exclude_titles: &[String]) -> Vec<JobListing> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut out = Vec::new();

    for mut c in candidates {
        c.title = collapse_ws(&c.title);
        c.location = collapse_ws(&c.location);
        c.post_date = collapse_ws(&c.post_date);
        c.link = c.link.trim().to_string();

        if c.title.is_empty() {
            continue;
        }
        if is_excluded(&c.title, exclude_titles) {
            debug!("excluded by title: {}", c.title);
            continue;
        }
        if !plausible_job_link(&c.link) {
            debug!("implausible link dropped: {}", c.link);
            continue;
        }
        if seen.insert((c.title.clone(), c.link.clone())) {
            out.push(c);
        }
    }

    out
}

/// Trim and collapse internal whitespace runs to a single space.
pub fn collapse_ws(s: &str) -> String {
    WS_RUN.replace_all(s.trim(), " ").to_string()
}

fn is_excluded(title: &str, exclude_titles: &[String]) -> bool {
    let lower = title.to_lowercase();
    exclude_titles
        .iter()
        .any(|kw| lower.contains(&kw.to_lowercase()))
}

/// A detail page has a path beyond the site root; bare roots and
/// fragment-only anchors are navigation.
fn plausible_job_link(link: &str) -> bool {
    let Ok(url) = Url::parse(link) else {
        return false;
    };
    let at_root = url.path() == "/" || url.path().is_empty();
    !(at_root && url.query().is_none())
}
