use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};
use url::Url;

use crate::listing::{JobListing, NOT_SPECIFIED};

/// Anything this long is body text that swallowed the match, not a
/// recruitment name.
const MAX_TITLE_CHARS: usize = 100;

static HEADINGS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2, h3, h4").unwrap());
static TITLED: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[class], span[class]").unwrap());
static CLASSED_META: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span[class], div[class], td[class]").unwrap());
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());
static TIME: LazyLock<Selector> = LazyLock::new(|| Selector::parse("time").unwrap());

static TITLE_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)title|heading|name").unwrap());
static LOCATION_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)location|place|city").unwrap());
static DATE_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)date|publish|post").unwrap());
static LOCATION_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(location|city|place)\b").unwrap());
static DATE_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d{1,2}[/-]\d{1,2}[/-]\d{2,4}|\bposted\s+on\b").unwrap()
});

/// Pull approximate fields out of one matched element. None means a
/// required field (title, href) was missing or unusable; such candidates
/// are dropped silently before the filter stage.
pub fn extract(scope: ElementRef, base: &Url) -> Option<JobListing> {
    let anchor = if scope.value().name() == "a" && scope.value().attr("href").is_some() {
        scope
    } else {
        scope.select(&ANCHOR).next()?
    };
    let href = anchor.value().attr("href")?;
    let link = base.join(href).ok()?.to_string();

    let title = title_of(scope, anchor);
    if title.is_empty() || title.chars().count() >= MAX_TITLE_CHARS {
        return None;
    }

    Some(JobListing {
        title,
        location: location_of(scope),
        post_date: date_of(scope),
        link,
    })
}

/// Nearest heading text, then a title/heading/name-classed descendant,
/// then the anchor's own text.
fn title_of(scope: ElementRef, anchor: ElementRef) -> String {
    if let Some(t) = scope
        .select(&HEADINGS)
        .map(inner_text)
        .find(|t| !t.is_empty())
    {
        return t;
    }
    if let Some(t) = scope
        .select(&TITLED)
        .filter(|el| class_matches(*el, &TITLE_CLASS_RE))
        .map(inner_text)
        .find(|t| !t.is_empty())
    {
        return t;
    }
    inner_text(anchor)
}

fn location_of(scope: ElementRef) -> String {
    if let Some(t) = scope
        .select(&CLASSED_META)
        .filter(|el| class_matches(*el, &LOCATION_CLASS_RE))
        .map(inner_text)
        .find(|t| !t.is_empty())
    {
        return t;
    }
    // Loose fallback over raw text nodes: "Location: Mumbai" and the like.
    for segment in scope.text() {
        let segment = segment.trim();
        if LOCATION_TEXT_RE.is_match(segment) {
            return segment.to_string();
        }
    }
    NOT_SPECIFIED.to_string()
}

fn date_of(scope: ElementRef) -> String {
    if let Some(t) = scope
        .select(&CLASSED_META)
        .filter(|el| class_matches(*el, &DATE_CLASS_RE))
        .map(inner_text)
        .find(|t| !t.is_empty())
    {
        return t;
    }
    if let Some(time) = scope.select(&TIME).next() {
        if let Some(dt) = time.value().attr("datetime") {
            return dt.trim().to_string();
        }
        let t = inner_text(time);
        if !t.is_empty() {
            return t;
        }
    }
    for segment in scope.text() {
        let segment = segment.trim();
        if DATE_TEXT_RE.is_match(segment) {
            return segment.to_string();
        }
    }
    NOT_SPECIFIED.to_string()
}

fn inner_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn class_matches(el: ElementRef, re: &Regex) -> bool {
    el.value().attr("class").is_some_and(|c| re.is_match(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn base() -> Url {
        Url::parse("https://www.ibps.in/").unwrap()
    }

    fn extract_first(html: &str, sel: &str) -> Option<JobListing> {
        let doc = Html::parse_fragment(html);
        let selector = Selector::parse(sel).unwrap();
        let el = doc.select(&selector).next().unwrap();
        extract(el, &base())
    }

    #[test]
    fn title_prefers_heading_over_anchor_text() {
        let c = extract_first(
            r#"<div><h3>Officer Scale I</h3><a href="/rrb/">read notification</a></div>"#,
            "div",
        )
        .unwrap();
        assert_eq!(c.title, "Officer Scale I");
        assert_eq!(c.link, "https://www.ibps.in/rrb/");
    }

    #[test]
    fn title_falls_back_to_classed_span() {
        let c = extract_first(
            r#"<div><span class="post-title">CRP Clerks-XV</span><a href="/clerks/">go</a></div>"#,
            "div",
        )
        .unwrap();
        assert_eq!(c.title, "CRP Clerks-XV");
    }

    #[test]
    fn whitespace_only_title_is_discarded() {
        assert!(extract_first(r#"<a href="/x/">   </a>"#, "a").is_none());
    }

    #[test]
    fn overlong_title_is_discarded() {
        let long = "x".repeat(120);
        let html = format!(r#"<a href="/x/">{}</a>"#, long);
        assert!(extract_first(&html, "a").is_none());
    }

    #[test]
    fn missing_href_is_discarded() {
        assert!(extract_first(r#"<div><h4>CRP PO</h4><p>no link here</p></div>"#, "div").is_none());
    }

    #[test]
    fn relative_href_resolves_against_base() {
        let c = extract_first(r#"<a href="notices/po.html">CRP PO-XIV</a>"#, "a").unwrap();
        assert_eq!(c.link, "https://www.ibps.in/notices/po.html");
    }

    #[test]
    fn absolute_href_is_kept() {
        let c = extract_first(r#"<a href="https://other.example/job/">CRP PO-XIV</a>"#, "a")
            .unwrap();
        assert_eq!(c.link, "https://other.example/job/");
    }

    #[test]
    fn location_from_text_heuristic() {
        let c = extract_first(
            r#"<div><a href="/po/">CRP PO</a><p>Location: Mumbai</p></div>"#,
            "div",
        )
        .unwrap();
        assert_eq!(c.location, "Location: Mumbai");
    }

    #[test]
    fn fields_default_to_not_specified() {
        let c = extract_first(r#"<a href="/po/">CRP PO</a>"#, "a").unwrap();
        assert_eq!(c.location, NOT_SPECIFIED);
        assert_eq!(c.post_date, NOT_SPECIFIED);
    }
}
