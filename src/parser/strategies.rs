use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Class-attribute substrings marking listing containers.
const CLASS_KEYWORDS: &[&str] = &[
    "recruitment",
    "job",
    "vacancy",
    "opening",
    "notification",
    "listing",
];

/// Substrings marking a job-like anchor, matched against href and text.
const LINK_KEYWORDS: &[&str] = &["recruitment", "job", "vacancy", "notification", "cwe", "exam"];

static CLASSED: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div[class], section[class], ul[class], li[class], article[class], tr[class], a[class]")
        .unwrap()
});
static ANCHORS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Ordered strategy chain; the first strategy with matches wins.
pub fn select_candidates(document: &Html) -> Vec<ElementRef<'_>> {
    let by_class = class_keyword_elements(document);
    if !by_class.is_empty() {
        debug!("class-keyword strategy matched {} elements", by_class.len());
        return by_class;
    }

    let by_anchor = keyword_anchors(document);
    if !by_anchor.is_empty() {
        debug!("anchor-keyword strategy matched {} elements", by_anchor.len());
        return by_anchor;
    }

    // Last resort: every anchor on the page; the filter stage separates
    // the noise.
    let all: Vec<ElementRef> = document.select(&ANCHORS).collect();
    debug!("falling back to all {} anchors", all.len());
    all
}

fn class_keyword_elements(document: &Html) -> Vec<ElementRef<'_>> {
    document
        .select(&CLASSED)
        .filter(|el| {
            el.value().attr("class").is_some_and(|c| {
                let c = c.to_lowercase();
                CLASS_KEYWORDS.iter().any(|kw| c.contains(kw))
            })
        })
        .collect()
}

/// Anchors whose href or text looks job-related, widened to the nearest
/// block ancestor so sibling text (dates, locations) stays in scope.
fn keyword_anchors(document: &Html) -> Vec<ElementRef<'_>> {
    let mut seen = HashSet::new();
    let mut scopes = Vec::new();

    for anchor in document.select(&ANCHORS) {
        let href = anchor.value().attr("href").unwrap_or("").to_lowercase();
        let text = anchor.text().collect::<String>().to_lowercase();
        if !LINK_KEYWORDS
            .iter()
            .any(|kw| href.contains(kw) || text.contains(kw))
        {
            continue;
        }
        let scope = block_ancestor(anchor);
        if seen.insert(scope.id()) {
            scopes.push(scope);
        }
    }

    scopes
}

/// Nearest div/li/article/tr ancestor, or the element itself.
fn block_ancestor(el: ElementRef) -> ElementRef {
    for node in el.ancestors() {
        if let Some(ancestor) = ElementRef::wrap(node) {
            if matches!(ancestor.value().name(), "div" | "li" | "article" | "tr") {
                return ancestor;
            }
        }
    }
    el
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_match_is_substring_and_case_insensitive() {
        let doc = Html::parse_document(
            r#"<div class="Other_Recruitments"><a href="/x/">X</a></div>"#,
        );
        assert_eq!(class_keyword_elements(&doc).len(), 1);
    }

    #[test]
    fn anchor_scope_widens_to_list_item() {
        let doc = Html::parse_document(
            r#"<ul><li><a href="/clerk-exam/">Clerks</a><span>Chennai</span></li></ul>"#,
        );
        let scopes = keyword_anchors(&doc);
        assert_eq!(scopes.len(), 1);
        assert_eq!(scopes[0].value().name(), "li");
    }

    #[test]
    fn sibling_anchors_in_one_block_share_a_scope() {
        let doc = Html::parse_document(
            r#"<div><a href="/po-exam/">PO</a><a href="/clerk-exam/">Clerk</a></div>"#,
        );
        assert_eq!(keyword_anchors(&doc).len(), 1);
    }

    #[test]
    fn non_job_anchors_fall_through_to_last_resort() {
        let doc = Html::parse_document(r#"<a href="/about/">About</a>"#);
        assert!(class_keyword_elements(&doc).is_empty());
        assert!(keyword_anchors(&doc).is_empty());
        assert_eq!(select_candidates(&doc).len(), 1);
    }
}
