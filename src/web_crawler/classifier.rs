// src/web_crawler/classifier.rs
use scraper::{Html, Selector};
use std::collections::HashSet;

/// Substrings that mark an href as pointing at a contact-like page.
/// Matching is a plain substring test on the lowercased href, so broad
/// entries like "list" and "profiles" over-match on purpose (e.g.
/// /blog/post-list qualifies); recall is preferred over precision here.
const CONTACT_KEYWORDS: &[&str] = &[
    "contact",
    "contact-us",
    "support",
    "help",
    "get-in-touch",
    "reach-us",
    "customer-service",
    "assistance",
    "connect",
    "feedback",
    "team",
    "our-team",
    "staff",
    "people",
    "leadership",
    "executives",
    "founders",
    "bios",
    "meet-the-team",
    "who-we-are",
    "about",
    "about-us",
    "our-story",
    "company",
    "mission",
    "values",
    "culture",
    "overview",
    "what-we-do",
    "history",
    "location",
    "locations",
    "office",
    "offices",
    "find-us",
    "visit",
    "where-to-find-us",
    "map",
    "headquarters",
    "directions",
    "directory",
    "staff-directory",
    "employee-directory",
    "partners",
    "affiliates",
    "advisors",
    "network",
    "contacts",
    "list",
    "profiles",
];

fn is_contact_related(href: &str) -> bool {
    let href = href.to_lowercase();
    CONTACT_KEYWORDS.iter().any(|keyword| href.contains(keyword))
}

/// Collect the candidate contact-page URLs linked from a page.
///
/// Only two href shapes are resolved: absolute ones (anything starting
/// with "http" passes through verbatim) and root-relative ones, which are
/// concatenated onto `base_url` with its trailing slash stripped. Every
/// other shape (fragment, query-only, path-relative) is discarded rather
/// than resolved. Returns a set, so repeated hrefs collapse to one entry.
pub fn classify_links(html: &str, base_url: &str) -> HashSet<String> {
    let document = Html::parse_document(html);
    let link_selector = Selector::parse("a[href]").unwrap();
    let base = base_url.trim_end_matches('/');

    let mut links = HashSet::new();
    for element in document.select(&link_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if !is_contact_related(href) {
            continue;
        }

        if href.starts_with("http") {
            links.insert(href.to_string());
        } else if href.starts_with('/') {
            links.insert(format!("{base}{href}"));
        }
    }

    links
}
