// src/web_crawler/extractor.rs
use crate::web_crawler::types::ExtractionResult;
use regex::Regex;
use scraper::Html;

/// Pattern-matches phone numbers and email addresses out of a page's
/// rendered text. Matches are kept verbatim: "(555) 123-4567" and
/// "555.123.4567" stay distinct entries even when they denote the same
/// line.
pub struct ContactExtractor {
    phone_regex: Regex,
    email_regex: Regex,
}

impl ContactExtractor {
    pub fn new() -> Self {
        Self {
            // Optional parenthesized area code, then 3-3-4 digits with
            // optional -, . or space separators, then an optional
            // Ext./Ext/x extension of 1-5 digits.
            phone_regex: Regex::new(
                r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}(?:\s*(?i:ext\.?|x)\s*\d{1,5})?",
            )
            .unwrap(),
            email_regex: Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap(),
        }
    }

    pub fn extract(&self, html: &str) -> ExtractionResult {
        let text = rendered_text(html);

        let phone_numbers = self
            .phone_regex
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect();
        let email_addresses = self
            .email_regex
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect();

        ExtractionResult {
            phone_numbers,
            email_addresses,
        }
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Text content of the whole document with tags stripped and runs of
/// whitespace collapsed to single spaces. Markup and attribute values
/// never reach the pattern matchers.
fn rendered_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
