// src/web_crawler/crawler.rs
use crate::web_crawler::classifier::classify_links;
use crate::web_crawler::extractor::ContactExtractor;
use crate::web_crawler::fetcher::PageFetcher;
use crate::web_crawler::types::ExtractionResult;
use tracing::{info, warn};

/// Depth-1 crawl of one site: fetch the seed page, follow the
/// contact-like links it carries, extract contacts from each. Links found
/// on sub-pages are never followed.
pub struct SiteCrawler {
    fetcher: Box<dyn PageFetcher>,
    extractor: ContactExtractor,
}

impl SiteCrawler {
    pub fn new(fetcher: Box<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            extractor: ContactExtractor::new(),
        }
    }

    /// Every failure is contained here: an unreachable seed or sub-page
    /// yields fewer results, never an error.
    pub async fn crawl(&self, seed_url: &str) -> Vec<ExtractionResult> {
        let html = match self.fetcher.fetch(seed_url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Failed to fetch seed {}: {}", seed_url, e);
                return Vec::new();
            }
        };

        let links = classify_links(&html, seed_url);
        if links.is_empty() {
            info!("No contact-related links found on {}", seed_url);
            return Vec::new();
        }

        let mut results = Vec::new();
        for link in &links {
            info!("Visiting: {}", link);
            match self.fetcher.fetch(link).await {
                Ok(page_html) => results.push(self.extractor.extract(&page_html)),
                Err(e) => {
                    // A single broken sub-page never aborts the crawl.
                    warn!("Skipping {}: {}", link, e);
                }
            }
        }

        results
    }
}
