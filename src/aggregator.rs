// src/aggregator.rs
use crate::config::Config;
use crate::contact_export::ContactExporter;
use crate::error::Result;
use crate::seeds::load_seeds;
use crate::web_crawler::{ContactBook, HttpFetcher, SiteCrawler};
use tracing::info;

/// Drives the whole run: seeds in, one merged contact set out, written
/// to disk at the end. The accumulator lives here for exactly one run.
pub struct Aggregator {
    config: Config,
    crawler: SiteCrawler,
    exporter: ContactExporter,
}

impl Aggregator {
    pub fn new(config: Config) -> Self {
        let fetcher = HttpFetcher::new(&config.crawl);
        Self::with_crawler(config, SiteCrawler::new(Box::new(fetcher)))
    }

    pub fn with_crawler(config: Config, crawler: SiteCrawler) -> Self {
        Self {
            config,
            crawler,
            exporter: ContactExporter::new(),
        }
    }

    pub async fn run(&self) -> Result<()> {
        let seeds = load_seeds(&self.config.input)?;
        info!("🚀 Starting contact scrape of {} sites", seeds.len());

        let mut book = ContactBook::default();
        for seed in &seeds {
            let results = self.crawler.crawl(seed).await;
            if results.iter().all(|r| r.is_empty()) {
                info!("No contact data collected from {}", seed);
            }
            for result in results {
                book.absorb(result);
            }
        }

        if self.config.output.include_emails {
            self.exporter
                .export_contacts(&book, &self.config.output.contacts_file)?;
        } else {
            self.exporter
                .export_phones(&book, &self.config.output.phones_file)?;
        }

        info!(
            "🏁 Scrape complete: {} phone numbers, {} email addresses across {} sites",
            book.phone_numbers.len(),
            book.email_addresses.len(),
            seeds.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InputConfig, OutputConfig};
    use crate::error::ScraperError;
    use crate::web_crawler::fetcher::normalize_url;
    use crate::web_crawler::PageFetcher;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct StubFetcher {
        pages: HashMap<String, String>,
    }

    #[async_trait]
    impl PageFetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> crate::error::Result<String> {
            let url = normalize_url(url);
            self.pages.get(&url).cloned().ok_or(ScraperError::Status {
                url,
                status: reqwest::StatusCode::NOT_FOUND,
            })
        }
    }

    fn temp_path(name: &str) -> String {
        let path = std::env::temp_dir().join(format!("contact-scraper-agg-{name}"));
        let _ = std::fs::remove_file(&path);
        path.to_string_lossy().into_owned()
    }

    fn config_for(seeds: &[&str], contacts_file: &str) -> Config {
        let mut config = Config::default();
        config.input = InputConfig {
            csv_path: None,
            seeds: seeds.iter().map(|s| s.to_string()).collect(),
        };
        config.output = OutputConfig {
            phones_file: temp_path("unused-phones.csv"),
            contacts_file: contacts_file.to_string(),
            include_emails: true,
        };
        config
    }

    #[tokio::test]
    async fn test_end_to_end_seed_to_csv() {
        let pages: HashMap<String, String> = [
            (
                "https://a.test/".to_string(),
                r#"<a href="/contact-us">Contact</a>"#.to_string(),
            ),
            (
                "https://a.test/contact-us".to_string(),
                "<p>Email: info@a.test, Phone: 555-222-3333</p>".to_string(),
            ),
        ]
        .into();
        let out = temp_path("end-to-end.csv");
        let config = config_for(&["https://a.test/"], &out);
        let aggregator = Aggregator::with_crawler(
            config,
            SiteCrawler::new(Box::new(StubFetcher { pages })),
        );

        aggregator.run().await.unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            written,
            "Phone Numbers,Email Addresses\n555-222-3333,info@a.test\n"
        );
    }

    #[tokio::test]
    async fn test_number_seen_on_two_sites_is_written_once() {
        let contact_page = "<p>Call 555-000-1111</p>".to_string();
        let pages: HashMap<String, String> = [
            (
                "https://a.test".to_string(),
                r#"<a href="/contact">Contact</a>"#.to_string(),
            ),
            ("https://a.test/contact".to_string(), contact_page.clone()),
            (
                "https://b.test".to_string(),
                r#"<a href="/about">About</a>"#.to_string(),
            ),
            ("https://b.test/about".to_string(), contact_page),
        ]
        .into();
        let out = temp_path("cross-site.csv");
        let config = config_for(&["https://a.test", "https://b.test"], &out);
        let aggregator = Aggregator::with_crawler(
            config,
            SiteCrawler::new(Box::new(StubFetcher { pages })),
        );

        aggregator.run().await.unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written.matches("555-000-1111").count(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_seed_does_not_abort_the_run() {
        let pages: HashMap<String, String> = [
            (
                "https://up.test".to_string(),
                r#"<a href="/contact">Contact</a>"#.to_string(),
            ),
            (
                "https://up.test/contact".to_string(),
                "<p>555-222-3333</p>".to_string(),
            ),
        ]
        .into();
        let out = temp_path("partial.csv");
        let config = config_for(&["https://down.test", "https://up.test"], &out);
        let aggregator = Aggregator::with_crawler(
            config,
            SiteCrawler::new(Box::new(StubFetcher { pages })),
        );

        aggregator.run().await.unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.contains("555-222-3333"));
    }

    #[tokio::test]
    async fn test_missing_input_csv_fails_before_crawling() {
        let mut config = config_for(&[], &temp_path("never-written.csv"));
        config.input.csv_path = Some("/nonexistent/seeds.csv".to_string());
        let aggregator = Aggregator::with_crawler(
            config,
            SiteCrawler::new(Box::new(StubFetcher {
                pages: HashMap::new(),
            })),
        );

        assert!(matches!(
            aggregator.run().await,
            Err(ScraperError::Input { .. })
        ));
    }
}
