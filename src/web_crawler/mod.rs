pub mod classifier;
pub mod crawler;
pub mod extractor;
pub mod fetcher;
pub mod types;

// Re-export the main types for easy importing
pub use crawler::SiteCrawler;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use types::{ContactBook, ExtractionResult};
