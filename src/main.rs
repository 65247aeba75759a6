// src/main.rs
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod aggregator;
mod config;
mod contact_export;
mod error;
mod seeds;
mod web_crawler;

use aggregator::Aggregator;
use config::{load_config, Config};
use tokio::signal;

#[tokio::main]
async fn main() -> error::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config.yml: {}. Using defaults.", e);
            Config::default()
        }
    };

    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            format!("contact_scraper={}", config.logging.level)
                .parse()
                .unwrap(),
        ))
        .init();

    let app = Aggregator::new(config);

    // Add graceful shutdown
    tokio::select! {
        result = app.run() => {
            result?;
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    }

    Ok(())
}
