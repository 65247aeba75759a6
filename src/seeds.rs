// src/seeds.rs
use crate::config::InputConfig;
use crate::error::{Result, ScraperError};
use tracing::info;

/// Resolve the run's seed URLs: the CSV file when one is configured,
/// otherwise the literal list from the config. A missing file or missing
/// seed column is the one fatal error of the whole pipeline.
pub fn load_seeds(input: &InputConfig) -> Result<Vec<String>> {
    match &input.csv_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| ScraperError::input(path, e.to_string()))?;
            let seeds = parse_seed_rows(path, &content)?;
            info!("Loaded {} seed URLs from {}", seeds.len(), path);
            Ok(seeds)
        }
        None => Ok(input.seeds.clone()),
    }
}

/// The header row must contain a column named `website` or `url`
/// (case-insensitive); each following row contributes that column's
/// value, skipping blanks. Fields are comma-split; quoting is not
/// supported, which is fine for URLs.
fn parse_seed_rows(path: &str, content: &str) -> Result<Vec<String>> {
    let mut lines = content.lines();
    let header = lines
        .next()
        .ok_or_else(|| ScraperError::input(path, "file is empty"))?;

    let column = header
        .split(',')
        .position(|name| {
            matches!(name.trim().to_lowercase().as_str(), "website" | "url")
        })
        .ok_or_else(|| ScraperError::input(path, "no 'website' or 'url' column in header"))?;

    let mut seeds = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        if let Some(value) = line.split(',').nth(column) {
            let value = value.trim();
            if !value.is_empty() {
                seeds.push(value.to_string());
            }
        }
    }

    Ok(seeds)
}
