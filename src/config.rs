use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub crawl: CrawlConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrawlConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Seed URLs come either from a CSV file (`csv_path` set) or from the
/// literal `seeds` list. The CSV path wins when both are present.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default)]
    pub csv_path: Option<String>,
    #[serde(default)]
    pub seeds: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub phones_file: String,
    pub contacts_file: String,
    pub include_emails: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawl: CrawlConfig {
                timeout_seconds: 10,
                user_agent: "Mozilla/5.0 (compatible; ContactScraper/1.0)".to_string(),
            },
            input: InputConfig {
                csv_path: None,
                seeds: Vec::new(),
            },
            output: OutputConfig {
                phones_file: "unique_phone_numbers.csv".to_string(),
                contacts_file: "unique_contacts.csv".to_string(),
                include_emails: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

pub async fn load_config(path: &str) -> crate::error::Result<Config> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
