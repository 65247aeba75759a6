// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScraperError>;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fetching {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("input file {path}: {message}")]
    Input { path: String, message: String },

    #[error("invalid config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScraperError {
    pub fn input(path: impl Into<String>, message: impl Into<String>) -> Self {
        ScraperError::Input {
            path: path.into(),
            message: message.into(),
        }
    }
}
