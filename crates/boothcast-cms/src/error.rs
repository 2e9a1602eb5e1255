//! Content source errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CmsError>;

#[derive(Debug, Error)]
pub enum CmsError {
    #[error("request to content backend failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content backend returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode content: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid content source configuration: {0}")]
    InvalidConfig(String),
}
