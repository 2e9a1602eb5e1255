//! Content source configuration

use crate::error::Result;
use crate::source::local::LocalSource;
use crate::source::remote::RemoteSource;
use crate::source::ContentSource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Which content source to use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum CmsConfig {
    /// Static dataset: the bundled seed content, or a JSON file
    Local {
        #[serde(default)]
        data_path: Option<PathBuf>,
    },

    /// Headless CMS over HTTP
    Remote(RemoteConfig),
}

impl Default for CmsConfig {
    fn default() -> Self {
        CmsConfig::Local { data_path: None }
    }
}

/// Headless CMS connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the CMS (e.g. "https://cms.example.com")
    pub base_url: String,

    /// Bearer token for read access
    #[serde(default)]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CmsConfig {
    pub fn provider_name(&self) -> &'static str {
        match self {
            CmsConfig::Local { .. } => "local",
            CmsConfig::Remote(_) => "remote",
        }
    }
}

/// Create the content source described by the config
pub async fn create_source(config: &CmsConfig) -> Result<Arc<dyn ContentSource>> {
    match config {
        CmsConfig::Local { data_path: None } => Ok(Arc::new(LocalSource::bundled()?)),
        CmsConfig::Local {
            data_path: Some(path),
        } => Ok(Arc::new(LocalSource::from_path(path).await?)),
        CmsConfig::Remote(remote) => Ok(Arc::new(RemoteSource::new(remote)?)),
    }
}
