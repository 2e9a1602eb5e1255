// File: src/config.rs
// Purpose: Site configuration parsed from boothcast.toml, with env overrides

use anyhow::{Context, Result};
use boothcast_cms::{CmsConfig, RemoteConfig};
use boothcast_forms::{FormOptions, ReentryPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Site configuration
///
/// Built once at startup and handed to whatever needs it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub cms: CmsConfig,

    #[serde(default)]
    pub forms: FormsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    /// Default tracing filter when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

/// Form handling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Form-processing endpoint that accepted submissions are forwarded to.
    /// Submissions are only logged when unset.
    #[serde(default)]
    pub forward_url: Option<String>,

    #[serde(default = "default_forward_timeout")]
    pub forward_timeout_secs: u64,

    /// What a form does with a second submit while one is in flight
    #[serde(default)]
    pub reentry: ReentryPolicy,
}

// Default values
fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_forward_timeout() -> u64 {
    15
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            log_filter: default_log_filter(),
        }
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            forward_url: None,
            forward_timeout_secs: default_forward_timeout(),
            reentry: ReentryPolicy::default(),
        }
    }
}

impl FormsConfig {
    /// Options for forms built from the catalog
    pub fn form_options(&self) -> FormOptions {
        FormOptions {
            reentry: self.reentry,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: SiteConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./boothcast.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("boothcast.toml")
    }

    /// Apply `BOOTHCAST_*` overrides
    ///
    /// `lookup` is the environment; the binary passes `std::env::var`, tests
    /// pass a map.
    ///
    /// - `BOOTHCAST_HOST`, `BOOTHCAST_PORT`
    /// - `BOOTHCAST_CMS_URL` switches to the remote source,
    ///   `BOOTHCAST_CMS_TOKEN` sets its token
    /// - `BOOTHCAST_FORMS_FORWARD_URL`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("BOOTHCAST_HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("BOOTHCAST_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("BOOTHCAST_PORT is not a valid port: {}", port))?;
        }

        if let Some(base_url) = lookup("BOOTHCAST_CMS_URL") {
            let mut remote = match &self.cms {
                CmsConfig::Remote(existing) => existing.clone(),
                CmsConfig::Local { .. } => RemoteConfig::default(),
            };
            remote.base_url = base_url;
            self.cms = CmsConfig::Remote(remote);
        }

        if let Some(token) = lookup("BOOTHCAST_CMS_TOKEN") {
            match &mut self.cms {
                CmsConfig::Remote(remote) => remote.api_token = Some(token),
                CmsConfig::Local { .. } => {
                    tracing::warn!("BOOTHCAST_CMS_TOKEN set but the local content source is in use")
                }
            }
        }

        if let Some(url) = lookup("BOOTHCAST_FORMS_FORWARD_URL") {
            self.forms.forward_url = Some(url).filter(|u| !u.trim().is_empty());
        }

        Ok(())
    }

    /// Address to bind, e.g. "127.0.0.1:3000"
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
