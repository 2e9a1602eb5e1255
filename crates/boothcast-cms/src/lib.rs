//! # Boothcast CMS
//!
//! Content sources for the showcase site. Every source returns the same
//! normalized records so pages do not care where content comes from.
//!
//! ## Features
//!
//! - **Local source**: bundled or file-based JSON dataset
//! - **Remote source**: headless CMS over HTTP, mapped into the shared model
//! - **Config-driven selection**: pick a source from [`CmsConfig`]
//!
//! ## Example
//!
//! ```rust
//! use boothcast_cms::{create_source, CmsConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = create_source(&CmsConfig::default()).await.unwrap();
//!     let videos = source.get_videos().await.unwrap();
//!     println!("{} videos from {}", videos.len(), source.name());
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod source;

pub use config::{create_source, CmsConfig, RemoteConfig};
pub use error::{CmsError, Result};
pub use models::{Dataset, Dj, Event, MediaUrls, PublishStatus, Series, SiteStats, Video};
pub use source::local::LocalSource;
pub use source::remote::RemoteSource;
pub use source::ContentSource;
