//! Local content source backed by a JSON dataset

use crate::error::Result;
use crate::models::{Dataset, Dj, Event, Series, Video};
use crate::source::{sort_djs, sort_events, sort_series, sort_videos, ContentSource};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;

/// Seed content compiled into the binary
const BUNDLED_DATASET: &str = include_str!("../../data/seed.json");

/// Local content source
///
/// Serves a dataset held in memory. Loaded either from the bundled seed
/// content or from a JSON file, which can be re-read with [`LocalSource::reload`].
#[derive(Clone)]
pub struct LocalSource {
    data: Arc<RwLock<Dataset>>,
    path: Option<PathBuf>,
}

impl LocalSource {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            data: Arc::new(RwLock::new(dataset)),
            path: None,
        }
    }

    /// Source serving the seed content shipped with the crate
    pub fn bundled() -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(BUNDLED_DATASET)?;
        Ok(Self::new(dataset))
    }

    /// Source serving a dataset file
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let dataset = read_dataset(&path).await?;
        tracing::info!(
            path = %path.display(),
            videos = dataset.videos.len(),
            djs = dataset.djs.len(),
            "loaded local content"
        );

        Ok(Self {
            data: Arc::new(RwLock::new(dataset)),
            path: Some(path),
        })
    }

    /// Re-read the dataset file; a no-op for in-memory datasets
    ///
    /// On error the previous content stays in place.
    pub async fn reload(&self) -> Result<()> {
        let Some(ref path) = self.path else {
            return Ok(());
        };

        let dataset = read_dataset(path).await?;
        *self.data.write().await = dataset;
        tracing::info!(path = %path.display(), "reloaded local content");
        Ok(())
    }

    /// Replace the served dataset
    pub async fn replace(&self, dataset: Dataset) {
        *self.data.write().await = dataset;
    }
}

async fn read_dataset(path: &Path) -> Result<Dataset> {
    let content = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

#[async_trait]
impl ContentSource for LocalSource {
    async fn get_videos(&self) -> Result<Vec<Video>> {
        let data = self.data.read().await;
        let mut videos: Vec<Video> = data
            .videos
            .iter()
            .filter(|v| v.status.is_published())
            .cloned()
            .collect();
        sort_videos(&mut videos);
        Ok(videos)
    }

    async fn get_video(&self, id: &str) -> Result<Option<Video>> {
        let data = self.data.read().await;
        Ok(data
            .videos
            .iter()
            .find(|v| v.id == id && v.status.is_published())
            .cloned())
    }

    async fn get_djs(&self) -> Result<Vec<Dj>> {
        let data = self.data.read().await;
        let mut djs: Vec<Dj> = data
            .djs
            .iter()
            .filter(|d| d.status.is_published())
            .cloned()
            .collect();
        sort_djs(&mut djs);
        Ok(djs)
    }

    async fn get_dj(&self, slug: &str) -> Result<Option<Dj>> {
        let data = self.data.read().await;
        Ok(data
            .djs
            .iter()
            .find(|d| d.slug == slug && d.status.is_published())
            .cloned())
    }

    async fn get_events(&self) -> Result<Vec<Event>> {
        let data = self.data.read().await;
        let mut events: Vec<Event> = data
            .events
            .iter()
            .filter(|e| e.status.is_published())
            .cloned()
            .collect();
        sort_events(&mut events);
        Ok(events)
    }

    async fn get_event(&self, id: &str) -> Result<Option<Event>> {
        let data = self.data.read().await;
        Ok(data
            .events
            .iter()
            .find(|e| e.id == id && e.status.is_published())
            .cloned())
    }

    async fn get_series(&self) -> Result<Vec<Series>> {
        let data = self.data.read().await;
        let mut series: Vec<Series> = data
            .series
            .iter()
            .filter(|s| s.status.is_published())
            .cloned()
            .collect();
        sort_series(&mut series);
        Ok(series)
    }

    async fn get_series_by_slug(&self, slug: &str) -> Result<Option<Series>> {
        let data = self.data.read().await;
        Ok(data
            .series
            .iter()
            .find(|s| s.slug == slug && s.status.is_published())
            .cloned())
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
