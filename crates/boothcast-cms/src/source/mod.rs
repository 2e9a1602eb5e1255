//! Content source trait and implementations

use crate::error::Result;
use crate::models::{Dj, Event, Series, SiteStats, Video};
use async_trait::async_trait;

pub mod local;
pub mod remote;

/// A pluggable content backend
///
/// Lists return published records only: videos newest first, events in date
/// order, DJs by name, series by title. Lookups return `Ok(None)` when the
/// record does not exist or is not published.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn get_videos(&self) -> Result<Vec<Video>>;

    async fn get_video(&self, id: &str) -> Result<Option<Video>>;

    async fn get_djs(&self) -> Result<Vec<Dj>>;

    async fn get_dj(&self, slug: &str) -> Result<Option<Dj>>;

    async fn get_events(&self) -> Result<Vec<Event>>;

    async fn get_event(&self, id: &str) -> Result<Option<Event>>;

    async fn get_series(&self) -> Result<Vec<Series>>;

    async fn get_series_by_slug(&self, slug: &str) -> Result<Option<Series>>;

    /// Videos belonging to a series
    async fn get_series_videos(&self, slug: &str) -> Result<Vec<Video>> {
        let videos = self.get_videos().await?;
        Ok(videos
            .into_iter()
            .filter(|v| v.series_slug.as_deref() == Some(slug))
            .collect())
    }

    /// Videos featuring a DJ
    async fn get_dj_videos(&self, slug: &str) -> Result<Vec<Video>> {
        let videos = self.get_videos().await?;
        Ok(videos
            .into_iter()
            .filter(|v| v.dj_slugs.iter().any(|s| s == slug))
            .collect())
    }

    async fn get_stats(&self) -> Result<SiteStats> {
        let videos = self.get_videos().await?;
        let djs = self.get_djs().await?;
        let events = self.get_events().await?;
        let series = self.get_series().await?;
        Ok(SiteStats::from_records(&videos, &djs, &events, &series))
    }

    /// Source name for logs
    fn name(&self) -> &'static str;
}

/// Apply the listing order shared by every source
pub(crate) fn sort_videos(videos: &mut [Video]) {
    videos.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.title.cmp(&b.title)));
}

pub(crate) fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.title.cmp(&b.title)));
}

pub(crate) fn sort_djs(djs: &mut [Dj]) {
    djs.sort_by_key(|d| d.name.to_lowercase());
}

pub(crate) fn sort_series(series: &mut [Series]) {
    series.sort_by_key(|s| s.title.to_lowercase());
}
