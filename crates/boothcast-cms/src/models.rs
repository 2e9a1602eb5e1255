//! Normalized content model shared by every content source

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Publication state of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Draft,
    #[default]
    Published,
    Archived,
}

impl PublishStatus {
    pub fn is_published(self) -> bool {
        self == PublishStatus::Published
    }
}

/// Media locations for a recorded session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MediaUrls {
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// A recorded DJ session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_secs: Option<u32>,
    #[serde(default)]
    pub media: MediaUrls,
    /// Slugs of the DJs playing in this session
    #[serde(default)]
    pub dj_slugs: Vec<String>,
    #[serde(default)]
    pub series_slug: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub status: PublishStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dj {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub status: PublishStatus,
}

/// A live event (recording night, showcase, festival stage)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub ticket_url: Option<String>,
    #[serde(default)]
    pub dj_slugs: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub status: PublishStatus,
}

/// A named run of sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub status: PublishStatus,
}

/// Headline numbers for the landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SiteStats {
    pub videos: usize,
    pub djs: usize,
    pub events: usize,
    pub series: usize,
    /// Distinct genres across sessions and DJs
    pub genres: usize,
    pub total_duration_secs: u64,
}

impl SiteStats {
    /// Compute stats over already-published records
    pub fn from_records(videos: &[Video], djs: &[Dj], events: &[Event], series: &[Series]) -> Self {
        let genres: BTreeSet<String> = videos
            .iter()
            .flat_map(|v| v.genres.iter())
            .chain(djs.iter().flat_map(|d| d.genres.iter()))
            .map(|g| g.trim().to_lowercase())
            .filter(|g| !g.is_empty())
            .collect();

        Self {
            videos: videos.len(),
            djs: djs.len(),
            events: events.len(),
            series: series.len(),
            genres: genres.len(),
            total_duration_secs: videos
                .iter()
                .filter_map(|v| v.duration_secs)
                .map(u64::from)
                .sum(),
        }
    }
}

/// A whole content collection, as stored by the local source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub djs: Vec<Dj>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub series: Vec<Series>,
}
