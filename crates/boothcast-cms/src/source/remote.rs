//! Remote content source for a headless CMS
//!
//! Talks to a REST API that wraps records as
//! `{ "data": [ { "id": 1, "attributes": { ... } } ] }` and maps the
//! provider's attribute shapes into the normalized model.

use crate::config::RemoteConfig;
use crate::error::{CmsError, Result};
use crate::models::{Dj, Event, MediaUrls, PublishStatus, Series, Video};
use crate::source::{sort_djs, sort_events, sort_series, sort_videos, ContentSource};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Headless CMS content source
#[derive(Clone)]
pub struct RemoteSource {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl RemoteSource {
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(CmsError::InvalidConfig(
                "remote content source requires a base_url".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_token: config.api_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// GET a URL and decode the body; `Ok(None)` on 404
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        let mut request = self.client.get(url);
        if let Some(ref token) = self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "content backend request failed");
            return Err(CmsError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(Some(serde_json::from_str(&body)?))
    }

    async fn fetch_list<A, T>(&self, url: &str, map: fn(RemoteId, A) -> T) -> Result<Vec<T>>
    where
        A: DeserializeOwned,
    {
        let envelope: Option<ListEnvelope<A>> = self.fetch(url).await?;
        Ok(envelope
            .map(|e| e.data.into_iter().map(|r| map(r.id, r.attributes)).collect())
            .unwrap_or_default())
    }

    async fn fetch_one<A, T>(&self, url: &str, map: fn(RemoteId, A) -> T) -> Result<Option<T>>
    where
        A: DeserializeOwned,
    {
        let envelope: Option<SingleEnvelope<A>> = self.fetch(url).await?;
        Ok(envelope
            .and_then(|e| e.data)
            .map(|r| map(r.id, r.attributes)))
    }

    fn by_slug_url(&self, collection: &str, slug: &str) -> String {
        format!(
            "{}?filters[slug][$eq]={}",
            self.endpoint(collection),
            urlencoding::encode(slug)
        )
    }
}

#[async_trait]
impl ContentSource for RemoteSource {
    async fn get_videos(&self) -> Result<Vec<Video>> {
        let mut videos = self
            .fetch_list(&self.endpoint("videos"), map_video)
            .await?;
        videos.retain(|v| v.status.is_published());
        sort_videos(&mut videos);
        Ok(videos)
    }

    async fn get_video(&self, id: &str) -> Result<Option<Video>> {
        let url = self.endpoint(&format!("videos/{}", urlencoding::encode(id)));
        let video = self.fetch_one(&url, map_video).await?;
        Ok(video.filter(|v| v.status.is_published()))
    }

    async fn get_djs(&self) -> Result<Vec<Dj>> {
        let mut djs = self.fetch_list(&self.endpoint("djs"), map_dj).await?;
        djs.retain(|d| d.status.is_published());
        sort_djs(&mut djs);
        Ok(djs)
    }

    async fn get_dj(&self, slug: &str) -> Result<Option<Dj>> {
        let djs = self.fetch_list(&self.by_slug_url("djs", slug), map_dj).await?;
        Ok(djs
            .into_iter()
            .find(|d| d.slug == slug && d.status.is_published()))
    }

    async fn get_events(&self) -> Result<Vec<Event>> {
        let mut events = self
            .fetch_list(&self.endpoint("events"), map_event)
            .await?;
        events.retain(|e| e.status.is_published());
        sort_events(&mut events);
        Ok(events)
    }

    async fn get_event(&self, id: &str) -> Result<Option<Event>> {
        let url = self.endpoint(&format!("events/{}", urlencoding::encode(id)));
        let event = self.fetch_one(&url, map_event).await?;
        Ok(event.filter(|e| e.status.is_published()))
    }

    async fn get_series(&self) -> Result<Vec<Series>> {
        let mut series = self
            .fetch_list(&self.endpoint("series"), map_series)
            .await?;
        series.retain(|s| s.status.is_published());
        sort_series(&mut series);
        Ok(series)
    }

    async fn get_series_by_slug(&self, slug: &str) -> Result<Option<Series>> {
        let series = self
            .fetch_list(&self.by_slug_url("series", slug), map_series)
            .await?;
        Ok(series
            .into_iter()
            .find(|s| s.slug == slug && s.status.is_published()))
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

// ============================================================================
// Provider record shapes
// ============================================================================

#[derive(Debug, Deserialize)]
struct ListEnvelope<A> {
    #[serde(default = "Vec::new")]
    data: Vec<Record<A>>,
}

#[derive(Debug, Deserialize)]
struct SingleEnvelope<A> {
    data: Option<Record<A>>,
}

#[derive(Debug, Deserialize)]
struct Record<A> {
    id: RemoteId,
    attributes: A,
}

/// Providers use numeric or string ids
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RemoteId {
    Number(u64),
    Text(String),
}

impl RemoteId {
    fn into_string(self) -> String {
        match self {
            RemoteId::Number(n) => n.to_string(),
            RemoteId::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RemoteImage {
    url: String,
}

#[derive(Debug, Deserialize)]
struct RemoteTag {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoAttributes {
    title: String,
    slug: String,
    session_date: NaiveDate,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    duration_seconds: Option<u32>,
    #[serde(default)]
    video_url: Option<String>,
    #[serde(default)]
    audio_url: Option<String>,
    #[serde(default)]
    thumbnail: Option<RemoteImage>,
    #[serde(default)]
    dj_slugs: Vec<String>,
    #[serde(default)]
    series: Option<String>,
    #[serde(default)]
    genres: Vec<RemoteTag>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    archived: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DjAttributes {
    name: String,
    slug: String,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    avatar: Option<RemoteImage>,
    #[serde(default)]
    genres: Vec<RemoteTag>,
    #[serde(default)]
    links: Vec<String>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    archived: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventAttributes {
    title: String,
    event_date: NaiveDate,
    #[serde(default)]
    venue: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    ticket_url: Option<String>,
    #[serde(default)]
    dj_slugs: Vec<String>,
    #[serde(default)]
    genres: Vec<RemoteTag>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    archived: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeriesAttributes {
    title: String,
    slug: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    cover: Option<RemoteImage>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    archived: bool,
}

fn status(published_at: &Option<String>, archived: bool) -> PublishStatus {
    if archived {
        PublishStatus::Archived
    } else if published_at.is_some() {
        PublishStatus::Published
    } else {
        PublishStatus::Draft
    }
}

fn tag_names(tags: Vec<RemoteTag>) -> Vec<String> {
    tags.into_iter().map(|t| t.name).collect()
}

fn map_video(id: RemoteId, a: VideoAttributes) -> Video {
    Video {
        id: id.into_string(),
        status: status(&a.published_at, a.archived),
        slug: a.slug,
        title: a.title,
        date: a.session_date,
        description: a.description,
        duration_secs: a.duration_seconds,
        media: MediaUrls {
            video_url: a.video_url,
            audio_url: a.audio_url,
            thumbnail_url: a.thumbnail.map(|t| t.url),
        },
        dj_slugs: a.dj_slugs,
        series_slug: a.series,
        genres: tag_names(a.genres),
    }
}

fn map_dj(id: RemoteId, a: DjAttributes) -> Dj {
    Dj {
        id: id.into_string(),
        status: status(&a.published_at, a.archived),
        slug: a.slug,
        name: a.name,
        bio: a.bio,
        city: a.city,
        avatar_url: a.avatar.map(|img| img.url),
        genres: tag_names(a.genres),
        links: a.links,
    }
}

fn map_event(id: RemoteId, a: EventAttributes) -> Event {
    Event {
        id: id.into_string(),
        status: status(&a.published_at, a.archived),
        title: a.title,
        date: a.event_date,
        venue: a.venue,
        city: a.city,
        ticket_url: a.ticket_url,
        dj_slugs: a.dj_slugs,
        genres: tag_names(a.genres),
    }
}

fn map_series(id: RemoteId, a: SeriesAttributes) -> Series {
    Series {
        id: id.into_string(),
        status: status(&a.published_at, a.archived),
        slug: a.slug,
        title: a.title,
        description: a.description,
        cover_url: a.cover.map(|img| img.url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_video_record() {
        let envelope: ListEnvelope<VideoAttributes> = serde_json::from_str(
            r#"{
                "data": [{
                    "id": 42,
                    "attributes": {
                        "title": "Nova: Warehouse Session",
                        "slug": "nova-warehouse-session",
                        "sessionDate": "2024-03-14",
                        "durationSeconds": 7200,
                        "videoUrl": "https://cdn.example/v.m3u8",
                        "thumbnail": { "url": "https://cdn.example/t.jpg", "width": 640 },
                        "djSlugs": ["nova"],
                        "series": "warehouse-nights",
                        "genres": [{ "name": "Techno" }, { "name": "Dub Techno" }],
                        "publishedAt": "2024-03-15T10:00:00.000Z"
                    }
                }]
            }"#,
        )
        .unwrap();

        let record = envelope.data.into_iter().next().unwrap();
        let video = map_video(record.id, record.attributes);

        assert_eq!(video.id, "42");
        assert_eq!(video.status, PublishStatus::Published);
        assert_eq!(video.media.thumbnail_url.as_deref(), Some("https://cdn.example/t.jpg"));
        assert_eq!(video.genres, vec!["Techno", "Dub Techno"]);
        assert_eq!(video.series_slug.as_deref(), Some("warehouse-nights"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status(&None, false), PublishStatus::Draft);
        assert_eq!(status(&Some("2024-01-01".into()), false), PublishStatus::Published);
        assert_eq!(status(&Some("2024-01-01".into()), true), PublishStatus::Archived);
    }

    #[test]
    fn test_string_ids_are_kept() {
        let record: Record<SeriesAttributes> = serde_json::from_str(
            r#"{ "id": "abc123", "attributes": { "title": "Rooftops", "slug": "rooftops" } }"#,
        )
        .unwrap();
        let series = map_series(record.id, record.attributes);
        assert_eq!(series.id, "abc123");
        assert_eq!(series.status, PublishStatus::Draft);
    }

    #[test]
    fn test_requires_base_url() {
        let config = RemoteConfig {
            base_url: "   ".to_string(),
            ..RemoteConfig::default()
        };
        assert!(matches!(RemoteSource::new(&config), Err(CmsError::InvalidConfig(_))));
    }
}
