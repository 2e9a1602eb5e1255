// File: src/content.rs
// Purpose: Read-only content endpoints backed by the configured content source

use crate::{ApiError, AppState};
use axum::extract::{Path, State};
use axum::Json;
use boothcast::cms::{Dj, Event, Series, SiteStats, Video};

type ApiResult<T> = Result<Json<T>, ApiError>;

fn found<T>(record: Option<T>, kind: &str, key: &str) -> ApiResult<T> {
    record
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("{} '{}' not found", kind, key)))
}

pub async fn list_videos(State(state): State<AppState>) -> ApiResult<Vec<Video>> {
    Ok(Json(state.source.get_videos().await?))
}

pub async fn get_video(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Video> {
    found(state.source.get_video(&id).await?, "video", &id)
}

pub async fn list_djs(State(state): State<AppState>) -> ApiResult<Vec<Dj>> {
    Ok(Json(state.source.get_djs().await?))
}

pub async fn get_dj(State(state): State<AppState>, Path(slug): Path<String>) -> ApiResult<Dj> {
    found(state.source.get_dj(&slug).await?, "dj", &slug)
}

pub async fn get_dj_videos(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Vec<Video>> {
    if state.source.get_dj(&slug).await?.is_none() {
        return Err(ApiError::NotFound(format!("dj '{}' not found", slug)));
    }
    Ok(Json(state.source.get_dj_videos(&slug).await?))
}

pub async fn list_events(State(state): State<AppState>) -> ApiResult<Vec<Event>> {
    Ok(Json(state.source.get_events().await?))
}

pub async fn get_event(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Event> {
    found(state.source.get_event(&id).await?, "event", &id)
}

pub async fn list_series(State(state): State<AppState>) -> ApiResult<Vec<Series>> {
    Ok(Json(state.source.get_series().await?))
}

pub async fn get_series(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Series> {
    found(state.source.get_series_by_slug(&slug).await?, "series", &slug)
}

pub async fn get_series_videos(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Vec<Video>> {
    if state.source.get_series_by_slug(&slug).await?.is_none() {
        return Err(ApiError::NotFound(format!("series '{}' not found", slug)));
    }
    Ok(Json(state.source.get_series_videos(&slug).await?))
}

pub async fn get_stats(State(state): State<AppState>) -> ApiResult<SiteStats> {
    Ok(Json(state.source.get_stats().await?))
}
