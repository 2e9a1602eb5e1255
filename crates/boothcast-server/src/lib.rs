// File: src/lib.rs
// Purpose: Router and shared state for the Boothcast API

pub mod content;
pub mod error;
pub mod forms;

use axum::routing::{get, post};
use axum::Router;
use boothcast::forms::{catalog, HttpSubmitter};
use boothcast::{ContentSource, Form, FormsConfig};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ContentSource>,
    pub forms: FormsConfig,
}

impl AppState {
    pub fn new(source: Arc<dyn ContentSource>, forms: FormsConfig) -> Self {
        Self { source, forms }
    }

    /// Fresh catalog form configured from the `forms` settings
    pub fn build_form(&self, name: &str) -> Option<Form> {
        catalog::lookup(name).map(|definition| definition.build_with(self.forms.form_options()))
    }

    /// Submitter for a form when a forward URL is configured
    pub fn submitter(&self, form: &str) -> anyhow::Result<Option<HttpSubmitter>> {
        let Some(ref url) = self.forms.forward_url else {
            return Ok(None);
        };

        let submitter = HttpSubmitter::with_timeout(
            url.clone(),
            form,
            Duration::from_secs(self.forms.forward_timeout_secs),
        )?;
        Ok(Some(submitter))
    }
}

/// Build the API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/videos", get(content::list_videos))
        .route("/api/videos/:id", get(content::get_video))
        .route("/api/djs", get(content::list_djs))
        .route("/api/djs/:slug", get(content::get_dj))
        .route("/api/djs/:slug/videos", get(content::get_dj_videos))
        .route("/api/events", get(content::list_events))
        .route("/api/events/:id", get(content::get_event))
        .route("/api/series", get(content::list_series))
        .route("/api/series/:slug", get(content::get_series))
        .route("/api/series/:slug/videos", get(content::get_series_videos))
        .route("/api/stats", get(content::get_stats))
        .route("/api/forms/:form", post(forms::submit_form))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
