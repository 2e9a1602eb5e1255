// File: src/error.rs
// Purpose: API error responses

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use boothcast::cms::CmsError;
use boothcast::ErrorMap;
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    /// 404 with a message
    NotFound(String),
    /// Body that is not valid JSON for the endpoint; keeps the rejection's status
    InvalidBody(JsonRejection),
    /// 422 carrying the field errors
    Validation(ErrorMap),
    /// 502 when an upstream (CMS or form endpoint) fails
    Upstream(String),
    /// 500
    Internal(anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct ValidationBody {
    errors: ErrorMap,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { error: message })).into_response()
            }
            ApiError::InvalidBody(rejection) => (
                rejection.status(),
                Json(ErrorBody {
                    error: rejection.body_text(),
                }),
            )
                .into_response(),
            ApiError::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ValidationBody { errors })).into_response()
            }
            ApiError::Upstream(message) => {
                tracing::warn!("Upstream failure: {}", message);
                (StatusCode::BAD_GATEWAY, Json(ErrorBody { error: message })).into_response()
            }
            ApiError::Internal(err) => {
                tracing::error!("Internal server error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Something went wrong".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

impl From<CmsError> for ApiError {
    fn from(err: CmsError) -> Self {
        match err {
            CmsError::Http(_) | CmsError::Status { .. } | CmsError::Decode(_) => {
                ApiError::Upstream(err.to_string())
            }
            CmsError::Io(_) | CmsError::InvalidConfig(_) => ApiError::Internal(err.into()),
        }
    }
}
