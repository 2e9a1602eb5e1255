// File: src/forms.rs
// Purpose: Server-side validation and intake of form submissions

use crate::{ApiError, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use boothcast::forms::SubmitOutcome;
use boothcast::FormValues;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Receipt {
    pub status: &'static str,
    pub id: Uuid,
}

/// POST /api/forms/:form
///
/// Runs the submission through the same form engine the client uses. Valid
/// submissions are forwarded to the configured form endpoint, or only logged
/// when none is set.
pub async fn submit_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<FormValues>, JsonRejection>,
) -> Result<(StatusCode, Json<Receipt>), ApiError> {
    let form = state
        .build_form(&name)
        .ok_or_else(|| ApiError::NotFound(format!("form '{}' not found", name)))?;
    let Json(values) = payload?;

    // Only fields the form knows about are kept
    for (field, value) in values {
        if form.initial_values().contains_key(&field) {
            form.set_value(&field, value);
        }
    }

    let submitter = state.submitter(&name).map_err(ApiError::Internal)?;
    let endpoint = submitter.as_ref().map(|s| s.endpoint().to_string());

    let outcome = form
        .submit(move |snapshot| async move {
            match submitter {
                Some(submitter) => submitter.send(&snapshot).await,
                None => Ok(()),
            }
        })
        .await;

    match outcome {
        SubmitOutcome::Submitted => {
            let id = Uuid::new_v4();
            match endpoint {
                Some(endpoint) => {
                    tracing::info!(form = %name, %id, endpoint = %endpoint, "submission forwarded")
                }
                None => tracing::info!(form = %name, %id, "submission received"),
            }
            Ok((
                StatusCode::ACCEPTED,
                Json(Receipt {
                    status: "received",
                    id,
                }),
            ))
        }
        SubmitOutcome::Invalid => {
            let errors = form.errors();
            tracing::debug!(form = %name, fields = errors.len(), "submission rejected");
            Err(ApiError::Validation(errors))
        }
        SubmitOutcome::Failed(message) => Err(ApiError::Upstream(message)),
        // The form is local to this request, so neither can happen
        SubmitOutcome::InFlight | SubmitOutcome::Discarded => Err(ApiError::Internal(
            anyhow::anyhow!("form '{}' submission did not complete", name),
        )),
    }
}
