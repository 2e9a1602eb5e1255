// File: src/submitter.rs
// Purpose: Submission callback that posts form values to a form-processing endpoint

use crate::errors::SubmitError;
use crate::value::FormValues;
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct SubmissionBody<'a> {
    form: &'a str,
    fields: &'a FormValues,
}

/// Posts `{ "form": <name>, "fields": { ... } }` as JSON
///
/// ```ignore
/// let submitter = HttpSubmitter::new("https://forms.example.com/f/apply", "application")?;
/// form.submit(|values| async move { submitter.send(&values).await }).await;
/// ```
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
    form: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>, form: impl Into<String>) -> Result<Self, SubmitError> {
        Self::with_timeout(endpoint, form, Duration::from_secs(15))
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        form: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            form: form.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one submission
    ///
    /// Non-success statuses become [`SubmitError::Status`]; a 422 carrying a
    /// `{ "error": "..." }` body becomes [`SubmitError::Rejected`].
    pub async fn send(&self, values: &FormValues) -> Result<(), SubmitError> {
        let body = SubmissionBody {
            form: &self.form,
            fields: values,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(form = %self.form, status = status.as_u16(), "submission accepted");
            return Ok(());
        }

        if status == reqwest::StatusCode::UNPROCESSABLE_ENTITY {
            if let Ok(body) = response.json::<serde_json::Value>().await {
                if let Some(message) = body.get("error").and_then(|v| v.as_str()) {
                    return Err(SubmitError::rejected(message));
                }
            }
        }

        Err(SubmitError::Status {
            status: status.as_u16(),
        })
    }
}
