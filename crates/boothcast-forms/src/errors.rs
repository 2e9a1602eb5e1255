// File: src/errors.rs
// Purpose: Field error map and submission failures

use boothcast_validation::messages;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Key of the synthetic entry added when the submission callback fails
pub const SUBMIT_ERROR_KEY: &str = "submit";

/// Field names to a single error message each
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Check if field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Get error message for a field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(|s| s.as_str())
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    /// Field names with errors, in name order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl FromIterator<(String, String)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Failure reported by a submission callback
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The receiving system refused the submission
    #[error("{0}")]
    Rejected(String),

    /// The request never completed (connection, timeout, ...)
    #[error("{0}")]
    Transport(String),

    /// The endpoint answered with a non-success status
    #[error("request failed with status {status}")]
    Status { status: u16 },
}

impl SubmitError {
    pub fn rejected(message: impl Into<String>) -> Self {
        SubmitError::Rejected(message.into())
    }

    /// Message shown to the user; falls back to a generic one when blank
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            messages::SUBMIT.to_string()
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_map_accessors() {
        let mut errors = ErrorMap::new();
        assert!(!errors.has_errors());

        errors.insert("email", "Please enter a valid email");
        assert!(errors.has_error("email"));
        assert_eq!(errors.get_error("email"), Some("Please enter a valid email"));
        assert_eq!(errors.len(), 1);
        assert!(errors.get_error("name").is_none());

        assert_eq!(errors.remove("email").as_deref(), Some("Please enter a valid email"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_error_map_serializes_flat() {
        let mut errors = ErrorMap::new();
        errors.insert("submit", "network error");
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"submit":"network error"}"#
        );
    }

    #[test]
    fn test_submit_error_user_message() {
        assert_eq!(SubmitError::rejected("network error").user_message(), "network error");
        assert_eq!(SubmitError::rejected("  ").user_message(), messages::SUBMIT);
        assert_eq!(
            SubmitError::Status { status: 503 }.user_message(),
            "request failed with status 503"
        );
    }
}
