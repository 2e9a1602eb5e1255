//! Form state: values, touched fields, errors and the submission lifecycle
//!
//! A [`Form`] is a cheap-to-clone handle. Every operation runs to completion
//! under a short lock; the only suspension point is `submit`, which takes a
//! snapshot of the values and releases the lock before awaiting the callback,
//! so `set_value`/`blur` keep working while a submission is in flight.

use crate::errors::{ErrorMap, SubmitError, SUBMIT_ERROR_KEY};
use crate::rules::RuleSet;
use crate::validate::validate;
use crate::value::{FieldValue, FormValues};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Where a form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed,
}

/// What `submit` does when a submission is already in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReentryPolicy {
    /// Return [`SubmitOutcome::InFlight`] without invoking the callback
    #[default]
    Ignore,
    /// Start another submission alongside the first
    Allow,
}

#[derive(Debug, Clone, Default)]
pub struct FormOptions {
    pub reentry: ReentryPolicy,
}

/// Result of a call to [`Form::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The callback succeeded
    Submitted,
    /// Validation failed; the callback was not invoked
    Invalid,
    /// The callback failed with this user-facing message
    Failed(String),
    /// Another submission was in flight and the call was ignored
    InFlight,
    /// The form was reset while the callback ran; its result was dropped
    Discarded,
}

/// Everything a UI component needs to render one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    pub name: String,
    pub value: FieldValue,
    pub touched: bool,
    /// Error to display: only set once the field has been touched
    pub error: Option<String>,
}

#[derive(Debug)]
struct FormInner {
    values: FormValues,
    errors: ErrorMap,
    touched: BTreeSet<String>,
    state: SubmissionState,
    /// Bumped by `reset` so in-flight submissions can tell they are stale
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct Form {
    initial: Arc<FormValues>,
    rules: Arc<RuleSet>,
    options: FormOptions,
    inner: Arc<RwLock<FormInner>>,
}

impl Form {
    /// Create a form from its initial values and rules
    ///
    /// The initial values define the set of known fields.
    pub fn new(initial: FormValues, rules: RuleSet) -> Self {
        Self::with_options(initial, rules, FormOptions::default())
    }

    pub fn with_options(initial: FormValues, rules: RuleSet, options: FormOptions) -> Self {
        let inner = FormInner {
            values: initial.clone(),
            errors: ErrorMap::new(),
            touched: BTreeSet::new(),
            state: SubmissionState::Idle,
            generation: 0,
        };

        Self {
            initial: Arc::new(initial),
            rules: Arc::new(rules),
            options,
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, FormInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FormInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_known(&self, name: &str) -> bool {
        self.initial.contains_key(name)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// Store a new value and dismiss the field's error until the next blur or submit
    pub fn set_value(&self, name: &str, value: impl Into<FieldValue>) {
        let mut inner = self.write();
        inner.values.insert(name.to_string(), value.into());
        inner.errors.remove(name);
    }

    /// Mark a field as touched and refresh its error
    ///
    /// Other fields' errors are left untouched. Unknown field names are ignored.
    pub fn blur(&self, name: &str) {
        if !self.is_known(name) {
            tracing::debug!(field = name, "blur on unknown field ignored");
            return;
        }

        let mut inner = self.write();
        inner.touched.insert(name.to_string());

        let errors = validate(&inner.values, &self.rules);
        match errors.get_error(name) {
            Some(message) => inner.errors.insert(name, message),
            None => {
                inner.errors.remove(name);
            }
        }
    }

    /// Validate everything and, when valid, hand a snapshot of the values to `on_submit`
    ///
    /// A failed callback records its message under the `submit` key and
    /// leaves the values in place so the user can retry.
    pub async fn submit<F, Fut>(&self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = Result<(), SubmitError>>,
    {
        let (snapshot, generation) = {
            let mut inner = self.write();

            if inner.state == SubmissionState::Submitting
                && self.options.reentry == ReentryPolicy::Ignore
            {
                tracing::debug!("submit ignored: submission already in flight");
                return SubmitOutcome::InFlight;
            }

            inner.touched = self.initial.keys().cloned().collect();

            let errors = validate(&inner.values, &self.rules);
            if errors.has_errors() {
                inner.errors = errors;
                return SubmitOutcome::Invalid;
            }

            inner.errors = ErrorMap::new();
            inner.state = SubmissionState::Submitting;
            (inner.values.clone(), inner.generation)
        };

        let result = on_submit(snapshot).await;

        let mut inner = self.write();
        if inner.generation != generation {
            tracing::debug!("form reset during submission, result discarded");
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(()) => {
                tracing::info!("form submitted");
                inner.state = SubmissionState::Submitted;
                SubmitOutcome::Submitted
            }
            Err(err) => {
                let message = err.user_message();
                tracing::warn!(error = %err, "form submission failed");
                inner.errors.insert(SUBMIT_ERROR_KEY, message.clone());
                inner.state = SubmissionState::Failed;
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Restore the initial values and clear errors, touched fields and submission state
    pub fn reset(&self) {
        let mut inner = self.write();
        inner.values = (*self.initial).clone();
        inner.errors = ErrorMap::new();
        inner.touched.clear();
        inner.state = SubmissionState::Idle;
        inner.generation = inner.generation.wrapping_add(1);
    }

    pub fn values(&self) -> FormValues {
        self.read().values.clone()
    }

    pub fn value(&self, name: &str) -> Option<FieldValue> {
        self.read().values.get(name).cloned()
    }

    /// Initial values the form was created with
    pub fn initial_values(&self) -> &FormValues {
        &self.initial
    }

    /// All current errors, visible or not
    pub fn errors(&self) -> ErrorMap {
        self.read().errors.clone()
    }

    pub fn touched(&self) -> BTreeSet<String> {
        self.read().touched.clone()
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.read().touched.contains(name)
    }

    pub fn state(&self) -> SubmissionState {
        self.read().state
    }

    pub fn is_submitting(&self) -> bool {
        self.state() == SubmissionState::Submitting
    }

    /// Error to show for a field: present only once the field is touched
    pub fn visible_error(&self, name: &str) -> Option<String> {
        let inner = self.read();
        if inner.touched.contains(name) {
            inner.errors.get_error(name).map(str::to_string)
        } else {
            None
        }
    }

    /// Error from the last failed submission, if any
    pub fn submit_error(&self) -> Option<String> {
        self.read().errors.get_error(SUBMIT_ERROR_KEY).map(str::to_string)
    }

    pub fn binding(&self, name: &str) -> Option<FieldBinding> {
        if !self.is_known(name) {
            return None;
        }

        let inner = self.read();
        let touched = inner.touched.contains(name);
        Some(FieldBinding {
            name: name.to_string(),
            value: inner.values.get(name).cloned().unwrap_or_default(),
            touched,
            error: touched
                .then(|| inner.errors.get_error(name).map(str::to_string))
                .flatten(),
        })
    }

    /// Bindings for every known field, in name order
    pub fn bindings(&self) -> Vec<FieldBinding> {
        self.initial
            .keys()
            .filter_map(|name| self.binding(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::FieldRules;
    use pretty_assertions::assert_eq;

    fn signup_form() -> Form {
        let mut initial = FormValues::new();
        initial.insert("email".to_string(), "".into());
        initial.insert("name".to_string(), "".into());

        let rules = RuleSet::new()
            .field("email", FieldRules::new().required().email())
            .field("name", FieldRules::new().required());

        Form::new(initial, rules)
    }

    #[test]
    fn test_blur_gates_visible_error() {
        let form = signup_form();
        form.set_value("email", "bob@");
        assert!(form.visible_error("email").is_none());

        form.blur("email");
        assert_eq!(form.visible_error("email").as_deref(), Some("Please enter a valid email"));
        // name was never blurred, so it gets no error entry
        assert!(!form.errors().has_error("name"));
    }

    #[test]
    fn test_set_value_clears_error_without_revalidating() {
        let form = signup_form();
        form.set_value("email", "bob@");
        form.blur("email");
        assert!(form.errors().has_error("email"));

        form.set_value("email", "still@bad");
        assert!(!form.errors().has_error("email"));

        form.blur("email");
        assert!(form.errors().has_error("email"));
    }

    #[test]
    fn test_blur_is_idempotent() {
        let form = signup_form();
        form.set_value("email", "bob@");
        form.blur("email");
        let once = form.errors();
        form.blur("email");
        assert_eq!(form.errors(), once);
    }

    #[test]
    fn test_blur_unknown_field_ignored() {
        let form = signup_form();
        form.blur("nickname");
        assert!(form.touched().is_empty());
    }

    #[test]
    fn test_bindings_follow_initial_fields() {
        let form = signup_form();
        form.set_value("name", "Nova");
        form.blur("name");

        let bindings = form.bindings();
        assert_eq!(bindings.len(), 2);
        assert_eq!(
            bindings[1],
            FieldBinding {
                name: "name".to_string(),
                value: "Nova".into(),
                touched: true,
                error: None,
            }
        );
        assert!(form.binding("unknown").is_none());
    }

    #[tokio::test]
    async fn test_submit_marks_everything_touched() {
        let form = signup_form();
        let outcome = form.submit(|_| async { Ok(()) }).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(form.touched().len(), 2);
        assert!(form.visible_error("email").is_some());
        assert!(form.visible_error("name").is_some());
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_reset_during_submission_discards_result() {
        let form = signup_form();
        form.set_value("email", "bob@example.com");
        form.set_value("name", "Bob");

        let handle = form.clone();
        let outcome = form
            .submit(move |_| async move {
                handle.reset();
                Ok(())
            })
            .await;

        assert_eq!(outcome, SubmitOutcome::Discarded);
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.values(), *form.initial_values());
    }
}
