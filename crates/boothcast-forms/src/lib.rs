//! # Boothcast Forms
//!
//! Form validation engine behind the DJ application and partner forms.
//!
//! - [`RuleSet`] / [`FieldRules`]: typed, ordered predicate lists per field
//! - [`validate`]: pure evaluation of values against a rule set
//! - [`Form`]: form state (values, touched fields, errors, submission state)
//! - [`catalog`]: the concrete forms the site ships
//!
//! ## Example
//!
//! ```rust
//! use boothcast_forms::{validate, FieldRules, FormValues, RuleSet};
//!
//! let rules = RuleSet::new().field("email", FieldRules::new().required().email());
//!
//! let mut values = FormValues::new();
//! values.insert("email".to_string(), "bob@".into());
//!
//! let errors = validate(&values, &rules);
//! assert_eq!(errors.get_error("email"), Some("Please enter a valid email"));
//! ```

pub mod catalog;
pub mod errors;
pub mod form;
pub mod rules;
pub mod spec;
pub mod submitter;
pub mod validate;
pub mod value;

pub use catalog::FormDefinition;
pub use errors::{ErrorMap, SubmitError, SUBMIT_ERROR_KEY};
pub use form::{FieldBinding, Form, FormOptions, ReentryPolicy, SubmissionState, SubmitOutcome};
pub use rules::{CustomFn, FieldRules, Rule, RuleSet};
pub use spec::{RuleError, RuleSpec};
pub use submitter::HttpSubmitter;
pub use validate::{validate, validate_field};
pub use value::{FieldValue, FormValues};
