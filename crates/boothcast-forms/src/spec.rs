// File: src/spec.rs
// Purpose: Declarative rule documents (JSON / TOML) compiled into typed rule sets

use crate::rules::{FieldRules, Rule, RuleSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while turning a rule document into a [`RuleSet`]
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("minLength {min} exceeds maxLength {max} for field '{field}'")]
    InvalidBounds { field: String, min: usize, max: usize },

    #[error("failed to parse rule document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse rule document: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Validation rules for a single field as written in a rule document
///
/// ```json
/// { "required": true, "email": true, "requiredMessage": "Email is required" }
/// ```
///
/// Keys this version does not know about are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSpec {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub required_message: Option<String>,

    #[serde(default)]
    pub email: bool,
    #[serde(default)]
    pub url: bool,

    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,

    #[serde(default)]
    pub pattern: Option<String>,

    /// Message for every non-required predicate of this field
    #[serde(default)]
    pub message: Option<String>,
}

impl RuleSpec {
    /// Compile into typed rules
    pub fn compile(&self, field: &str) -> Result<FieldRules, RuleError> {
        let mut rules = FieldRules::new();

        if self.required {
            rules = rules.with(Rule::Required {
                message: self.required_message.clone(),
            });
        }
        if self.email {
            rules = rules.with(Rule::Email { message: self.message.clone() });
        }
        if self.url {
            rules = rules.with(Rule::Url { message: self.message.clone() });
        }

        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(RuleError::InvalidBounds {
                    field: field.to_string(),
                    min,
                    max,
                });
            }
        }
        if self.min_length.is_some() || self.max_length.is_some() {
            rules = rules.with(Rule::Length {
                min: self.min_length,
                max: self.max_length,
                message: self.message.clone(),
            });
        }

        if let Some(ref pattern) = self.pattern {
            let regex = boothcast_validation::compile_pattern(pattern).map_err(|source| {
                RuleError::InvalidPattern {
                    field: field.to_string(),
                    source,
                }
            })?;
            rules = rules.with(Rule::Pattern {
                regex,
                message: self.message.clone(),
            });
        }

        Ok(rules)
    }
}

impl RuleSet {
    /// Build a rule set from field name to rule spec entries (name order)
    pub fn from_specs(specs: &BTreeMap<String, RuleSpec>) -> Result<Self, RuleError> {
        specs.iter().try_fold(RuleSet::new(), |set, (field, spec)| {
            Ok(set.field(field.clone(), spec.compile(field)?))
        })
    }

    /// Parse a JSON object of `{ "field": { ...rules } }`
    pub fn from_json(source: &str) -> Result<Self, RuleError> {
        let specs: BTreeMap<String, RuleSpec> = serde_json::from_str(source)?;
        Self::from_specs(&specs)
    }

    /// Parse a TOML document with one table per field
    pub fn from_toml(source: &str) -> Result<Self, RuleError> {
        let specs: BTreeMap<String, RuleSpec> = toml::from_str(source)?;
        Self::from_specs(&specs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use crate::value::FormValues;

    #[test]
    fn test_json_rules_compile_and_validate() {
        let rules = RuleSet::from_json(
            r#"{
                "email": { "required": true, "email": true, "requiredMessage": "Email is required" },
                "bio": { "minLength": 50, "message": "Tell us a bit more" }
            }"#,
        )
        .unwrap();

        let mut values = FormValues::new();
        values.insert("bio".to_string(), "too short".into());

        let errors = validate(&values, &rules);
        assert_eq!(errors.get_error("email"), Some("Email is required"));
        assert_eq!(errors.get_error("bio"), Some("Tell us a bit more"));
    }

    #[test]
    fn test_unknown_predicates_are_ignored() {
        let rules = RuleSet::from_json(
            r#"{ "name": { "required": true, "phoneticallyPleasing": true } }"#,
        )
        .unwrap();
        assert_eq!(rules.get("name").map(|r| r.rules().len()), Some(1));
    }

    #[test]
    fn test_toml_rules() {
        let rules = RuleSet::from_toml(
            r#"
            [website]
            url = true

            [handle]
            pattern = "^@?[a-z]+$"
            "#,
        )
        .unwrap();
        assert_eq!(rules.names().collect::<Vec<_>>(), vec!["handle", "website"]);
    }

    #[test]
    fn test_invalid_pattern_reported() {
        let err = RuleSet::from_json(r#"{ "zip": { "pattern": "(" } }"#).unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { ref field, .. } if field == "zip"));
    }

    #[test]
    fn test_inverted_bounds_reported() {
        let err = RuleSet::from_json(r#"{ "bio": { "minLength": 10, "maxLength": 5 } }"#)
            .unwrap_err();
        assert!(matches!(err, RuleError::InvalidBounds { min: 10, max: 5, .. }));
    }
}
