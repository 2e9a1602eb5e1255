// File: src/validate.rs
// Purpose: Evaluate form values against a rule set

use crate::errors::ErrorMap;
use crate::rules::{FieldRules, Rule, RuleSet};
use crate::value::{FieldValue, FormValues};
use boothcast_validation::{self as predicates, messages};

/// Validate every field that has rules and collect one message per failing field
///
/// Pure: the same values and rules always produce the same map. A panicking
/// custom rule is a programming error and is not caught.
pub fn validate(values: &FormValues, rules: &RuleSet) -> ErrorMap {
    let errors: ErrorMap = rules
        .iter()
        .filter_map(|(name, field_rules)| {
            validate_field(values.get(name), field_rules, values)
                .map(|message| (name.to_string(), message))
        })
        .collect();

    if errors.has_errors() {
        tracing::debug!(
            fields = ?errors.fields().collect::<Vec<_>>(),
            "form validation failed"
        );
    }

    errors
}

/// Validate a single field, returning the first failing rule's message
///
/// Empty optional fields are always valid. Text predicates (email, url,
/// length, pattern) do not apply to checkbox values.
pub fn validate_field(
    value: Option<&FieldValue>,
    rules: &FieldRules,
    all_values: &FormValues,
) -> Option<String> {
    let is_empty = value.map(FieldValue::is_empty).unwrap_or(true);

    if is_empty {
        return rules.rules().iter().find_map(|rule| match rule {
            Rule::Required { message } => Some(
                message
                    .clone()
                    .unwrap_or_else(|| messages::REQUIRED.to_string()),
            ),
            _ => None,
        });
    }

    // Safe: non-empty implies present
    let value = value?;
    let text = value.as_text();

    for rule in rules.rules() {
        let failure = match (rule, text) {
            (Rule::Required { .. }, _) => None,
            (Rule::Email { message }, Some(text)) => (!predicates::is_valid_email(text.trim()))
                .then(|| message.clone().unwrap_or_else(|| messages::EMAIL.to_string())),
            (Rule::Url { message }, Some(text)) => (!predicates::is_valid_url(text))
                .then(|| message.clone().unwrap_or_else(|| messages::URL.to_string())),
            (Rule::Length { min, max, message }, Some(text)) => {
                predicates::validate_length(text, *min, *max)
                    .err()
                    .map(|default| message.clone().unwrap_or(default))
            }
            (Rule::Pattern { regex, message }, Some(text)) => (!predicates::matches_pattern(
                text.trim(),
                regex,
            ))
            .then(|| message.clone().unwrap_or_else(|| messages::PATTERN.to_string())),
            (Rule::Custom(check), _) => check(value, all_values),
            (_, None) => None,
        };

        if failure.is_some() {
            return failure;
        }
    }

    None
}
