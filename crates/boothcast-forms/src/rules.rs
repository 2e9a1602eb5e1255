// File: src/rules.rs
// Purpose: Typed validation rules and per-form rule sets

use crate::value::{FieldValue, FormValues};
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Cross-field check: receives the field's value and every value of the form,
/// returns an error message when the value is rejected
pub type CustomFn = Arc<dyn Fn(&FieldValue, &FormValues) -> Option<String> + Send + Sync>;

/// A single predicate applied to a field
///
/// Rules are always evaluated in variant order (required, email, url,
/// length, pattern, custom) no matter the order they were added in.
#[derive(Clone)]
pub enum Rule {
    Required { message: Option<String> },
    Email { message: Option<String> },
    Url { message: Option<String> },
    Length {
        min: Option<usize>,
        max: Option<usize>,
        message: Option<String>,
    },
    Pattern { regex: Regex, message: Option<String> },
    Custom(CustomFn),
}

impl Rule {
    fn rank(&self) -> u8 {
        match self {
            Rule::Required { .. } => 0,
            Rule::Email { .. } => 1,
            Rule::Url { .. } => 2,
            Rule::Length { .. } => 3,
            Rule::Pattern { .. } => 4,
            Rule::Custom(_) => 5,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required { message } => f.debug_struct("Required").field("message", message).finish(),
            Rule::Email { message } => f.debug_struct("Email").field("message", message).finish(),
            Rule::Url { message } => f.debug_struct("Url").field("message", message).finish(),
            Rule::Length { min, max, message } => f
                .debug_struct("Length")
                .field("min", min)
                .field("max", max)
                .field("message", message)
                .finish(),
            Rule::Pattern { regex, message } => f
                .debug_struct("Pattern")
                .field("regex", &regex.as_str())
                .field("message", message)
                .finish(),
            Rule::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Ordered rules for one field
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, keeping evaluation order
    ///
    /// Rules of equal rank (several custom checks) keep insertion order.
    pub fn with(mut self, rule: Rule) -> Self {
        let rank = rule.rank();
        let position = self
            .rules
            .iter()
            .position(|existing| existing.rank() > rank)
            .unwrap_or(self.rules.len());
        self.rules.insert(position, rule);
        self
    }

    pub fn required(self) -> Self {
        self.with(Rule::Required { message: None })
    }

    pub fn required_with(self, message: impl Into<String>) -> Self {
        self.with(Rule::Required { message: Some(message.into()) })
    }

    pub fn email(self) -> Self {
        self.with(Rule::Email { message: None })
    }

    pub fn email_with(self, message: impl Into<String>) -> Self {
        self.with(Rule::Email { message: Some(message.into()) })
    }

    pub fn url(self) -> Self {
        self.with(Rule::Url { message: None })
    }

    pub fn url_with(self, message: impl Into<String>) -> Self {
        self.with(Rule::Url { message: Some(message.into()) })
    }

    pub fn min_length(self, min: usize) -> Self {
        self.with(Rule::Length { min: Some(min), max: None, message: None })
    }

    pub fn max_length(self, max: usize) -> Self {
        self.with(Rule::Length { min: None, max: Some(max), message: None })
    }

    pub fn length(self, min: usize, max: usize, message: impl Into<String>) -> Self {
        self.with(Rule::Length {
            min: Some(min),
            max: Some(max),
            message: Some(message.into()),
        })
    }

    pub fn pattern(self, regex: Regex, message: impl Into<String>) -> Self {
        self.with(Rule::Pattern { regex, message: Some(message.into()) })
    }

    pub fn custom<F>(self, check: F) -> Self
    where
        F: Fn(&FieldValue, &FormValues) -> Option<String> + Send + Sync + 'static,
    {
        self.with(Rule::Custom(Arc::new(check)))
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|rule| matches!(rule, Rule::Required { .. }))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Rules for every validated field of a form
///
/// Immutable once handed to a [`crate::Form`]; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: Vec<(String, FieldRules)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rules for a field, replacing earlier rules for the same name
    pub fn field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = rules,
            None => self.fields.push((name, rules)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldRules> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, rules)| rules)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRules)> {
        self.fields.iter().map(|(name, rules)| (name.as_str(), rules))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(rules: &FieldRules) -> Vec<u8> {
        rules.rules().iter().map(Rule::rank).collect()
    }

    #[test]
    fn test_rules_sorted_into_evaluation_order() {
        let rules = FieldRules::new()
            .custom(|_, _| None)
            .min_length(3)
            .email()
            .required();

        assert_eq!(ranks(&rules), vec![0, 1, 3, 5]);
        assert!(rules.is_required());
    }

    #[test]
    fn test_custom_rules_keep_insertion_order() {
        let rules = FieldRules::new()
            .custom(|_, _| Some("first".to_string()))
            .required()
            .custom(|_, _| Some("second".to_string()));

        let values = FormValues::new();
        let messages: Vec<String> = rules
            .rules()
            .iter()
            .filter_map(|rule| match rule {
                Rule::Custom(check) => check(&FieldValue::default(), &values),
                _ => None,
            })
            .collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_rule_set_replaces_field() {
        let set = RuleSet::new()
            .field("email", FieldRules::new().email())
            .field("name", FieldRules::new().required())
            .field("email", FieldRules::new().required().email());

        assert_eq!(set.len(), 2);
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["email", "name"]);
        assert!(set.get("email").map(FieldRules::is_required).unwrap_or(false));
        assert!(!set.contains("bio"));
    }

    #[test]
    fn test_debug_hides_custom_closure() {
        let rules = FieldRules::new().custom(|_, _| None);
        assert_eq!(format!("{:?}", rules.rules()[0]), "Custom(..)");
    }
}
