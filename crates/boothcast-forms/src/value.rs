// File: src/value.rs
// Purpose: Field values held by a form (text inputs and checkboxes)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current values of a form keyed by field name
pub type FormValues = BTreeMap<String, FieldValue>;

/// Value of a single field
///
/// Text inputs carry strings, checkbox-like inputs carry booleans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
}

impl FieldValue {
    /// Text content, or `None` for checkbox values
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(checked) => Some(*checked),
            FieldValue::Text(_) => None,
        }
    }

    /// Whitespace-only text and unchecked boxes count as empty
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => boothcast_validation::is_blank(text),
            FieldValue::Bool(checked) => !checked,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emptiness() {
        assert!(FieldValue::from("").is_empty());
        assert!(FieldValue::from("   ").is_empty());
        assert!(!FieldValue::from(" x ").is_empty());
        assert!(FieldValue::from(false).is_empty());
        assert!(!FieldValue::from(true).is_empty());
    }

    #[test]
    fn test_untagged_serde() {
        let values: FormValues =
            serde_json::from_str(r#"{"name":"Nova","agreeTerms":true}"#).unwrap();
        assert_eq!(values["name"], FieldValue::Text("Nova".to_string()));
        assert_eq!(values["agreeTerms"], FieldValue::Bool(true));

        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"{"agreeTerms":true,"name":"Nova"}"#);
    }
}
