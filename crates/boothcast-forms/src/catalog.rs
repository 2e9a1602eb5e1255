// File: src/catalog.rs
// Purpose: The forms the site ships (DJ application and partner enquiry)

use crate::form::{Form, FormOptions};
use crate::rules::{FieldRules, RuleSet};
use crate::value::{FieldValue, FormValues};
use boothcast_validation::HANDLE_REGEX;

/// Budget tiers offered on the partner form
pub const BUDGET_TIERS: &[&str] = &["under-1k", "1k-5k", "5k-20k", "20k-plus"];

/// Names of every form in the catalog
pub const FORM_NAMES: &[&str] = &["application", "partner"];

/// A named form: its rules plus the values it starts with
#[derive(Debug, Clone)]
pub struct FormDefinition {
    pub name: &'static str,
    pub rules: RuleSet,
    pub initial: FormValues,
}

impl FormDefinition {
    /// Create a fresh form instance
    pub fn build(&self) -> Form {
        self.build_with(FormOptions::default())
    }

    pub fn build_with(&self, options: FormOptions) -> Form {
        Form::with_options(self.initial.clone(), self.rules.clone(), options)
    }
}

/// Look up a form by name
pub fn lookup(name: &str) -> Option<FormDefinition> {
    match name {
        "application" => Some(application_form()),
        "partner" => Some(partner_form()),
        _ => None,
    }
}

fn blank(fields: &[&str]) -> FormValues {
    fields
        .iter()
        .map(|name| (name.to_string(), FieldValue::default()))
        .collect()
}

/// DJ application form
pub fn application_form() -> FormDefinition {
    let mut initial = blank(&["name", "email", "djName", "city", "mixUrl", "instagram", "bio"]);
    initial.insert("agreeTerms".to_string(), FieldValue::Bool(false));

    let rules = RuleSet::new()
        .field("name", FieldRules::new().required_with("Please enter your name"))
        .field(
            "email",
            FieldRules::new()
                .required_with("Please enter your email")
                .email(),
        )
        .field(
            "djName",
            FieldRules::new()
                .required_with("Please enter your DJ name")
                .max_length(60),
        )
        .field("city", FieldRules::new().required_with("Please enter your city"))
        .field(
            "mixUrl",
            FieldRules::new()
                .required_with("Please share a link to a mix")
                .url_with("Please enter a valid link to your mix"),
        )
        .field(
            "instagram",
            FieldRules::new().pattern(HANDLE_REGEX.clone(), "Please enter a valid Instagram handle"),
        )
        .field(
            "bio",
            FieldRules::new()
                .required_with("Please tell us about yourself")
                .length(50, 1000, "Bio must be between 50 and 1000 characters"),
        )
        .field(
            "agreeTerms",
            FieldRules::new().required_with("You must agree to the terms"),
        );

    FormDefinition {
        name: "application",
        rules,
        initial,
    }
}

/// Partner / brand enquiry form
pub fn partner_form() -> FormDefinition {
    let initial = blank(&["company", "contactName", "email", "website", "message", "budget"]);

    let rules = RuleSet::new()
        .field("company", FieldRules::new().required_with("Please enter your company"))
        .field("contactName", FieldRules::new().required_with("Please enter a contact name"))
        .field(
            "email",
            FieldRules::new()
                .required_with("Please enter your email")
                .email(),
        )
        .field("website", FieldRules::new().url())
        .field(
            "message",
            FieldRules::new()
                .required_with("Please enter a message")
                .length(20, 2000, "Message must be between 20 and 2000 characters"),
        )
        .field(
            "budget",
            FieldRules::new().custom(|value, _| {
                let tier = value.as_text().map(str::trim).unwrap_or_default();
                (!BUDGET_TIERS.contains(&tier)).then(|| "Please choose a budget range".to_string())
            }),
        );

    FormDefinition {
        name: "partner",
        rules,
        initial,
    }
}
