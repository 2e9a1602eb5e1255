// File: src/lib.rs
// Purpose: Boothcast umbrella crate - site configuration plus re-exports

pub mod config;

pub use config::{FormsConfig, ServerConfig, SiteConfig};

pub use boothcast_cms as cms;
pub use boothcast_forms as forms;
pub use boothcast_validation as validation;

pub use boothcast_cms::{create_source, CmsConfig, ContentSource};
pub use boothcast_forms::{validate, ErrorMap, Form, FormValues, RuleSet};
