//! Boothcast Validation Core
//!
//! Pure predicate functions used by the form engine and by server-side
//! re-validation of submitted forms. Nothing in here holds state.

pub mod email;
pub mod pattern;
pub mod string;
pub mod uri;

pub use email::*;
pub use pattern::*;
pub use string::*;
pub use uri::*;

/// Fallback messages used when a rule does not carry its own.
pub mod messages {
    pub const REQUIRED: &str = "This field is required";
    pub const EMAIL: &str = "Please enter a valid email";
    pub const URL: &str = "Please enter a valid URL";
    pub const PATTERN: &str = "Invalid format";
    pub const SUBMIT: &str = "Something went wrong. Please try again.";
}
