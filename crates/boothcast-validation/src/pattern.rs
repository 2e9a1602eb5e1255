//! Regex pattern matching

use once_cell::sync::Lazy;
use regex::Regex;

/// Instagram-style handle: optional leading '@', 1-30 of `[A-Za-z0-9._]`.
pub static HANDLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@?[A-Za-z0-9._]{1,30}$").expect("handle regex is valid"));

/// Compile a user-supplied pattern.
///
/// The pattern is used as written; anchor it with `^...$` to require a
/// full match.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(pattern)
}

/// Check whether a value matches an already compiled pattern.
pub fn matches_pattern(value: &str, regex: &Regex) -> bool {
    regex.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_regex() {
        assert!(HANDLE_REGEX.is_match("@dj.nova"));
        assert!(HANDLE_REGEX.is_match("dj_nova"));
        assert!(!HANDLE_REGEX.is_match("dj nova"));
        assert!(!HANDLE_REGEX.is_match("@"));
    }

    #[test]
    fn test_compile_pattern_reports_errors() {
        assert!(compile_pattern(r"^\d{5}$").is_ok());
        assert!(compile_pattern(r"[").is_err());
    }
}
