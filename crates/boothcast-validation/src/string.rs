//! String length validation
//!
//! Lengths are counted in characters after trimming surrounding whitespace,
//! so padding a bio with spaces does not get it past a minimum.

/// Character count of the trimmed value.
pub fn char_len(s: &str) -> usize {
    s.trim().chars().count()
}

/// True when the value is empty once trimmed.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if char_len(s) >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if char_len(s) <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

/// Checks both bounds; either may be absent.
pub fn validate_length(s: &str, min: Option<usize>, max: Option<usize>) -> Result<(), String> {
    if let Some(min) = min {
        validate_min_length(s, min)?;
    }
    if let Some(max) = max {
        validate_max_length(s, max)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_trims() {
        assert_eq!(char_len("  hello  "), 5);
        assert_eq!(char_len("   "), 0);
        assert_eq!(char_len("café"), 4);
    }

    #[test]
    fn test_length_validators() {
        assert!(validate_min_length("hello", 3).is_ok());
        assert!(validate_min_length("hi", 3).is_err());
        assert!(validate_min_length("  hi   ", 3).is_err());

        assert!(validate_max_length("hello", 10).is_ok());
        assert!(validate_max_length("verylongstring", 5).is_err());

        assert!(validate_length("hello", Some(3), Some(10)).is_ok());
        assert!(validate_length("hi", Some(3), Some(10)).is_err());
        assert!(validate_length("verylongstring", None, Some(10)).is_err());
        assert!(validate_length("anything", None, None).is_ok());
    }

    #[test]
    fn test_length_messages() {
        assert_eq!(
            validate_min_length("ab", 5).unwrap_err(),
            "Must be at least 5 characters"
        );
        assert_eq!(
            validate_max_length("abcdef", 5).unwrap_err(),
            "Must be at most 5 characters"
        );
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" x "));
    }
}
