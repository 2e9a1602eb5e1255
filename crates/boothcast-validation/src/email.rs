//! Email validation

/// Validates an email address conservatively.
///
/// Accepts `local@domain.tld` where:
/// - there is exactly one '@'
/// - the local part is 1..=64 chars of alphanumerics and `._%+-`, with no
///   leading, trailing or doubled dot
/// - the domain has at least one dot, no empty labels, and no label
///   starting or ending with a hyphen
/// - the TLD is alphabetic and at least 2 characters
///
/// Any whitespace anywhere rejects the address.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() < 6 || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || local.len() > 64 {
        return false;
    }

    let valid_local_char =
        |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-');
    if !local.chars().all(valid_local_char)
        || local.starts_with('.')
        || local.ends_with('.')
        || local.contains("..")
    {
        return false;
    }

    if domain.is_empty() || domain.len() > 255 {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    for label in &labels {
        if label.is_empty() || label.starts_with('-') || label.ends_with('-') {
            return false;
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return false;
        }
    }

    // Safe: labels.len() >= 2 checked above
    let tld = labels[labels.len() - 1];
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("bob@example.com")]
    #[case("test.user@example.co.uk")]
    #[case("user+tag@example.com")]
    #[case("dj_name@sub-domain.example.org")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(is_valid_email(email), "{email} should be valid");
    }

    #[rstest]
    #[case("")]
    #[case("bob@")]
    #[case("@example.com")]
    #[case("bob@@example.com")]
    #[case("bob@example")]
    #[case("bob@.com")]
    #[case("bob@example..com")]
    #[case("bob..smith@example.com")]
    #[case("bob smith@example.com")]
    #[case("bob@example.c")]
    #[case("bob@-example.com")]
    #[case("bob@example.123")]
    fn test_invalid_emails(#[case] email: &str) {
        assert!(!is_valid_email(email), "{email} should be invalid");
    }
}
