//! URL validation

use ::url::Url;

/// Schemes that parse as absolute URLs but never point at a host.
const HOSTLESS_SCHEMES: &[&str] = &["mailto", "data", "javascript", "file"];

/// Validates an absolute URL: it must parse, carry a scheme, and name a host.
///
/// `https://soundcloud.com/some-mix` passes, `soundcloud.com/some-mix`
/// (no scheme) and `https://` (no host) do not.
pub fn is_valid_url(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    match Url::parse(value) {
        Ok(url) => {
            !HOSTLESS_SCHEMES.contains(&url.scheme())
                && url.host_str().map(|h| !h.is_empty()).unwrap_or(false)
        }
        Err(_) => false,
    }
}
