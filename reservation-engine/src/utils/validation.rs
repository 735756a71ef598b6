//! Contact field format checks
//!
//! Used by the booking form layer. The request validator only checks that
//! contact fields are present.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$")
        .expect("phone pattern is valid")
});

/// `local@domain.tld` shape, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// North-American style number with optional `+`, parentheses and separators.
/// Whitespace is ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

/// Non-empty after trimming
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
