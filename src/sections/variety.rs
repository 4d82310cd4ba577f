//! Character variety sections - uppercase, lowercase, numbers, special chars.
//!
//! Letter and digit classes are ASCII only; anything outside
//! `[A-Za-z0-9]` counts as special.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub fn uppercase_section(password: &SecretString) -> SectionResult {
    password.expose_secret().chars().any(|c| c.is_ascii_uppercase())
}

pub fn lowercase_section(password: &SecretString) -> SectionResult {
    password.expose_secret().chars().any(|c| c.is_ascii_lowercase())
}

pub fn number_section(password: &SecretString) -> SectionResult {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

pub fn special_section(password: &SecretString) -> SectionResult {
    password
        .expose_secret()
        .chars()
        .any(|c| !c.is_ascii_alphanumeric())
}
