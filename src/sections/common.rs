//! Common section - checks if password is in the denylist.

use crate::denylist::is_common;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks if the password is one of the well-known weak passwords.
///
/// Unlike the other sections a `true` here is bad news; the evaluator
/// reports it as a flag and does not score it.
pub fn common_section(password: &SecretString) -> SectionResult {
    is_common(password.expose_secret())
}
