//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{
    common_section, length_section, lowercase_section, number_section, special_section,
    uppercase_section,
};
use crate::types::{Criterion, POINTS_PER_CRITERION, StrengthResult};

/// Evaluates password strength.
///
/// Runs every criterion section in order and scores 20 points for each one
/// satisfied. The denylist check is reported through `is_common` only.
/// Pure and synchronous, cheap enough to call on every keystroke.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthResult` with the five criteria, the score and the common flag.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthResult {
    let mut result = StrengthResult::default();

    // Orchestrator: execute sections in sequence
    let sections: [(Criterion, fn(&SecretString) -> bool); 5] = [
        (Criterion::Length, length_section),
        (Criterion::Uppercase, uppercase_section),
        (Criterion::Lowercase, lowercase_section),
        (Criterion::Number, number_section),
        (Criterion::Special, special_section),
    ];

    for (criterion, section_fn) in sections {
        let met = section_fn(password);
        result.set(criterion, met);
        if met {
            result.score += POINTS_PER_CRITERION;
        }
    }

    result.is_common = common_section(password);

    #[cfg(feature = "tracing")]
    tracing::trace!(score = result.score, is_common = result.is_common, "password evaluated");

    result
}

/// Convenience wrapper for callers holding a plain string slice.
pub fn evaluate(password: &str) -> StrengthResult {
    evaluate_password_strength(&SecretString::new(password.to_string().into()))
}
