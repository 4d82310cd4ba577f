//! Password evaluation sections
//!
//! Each section checks one criterion of password strength.

mod common;
mod length;
mod variety;

pub use common::common_section;
pub use length::{length_section, MIN_LENGTH};
pub use variety::{lowercase_section, number_section, special_section, uppercase_section};

/// Result type for section evaluation functions.
/// - `true` - criterion satisfied
/// - `false` - criterion not satisfied
pub type SectionResult = bool;
