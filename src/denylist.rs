//! Denylist of well-known weak passwords.

/// Passwords flagged as common regardless of their score.
pub const COMMON_PASSWORDS: [&str; 6] = [
    "123456",
    "password",
    "qwerty",
    "111111",
    "12345678",
    "iloveyou",
];

/// Checks if a password is in the denylist.
///
/// Matching is exact and case-sensitive: `"Password"` is not flagged.
pub fn is_common(password: &str) -> bool {
    COMMON_PASSWORDS.contains(&password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_common_every_entry() {
        for pwd in COMMON_PASSWORDS {
            assert!(is_common(pwd), "{} should be flagged", pwd);
        }
    }

    #[test]
    fn test_is_common_case_sensitive() {
        assert!(!is_common("PASSWORD"));
        assert!(!is_common("Qwerty"));
    }

    #[test]
    fn test_is_common_exact_match_only() {
        assert!(!is_common("password1"));
        assert!(!is_common(" 123456"));
        assert!(!is_common(""));
    }
}
