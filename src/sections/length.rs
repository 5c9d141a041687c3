//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub const MIN_LENGTH: usize = 6;

/// Checks if the password meets minimum length requirements.
///
/// Characters are counted as Unicode scalar values, not bytes.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(format!(
            "Password must be at least {} characters",
            MIN_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(
            length_section(&secret("abc")),
            Some("Password must be at least 6 characters".to_string())
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section(&secret("123456")), None);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 5 chars, 10 bytes
        assert!(length_section(&secret("ééééé")).is_some());
        assert_eq!(length_section(&secret("éééééé")), None);
    }
}
