//! Character variety sections - one check per ASCII character class.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

fn missing(class: &str) -> SectionResult {
    Some(format!("Missing: {}", class))
}

/// Checks if the password contains a digit `0-9`.
///
/// # Returns
/// - `Some(reason)` if no digit is present
/// - `None` otherwise
pub fn digit_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    missing("numbers")
}

/// Checks if the password contains a letter `a-z`.
///
/// # Returns
/// - `Some(reason)` if no lowercase letter is present
/// - `None` otherwise
pub fn lowercase_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().any(|c| c.is_ascii_lowercase()) {
        return None;
    }
    missing("lowercase")
}

/// Checks if the password contains a letter `A-Z`.
///
/// # Returns
/// - `Some(reason)` if no uppercase letter is present
/// - `None` otherwise
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().any(|c| c.is_ascii_uppercase()) {
        return None;
    }
    missing("uppercase")
}
