//! Validation schema for the registration form.
//!
//! The form only trusts the verdict of a [`CredentialsSchema`]; the
//! [`DefaultSignUpSchema`] ships the usual registration rules.

use std::collections::BTreeMap;
use std::fmt;

use secrecy::ExposeSecret;
use validator::ValidateEmail;

use crate::credentials::Credentials;
use crate::fields::Field;

pub const NAME_MAX_LENGTH: usize = 50;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 32;

/// Per-field validation messages, one per field at most.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` unless `field` already has one.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Decides whether the current input may be submitted.
pub trait CredentialsSchema {
    fn validate(&self, credentials: &Credentials) -> Result<(), FieldErrors>;
}

impl<F> CredentialsSchema for F
where
    F: Fn(&Credentials) -> Result<(), FieldErrors>,
{
    fn validate(&self, credentials: &Credentials) -> Result<(), FieldErrors> {
        self(credentials)
    }
}

/// Name 1-50 characters, a well-formed email, passwords of 8-32 characters
/// that match each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSignUpSchema;

impl CredentialsSchema for DefaultSignUpSchema {
    fn validate(&self, credentials: &Credentials) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        let name_len = credentials.name.chars().count();
        if name_len == 0 {
            errors.add(Field::Name, "Name is required");
        } else if name_len > NAME_MAX_LENGTH {
            errors.add(Field::Name, "Name must be less than 50 characters");
        }

        if credentials.email.is_empty() {
            errors.add(Field::Email, "Email is required");
        } else if !is_valid_email(&credentials.email) {
            errors.add(Field::Email, "Invalid email");
        }

        for field in [Field::Password, Field::ConfirmPassword] {
            let len = credentials.value(field).chars().count();
            if len < PASSWORD_MIN_LENGTH {
                errors.add(
                    field,
                    format!("{} must be at least {} characters", field, PASSWORD_MIN_LENGTH),
                );
            } else if len > PASSWORD_MAX_LENGTH {
                errors.add(
                    field,
                    format!("{} can not exceed {} characters", field, PASSWORD_MAX_LENGTH),
                );
            }
        }

        if credentials.password.expose_secret() != credentials.confirm_password.expose_secret() {
            errors.add(Field::ConfirmPassword, "Passwords don't match");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Checks the address with [`ValidateEmail`], then rejects what it lets
/// through but the form does not accept: leading, trailing or doubled dots
/// in the local part, a domain without a dot, and a TLD that is not at least
/// two letters.
pub fn is_valid_email(email: &str) -> bool {
    if !email.validate_email() {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}
