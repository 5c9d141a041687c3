//! Live form input and the request handed to the auth client.

use secrecy::{ExposeSecret, SecretString};

use crate::fields::Field;

fn secret(value: &str) -> SecretString {
    SecretString::new(value.to_string().into())
}

/// Current values of the four form fields.
///
/// Passwords are redacted from `Debug` output.
#[derive(Debug)]
pub struct Credentials {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: secret(""),
            confirm_password: secret(""),
        }
    }
}

impl Credentials {
    pub fn new(name: &str, email: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: secret(password),
            confirm_password: secret(confirm_password),
        }
    }

    /// Raw value of a field. Only meant for validation and scoring.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => self.password.expose_secret(),
            Field::ConfirmPassword => self.confirm_password.expose_secret(),
        }
    }

    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Password => self.password = secret(value),
            Field::ConfirmPassword => self.confirm_password = secret(value),
        }
    }

    /// Builds the registration payload. The confirmation is not sent.
    pub fn to_request(&self) -> SignUpRequest {
        SignUpRequest {
            email: self.email.clone(),
            password: secret(self.password.expose_secret()),
            name: self.name.clone(),
        }
    }
}

/// Payload of the email/password registration call.
#[derive(Debug)]
pub struct SignUpRequest {
    pub email: String,
    pub password: SecretString,
    pub name: String,
}
