//! Live state of the registration form.

use thiserror::Error;

#[cfg(feature = "async")]
use crate::auth::AuthClient;
use crate::config::SignUpConfig;
use crate::credentials::{Credentials, SignUpRequest};
use crate::evaluator::compute_secret_strength;
use crate::fields::Field;
#[cfg(feature = "async")]
use crate::notify::Notifier;
use crate::schema::{CredentialsSchema, DefaultSignUpSchema, FieldErrors};
use crate::score::{StrengthLabel, StrengthScore};
#[cfg(feature = "async")]
use crate::submission::{SubmissionController, SubmitOutcome};
use crate::submission::SubmissionState;
use crate::view::{SignUpView, render_sign_up};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignUpError {
    #[error("Invalid sign-up input: {0}")]
    Invalid(FieldErrors),
}

/// Registration form bound to a validation schema.
///
/// Validation runs on submit. After the first submit every change is
/// validated again so field errors clear as soon as they are fixed.
#[derive(Debug, Default)]
pub struct SignUpForm<S = DefaultSignUpSchema> {
    credentials: Credentials,
    errors: FieldErrors,
    submitted: bool,
    schema: S,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: CredentialsSchema> SignUpForm<S> {
    pub fn with_schema(schema: S) -> Self {
        Self {
            credentials: Credentials::default(),
            errors: FieldErrors::new(),
            submitted: false,
            schema,
        }
    }

    pub fn set(&mut self, field: Field, value: &str) {
        self.credentials.set(field, value);
        if self.submitted {
            self.errors = self.schema.validate(&self.credentials).err().unwrap_or_default();
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Score of the current password, recomputed on every call.
    pub fn password_strength(&self) -> StrengthScore {
        compute_secret_strength(&self.credentials.password)
    }

    pub fn strength_label(&self) -> Option<StrengthLabel> {
        self.password_strength().label()
    }

    /// Runs the schema and builds the request when the input is valid.
    ///
    /// Errors are kept on the form for rendering either way.
    pub fn validate(&mut self) -> Result<SignUpRequest, SignUpError> {
        self.submitted = true;
        match self.schema.validate(&self.credentials) {
            Ok(()) => {
                self.errors.clear();
                Ok(self.credentials.to_request())
            }
            Err(errors) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("sign-up input rejected: {}", errors);
                self.errors = errors.clone();
                Err(SignUpError::Invalid(errors))
            }
        }
    }

    /// Validates, then hands the request to `controller`.
    ///
    /// Invalid input never reaches the auth client.
    #[cfg(feature = "async")]
    pub async fn handle_submit<C, N>(
        &mut self,
        controller: &SubmissionController<C, N>,
    ) -> Result<SubmitOutcome, SignUpError>
    where
        C: AuthClient,
        N: Notifier,
    {
        let request = self.validate()?;
        Ok(controller.submit(request).await)
    }

    pub fn render(&self, state: SubmissionState, config: &SignUpConfig) -> SignUpView {
        render_sign_up(&self.credentials, &self.errors, state, config)
    }
}
