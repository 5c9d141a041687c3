//! Seam to the external authentication client.

use thiserror::Error;

use crate::credentials::SignUpRequest;

/// Failure reported by the auth client through [`SignUpHooks::on_error`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("{}", .message.as_deref().unwrap_or("sign-up request failed"))]
pub struct AuthError {
    /// Human readable message, shown verbatim to the user when present.
    pub message: Option<String>,
    /// HTTP status of the failed request, if any.
    pub status: Option<u16>,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Callbacks the auth client fires while a registration is in flight.
pub trait SignUpHooks {
    /// The request is about to be sent.
    fn on_request(&mut self);
    /// The account was created.
    fn on_success(&mut self);
    /// The request failed.
    fn on_error(&mut self, error: &AuthError);
}

/// External client able to register an account by email and password.
///
/// The returned future completes once the call has settled; outcomes are
/// only reported through `hooks`.
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    async fn sign_up_email(&self, request: SignUpRequest, hooks: &mut dyn SignUpHooks);
}
