//! Headless account registration form
//!
//! This library provides the logic behind a sign-up page: password
//! strength feedback, validation of the four form fields and a submission
//! controller that drives an external auth client and reports the outcome
//! as toast notifications. Rendering produces a plain view model; markup
//! and styling are left to the caller.
//!
//! # Features
//!
//! - `async` (default): Enables the submission controller and channel notifiers
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `SIGNUP_SIGN_IN_ROUTE`: Target of the sign-in link (default: `/sign-in`)
//!
//! # Example
//!
//! ```rust
//! use signup_form::{Field, SignUpConfig, SignUpForm, StrengthLabel, SubmissionState};
//!
//! let mut form = SignUpForm::new();
//! form.set(Field::Password, "abc");
//! assert_eq!(form.password_strength().value(), 25);
//! assert_eq!(form.strength_label(), Some(StrengthLabel::Weak));
//!
//! form.set(Field::Password, "Abc123");
//! assert_eq!(form.password_strength().value(), 100);
//!
//! let view = form.render(SubmissionState::Idle, &SignUpConfig::from_env());
//! assert_eq!(view.submit.text, "Sign up");
//! ```

// Internal modules
mod auth;
mod config;
mod credentials;
mod evaluator;
mod fields;
mod form;
mod notify;
mod schema;
mod score;
mod sections;
mod submission;
mod view;

// Public API
pub use auth::{AuthClient, AuthError, SignUpHooks};
pub use config::{DEFAULT_SIGN_IN_ROUTE, SIGN_IN_ROUTE_ENV, SignUpConfig};
pub use credentials::{Credentials, SignUpRequest};
pub use evaluator::{compute_password_strength, compute_secret_strength, evaluate_password_strength};
pub use fields::{Field, InputKind};
pub use form::{SignUpError, SignUpForm};
pub use notify::{Notification, Notifier};
pub use schema::{CredentialsSchema, DefaultSignUpSchema, FieldErrors, is_valid_email};
pub use score::{LabelTone, PasswordEvaluation, ProgressTone, StrengthLabel, StrengthScore};
pub use submission::{SubmissionState, SubmitOutcome};
pub use view::{
    FieldValue, FieldView, LinkView, SignUpView, StrengthLabelView, StrengthMeterView,
    SubmitButtonView, render_sign_up,
};

#[cfg(feature = "async")]
pub use submission::SubmissionController;
