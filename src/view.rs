//! Headless render model of the registration page.

use secrecy::SecretString;

use crate::config::SignUpConfig;
use crate::credentials::Credentials;
use crate::evaluator::compute_secret_strength;
use crate::fields::{Field, InputKind};
use crate::schema::FieldErrors;
use crate::score::{LabelTone, ProgressTone, StrengthLabel};
use crate::submission::SubmissionState;

pub const PAGE_TITLE: &str = "Create Account";
pub const SUBMIT_TEXT: &str = "Sign up";
pub const SIGN_IN_TEXT: &str = "Already have an account? Sign in";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpView {
    pub title: &'static str,
    pub fields: Vec<FieldView>,
    pub submit: SubmitButtonView,
    pub sign_in: LinkView,
}

impl SignUpView {
    pub fn field(&self, field: Field) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.field == field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub input: InputKind,
    pub autocomplete: bool,
    pub value: FieldValue,
    pub error: Option<String>,
    /// Only set on the password field.
    pub strength: Option<StrengthMeterView>,
}

/// Secrets are never copied into the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Plain(String),
    Masked { len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthMeterView {
    /// Fill of the meter, 0 to 100.
    pub value: u8,
    pub tone: ProgressTone,
    /// Absent when the score is zero.
    pub label: Option<StrengthLabelView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthLabelView {
    pub label: StrengthLabel,
    pub text: &'static str,
    pub tone: LabelTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButtonView {
    pub text: &'static str,
    pub disabled: bool,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub href: String,
    pub text: &'static str,
}

/// Builds the page from the live input. The strength score is recomputed on
/// every call.
pub fn render_sign_up(
    credentials: &Credentials,
    errors: &FieldErrors,
    state: SubmissionState,
    config: &SignUpConfig,
) -> SignUpView {
    let fields = Field::ALL
        .into_iter()
        .map(|field| {
            let raw = credentials.value(field);
            let value = if field.is_secret() {
                FieldValue::Masked {
                    len: raw.chars().count(),
                }
            } else {
                FieldValue::Plain(raw.to_string())
            };
            let strength = field.shows_strength().then(|| strength_meter(&credentials.password));

            FieldView {
                field,
                label: field.label(),
                input: field.input_kind(),
                autocomplete: field.autocomplete(),
                value,
                error: errors.get(field).map(str::to_string),
                strength,
            }
        })
        .collect();

    let pending = state.is_pending();

    SignUpView {
        title: PAGE_TITLE,
        fields,
        submit: SubmitButtonView {
            text: SUBMIT_TEXT,
            disabled: pending,
            loading: pending,
        },
        sign_in: LinkView {
            href: config.sign_in_route.clone(),
            text: SIGN_IN_TEXT,
        },
    }
}

fn strength_meter(password: &SecretString) -> StrengthMeterView {
    let score = compute_secret_strength(password);
    StrengthMeterView {
        value: score.into(),
        tone: score.progress_tone(),
        label: score.label().map(|label| StrengthLabelView {
            label,
            text: label.text(),
            tone: label.tone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(credentials: &Credentials, state: SubmissionState) -> SignUpView {
        render_sign_up(credentials, &FieldErrors::new(), state, &SignUpConfig::default())
    }

    #[test]
    fn test_empty_form() {
        let view = render(&Credentials::default(), SubmissionState::Idle);

        assert_eq!(view.title, "Create Account");
        assert_eq!(view.fields.len(), 4);
        assert!(view.fields.iter().all(|f| f.error.is_none() && !f.autocomplete));

        let meter = view.field(Field::Password).and_then(|f| f.strength).unwrap();
        assert_eq!(meter.value, 0);
        assert_eq!(meter.tone, ProgressTone::Poor);
        assert_eq!(meter.label, None);

        assert_eq!(view.submit.text, "Sign up");
        assert!(!view.submit.disabled);
        assert_eq!(view.sign_in.href, "/sign-in");
        assert_eq!(view.sign_in.text, "Already have an account? Sign in");
    }

    #[test]
    fn test_weak_password_label() {
        let creds = Credentials::new("", "", "abc", "");
        let view = render(&creds, SubmissionState::Idle);
        let meter = view.field(Field::Password).and_then(|f| f.strength).unwrap();
        assert_eq!(meter.value, 25);
        let label = meter.label.unwrap();
        assert_eq!(label.label, StrengthLabel::Weak);
        assert_eq!(label.tone, LabelTone::Warning);
    }

    #[test]
    fn test_passing_password_label() {
        let creds = Credentials::new("", "", "ABC123", "");
        let view = render(&creds, SubmissionState::Idle);
        let meter = view.field(Field::Password).and_then(|f| f.strength).unwrap();
        assert_eq!(meter.value, 75);
        assert_eq!(meter.tone, ProgressTone::Good);
        assert_eq!(meter.label.map(|l| l.tone), Some(LabelTone::Affirming));

        let creds = Credentials::new("", "", "Abc123", "");
        let meter = render(&creds, SubmissionState::Idle)
            .field(Field::Password)
            .and_then(|f| f.strength)
            .unwrap();
        assert_eq!(meter.tone, ProgressTone::Complete);
    }

    #[test]
    fn test_confirmation_has_no_meter() {
        let creds = Credentials::new("", "", "", "Abc123");
        let view = render(&creds, SubmissionState::Idle);
        assert!(view.field(Field::ConfirmPassword).unwrap().strength.is_none());
    }

    #[test]
    fn test_secrets_are_masked() {
        let creds = Credentials::new("Ada", "ada@example.com", "hunter22", "hunter2");
        let view = render(&creds, SubmissionState::Idle);
        assert_eq!(
            view.field(Field::Name).unwrap().value,
            FieldValue::Plain("Ada".to_string())
        );
        assert_eq!(
            view.field(Field::Password).unwrap().value,
            FieldValue::Masked { len: 8 }
        );
        assert_eq!(
            view.field(Field::ConfirmPassword).unwrap().value,
            FieldValue::Masked { len: 7 }
        );
        assert!(!format!("{:?}", view).contains("hunter"));
    }

    #[test]
    fn test_pending_disables_submit() {
        let view = render(&Credentials::default(), SubmissionState::Pending);
        assert!(view.submit.disabled);
        assert!(view.submit.loading);
    }

    #[test]
    fn test_errors_and_custom_route() {
        let mut errors = FieldErrors::new();
        errors.add(Field::Email, "Invalid email");
        let config = SignUpConfig {
            sign_in_route: "/login".to_string(),
            ..SignUpConfig::default()
        };
        let view = render_sign_up(&Credentials::default(), &errors, SubmissionState::Idle, &config);
        assert_eq!(
            view.field(Field::Email).unwrap().error.as_deref(),
            Some("Invalid email")
        );
        assert_eq!(view.sign_in.href, "/login");
    }
}
