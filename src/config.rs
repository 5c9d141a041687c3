//! Form configuration: sign-in route and notification texts.

use crate::notify::Notification;

pub const SIGN_IN_ROUTE_ENV: &str = "SIGNUP_SIGN_IN_ROUTE";
pub const DEFAULT_SIGN_IN_ROUTE: &str = "/sign-in";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpConfig {
    /// Target of the "Already have an account? Sign in" link.
    pub sign_in_route: String,
    /// Toast shown once the account has been created.
    pub success: Notification,
    /// Title of the failure toast.
    pub failure_title: String,
    /// Failure description used when the error carries no message.
    pub failure_fallback: String,
}

impl Default for SignUpConfig {
    fn default() -> Self {
        Self {
            sign_in_route: DEFAULT_SIGN_IN_ROUTE.to_string(),
            success: Notification::new(
                "Account created",
                "Your account has been created. Check your email for a verification link.",
            ),
            failure_title: "Something went wrong".to_string(),
            failure_fallback: "Something went wrong.".to_string(),
        }
    }
}

impl SignUpConfig {
    /// Default configuration with overrides from the environment.
    ///
    /// Priority for the sign-in route:
    /// 1. Environment variable `SIGNUP_SIGN_IN_ROUTE` (ignored when blank)
    /// 2. Default route `/sign-in`
    pub fn from_env() -> Self {
        let sign_in_route = std::env::var(SIGN_IN_ROUTE_ENV)
            .ok()
            .map(|route| route.trim().to_string())
            .filter(|route| !route.is_empty())
            .unwrap_or_else(|| DEFAULT_SIGN_IN_ROUTE.to_string());

        #[cfg(feature = "tracing")]
        tracing::debug!("sign-in route: {}", sign_in_route);

        Self {
            sign_in_route,
            ..Self::default()
        }
    }

    /// Failure toast for `message`, falling back to the generic text.
    pub fn failure(&self, message: Option<&str>) -> Notification {
        Notification::new(
            self.failure_title.clone(),
            message.unwrap_or(self.failure_fallback.as_str()),
        )
    }
}
