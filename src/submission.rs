//! Submission controller - idle/pending state machine around the auth call.

#[cfg(feature = "async")]
use tokio::sync::watch;

#[cfg(feature = "async")]
use crate::auth::{AuthClient, SignUpHooks};
use crate::auth::AuthError;
#[cfg(feature = "async")]
use crate::config::SignUpConfig;
#[cfg(feature = "async")]
use crate::credentials::SignUpRequest;
#[cfg(feature = "async")]
use crate::notify::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
}

impl SubmissionState {
    pub fn is_pending(self) -> bool {
        self == SubmissionState::Pending
    }
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The success hook fired.
    Created,
    /// The error hook fired.
    Failed(AuthError),
    /// The client settled without firing the success or error hook.
    Unsettled,
}

/// Runs one registration call per [`submit`](Self::submit) and reports the
/// outcome through the notifier.
///
/// The state is `Pending` from the client's request hook until the call has
/// settled, and `Idle` otherwise. There is no guard against a second submit
/// while pending; the rendered submit button is disabled instead.
#[cfg(feature = "async")]
pub struct SubmissionController<C, N> {
    client: C,
    notifier: N,
    config: SignUpConfig,
    state: watch::Sender<SubmissionState>,
}

#[cfg(feature = "async")]
impl<C: AuthClient, N: Notifier> SubmissionController<C, N> {
    pub fn new(client: C, notifier: N) -> Self {
        Self::with_config(client, notifier, SignUpConfig::default())
    }

    pub fn with_config(client: C, notifier: N, config: SignUpConfig) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            client,
            notifier,
            config,
            state,
        }
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    pub fn is_pending(&self) -> bool {
        self.state().is_pending()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &SignUpConfig {
        &self.config
    }

    /// Sends `request` through the auth client, exactly once.
    ///
    /// Returns to `Idle` once the client has settled, whatever the outcome.
    /// Dropping the future mid-call (timeout, `select!`) also returns to `Idle`.
    pub async fn submit(&self, request: SignUpRequest) -> SubmitOutcome {
        let idle_guard = IdleOnDrop(&self.state);
        let mut hooks = ControllerHooks {
            state: &self.state,
            notifier: &self.notifier,
            config: &self.config,
            outcome: SubmitOutcome::Unsettled,
        };

        self.client.sign_up_email(request, &mut hooks).await;

        drop(idle_guard);
        #[cfg(feature = "tracing")]
        tracing::debug!("sign-up settled: {:?}", hooks.outcome);

        hooks.outcome
    }
}

/// Resets the state to `Idle` when the submission ends or is abandoned.
#[cfg(feature = "async")]
struct IdleOnDrop<'a>(&'a watch::Sender<SubmissionState>);

#[cfg(feature = "async")]
impl Drop for IdleOnDrop<'_> {
    fn drop(&mut self) {
        self.0.send_replace(SubmissionState::Idle);
    }
}

#[cfg(feature = "async")]
struct ControllerHooks<'a, N> {
    state: &'a watch::Sender<SubmissionState>,
    notifier: &'a N,
    config: &'a SignUpConfig,
    outcome: SubmitOutcome,
}

#[cfg(feature = "async")]
impl<N: Notifier> SignUpHooks for ControllerHooks<'_, N> {
    fn on_request(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!("sign-up request started");
        self.state.send_replace(SubmissionState::Pending);
    }

    fn on_success(&mut self) {
        self.notifier.notify(self.config.success.clone());
        self.outcome = SubmitOutcome::Created;
    }

    fn on_error(&mut self, error: &AuthError) {
        #[cfg(feature = "tracing")]
        tracing::error!("sign-up failed: {:?}", error);
        self.notifier
            .notify(self.config.failure(error.message.as_deref()));
        self.outcome = SubmitOutcome::Failed(error.clone());
    }
}
