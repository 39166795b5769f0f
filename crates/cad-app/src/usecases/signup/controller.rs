//! Signup form controller.
//!
//! Owns the form state and coordinates the signup state machine with the
//! registration, notification, and navigation ports.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info, info_span, warn, Instrument};

use cad_core::form::{FieldKey, FieldView, FormState};
use cad_core::ports::{NavigationPort, NotificationPort, RegistrationPort};
use cad_core::signup::{SignupAction, SignupEvent, SignupStateMachine};

/// Drives the registration form.
///
/// The controller is the single owner of [`FormState`]; the presentation
/// layer reads snapshots and forwards raw user events back. The state lock
/// serializes events in arrival order and is released while the
/// registration call is in flight, so edits stay possible and a concurrent
/// `submit` observes the `Submitting` guard instead of queueing a second
/// call. Dropping the controller discards the form; a response arriving
/// after that has no listener and the state machine's catch-all ignores it.
pub struct SignupController {
    state: Mutex<FormState>,
    registration: Arc<dyn RegistrationPort>,
    notifications: Arc<dyn NotificationPort>,
    navigation: Arc<dyn NavigationPort>,
}

impl SignupController {
    pub fn new(
        registration: Arc<dyn RegistrationPort>,
        notifications: Arc<dyn NotificationPort>,
        navigation: Arc<dyn NavigationPort>,
    ) -> Self {
        Self {
            state: Mutex::new(FormState::default()),
            registration,
            notifications,
            navigation,
        }
    }

    /// Current form snapshot for the presentation layer.
    pub async fn state(&self) -> FormState {
        self.state.lock().await.clone()
    }

    /// Per-field `(value, error, touched)` projection.
    pub async fn field(&self, key: FieldKey) -> FieldView {
        self.state.lock().await.field_view(key)
    }

    pub async fn update_field(&self, key: FieldKey, value: impl Into<String>) -> FormState {
        self.apply(SignupEvent::FieldChanged { key, value: value.into() })
            .await
    }

    pub async fn blur_field(&self, key: FieldKey) -> FormState {
        self.apply(SignupEvent::FieldBlurred { key }).await
    }

    pub async fn set_terms_accepted(&self, accepted: bool) -> FormState {
        self.apply(SignupEvent::TermsToggled { accepted }).await
    }

    /// Validate and, if the form is clean, run the registration call.
    ///
    /// Returns the resting state: `Success` after a confirmed registration,
    /// `Idle` after a local rejection or a remote failure (the user may
    /// retry), `Submitting` when another submission is already in flight.
    /// Remote failures are absorbed here: each produces exactly one
    /// diagnostic log entry and one failure notification, never an `Err`.
    pub async fn submit(&self) -> FormState {
        let span = info_span!("usecase.signup.submit");
        async {
            let (snapshot, actions) = self.dispatch(SignupEvent::SubmitRequested).await;

            let Some(payload) = actions.into_iter().find_map(|action| match action {
                SignupAction::Register { payload } => Some(payload),
                _ => None,
            }) else {
                // Idempotent guard hit, or the form was rejected locally.
                return snapshot;
            };

            info!("Submitting registration");
            let event = match self.registration.register(&payload).await {
                Ok(()) => {
                    info!("Registration accepted");
                    SignupEvent::RegistrationSucceeded
                }
                Err(err) => {
                    error!(error = %err, "Registration call failed");
                    SignupEvent::RegistrationFailed { reason: err.to_string() }
                }
            };
            let failed = matches!(event, SignupEvent::RegistrationFailed { .. });

            let (snapshot, actions) = self.dispatch(event).await;
            self.run_actions(actions).await;

            if failed {
                // The user has been notified; rest at Idle so they can retry.
                let (snapshot, _) = self.dispatch(SignupEvent::FailureAcknowledged).await;
                return snapshot;
            }
            snapshot
        }
        .instrument(span)
        .await
    }

    /// Field-level events never produce actions; just fold them in.
    async fn apply(&self, event: SignupEvent) -> FormState {
        let (snapshot, _actions) = self.dispatch(event).await;
        snapshot
    }

    async fn dispatch(&self, event: SignupEvent) -> (FormState, Vec<SignupAction>) {
        let mut guard = self.state.lock().await;
        let current = std::mem::take(&mut *guard);
        let (next, actions) = SignupStateMachine::transition(current, event);
        *guard = next;
        (guard.clone(), actions)
    }

    /// Execute notification and navigation actions. Sink errors must not
    /// alter form state; they are logged and the flow continues.
    async fn run_actions(&self, actions: Vec<SignupAction>) {
        for action in actions {
            match action {
                SignupAction::NotifySuccess { message } => {
                    if let Err(err) = self.notifications.registration_succeeded(message).await {
                        warn!(error = %err, "Success notification could not be delivered");
                    }
                }
                SignupAction::NotifyFailure { message } => {
                    if let Err(err) = self.notifications.registration_failed(message).await {
                        warn!(error = %err, "Failure notification could not be delivered");
                    }
                }
                SignupAction::Navigate { destination } => {
                    if let Err(err) = self.navigation.navigate_to(destination).await {
                        warn!(error = %err, ?destination, "Navigation request failed");
                    }
                }
                SignupAction::Register { .. } => {
                    // Only `submit` may issue the registration call; the
                    // machine never emits it alongside notify/navigate.
                    error!("Register action emitted outside the submit flow");
                }
            }
        }
    }
}
