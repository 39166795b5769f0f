//! Signup state machine.
//!
//! Defines a pure state transition function for the registration form flow.
//! Side effects are described as [`SignupAction`]s and executed by the
//! caller; validation is delegated to the declarative schema.

use std::collections::BTreeMap;

use tracing::warn;

use crate::form::{FieldKey, FormState, SubmitStatus};
use crate::signup::{SignupAction, SignupEvent};
use crate::validation::schema::{self, messages, ValidationOutcome};

/// Notification shown when the remote call succeeds.
pub const SUCCESS_NOTICE: &str = "User registered successfully.";
/// Generic notification shown when the remote call fails. The underlying
/// error detail never reaches the user.
pub const FAILURE_NOTICE: &str = "Failed to register user.";

/// Pure signup state machine.
pub struct SignupStateMachine;

impl SignupStateMachine {
    /// Apply one event to the form, returning the next state and the side
    /// effects the caller must execute.
    pub fn transition(mut state: FormState, event: SignupEvent) -> (FormState, Vec<SignupAction>) {
        match event {
            SignupEvent::FieldChanged { key, value } => {
                state.values.set(key, value);
                // Errors only start tracking a field once it has been blurred.
                if state.touched.contains(&key) {
                    Self::refresh_error(&mut state, key);
                }
                (state, Vec::new())
            }
            SignupEvent::FieldBlurred { key } => {
                state.touched.insert(key);
                Self::refresh_error(&mut state, key);
                (state, Vec::new())
            }
            SignupEvent::TermsToggled { accepted } => {
                state.terms_accepted = accepted;
                if accepted {
                    state.terms_error = None;
                }
                (state, Vec::new())
            }
            SignupEvent::SubmitRequested => Self::submit(state),
            SignupEvent::RegistrationSucceeded => {
                if state.status != SubmitStatus::Submitting {
                    warn!("Ignoring registration success outside an in-flight submission");
                    return (state, Vec::new());
                }
                state.status = SubmitStatus::Success;
                (
                    state,
                    vec![
                        SignupAction::NotifySuccess { message: SUCCESS_NOTICE },
                        SignupAction::Navigate {
                            destination: crate::ports::Destination::Login,
                        },
                    ],
                )
            }
            SignupEvent::RegistrationFailed { reason } => {
                if state.status != SubmitStatus::Submitting {
                    warn!("Ignoring registration failure outside an in-flight submission");
                    return (state, Vec::new());
                }
                state.status = SubmitStatus::Failure { reason };
                (
                    state,
                    vec![SignupAction::NotifyFailure { message: FAILURE_NOTICE }],
                )
            }
            SignupEvent::FailureAcknowledged => {
                if matches!(state.status, SubmitStatus::Failure { .. }) {
                    state.status = SubmitStatus::Idle;
                }
                (state, Vec::new())
            }
        }
    }

    fn submit(mut state: FormState) -> (FormState, Vec<SignupAction>) {
        // At most one submission in flight; repeated taps are a no-op.
        if state.status == SubmitStatus::Submitting {
            return (state, Vec::new());
        }
        state.status = SubmitStatus::Validating;

        let mut errors = BTreeMap::new();
        for (key, outcome) in schema::validate_all(&state.values) {
            if let ValidationOutcome::Invalid { message } = outcome {
                errors.insert(key, message.to_string());
            }
        }
        let terms_error =
            (!state.terms_accepted).then(|| messages::TERMS_REQUIRED.to_string());

        if !errors.is_empty() || terms_error.is_some() {
            // Local rejection: surface every error and let the user re-edit.
            state.touched.extend(FieldKey::ALL);
            state.errors = errors;
            state.terms_error = terms_error;
            state.status = SubmitStatus::Idle;
            return (state, Vec::new());
        }

        state.errors.clear();
        state.terms_error = None;
        state.status = SubmitStatus::Submitting;
        let payload = state.values.payload();
        (state, vec![SignupAction::Register { payload }])
    }

    /// Recompute one field's cached error from the schema.
    fn refresh_error(state: &mut FormState, key: FieldKey) {
        match schema::validate_field(key, state.values.value(key)) {
            ValidationOutcome::Valid => {
                state.errors.remove(&key);
            }
            ValidationOutcome::Invalid { message } => {
                state.errors.insert(key, message.to_string());
            }
        }
    }
}
