use crate::form::FieldKey;

/// Events that drive the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupEvent {
    /// User edited a field.
    FieldChanged { key: FieldKey, value: String },
    /// User left a field.
    FieldBlurred { key: FieldKey },
    /// User toggled the terms-acceptance checkbox.
    TermsToggled { accepted: bool },
    /// User asked to submit the form.
    SubmitRequested,
    /// Registration call completed (from orchestrator).
    RegistrationSucceeded,
    /// Registration call failed (from orchestrator).
    RegistrationFailed { reason: String },
    /// Failure notification has been surfaced; the form may accept a retry.
    FailureAcknowledged,
}
