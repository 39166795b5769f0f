use crate::form::RegistrationPayload;
use crate::ports::Destination;

/// Side-effects produced by state transitions.
///
/// The state machine only describes them; the controller executes them
/// against the ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupAction {
    /// Invoke the remote registration call with a snapshot of the values.
    Register { payload: RegistrationPayload },
    /// Surface a success notification.
    NotifySuccess { message: &'static str },
    /// Surface a generic failure notification.
    NotifyFailure { message: &'static str },
    /// Request a transition to another screen.
    Navigate { destination: Destination },
}
