use thiserror::Error;

/// Failures reported by the remote registration service.
///
/// Full detail goes to the diagnostic log; users only ever see the generic
/// failure notification.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("network error: {0}")]
    Network(String),

    #[error("service rejected registration (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("registration request timed out")]
    Timeout,
}
