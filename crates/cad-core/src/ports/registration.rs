//! Registration service port
//!
//! This port defines the contract for creating an account from submitted
//! values. Implementations are provided by the infrastructure layer (e.g.,
//! an HTTP client); the core never sees transport details.

use async_trait::async_trait;

use crate::form::RegistrationPayload;
use crate::ports::errors::RegistrationError;

#[async_trait]
pub trait RegistrationPort: Send + Sync {
    /// Create an account from the submitted values.
    ///
    /// Called at most once per accepted submit, with the payload snapshotted
    /// at submit time. Not cancellable once issued; a late response after
    /// the form is gone is simply ignored.
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), RegistrationError>;
}
