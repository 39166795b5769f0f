//! Form domain models
//!
//! This module defines the aggregate state of the registration form: the
//! closed field set, current raw values, and the submission status that the
//! signup state machine drives.

pub mod field;
pub mod state;

pub use field::{FieldKey, FieldValues, RegistrationPayload};
pub use state::{FieldView, FormState, SubmitStatus};
